use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chain_core::{ChainBuilder, ChainStep, ChainValue, CoreChainError, StepFlow};
use serde_json::json;

fn add(id: &str, delta: i64) -> ChainStep {
    ChainStep::sync(id, move |args| {
        let x = args[0].as_i64().unwrap();
        Ok(StepFlow::single(json!(x + delta)))
    })
}

/// Step que devuelve tal cual lo que recibe: expone sus argumentos efectivos
/// como resultado observable de la cadena.
fn passthrough(id: &str) -> ChainStep {
    ChainStep::sync(id, |args| Ok(StepFlow::Continue(args.to_vec())))
}

#[tokio::test]
async fn args_to_delivers_producer_incoming_args() -> Result<(), CoreChainError> {
    // a -> b -> c, con a redirigiendo sus argumentos *entrantes* a c.
    // c debe ver los argumentos originales de a, sin importar qué hizo b.
    let chain = ChainBuilder::new().set_next(add("a", 1))?
                                   .args_to([passthrough("c")])?
                                   .set_next(add("b", 1))?
                                   .set_next(passthrough("c"))?
                                   .end()
                                   .unwrap();

    let res = chain.invoke(vec![json!(10)]).await?;
    assert_eq!(res, ChainValue::Single(json!(10)));
    Ok(())
}

#[tokio::test]
async fn result_to_appends_after_chain_delivered_args() -> Result<(), CoreChainError> {
    // a -> b -> c, con a redirigiendo su *resultado* a c: c recibe lo que la
    // cadena le entrega (la salida de b) más el resultado de a, anexado.
    let chain = ChainBuilder::new().set_next(add("a", 1))?
                                   .result_to([passthrough("c")])?
                                   .set_next(add("b", 1))?
                                   .set_next(passthrough("c"))?
                                   .end()
                                   .unwrap();

    let res = chain.invoke(vec![json!(10)]).await?;
    assert_eq!(res, ChainValue::Many(vec![json!(12), json!(11)]));
    Ok(())
}

#[tokio::test]
async fn as_result_overrides_without_suppressing_later_steps() -> Result<(), CoreChainError> {
    let ran = Arc::new(AtomicUsize::new(0));
    let counting = |id: &'static str, ran: Arc<AtomicUsize>, delta: i64| {
        ChainStep::sync(id, move |args| {
            ran.fetch_add(1, Ordering::SeqCst);
            let x = args[0].as_i64().unwrap();
            Ok(StepFlow::single(json!(x + delta)))
        })
    };

    let chain = ChainBuilder::new().set_next(add("a", 1))?
                                   .as_result()?
                                   .set_next(counting("b", ran.clone(), 10))?
                                   .set_next(counting("c", ran.clone(), 100))?
                                   .end()
                                   .unwrap();

    let res = chain.invoke(vec![json!(10)]).await?;
    // El resultado externo es exactamente lo que a pasó a su continuación...
    assert_eq!(res, ChainValue::Single(json!(11)));
    // ...pero b y c corrieron igual (sus efectos no se suprimen).
    assert_eq!(ran.load(Ordering::SeqCst), 2);
    Ok(())
}

#[tokio::test]
async fn as_result_captures_exact_continuation_args() -> Result<(), CoreChainError> {
    let pair = ChainStep::sync("pair", |_| Ok(StepFlow::Continue(vec![json!(1), json!(2)])));

    let chain = ChainBuilder::new().set_next(pair)?
                                   .as_result()?
                                   .set_next(add("b", 10))?
                                   .end()
                                   .unwrap();

    // b colapsa la secuencia a un valor, pero el resultado capturado es el
    // par exacto que `pair` entregó a su continuación.
    let res = chain.invoke(vec![]).await?;
    assert_eq!(res, ChainValue::Many(vec![json!(1), json!(2)]));
    Ok(())
}

#[tokio::test]
async fn captured_result_survives_a_later_halt() -> Result<(), CoreChainError> {
    let chain = ChainBuilder::new().set_next(add("a", 1))?
                                   .as_result()?
                                   .set_next(ChainStep::sync("stop", |_| Ok(StepFlow::Halt)))?
                                   .end()
                                   .unwrap();

    assert_eq!(chain.invoke(vec![json!(10)]).await?, ChainValue::Single(json!(11)));
    Ok(())
}

#[tokio::test]
async fn multiple_producers_append_in_execution_order() -> Result<(), CoreChainError> {
    let tag = |id: &'static str| ChainStep::sync(id, move |_| Ok(StepFlow::single(json!(id))));

    let chain = ChainBuilder::new().set_next(tag("a"))?
                                   .result_to([passthrough("c")])?
                                   .set_next(tag("b"))?
                                   .result_to([passthrough("c")])?
                                   .set_next(passthrough("c"))?
                                   .end()
                                   .unwrap();

    // c recibe lo que la cadena entrega (la salida de b) y después los
    // resultados anexados en orden de ejecución: a, b.
    let res = chain.invoke(vec![]).await?;
    assert_eq!(res,
               ChainValue::Many(vec![json!("b"), json!("a"), json!("b")]));
    Ok(())
}

#[tokio::test]
async fn pending_args_do_not_leak_across_invocations() -> Result<(), CoreChainError> {
    let chain = ChainBuilder::new().set_next(add("a", 1))?
                                   .args_to([passthrough("c")])?
                                   .set_next(add("b", 1))?
                                   .set_next(passthrough("c"))?
                                   .end()
                                   .unwrap();

    assert_eq!(chain.invoke(vec![json!(10)]).await?, ChainValue::Single(json!(10)));
    assert_eq!(chain.invoke(vec![json!(20)]).await?, ChainValue::Single(json!(20)));
    Ok(())
}

#[tokio::test]
async fn same_id_steps_merge_into_one_wrapper() -> Result<(), CoreChainError> {
    // Dos registros con el mismo id se funden en un wrapper: el primer
    // callable gana y corre en ambas posiciones de la cadena. Limitación
    // documentada de la identidad por id.
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));

    let first_count = first.clone();
    let winner = ChainStep::sync("dup", move |args| {
        first_count.fetch_add(1, Ordering::SeqCst);
        Ok(StepFlow::Continue(args.to_vec()))
    });
    let second_count = second.clone();
    let ignored = ChainStep::sync("dup", move |args| {
        second_count.fetch_add(1, Ordering::SeqCst);
        Ok(StepFlow::Continue(args.to_vec()))
    });

    let chain = ChainBuilder::new().set_next(winner)?.set_next(ignored)?.end().unwrap();
    assert_eq!(chain.len(), 2);

    chain.invoke(vec![json!(0)]).await?;
    assert_eq!(first.load(Ordering::SeqCst), 2);
    assert_eq!(second.load(Ordering::SeqCst), 0);
    Ok(())
}

#[tokio::test]
async fn redirect_target_never_registered_is_inert() -> Result<(), CoreChainError> {
    // El destino existe como wrapper pero nunca entró a la cadena: la
    // entrega pendiente simplemente no se consume.
    let chain = ChainBuilder::new().set_next(add("a", 1))?
                                   .args_to([passthrough("ghost")])?
                                   .set_next(add("b", 1))?
                                   .end()
                                   .unwrap();

    assert_eq!(chain.invoke(vec![json!(0)]).await?, ChainValue::Single(json!(2)));
    Ok(())
}
