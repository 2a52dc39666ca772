//! Demo ejecutable del motor de cadenas: composición, redirección y un step
//! estilo corrutina, con la traza de eventos impresa al final.

use std::sync::Arc;

use chain_core::{ChainBuilder, ChainStep, ChainValue, CoreChainError, CoroutinePoll, InMemoryEventSink,
                 StepCoroutine, StepFlow};
use serde_json::{json, Value};

fn add(id: &str, delta: i64) -> ChainStep {
    ChainStep::sync(id, move |args| {
        let x = args[0].as_i64().unwrap_or_default();
        Ok(StepFlow::single(json!(x + delta)))
    })
}

fn passthrough(id: &str) -> ChainStep {
    ChainStep::sync(id, |args| Ok(StepFlow::Continue(args.to_vec())))
}

/// Corrutina de ejemplo: cede un future con la suma y completa con el valor
/// reinyectado por el driver.
struct AddGen {
    delta: i64,
    args: Vec<Value>,
}

impl StepCoroutine for AddGen {
    fn resume(&mut self, resumed: Option<Value>) -> Result<CoroutinePoll, CoreChainError> {
        match resumed {
            None => {
                let x = self.args[0].as_i64().unwrap_or_default();
                let delta = self.delta;
                Ok(CoroutinePoll::Yielded(Box::pin(async move { Ok(json!(x + delta)) })))
            }
            Some(value) => Ok(CoroutinePoll::Complete(StepFlow::single(value))),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CoreChainError> {
    let sink = Arc::new(InMemoryEventSink::new());

    // fn1 -> gen -> fn3, con fn1 redirigiendo sus argumentos entrantes a fn3.
    let gen = ChainStep::coroutine("gen", |args| Box::new(AddGen { delta: 200, args }));
    let chain = ChainBuilder::new().with_event_sink(sink.clone())
                                   .set_next(add("fn1", 100))?
                                   .result_to([passthrough("sum")])?
                                   .set_next(gen)?
                                   .set_next(passthrough("sum"))?
                                   .end()
                                   .expect("la cadena tiene steps");

    println!("definition_hash: {}", chain.definition_hash());

    let first = chain.invoke(vec![json!(0)]).await?;
    println!("invoke(0)    -> {:?}", first);

    // Misma cadena compilada, invocación independiente.
    let second = chain.invoke(vec![json!(1000)]).await?;
    println!("invoke(1000) -> {:?}", second);

    for id in sink.invocations() {
        println!("traza {}: {:?}", id, sink.event_variants(id));
    }

    // Resultado final con override: el valor externo es el de fn1.
    let overridden = ChainBuilder::new().set_next(add("fn1", 100))?
                                        .as_result()?
                                        .set_next(add("fn2", 200))?
                                        .end()
                                        .expect("la cadena tiene steps");
    let res = overridden.invoke(vec![json!(0)]).await?;
    assert_eq!(res, ChainValue::Single(json!(100)));
    println!("as_result    -> {:?}", res);

    Ok(())
}
