//! chain-core: Motor de composición de cadenas (C1)
pub mod constants;
pub mod engine;
pub mod errors;
pub mod event;
pub mod hashing;
pub mod model;
pub mod redirect;
pub mod step;

pub use engine::{Chain, ChainBuilder};
pub use errors::CoreChainError;
pub use event::{ChainEvent, ChainEventKind, EventSink, InMemoryEventSink};
pub use model::{ChainValue, InvocationContext};
pub use step::{ChainStep, CoroutinePoll, StepCallable, StepCoroutine, StepFlow, StepFuture, StepShape,
               YieldFuture};

// Las macros `sync_step!` / `future_step!` ya quedan en la raíz vía
// #[macro_export].

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{future_step, sync_step};
    use serde_json::json;

    fn add(id: &str, delta: i64) -> ChainStep {
        ChainStep::sync(id, move |args| {
            let x = args[0].as_i64().unwrap();
            Ok(StepFlow::single(json!(x + delta)))
        })
    }

    #[tokio::test]
    async fn smoke_compose_and_invoke() {
        let chain = ChainBuilder::new().set_next(add("fn1", 100))
                                       .unwrap()
                                       .set_next(add("fn2", 200))
                                       .unwrap()
                                       .end()
                                       .unwrap();

        assert_eq!(chain.len(), 2);
        let res = chain.invoke(vec![json!(0)]).await.unwrap();
        assert_eq!(res, ChainValue::Single(json!(300)));
    }

    #[tokio::test]
    async fn macro_declared_steps_compose() {
        let fn1 = sync_step!(fn1, |args| {
            let x = args[0].as_i64().unwrap();
            Ok(StepFlow::single(json!(x * 2)))
        });
        let fn2 = future_step!(fn2, |args| {
            let x = args[0].as_i64().unwrap();
            Ok(StepFlow::single(json!(x + 1)))
        });

        let chain = ChainBuilder::new().set_next(fn1)
                                       .unwrap()
                                       .set_next(fn2)
                                       .unwrap()
                                       .end()
                                       .unwrap();

        let res = chain.invoke(vec![json!(5)]).await.unwrap();
        assert_eq!(res, ChainValue::Single(json!(11)));
    }

    #[test]
    fn builder_rejects_non_addressable_step() {
        let err = ChainBuilder::new().set_next(ChainStep::sync("", |_| Ok(StepFlow::Halt)))
                                     .err()
                                     .unwrap();
        assert!(matches!(err, CoreChainError::InvalidStep(_)));
    }
}
