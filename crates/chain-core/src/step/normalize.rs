//! Normalizador de callables.
//!
//! Resuelve las tres formas de `StepCallable` en una única forma async
//! canónica (`RunnableStep`). Corre exactamente una vez por callable distinto
//! (lo garantiza la cache de identidad del builder); después de este punto el
//! motor nunca vuelve a distinguir formas.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::CoreChainError;
use super::coroutine::CoroutinePoll;
use super::definition::{CoroutineFactory, FutureStepFn, StepCallable, SyncStepFn};
use super::flow::StepFlow;

/// Forma canónica de ejecución: todo step normalizado se invoca como future.
#[async_trait]
pub(crate) trait RunnableStep: Send + Sync {
    async fn call(&self, args: Vec<Value>) -> Result<StepFlow, CoreChainError>;
}

struct SyncAdapter(Arc<SyncStepFn>);

#[async_trait]
impl RunnableStep for SyncAdapter {
    async fn call(&self, args: Vec<Value>) -> Result<StepFlow, CoreChainError> {
        (self.0)(&args)
    }
}

struct FutureAdapter(Arc<FutureStepFn>);

#[async_trait]
impl RunnableStep for FutureAdapter {
    async fn call(&self, args: Vec<Value>) -> Result<StepFlow, CoreChainError> {
        (self.0)(args).await
    }
}

struct CoroutineAdapter(Arc<CoroutineFactory>);

#[async_trait]
impl RunnableStep for CoroutineAdapter {
    /// Driver de corrutinas: espera cada future cedido y reinyecta su valor
    /// resuelto hasta `Complete`.
    async fn call(&self, args: Vec<Value>) -> Result<StepFlow, CoreChainError> {
        let mut co = (self.0)(args);
        let mut resumed: Option<Value> = None;
        loop {
            match co.resume(resumed.take())? {
                CoroutinePoll::Yielded(fut) => resumed = Some(fut.await?),
                CoroutinePoll::Complete(flow) => return Ok(flow),
            }
        }
    }
}

pub(crate) fn normalize(callable: StepCallable) -> Arc<dyn RunnableStep> {
    match callable {
        StepCallable::Sync(f) => Arc::new(SyncAdapter(f)),
        StepCallable::Future(f) => Arc::new(FutureAdapter(f)),
        StepCallable::Coroutine(f) => Arc::new(CoroutineAdapter(f)),
    }
}
