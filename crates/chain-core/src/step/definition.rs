use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::Value;

use crate::errors::CoreChainError;
use super::coroutine::StepCoroutine;
use super::flow::StepFlow;

/// Future devuelto por un step asíncrono.
pub type StepFuture = Pin<Box<dyn Future<Output = Result<StepFlow, CoreChainError>> + Send>>;

pub type SyncStepFn = dyn Fn(&[Value]) -> Result<StepFlow, CoreChainError> + Send + Sync;
pub type FutureStepFn = dyn Fn(Vec<Value>) -> StepFuture + Send + Sync;
pub type CoroutineFactory = dyn Fn(Vec<Value>) -> Box<dyn StepCoroutine> + Send + Sync;

/// Forma sintáctica del callable, antes de normalizar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepShape { Sync, Future, Coroutine }

/// Las tres formas de callable que acepta el builder. El normalizador las
/// resuelve una única vez en la forma async canónica; el resto del core no
/// vuelve a hacer dispatch sobre este enum.
#[derive(Clone)]
pub enum StepCallable {
    Sync(Arc<SyncStepFn>),
    Future(Arc<FutureStepFn>),
    Coroutine(Arc<CoroutineFactory>),
}

/// Un callable de usuario con su identificador estable.
///
/// El id es la identidad del step dentro de un builder: dos `ChainStep` con
/// el mismo id resuelven al mismo wrapper (ver cache de identidad del
/// builder), que es lo que permite que `args_to` / `result_to` direccionen
/// "la función usada allá" en otro punto de la cadena.
#[derive(Clone)]
pub struct ChainStep {
    id: String,
    callable: StepCallable,
}

impl ChainStep {
    /// Step síncrono plano.
    pub fn sync<F>(id: impl Into<String>, f: F) -> Self
        where F: Fn(&[Value]) -> Result<StepFlow, CoreChainError> + Send + Sync + 'static
    {
        Self { id: id.into(),
               callable: StepCallable::Sync(Arc::new(f)) }
    }

    /// Step que devuelve un future.
    pub fn future<F>(id: impl Into<String>, f: F) -> Self
        where F: Fn(Vec<Value>) -> StepFuture + Send + Sync + 'static
    {
        Self { id: id.into(),
               callable: StepCallable::Future(Arc::new(f)) }
    }

    /// Step estilo corrutina: la factory crea una corrutina por invocación.
    pub fn coroutine<F>(id: impl Into<String>, f: F) -> Self
        where F: Fn(Vec<Value>) -> Box<dyn StepCoroutine> + Send + Sync + 'static
    {
        Self { id: id.into(),
               callable: StepCallable::Coroutine(Arc::new(f)) }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn shape(&self) -> StepShape {
        match self.callable {
            StepCallable::Sync(_) => StepShape::Sync,
            StepCallable::Future(_) => StepShape::Future,
            StepCallable::Coroutine(_) => StepShape::Coroutine,
        }
    }

    pub(crate) fn callable(&self) -> &StepCallable {
        &self.callable
    }
}

impl std::fmt::Debug for ChainStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainStep")
         .field("id", &self.id)
         .field("shape", &self.shape())
         .finish()
    }
}
