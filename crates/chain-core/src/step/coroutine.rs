//! Contrato de steps estilo corrutina.
//!
//! Una corrutina se suspende en puntos internos cediendo un future; el driver
//! del normalizador espera ese future y reinyecta su valor resuelto en el
//! siguiente `resume`. Externamente, una vez normalizada, es indistinguible
//! de un step que devuelve un future.

use std::future::Future;
use std::pin::Pin;

use serde_json::Value;

use crate::errors::CoreChainError;
use super::flow::StepFlow;

/// Future cedido en un punto de suspensión; su valor resuelto se entrega en
/// el próximo `resume`.
pub type YieldFuture = Pin<Box<dyn Future<Output = Result<Value, CoreChainError>> + Send>>;

/// Estado devuelto por cada `resume`.
pub enum CoroutinePoll {
    /// La corrutina se suspende esperando el future.
    Yielded(YieldFuture),
    /// La corrutina terminó; entrega su resultado de control.
    Complete(StepFlow),
}

/// Computación suspendible paso a paso.
///
/// `resume` recibe en `resumed` el valor resuelto del último future cedido
/// (`None` en la primera reanudación). Implementaciones no deben asumir
/// cuántas veces serán reanudadas: el driver itera hasta `Complete`.
pub trait StepCoroutine: Send {
    fn resume(&mut self, resumed: Option<Value>) -> Result<CoroutinePoll, CoreChainError>;
}
