//! Errores específicos del core (simples por ahora).

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum CoreChainError {
    /// El validador rechazó un step al registrarlo (`set_next`, `args_to`,
    /// `result_to`).
    #[error("invalid step: {0}")] InvalidStep(String),
    /// `args_to` / `result_to` / `as_result` requieren un `set_next` previo.
    #[error("{method} requires a step registered via set_next")] NoCurrentStep { method: String },
    /// Fallo de un step de usuario, anotado con su id para la traza de
    /// eventos. El error original del step se propaga al caller sin más
    /// envoltura.
    #[error("step '{step_id}' failed: {message}")] StepFailed { step_id: String, message: String },
    #[error("internal: {0}")] Internal(String),
}
