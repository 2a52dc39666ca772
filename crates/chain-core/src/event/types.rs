//! Tipos de evento de invocación y estructura `ChainEvent`.
//!
//! Rol en la cadena:
//! - Cada invocación de la cadena compilada emite eventos a un `EventSink`
//!   append-only (si el builder configuró uno).
//! - Los eventos no participan del control de flujo; son la traza observable
//!   de qué step corrió, qué redirigió y cómo terminó la invocación.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CoreChainError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ChainEventKind {
    /// Comienzo de una invocación. Invariante: debe ser el primer evento de
    /// un `invocation_id`.
    InvocationStarted { definition_hash: String, step_count: usize },
    /// Un step comenzó su ejecución. No implica éxito.
    StepStarted { step_index: usize, step_id: String },
    /// Un step invocó su continuación. `forwarded_args` / `forwarded_results`
    /// cuentan las entregas de redirección hechas por este step.
    StepFinished {
        step_index: usize,
        step_id: String,
        forwarded_args: usize,
        forwarded_results: usize,
    },
    /// Un step nunca invocó su continuación: corte silencioso de la cadena.
    StepHalted { step_index: usize, step_id: String },
    /// El step marcado con `as_result` fijó el resultado externo.
    ResultCaptured { step_index: usize, step_id: String },
    /// Un step falló. La invocación no continúa (stop-on-failure).
    StepFailed {
        step_index: usize,
        step_id: String,
        error: CoreChainError,
    },
    /// Evento de cierre con la aridad del valor observable devuelto.
    InvocationFinished { result_arity: usize },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainEvent {
    pub seq: u64, // asignado por el sink (orden append por invocación)
    pub invocation_id: Uuid,
    pub kind: ChainEventKind,
    pub ts: DateTime<Utc>, // metadato, no participa de ningún hash
}
