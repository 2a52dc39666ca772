//! ChainFlow Rust Library
//!
//! Este crate actúa como la fachada del workspace:
//! - Re-exporta la API pública del motor de cadenas (`chain_core`).
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub use chain_core::{Chain, ChainBuilder, ChainEvent, ChainEventKind, ChainStep, ChainValue,
                     CoreChainError, CoroutinePoll, EventSink, InMemoryEventSink, StepCoroutine,
                     StepFlow, StepShape};
