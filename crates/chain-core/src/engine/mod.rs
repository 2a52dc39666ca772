//! Engine module: builder de cadenas y cadena compilada.
//!
//! El builder acumula steps y redirecciones; `end()` los consume una sola
//! vez y produce la `Chain` inmutable que ejecuta el loop de continuaciones.

pub mod builder;
pub mod core;
mod registry;

pub use builder::ChainBuilder;
pub use core::Chain;

pub use crate::event::{ChainEvent, ChainEventKind, EventSink, InMemoryEventSink};
pub use crate::model::ChainValue;
pub use crate::step::{ChainStep, StepFlow};
