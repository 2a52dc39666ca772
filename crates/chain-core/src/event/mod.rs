//! Definiciones de eventos y trait EventSink.

mod store;
mod types;

pub use store::{EventSink, InMemoryEventSink};
pub use types::{ChainEvent, ChainEventKind};
