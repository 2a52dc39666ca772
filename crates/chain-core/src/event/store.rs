use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;
use uuid::Uuid;

use super::{ChainEvent, ChainEventKind};

/// Sumidero de eventos append-only.
///
/// Recibe `&self` (mutabilidad interior) porque la cadena compilada se invoca
/// por referencia compartida y puede registrar eventos desde varias
/// invocaciones independientes.
pub trait EventSink: Send + Sync {
    /// Agrega un evento a partir de su kind y devuelve el evento completo
    /// (con seq y ts).
    fn append_kind(&self, invocation_id: Uuid, kind: ChainEventKind) -> ChainEvent;
    /// Lista eventos de una invocación (orden ascendente por seq).
    fn list(&self, invocation_id: Uuid) -> Vec<ChainEvent>;
}

#[derive(Default)]
pub struct InMemoryEventSink {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    events: HashMap<Uuid, Vec<ChainEvent>>,
    order: Vec<Uuid>, // invocaciones en orden de primer evento
}

impl InMemoryEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids de invocación en orden de llegada del primer evento.
    pub fn invocations(&self) -> Vec<Uuid> {
        self.lock().order.clone()
    }

    /// Variante compacta de la traza de una invocación, una letra por evento.
    /// Útil en tests: `["I", "S", "F", "S", "F", "C"]`.
    pub fn event_variants(&self, invocation_id: Uuid) -> Vec<&'static str> {
        self.list(invocation_id)
            .iter()
            .map(|e| match e.kind {
                ChainEventKind::InvocationStarted { .. } => "I",
                ChainEventKind::StepStarted { .. } => "S",
                ChainEventKind::StepFinished { .. } => "F",
                ChainEventKind::StepHalted { .. } => "H",
                ChainEventKind::ResultCaptured { .. } => "R",
                ChainEventKind::StepFailed { .. } => "X",
                ChainEventKind::InvocationFinished { .. } => "C",
            })
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // Un panic con el lock tomado no deja estado a medio escribir aquí
        // (solo appends), así que recuperamos el guard envenenado.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl EventSink for InMemoryEventSink {
    fn append_kind(&self, invocation_id: Uuid, kind: ChainEventKind) -> ChainEvent {
        let mut inner = self.lock();
        if !inner.events.contains_key(&invocation_id) {
            inner.order.push(invocation_id);
        }
        let events = inner.events.entry(invocation_id).or_default();
        let ev = ChainEvent { seq: events.len() as u64,
                              invocation_id,
                              kind,
                              ts: Utc::now() };
        events.push(ev.clone());
        ev
    }

    fn list(&self, invocation_id: Uuid) -> Vec<ChainEvent> {
        self.lock().events.get(&invocation_id).cloned().unwrap_or_default()
    }
}
