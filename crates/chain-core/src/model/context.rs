use serde_json::Value;
use uuid::Uuid;

use crate::redirect::PendingArgs;

/// Estado mutable de *una* invocación de la cadena compilada.
///
/// Se crea fresco en cada `Chain::invoke` y muere con ella: los slots
/// pendientes y el resultado capturado no viven en los wrappers, así que dos
/// invocaciones (incluso solapadas) nunca comparten estado. Los slots se
/// consumen con semántica take (leer y limpiar en una sola operación).
pub struct InvocationContext {
    pub invocation_id: Uuid,
    pending: Vec<PendingArgs>,
    captured: Option<Vec<Value>>,
}

impl InvocationContext {
    pub(crate) fn new(slot_count: usize) -> Self {
        Self { invocation_id: Uuid::new_v4(),
               pending: vec![PendingArgs::default(); slot_count],
               captured: None }
    }

    /// Argumentos efectivos del step dueño de `slot`; limpia el slot.
    pub(crate) fn take_pending(&mut self, slot: usize, chain_args: Vec<Value>) -> Vec<Value> {
        match self.pending.get_mut(slot) {
            Some(pending) => pending.take(chain_args),
            None => chain_args,
        }
    }

    /// Entrega de un productor `args_to` (sobreescribe).
    pub(crate) fn stage_args(&mut self, slot: usize, args: Vec<Value>) {
        if let Some(pending) = self.pending.get_mut(slot) {
            pending.stage_replace(args);
        }
    }

    /// Entrega de un productor `result_to` (anexa en orden de llegada).
    pub(crate) fn append_result(&mut self, slot: usize, result: Vec<Value>) {
        if let Some(pending) = self.pending.get_mut(slot) {
            pending.append(result);
        }
    }

    /// Captura del resultado final (`as_result`): los argumentos exactos con
    /// los que el step marcado invocó su continuación.
    pub(crate) fn capture(&mut self, args: Vec<Value>) {
        self.captured = Some(args);
    }

    pub(crate) fn take_captured(&mut self) -> Option<Vec<Value>> {
        self.captured.take()
    }
}
