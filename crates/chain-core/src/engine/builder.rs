//! Builder de cadenas.
//!
//! Acumula steps en orden de registro junto con sus redirecciones y produce,
//! vía `end()`, la cadena compilada inmutable. El builder en sí no es
//! invocable: olvidar `end()` es un error de tipos, no una comprobación en
//! runtime.
//!
//! Notas de diseño
//! - Cada método de construcción consume `self` y devuelve
//!   `Result<ChainBuilder, _>`, así el encadenado usa `?` en cada eslabón.
//! - `args_to` / `result_to` / `as_result` operan sobre el step registrado
//!   más recientemente; llamarlos antes del primer `set_next` es
//!   `NoCurrentStep`.
//! - El builder debe consumirse exactamente una vez por `end()`.
//!
//! Ejemplo de uso (comentario):
//!
//! ```ignore
//! // let chain = ChainBuilder::new()
//! //     .set_next(fn1)?
//! //     .set_next(fn2)?.args_to([fn3.clone()])?
//! //     .set_next(fn3)?
//! //     .end();
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;

use crate::constants::CHAIN_ENGINE_VERSION;
use crate::engine::core::{Chain, CompiledStep};
use crate::errors::CoreChainError;
use crate::event::EventSink;
use crate::hashing::{hash_str, to_canonical_json};
use crate::redirect::StepRedirects;
use crate::step::ChainStep;
use super::registry::WrapperRegistry;

pub struct ChainBuilder {
    registry: WrapperRegistry,
    stack: Vec<usize>, // slots en orden de registro
    redirects: HashMap<usize, StepRedirects>,
    final_result: Option<usize>,
    sink: Option<Arc<dyn EventSink>>,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self { registry: WrapperRegistry::new(),
               stack: Vec::new(),
               redirects: HashMap::new(),
               final_result: None,
               sink: None }
    }

    /// Configura un sumidero de eventos para las invocaciones de la cadena
    /// compilada.
    pub fn with_event_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Registra el siguiente step de la cadena.
    pub fn set_next(mut self, step: ChainStep) -> Result<Self, CoreChainError> {
        let slot = self.registry.get_or_insert(&step)?;
        self.stack.push(slot);
        Ok(self)
    }

    /// Asocia el step recién registrado como productor de argumentos de los
    /// destinos listados: sus argumentos *entrantes* reemplazarán los que la
    /// cadena entregaría a cada destino.
    pub fn args_to<I>(mut self, targets: I) -> Result<Self, CoreChainError>
        where I: IntoIterator<Item = ChainStep>
    {
        let current = self.current_slot("args_to")?;
        for target in targets {
            let slot = self.registry.get_or_insert(&target)?;
            self.redirects.entry(current).or_default().args_to.push(slot);
        }
        Ok(self)
    }

    /// Asocia el step recién registrado como productor de resultado: los
    /// argumentos con los que invoque su continuación se anexarán a los de
    /// cada destino.
    pub fn result_to<I>(mut self, targets: I) -> Result<Self, CoreChainError>
        where I: IntoIterator<Item = ChainStep>
    {
        let current = self.current_slot("result_to")?;
        for target in targets {
            let slot = self.registry.get_or_insert(&target)?;
            self.redirects.entry(current).or_default().result_to.push(slot);
        }
        Ok(self)
    }

    /// Marca el step recién registrado como fuente del resultado externo de
    /// la cadena. A lo sumo un step designado: una marca posterior mueve la
    /// designación.
    pub fn as_result(mut self) -> Result<Self, CoreChainError> {
        let current = self.current_slot("as_result")?;
        self.final_result = Some(current);
        Ok(self)
    }

    /// Compila la cadena. `None` si nunca se registró un step.
    pub fn end(self) -> Option<Chain> {
        let ChainBuilder { registry, stack, redirects, final_result, sink } = self;

        if stack.is_empty() {
            return None;
        }

        let ids: Vec<&str> = stack.iter().map(|&slot| registry.wrapper(slot).id.as_str()).collect();
        let definition_hash = hash_str(&to_canonical_json(&json!([CHAIN_ENGINE_VERSION, ids])));

        let steps: Vec<CompiledStep> =
            stack.iter()
                 .map(|&slot| {
                     let wrapper = registry.wrapper(slot);
                     CompiledStep { id: wrapper.id.clone(),
                                    slot,
                                    runnable: Arc::clone(&wrapper.runnable),
                                    redirects: redirects.get(&slot).cloned().unwrap_or_default(),
                                    capture_result: final_result == Some(slot) }
                 })
                 .collect();

        Some(Chain::new(definition_hash, steps, registry.len(), sink))
    }

    fn current_slot(&self, method: &str) -> Result<usize, CoreChainError> {
        self.stack
            .last()
            .copied()
            .ok_or_else(|| CoreChainError::NoCurrentStep { method: method.to_string() })
    }
}

impl Default for ChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}
