//! Cache de identidad de wrappers, por builder.
//!
//! Cada `ChainStep` distinto (por id) obtiene exactamente un wrapper dentro
//! del builder: es lo que hace que `args_to(fn)` resuelva al mismo wrapper
//! que `set_next(fn)` registró, y que la normalización corra una sola vez por
//! callable. Dos steps con el mismo id se funden en un wrapper (gana el
//! callable registrado primero); comportamiento documentado, no un defecto a
//! corregir en silencio.

use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::CoreChainError;
use crate::hashing::hash_str;
use crate::step::{assert_step_valid, normalize, ChainStep, RunnableStep};

/// Identidad estable de un callable dentro de un builder.
pub(crate) struct StepWrapper {
    pub id: String,
    pub runnable: Arc<dyn RunnableStep>,
}

pub(crate) struct WrapperRegistry {
    by_key: HashMap<String, usize>, // blake3 del id -> slot
    wrappers: Vec<StepWrapper>,     // indexado por slot
}

impl WrapperRegistry {
    pub fn new() -> Self {
        Self { by_key: HashMap::new(),
               wrappers: Vec::new() }
    }

    /// Valida y normaliza una única vez; llamadas repetidas con un id ya
    /// registrado devuelven el slot del wrapper existente (el callable nuevo
    /// se ignora). Devuelve el índice de slot del wrapper.
    pub fn get_or_insert(&mut self, step: &ChainStep) -> Result<usize, CoreChainError> {
        assert_step_valid(step)?;

        let key = hash_str(step.id());
        if let Some(&slot) = self.by_key.get(&key) {
            return Ok(slot);
        }

        let slot = self.wrappers.len();
        self.wrappers.push(StepWrapper { id: step.id().to_string(),
                                         runnable: normalize(step.callable().clone()) });
        self.by_key.insert(key, slot);
        Ok(slot)
    }

    pub fn wrapper(&self, slot: usize) -> &StepWrapper {
        &self.wrappers[slot]
    }

    pub fn len(&self) -> usize {
        self.wrappers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::StepFlow;

    #[test]
    fn same_id_resolves_to_same_wrapper() {
        let mut registry = WrapperRegistry::new();
        let a = ChainStep::sync("fn1", |_| Ok(StepFlow::Halt));
        let b = ChainStep::sync("fn1", |args| Ok(StepFlow::Continue(args.to_vec())));
        let c = ChainStep::sync("fn2", |_| Ok(StepFlow::Halt));

        let slot_a = registry.get_or_insert(&a).unwrap();
        let slot_b = registry.get_or_insert(&b).unwrap();
        let slot_c = registry.get_or_insert(&c).unwrap();

        assert_eq!(slot_a, slot_b);
        assert_ne!(slot_a, slot_c);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.wrapper(slot_a).id, "fn1");
    }

    #[test]
    fn invalid_steps_are_rejected() {
        let mut registry = WrapperRegistry::new();
        let blank = ChainStep::sync("", |_| Ok(StepFlow::Halt));
        assert!(matches!(registry.get_or_insert(&blank), Err(CoreChainError::InvalidStep(_))));
        assert_eq!(registry.len(), 0);
    }
}
