//! Validador de steps.
//!
//! Se invoca desde todo punto de entrada del builder que acepta un callable
//! de usuario (`set_next` y los destinos de `args_to` / `result_to`).

use crate::errors::CoreChainError;
use super::definition::ChainStep;

/// Rechaza steps cuyo identificador no permite direccionarlos en la cadena.
pub(crate) fn assert_step_valid(step: &ChainStep) -> Result<(), CoreChainError> {
    if step.id().trim().is_empty() {
        return Err(CoreChainError::InvalidStep("step id must not be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::StepFlow;

    #[test]
    fn rejects_blank_ids() {
        let blank = ChainStep::sync("   ", |_| Ok(StepFlow::Halt));
        assert!(matches!(assert_step_valid(&blank), Err(CoreChainError::InvalidStep(_))));

        let ok = ChainStep::sync("fn1", |_| Ok(StepFlow::Halt));
        assert!(assert_step_valid(&ok).is_ok());
    }
}
