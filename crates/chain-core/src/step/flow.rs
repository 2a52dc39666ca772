use serde_json::Value;

/// Resultado de control de un step.
///
/// En este motor la continuación no es una closure anidada: un step "invoca"
/// su continuación devolviendo `Continue` con los argumentos que quiere
/// entregar al resto de la cadena. `Halt` modela al step que nunca invoca su
/// continuación: la cadena termina silenciosamente sin resultado (mecanismo
/// deliberado de corte, no un error).
#[derive(Debug, Clone, PartialEq)]
pub enum StepFlow {
    /// Continuación invocada con estos argumentos.
    Continue(Vec<Value>),
    /// Continuación nunca invocada: corta la cadena con resultado ausente.
    Halt,
}

impl StepFlow {
    /// Azúcar para el caso común de continuar con un único valor.
    pub fn single(value: Value) -> Self {
        StepFlow::Continue(vec![value])
    }
}
