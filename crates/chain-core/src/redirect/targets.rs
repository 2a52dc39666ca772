/// Tabla de redirección compilada de un step: slots destino para sus
/// argumentos entrantes (`args_to`) y para su resultado (`result_to`). Los
/// índices apuntan a la tabla de slots de la cadena compilada.
#[derive(Debug, Clone, Default)]
pub struct StepRedirects {
    pub args_to: Vec<usize>,
    pub result_to: Vec<usize>,
}

impl StepRedirects {
    pub fn is_empty(&self) -> bool {
        self.args_to.is_empty() && self.result_to.is_empty()
    }
}
