use serde_json::Value;

/// Slot de argumentos pendientes de un wrapper, con semántica de lectura y
/// limpieza atómica (`take`).
///
/// Tiene dos partes porque los dos tipos de productor difieren:
/// - un productor `args_to` *reemplaza* los argumentos que la cadena
///   entregaría al consumidor (escritura sobreescribe, no acumula);
/// - un productor `result_to` *anexa* su resultado después de los argumentos
///   que la cadena entregue, preservando el orden de llegada cuando hay
///   varios productores.
#[derive(Debug, Clone, Default)]
pub struct PendingArgs {
    replace: Option<Vec<Value>>,
    appended: Vec<Value>,
}

impl PendingArgs {
    /// Escritura de un productor `args_to`: sobreescribe el reemplazo.
    pub fn stage_replace(&mut self, args: Vec<Value>) {
        self.replace = Some(args);
    }

    /// Escritura de un productor `result_to`: anexa en orden de llegada.
    pub fn append(&mut self, mut values: Vec<Value>) {
        self.appended.append(&mut values);
    }

    pub fn is_empty(&self) -> bool {
        self.replace.is_none() && self.appended.is_empty()
    }

    /// Resuelve los argumentos efectivos del step dueño del slot y deja el
    /// slot limpio en la misma operación. `chain_args` son los argumentos que
    /// la cadena entregaría si no hubiera redirección.
    pub fn take(&mut self, chain_args: Vec<Value>) -> Vec<Value> {
        let mut args = match self.replace.take() {
            Some(replacement) => replacement,
            None => chain_args,
        };
        args.append(&mut self.appended);
        args
    }
}
