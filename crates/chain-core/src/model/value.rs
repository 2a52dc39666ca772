use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Valor final observable de una invocación de la cadena.
///
/// El centinela del final de la cadena arma este valor con los argumentos que
/// le llegan: cero argumentos producen `Absent`, uno se devuelve desenvuelto
/// y dos o más se devuelven como secuencia ordenada.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChainValue {
    Absent,
    Single(Value),
    Many(Vec<Value>),
}

impl ChainValue {
    pub fn from_args(mut args: Vec<Value>) -> Self {
        match args.len() {
            0 => ChainValue::Absent,
            1 => ChainValue::Single(args.remove(0)),
            _ => ChainValue::Many(args),
        }
    }

    /// Cantidad de argumentos que llegaron al centinela.
    pub fn arity(&self) -> usize {
        match self {
            ChainValue::Absent => 0,
            ChainValue::Single(_) => 1,
            ChainValue::Many(values) => values.len(),
        }
    }

    pub fn as_single(&self) -> Option<&Value> {
        match self {
            ChainValue::Single(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_args(self) -> Vec<Value> {
        match self {
            ChainValue::Absent => vec![],
            ChainValue::Single(v) => vec![v],
            ChainValue::Many(values) => values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_args_shapes() {
        assert_eq!(ChainValue::from_args(vec![]), ChainValue::Absent);
        assert_eq!(ChainValue::from_args(vec![json!(1)]), ChainValue::Single(json!(1)));
        assert_eq!(ChainValue::from_args(vec![json!(1), json!(2)]),
                   ChainValue::Many(vec![json!(1), json!(2)]));
    }
}
