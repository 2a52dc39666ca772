//! Redirección entre steps.
//!
//! `args_to` / `result_to` registran, en construcción, qué wrappers reciben
//! los argumentos entrantes o el resultado producido de un step. En
//! ejecución, esos valores se depositan en el slot de argumentos pendientes
//! del destino, que los consume (y limpia) en su propia invocación.

mod pending;
mod targets;

pub use pending::PendingArgs;
pub use targets::StepRedirects;
