//! Macros utilitarias para reducir boilerplate al declarar steps a partir de
//! closures.
//!
//! Exportadas en la raíz del crate para poder usarlas como:
//!   use chain_core::{sync_step, future_step};
//!
//! El identificador del macro se convierte en el id del step, que es su
//! identidad dentro del builder.

/// Declara un step síncrono: `sync_step!(fn1, |args| { ... })`.
#[macro_export]
macro_rules! sync_step {
    ($name:ident, |$args:ident| $body:expr) => {
        $crate::step::ChainStep::sync(stringify!($name), move |$args| $body)
    };
}

/// Declara un step que devuelve un future:
/// `future_step!(fetch, |args| { ... })` donde el cuerpo es código async.
#[macro_export]
macro_rules! future_step {
    ($name:ident, |$args:ident| $body:expr) => {
        $crate::step::ChainStep::future(stringify!($name), move |$args| {
            ::std::boxed::Box::pin(async move { $body })
        })
    };
}
