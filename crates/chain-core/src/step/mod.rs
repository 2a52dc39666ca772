//! Definiciones relacionadas a Steps.
//!
//! Un step es un callable de usuario registrado en la cadena. Este módulo
//! define:
//! - `ChainStep` y `StepCallable`: las tres formas de callable aceptadas
//!   (síncrona, future y corrutina).
//! - `StepFlow`: el resultado de control de un step (continuación invocada o
//!   corte de la cadena).
//! - `StepCoroutine` / `CoroutinePoll`: contrato de las corrutinas.
//! - el normalizador, que resuelve las tres formas en una única forma async
//!   canónica (`RunnableStep`), de modo que el resto del motor nunca vuelve a
//!   distinguirlas.

pub mod coroutine;
pub mod definition;
pub mod flow;
pub mod macros; // macros para declarar steps a partir de closures
mod normalize;
mod validate;

pub use coroutine::{CoroutinePoll, StepCoroutine, YieldFuture};
pub use definition::{ChainStep, StepCallable, StepFuture, StepShape};
pub use flow::StepFlow;

pub(crate) use normalize::{normalize, RunnableStep};
pub(crate) use validate::assert_step_valid;
