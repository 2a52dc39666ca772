//! Modelos neutrales (ChainValue, InvocationContext).

pub mod context;
pub mod value;

pub use context::InvocationContext;
pub use value::ChainValue;
