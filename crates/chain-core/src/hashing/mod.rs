//! Módulo de hashing y canonicalización JSON.
//!
//! Las claves de identidad de los wrappers y el `definition_hash` de una
//! cadena compilada se derivan de aquí; todo lo que entra al hash pasa antes
//! por la forma canónica para que el resultado sea independiente del orden de
//! inserción de claves.

pub mod canonical_json;
pub mod hash;

pub use canonical_json::to_canonical_json;
pub use hash::{hash_str, hash_value};
