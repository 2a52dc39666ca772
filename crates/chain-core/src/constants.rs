//! Constantes del motor de cadenas.
//!
//! Este módulo agrupa valores estáticos que participan en el cálculo del
//! `definition_hash` de una cadena compilada. Cambios en estas constantes
//! invalidan los hashes aunque la definición no cambie (por diseño,
//! `CHAIN_ENGINE_VERSION` forma parte del input del hashing).

/// Versión lógica del motor (C1). Se incluye en el input del
/// `definition_hash` para que un cambio incompatible del engine produzca
/// hashes distintos aunque los ids de los steps sean los mismos. Mantener
/// estable mientras no haya cambios incompatibles.
pub const CHAIN_ENGINE_VERSION: &str = "C1.0";
