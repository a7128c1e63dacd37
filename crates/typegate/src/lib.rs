//! Declarative runtime type validation for dynamic JSON values.
//!
//! typegate resolves a raw type spec — a category name, a list of
//! alternatives, a settings object, an instance or predicate check — into an
//! immutable definition, validates `serde_json` values against it, and gates
//! function calls on their arguments passing.
//!
//! # Crate Structure
//!
//! - [`spec`] — Spec normalization, matchers, validation, error taxonomy
//! - [`guard`] — Parameter bindings and guarded functions (behind `guard` feature)

/// Re-export spec types.
pub mod spec {
    pub use typegate_spec::*;
}

/// Re-export guard types (requires `guard` feature).
#[cfg(feature = "guard")]
pub mod guard {
    pub use typegate_guard::*;
}
