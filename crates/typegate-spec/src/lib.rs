//! Declarative type specifications and runtime validation for JSON values.
//!
//! Resolve a raw spec — a category name, a list of alternatives, a settings
//! object, an instance or predicate check — into an immutable
//! [`TypeDefinition`], then validate `serde_json::Value`s against it.
//! Malformed specs fail at construction time with a [`SpecError`]; values
//! that fail a check produce an attributable [`ValidationError`].

pub mod config;
pub mod definition;
pub mod error;
pub mod matcher;
pub mod spec;

pub use config::SpecDefaults;
pub use definition::{Normalizer, TypeDefinition};
pub use error::{Result, SpecError, ValidationError, ValidationKind};
pub use matcher::{kind_name, InstanceCheck, Matcher, PredicateCheck, ValueKind};
pub use spec::{SpecSettings, TypeSpec};
