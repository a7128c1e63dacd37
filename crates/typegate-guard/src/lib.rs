//! Argument validation gates for functions taking dynamic JSON values.
//!
//! Bind each positional parameter to a type spec once, then validate every
//! call before it reaches the target function. A call with an offending
//! argument never runs the function body; the error names the parameter and
//! the guarded function.

pub mod binding;
pub mod guarded;

pub use binding::ParamBindings;
pub use guarded::{guard, Guarded};
