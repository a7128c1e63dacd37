use std::fmt;

use serde_json::Value;
use tracing::debug;

use typegate_spec::ValidationError;

use crate::binding::ParamBindings;

/// A function wrapped with per-call argument validation.
///
/// Built by [`guard`]; call through [`Guarded::call`].
pub struct Guarded<F> {
    bindings: ParamBindings,
    func: F,
    name: String,
}

/// Wrap `func` so every call validates its arguments against `bindings`
/// first.
///
/// The wrapped function sees exactly the arguments the caller passed; the
/// guard neither truncates nor reorders them.
pub fn guard<F, R>(bindings: ParamBindings, func: F) -> Guarded<F>
where
    F: Fn(&[Value]) -> R,
{
    Guarded {
        bindings,
        func,
        name: String::new(),
    }
}

impl<F> Guarded<F> {
    /// Name stamped into validation errors as a `[name]` prefix.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bindings(&self) -> &ParamBindings {
        &self.bindings
    }

    /// Validate `args`, then delegate to the wrapped function.
    ///
    /// Fail-fast: the first offending parameter aborts the call and the
    /// function body does not run.
    pub fn call<R>(&self, args: &[Value]) -> Result<R, ValidationError>
    where
        F: Fn(&[Value]) -> R,
    {
        if let Err(err) = self.bindings.check(args) {
            debug!(method = %self.name, parameter = err.parameter(), "rejected call");
            let err = if self.name.is_empty() {
                err
            } else {
                err.with_method(self.name.as_str())
            };
            return Err(err);
        }
        Ok((self.func)(args))
    }
}

impl<F> fmt::Debug for Guarded<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guarded")
            .field("name", &self.name)
            .field("params", &self.bindings.len())
            .finish_non_exhaustive()
    }
}
