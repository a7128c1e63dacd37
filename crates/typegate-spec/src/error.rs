use std::fmt;

/// Errors raised while normalizing a raw spec into a `TypeDefinition`.
///
/// These are programmer errors in the spec itself and always surface at
/// construction time, never during validation.
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    /// A type name in a types list was the empty string.
    #[error("type name in \"types\" cannot be empty")]
    EmptyTypeName,

    /// A type name did not resolve to a built-in category.
    #[error("unknown type name \"{0}\" in \"types\"")]
    UnknownTypeName(String),

    /// A container element spec was an empty list (no element type given).
    #[error("container element spec cannot be an empty list")]
    EmptyElementSpec,

    /// A settings object or pre-normalized definition appeared inside a types list.
    #[error("settings are not allowed inside a \"types\" list")]
    NestedSettings,

    /// The spec itself was `null`.
    #[error("spec cannot be null")]
    NullSpec,

    /// The `types` property was explicitly `null`.
    #[error("property \"types\" cannot be null")]
    NullTypes,

    /// A JSON value in a spec position was not a recognized spec shape.
    #[error("unrecognized spec shape: {0}")]
    UnrecognizedShape(String),
}

pub type Result<T> = std::result::Result<T, SpecError>;

/// Which check a value failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    /// The value was missing and the definition does not allow that.
    UndefinedNotAllowed,
    /// The value was `null` and the definition does not allow that.
    NullNotAllowed,
    /// The value was empty and the definition does not allow that.
    EmptyNotAllowed,
    /// No matcher in the definition accepted the value.
    NoMatch,
}

/// A failed validation, attributable to a named value or parameter.
///
/// Carries the rendered expected types and the offending value's JSON kind
/// for `NoMatch`; the value itself is not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    kind: ValidationKind,
    parameter: String,
    method: Option<String>,
    expected: Option<String>,
    found: Option<&'static str>,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationKind, parameter: impl Into<String>) -> Self {
        Self {
            kind,
            parameter: parameter.into(),
            method: None,
            expected: None,
            found: None,
        }
    }

    pub(crate) fn no_match(
        parameter: impl Into<String>,
        expected: String,
        found: &'static str,
    ) -> Self {
        Self {
            kind: ValidationKind::NoMatch,
            parameter: parameter.into(),
            method: None,
            expected: Some(expected),
            found: Some(found),
        }
    }

    pub fn kind(&self) -> ValidationKind {
        self.kind
    }

    /// Name of the value or parameter that failed.
    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    /// Name of the guarded function, when the failure came from a call site.
    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    /// Rendered expected-types list (`NoMatch` only).
    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref()
    }

    /// JSON kind of the offending value (`NoMatch` only).
    pub fn found(&self) -> Option<&str> {
        self.found
    }

    /// Stamp the guarded function's name onto the error.
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(method) = &self.method {
            write!(f, "[{method}] ")?;
        }

        if self.parameter.is_empty() {
            write!(f, "value")?;
        } else {
            write!(f, "value '{}'", self.parameter)?;
        }

        match self.kind {
            ValidationKind::UndefinedNotAllowed => write!(f, " cannot be undefined"),
            ValidationKind::NullNotAllowed => write!(f, " cannot be null"),
            ValidationKind::EmptyNotAllowed => write!(f, " cannot be empty"),
            ValidationKind::NoMatch => write!(
                f,
                " has no matching type: expected {}, found {}",
                self.expected.as_deref().unwrap_or("[]"),
                self.found.unwrap_or("unknown"),
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
