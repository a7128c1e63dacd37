use std::fmt;
use std::panic::AssertUnwindSafe;
use std::str::FromStr;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::definition::TypeDefinition;
use crate::error::SpecError;

/// Built-in value categories, resolved once at normalization time.
///
/// Category names parse case-insensitively. `element`, `function` and
/// `arguments` from the dynamic-language heritage have no JSON equivalent
/// and are not carried; use a predicate check instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Number,
    Boolean,
    Array,
    Object,
    /// A string parsing as an RFC 3339 date-time.
    Date,
    /// A string compiling as a regular expression.
    Regexp,
}

impl ValueKind {
    /// Category name as it appears in specs and error messages.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
            ValueKind::Date => "date",
            ValueKind::Regexp => "regexp",
        }
    }

    pub(crate) fn matches(self, value: &Value) -> bool {
        match self {
            ValueKind::String => value.is_string(),
            // JSON cannot represent NaN, so every number value matches.
            ValueKind::Number => value.is_number(),
            ValueKind::Boolean => value.is_boolean(),
            ValueKind::Array => value.is_array(),
            ValueKind::Object => value.is_object(),
            ValueKind::Date => value
                .as_str()
                .is_some_and(|s| chrono::DateTime::parse_from_rfc3339(s).is_ok()),
            ValueKind::Regexp => value.as_str().is_some_and(|s| regex::Regex::new(s).is_ok()),
        }
    }
}

impl FromStr for ValueKind {
    type Err = SpecError;

    fn from_str(name: &str) -> Result<Self, SpecError> {
        if name.is_empty() {
            return Err(SpecError::EmptyTypeName);
        }
        match name.to_ascii_lowercase().as_str() {
            "string" => Ok(ValueKind::String),
            "number" => Ok(ValueKind::Number),
            "boolean" => Ok(ValueKind::Boolean),
            "array" => Ok(ValueKind::Array),
            "object" => Ok(ValueKind::Object),
            "date" => Ok(ValueKind::Date),
            "regexp" => Ok(ValueKind::Regexp),
            _ => Err(SpecError::UnknownTypeName(name.to_string())),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Matches values that deserialize as a concrete Rust type.
#[derive(Clone)]
pub struct InstanceCheck {
    type_name: String,
    check: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl InstanceCheck {
    /// Build a check for `T`, displayed by `T`'s unqualified type name.
    pub fn of<T: DeserializeOwned + 'static>() -> Self {
        let full = std::any::type_name::<T>();
        // keep generic names fully qualified; trimming would cut mid-parameter
        let type_name = if full.contains('<') {
            full.to_string()
        } else {
            full.rsplit("::").next().unwrap_or(full).to_string()
        };
        Self {
            type_name,
            check: Arc::new(|value: &Value| T::deserialize(value).is_ok()),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    fn matches(&self, value: &Value) -> bool {
        (self.check)(value)
    }
}

impl fmt::Debug for InstanceCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceCheck")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Matches values accepted by a user-supplied predicate.
///
/// A predicate that panics reads as a non-match; the panic does not escape
/// the matcher. This is a deliberate contract, and a known sharp edge: a
/// predicate failing for a programmer-error reason is indistinguishable
/// from a value that genuinely did not match.
#[derive(Clone)]
pub struct PredicateCheck {
    name: String,
    test: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl PredicateCheck {
    /// Build a predicate check; `name` appears in error messages
    /// (`<anonymous>` when empty).
    pub fn new(
        name: impl Into<String>,
        test: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            test: Arc::new(test),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, value: &Value) -> bool {
        std::panic::catch_unwind(AssertUnwindSafe(|| (self.test)(value))).unwrap_or(false)
    }
}

impl fmt::Debug for PredicateCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateCheck")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// One atomic test within a definition's ordered type list.
#[derive(Clone)]
pub enum Matcher {
    /// The `"*"` wildcard; accepts everything.
    Any,
    /// A built-in category.
    Kind(ValueKind),
    /// Values deserializing as a concrete Rust type.
    Instance(InstanceCheck),
    /// Values accepted by a named predicate.
    Predicate(PredicateCheck),
    /// An array whose every element satisfies a nested definition.
    Items(Box<TypeDefinition>),
}

impl Matcher {
    /// Whether `value` satisfies this matcher. Never panics outward.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Matcher::Any => true,
            Matcher::Kind(kind) => kind.matches(value),
            Matcher::Instance(check) => check.matches(value),
            Matcher::Predicate(check) => check.matches(value),
            Matcher::Items(element) => match value.as_array() {
                Some(items) => items.iter().all(|item| element.validate(Some(item)).is_ok()),
                None => false,
            },
        }
    }

    /// Render this matcher for error messages.
    pub fn describe(&self) -> String {
        match self {
            Matcher::Any => "*".to_string(),
            Matcher::Kind(kind) => kind.name().to_string(),
            Matcher::Instance(check) => check.type_name().to_string(),
            Matcher::Predicate(check) if check.name().is_empty() => "<anonymous>".to_string(),
            Matcher::Predicate(check) => check.name().to_string(),
            Matcher::Items(element) => element.expected(),
        }
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matcher({})", self.describe())
    }
}

/// Render an ordered matcher list in bracket notation, e.g. `[string, [number]]`.
pub(crate) fn describe_list(matchers: &[Matcher]) -> String {
    let parts: Vec<String> = matchers.iter().map(Matcher::describe).collect();
    format!("[{}]", parts.join(", "))
}

/// JSON kind name of a value, for error messages.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
