use serde_json::Value;
use tracing::debug;

use crate::config::SpecDefaults;
use crate::error::{SpecError, ValidationError, ValidationKind};
use crate::matcher::{describe_list, kind_name, Matcher, ValueKind};
use crate::spec::{SpecSettings, TypeSpec};

/// Resolves raw specs into [`TypeDefinition`]s under a fixed set of defaults.
///
/// Construct one per defaults "theme" and reuse it; there is no process-wide
/// default table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    defaults: SpecDefaults,
}

impl Normalizer {
    /// A normalizer with the library defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// A normalizer with explicit defaults.
    pub fn with_defaults(defaults: SpecDefaults) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &SpecDefaults {
        &self.defaults
    }

    /// Resolve `spec` into a canonical definition.
    ///
    /// Malformed specs (empty type names, unknown categories, empty
    /// container element specs, nested settings) fail here, never at
    /// validation time. An already-normalized definition passes through
    /// unchanged.
    pub fn normalize(&self, spec: impl Into<TypeSpec>) -> Result<TypeDefinition, SpecError> {
        let settings = match spec.into() {
            TypeSpec::Definition(definition) => return Ok(definition),
            TypeSpec::Settings(settings) => settings,
            TypeSpec::Null => return Err(SpecError::NullSpec),
            TypeSpec::Undefined => SpecSettings::default(),
            TypeSpec::List(types) => SpecSettings {
                types: Some(types),
                ..SpecSettings::default()
            },
            single => SpecSettings {
                types: Some(vec![single]),
                ..SpecSettings::default()
            },
        };

        let mut definition = TypeDefinition {
            allow_undefined: settings
                .allow_undefined
                .unwrap_or(self.defaults.allow_undefined),
            allow_null: settings.allow_null.unwrap_or(self.defaults.allow_null),
            allow_empty: settings.allow_empty.unwrap_or(self.defaults.allow_empty),
            matchers: Vec::new(),
            name: settings.name.unwrap_or_default(),
        };

        for entry in settings.types.unwrap_or_default() {
            self.expand(entry, &mut definition)?;
        }

        // the matcher list is never empty after normalization
        if definition.matchers.is_empty() {
            definition.matchers.push(Matcher::Kind(ValueKind::Object));
        }

        Ok(definition)
    }

    fn expand(&self, entry: TypeSpec, definition: &mut TypeDefinition) -> Result<(), SpecError> {
        match entry {
            TypeSpec::Null => definition.allow_null = true,
            TypeSpec::Undefined => definition.allow_undefined = true,
            TypeSpec::Name(name) if name == "*" => definition.matchers.push(Matcher::Any),
            TypeSpec::Name(name) => definition.matchers.push(Matcher::Kind(name.parse()?)),
            TypeSpec::List(items) => {
                if items.is_empty() {
                    return Err(SpecError::EmptyElementSpec);
                }
                let element = self.normalize(TypeSpec::List(items))?;
                definition.matchers.push(Matcher::Items(Box::new(element)));
            }
            TypeSpec::Instance(check) => definition.matchers.push(Matcher::Instance(check)),
            TypeSpec::Predicate(check) => definition.matchers.push(Matcher::Predicate(check)),
            TypeSpec::Settings(_) | TypeSpec::Definition(_) => {
                return Err(SpecError::NestedSettings);
            }
        }
        Ok(())
    }
}

/// A canonical, immutable validation rule: which types a value may take and
/// whether it may be missing, null or empty.
///
/// Definitions never change after normalization; share them freely across
/// threads.
#[derive(Debug, Clone)]
pub struct TypeDefinition {
    allow_undefined: bool,
    allow_null: bool,
    allow_empty: bool,
    matchers: Vec<Matcher>,
    name: String,
}

impl TypeDefinition {
    /// Normalize `spec` under the library defaults.
    pub fn new(spec: impl Into<TypeSpec>) -> Result<Self, SpecError> {
        Normalizer::new().normalize(spec)
    }

    /// This definition carrying `name` for error messages.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn allow_undefined(&self) -> bool {
        self.allow_undefined
    }

    pub fn allow_null(&self) -> bool {
        self.allow_null
    }

    pub fn allow_empty(&self) -> bool {
        self.allow_empty
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }

    /// Bracket rendering of the matcher list, e.g. `[string, [number]]`.
    pub fn expected(&self) -> String {
        describe_list(&self.matchers)
    }

    /// Check `value` against this definition. `None` means the value is
    /// missing.
    ///
    /// Check order is fixed: missing, null, type match, emptiness. An empty
    /// value of the wrong type reports a type error, not an emptiness error.
    pub fn validate(&self, value: Option<&Value>) -> Result<(), ValidationError> {
        let value = match value {
            Some(value) => value,
            None => {
                if self.allow_undefined {
                    return Ok(());
                }
                return Err(self.failure(ValidationKind::UndefinedNotAllowed));
            }
        };

        if value.is_null() {
            if self.allow_null {
                return Ok(());
            }
            return Err(self.failure(ValidationKind::NullNotAllowed));
        }

        if !self.matchers.iter().any(|matcher| matcher.matches(value)) {
            debug!(
                name = %self.name,
                expected = %self.expected(),
                found = kind_name(value),
                "no matcher accepted value"
            );
            return Err(ValidationError::no_match(
                &self.name,
                self.expected(),
                kind_name(value),
            ));
        }

        if !self.allow_empty && is_empty(value) {
            return Err(self.failure(ValidationKind::EmptyNotAllowed));
        }

        Ok(())
    }

    /// Boolean convenience over [`validate`](Self::validate).
    pub fn is_valid(&self, value: Option<&Value>) -> bool {
        self.validate(value).is_ok()
    }

    fn failure(&self, kind: ValidationKind) -> ValidationError {
        ValidationError::new(kind, &self.name)
    }
}

/// Zero-length string or array, or an object with no members. Scalars are
/// never empty.
fn is_empty(value: &Value) -> bool {
    match value {
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}
