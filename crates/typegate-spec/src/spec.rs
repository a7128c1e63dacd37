use serde_json::Value;

use crate::definition::TypeDefinition;
use crate::error::SpecError;
use crate::matcher::{kind_name, InstanceCheck, PredicateCheck};

/// A raw, user-authored description of the types a value may take.
///
/// Specs arrive either as Rust values (constructors and `From` impls below)
/// or as JSON in the wire shape: a category name, `null`, an array, or a
/// settings object. [`Instance`](TypeSpec::Instance),
/// [`Predicate`](TypeSpec::Predicate) and [`Undefined`](TypeSpec::Undefined)
/// are code-only forms — JSON cannot express them.
#[derive(Clone, Debug)]
pub enum TypeSpec {
    /// A built-in category name, or `"*"`.
    Name(String),
    /// The value may be `null`. Only meaningful inside a types list.
    Null,
    /// The value may be missing. Only meaningful inside a types list.
    Undefined,
    /// At the top level: the ordered list of allowed types. Inside a types
    /// list: a container element spec.
    List(Vec<TypeSpec>),
    /// Explicit settings.
    Settings(SpecSettings),
    /// Values deserializing as a concrete Rust type.
    Instance(InstanceCheck),
    /// Values accepted by a named predicate.
    Predicate(PredicateCheck),
    /// Already normalized; passes through normalization unchanged.
    Definition(TypeDefinition),
}

/// The recognized keys of a settings-object spec.
///
/// Unrecognized keys on the wire are ignored; omitted keys fall back to the
/// normalizer's [`SpecDefaults`](crate::SpecDefaults).
#[derive(Clone, Debug, Default)]
pub struct SpecSettings {
    /// Ordered list of allowed types.
    pub types: Option<Vec<TypeSpec>>,
    pub allow_undefined: Option<bool>,
    pub allow_null: Option<bool>,
    pub allow_empty: Option<bool>,
    /// Display name used in error messages (`name`, `objectName` or
    /// `paramName` on the wire).
    pub name: Option<String>,
}

impl TypeSpec {
    /// Interpret a JSON value in the wire shape.
    pub fn from_value(value: &Value) -> Result<Self, SpecError> {
        match value {
            Value::Null => Ok(TypeSpec::Null),
            Value::String(name) => Ok(TypeSpec::Name(name.clone())),
            Value::Array(items) => items
                .iter()
                .map(TypeSpec::from_value)
                .collect::<Result<Vec<_>, _>>()
                .map(TypeSpec::List),
            Value::Object(map) => {
                let mut settings = SpecSettings::default();
                for (key, entry) in map {
                    match key.as_str() {
                        "types" => {
                            let types = match entry {
                                Value::Null => return Err(SpecError::NullTypes),
                                Value::Array(list) => list
                                    .iter()
                                    .map(TypeSpec::from_value)
                                    .collect::<Result<Vec<_>, _>>()?,
                                single => vec![TypeSpec::from_value(single)?],
                            };
                            settings.types = Some(types);
                        }
                        "allowUndefined" => settings.allow_undefined = entry.as_bool(),
                        "allowNull" => settings.allow_null = entry.as_bool(),
                        "allowEmpty" => settings.allow_empty = entry.as_bool(),
                        "name" | "objectName" | "paramName" => {
                            settings.name = entry.as_str().map(str::to_string);
                        }
                        // a positional index doubles as a display name
                        "pos" => {
                            if settings.name.is_none() {
                                settings.name = entry.as_u64().map(|pos| pos.to_string());
                            }
                        }
                        _ => {} // unrecognized keys are ignored
                    }
                }
                Ok(TypeSpec::Settings(settings))
            }
            other => Err(SpecError::UnrecognizedShape(kind_name(other).to_string())),
        }
    }

    /// The `"*"` wildcard.
    pub fn any() -> Self {
        TypeSpec::Name("*".to_string())
    }

    /// Spec for values deserializing as `T`.
    pub fn instance_of<T: serde::de::DeserializeOwned + 'static>() -> Self {
        TypeSpec::Instance(InstanceCheck::of::<T>())
    }

    /// Spec for values accepted by `test`; `name` appears in error messages.
    pub fn predicate(
        name: impl Into<String>,
        test: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        TypeSpec::Predicate(PredicateCheck::new(name, test))
    }
}

impl<'de> serde::Deserialize<'de> for TypeSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        TypeSpec::from_value(&value).map_err(serde::de::Error::custom)
    }
}

impl From<&str> for TypeSpec {
    fn from(name: &str) -> Self {
        TypeSpec::Name(name.to_string())
    }
}

impl From<String> for TypeSpec {
    fn from(name: String) -> Self {
        TypeSpec::Name(name)
    }
}

impl From<crate::ValueKind> for TypeSpec {
    fn from(kind: crate::ValueKind) -> Self {
        TypeSpec::Name(kind.name().to_string())
    }
}

impl From<Vec<TypeSpec>> for TypeSpec {
    fn from(types: Vec<TypeSpec>) -> Self {
        TypeSpec::List(types)
    }
}

impl From<SpecSettings> for TypeSpec {
    fn from(settings: SpecSettings) -> Self {
        TypeSpec::Settings(settings)
    }
}

impl From<TypeDefinition> for TypeSpec {
    fn from(definition: TypeDefinition) -> Self {
        TypeSpec::Definition(definition)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn wire_shapes_map_to_variants() {
        assert!(matches!(
            TypeSpec::from_value(&json!("string")).unwrap(),
            TypeSpec::Name(name) if name == "string"
        ));
        assert!(matches!(
            TypeSpec::from_value(&json!(null)).unwrap(),
            TypeSpec::Null
        ));
        assert!(matches!(
            TypeSpec::from_value(&json!(["string", "number"])).unwrap(),
            TypeSpec::List(items) if items.len() == 2
        ));
    }

    #[test]
    fn settings_read_recognized_keys_and_ignore_the_rest() {
        let raw = json!({
            "types": ["string"],
            "allowNull": true,
            "paramName": "payload",
            "futureKnob": 17
        });

        let TypeSpec::Settings(settings) = TypeSpec::from_value(&raw).unwrap() else {
            panic!("object should parse as settings");
        };
        assert_eq!(settings.allow_null, Some(true));
        assert_eq!(settings.allow_undefined, None);
        assert_eq!(settings.name.as_deref(), Some("payload"));
        assert_eq!(settings.types.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn settings_accept_a_single_bare_type() {
        let raw = json!({ "types": "string" });
        let TypeSpec::Settings(settings) = TypeSpec::from_value(&raw).unwrap() else {
            panic!("object should parse as settings");
        };
        assert_eq!(settings.types.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn null_types_property_is_rejected() {
        let raw = json!({ "types": null });
        assert!(matches!(
            TypeSpec::from_value(&raw),
            Err(SpecError::NullTypes)
        ));
    }

    #[test]
    fn scalar_spec_shapes_are_rejected() {
        assert!(matches!(
            TypeSpec::from_value(&json!(42)),
            Err(SpecError::UnrecognizedShape(kind)) if kind == "number"
        ));
        assert!(matches!(
            TypeSpec::from_value(&json!(true)),
            Err(SpecError::UnrecognizedShape(kind)) if kind == "boolean"
        ));
    }

    #[test]
    fn deserializes_from_wire_json() {
        let spec: TypeSpec =
            serde_json::from_str(r#"{"types": ["string", null], "allowEmpty": false}"#)
                .expect("wire spec should deserialize");
        assert!(matches!(spec, TypeSpec::Settings(_)));

        let bad: Result<TypeSpec, _> = serde_json::from_str("3.5");
        assert!(bad.is_err());
    }
}
