/// Defaults applied when a spec omits its allow flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecDefaults {
    /// When true, definitions accept a missing value unless the spec says otherwise.
    pub allow_undefined: bool,
    /// When true, definitions accept `null` unless the spec says otherwise.
    pub allow_null: bool,
    /// When true, definitions accept empty strings, arrays and objects.
    pub allow_empty: bool,
}

impl Default for SpecDefaults {
    fn default() -> Self {
        Self {
            allow_undefined: false,
            allow_null: false,
            allow_empty: true,
        }
    }
}
