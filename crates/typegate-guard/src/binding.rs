use serde_json::Value;

use typegate_spec::{Normalizer, SpecError, TypeDefinition, TypeSpec, ValidationError};

/// Ordered parameter definitions, compiled once at wrap time.
///
/// Declaration order defines positional correspondence at call time:
/// binding `i` validates argument `i`.
#[derive(Debug, Clone)]
pub struct ParamBindings {
    definitions: Vec<TypeDefinition>,
}

impl ParamBindings {
    /// Bind named parameters, in declaration order.
    pub fn named<N, S, I>(params: I) -> Result<Self, SpecError>
    where
        N: Into<String>,
        S: Into<TypeSpec>,
        I: IntoIterator<Item = (N, S)>,
    {
        Self::named_with(&Normalizer::new(), params)
    }

    /// Bind named parameters under an explicit normalizer.
    pub fn named_with<N, S, I>(normalizer: &Normalizer, params: I) -> Result<Self, SpecError>
    where
        N: Into<String>,
        S: Into<TypeSpec>,
        I: IntoIterator<Item = (N, S)>,
    {
        let mut definitions = Vec::new();
        for (name, spec) in params {
            definitions.push(normalizer.normalize(spec)?.named(name));
        }
        Ok(Self { definitions })
    }

    /// Bind positional parameters; each is named by its zero-based index.
    pub fn positional<S, I>(params: I) -> Result<Self, SpecError>
    where
        S: Into<TypeSpec>,
        I: IntoIterator<Item = S>,
    {
        Self::positional_with(&Normalizer::new(), params)
    }

    /// Bind positional parameters under an explicit normalizer.
    pub fn positional_with<S, I>(normalizer: &Normalizer, params: I) -> Result<Self, SpecError>
    where
        S: Into<TypeSpec>,
        I: IntoIterator<Item = S>,
    {
        let mut definitions = Vec::new();
        for (index, spec) in params.into_iter().enumerate() {
            definitions.push(normalizer.normalize(spec)?.named(index.to_string()));
        }
        Ok(Self { definitions })
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn definitions(&self) -> &[TypeDefinition] {
        &self.definitions
    }

    /// Validate `args` positionally, failing on the first offending
    /// parameter.
    ///
    /// Missing trailing arguments are checked as undefined; extra arguments
    /// beyond the declared bindings pass through unchecked.
    pub fn check(&self, args: &[Value]) -> Result<(), ValidationError> {
        for (index, definition) in self.definitions.iter().enumerate() {
            definition.validate(args.get(index))?;
        }
        Ok(())
    }
}
