use std::collections::BTreeMap;

use rand::RngCore;
use serde_json::Value;

use crate::errors::GenerationError;
use crate::params::{ParamSpec, validate_params};

mod code;
mod file;

/// Inputs shared by every generator call.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorContext<'a> {
    pub locale: &'a str,
}

/// A value generator addressable by a stable id.
pub trait Generator: Send + Sync {
    fn id(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn params(&self) -> &'static [ParamSpec] {
        &[]
    }

    /// Check `params` without drawing any randomness.
    fn validate(&self, params: Option<&Value>) -> Result<(), GenerationError> {
        validate_params(params, self.params(), self.id()).map(|_| ())
    }

    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError>;
}

/// Generators keyed by id.
pub struct GeneratorRegistry {
    generators: BTreeMap<&'static str, Box<dyn Generator>>,
}

impl GeneratorRegistry {
    /// Registry with every built-in generator.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        code::register(&mut registry);
        file::register(&mut registry);
        registry
    }

    pub fn empty() -> Self {
        Self {
            generators: BTreeMap::new(),
        }
    }

    /// Add a generator, replacing any previous one with the same id.
    pub fn register_generator(&mut self, generator: Box<dyn Generator>) {
        self.generators.insert(generator.id(), generator);
    }

    pub fn generator(&self, id: &str) -> Option<&dyn Generator> {
        self.generators.get(id).map(Box::as_ref)
    }

    pub fn require(&self, id: &str) -> Result<&dyn Generator, GenerationError> {
        self.generator(id)
            .ok_or_else(|| GenerationError::UnknownGenerator(id.to_string()))
    }

    /// Sorted generator ids.
    pub fn generator_ids(&self) -> Vec<&'static str> {
        self.generators.keys().copied().collect()
    }

    pub fn describe(&self) -> impl Iterator<Item = &dyn Generator> {
        self.generators.values().map(Box::as_ref)
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
