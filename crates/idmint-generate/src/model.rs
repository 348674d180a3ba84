use serde::{Deserialize, Serialize};
use serde_json::Value;

use idmint_core::DEFAULT_LOCALE;

/// Options for the batch engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Seed for every column RNG; equal seeds reproduce equal batches.
    pub seed: u64,
    /// Rows to generate.
    pub count: usize,
    /// Locale passed to locale-aware generators.
    pub locale: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            seed: 0,
            count: 1,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

/// One output column: a generator id and its params.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorRequest {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl GeneratorRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            params: None,
        }
    }

    pub fn with_params(mut self, params: Value) -> Self {
        self.params = Some(params);
        self
    }
}

/// Generated values, one row per record and one column per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    pub seed: u64,
    pub locale: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}
