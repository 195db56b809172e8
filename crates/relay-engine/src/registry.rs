//! Immutable model registry mapping model ids to launch targets.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::{RelayError, Result};

/// Launch target for one model id: the inference binary and its weights.
#[derive(Debug, Clone)]
pub struct ModelSpec {
    pub binary: PathBuf,
    pub model_file: PathBuf,
}

/// Read-only table of configured models.
///
/// Built once at startup, then shared across all requests behind an `Arc`.
/// Never mutated after construction, so handlers read it without locking.
#[derive(Debug)]
pub struct ModelRegistry {
    models: HashMap<String, ModelSpec>,
    default_model: String,
}

impl ModelRegistry {
    /// Create an empty registry with the given default model id.
    pub fn new(default_model: impl Into<String>) -> Self {
        Self {
            models: HashMap::new(),
            default_model: default_model.into(),
        }
    }

    /// Add a model entry.
    pub fn with_model(mut self, id: impl Into<String>, spec: ModelSpec) -> Self {
        self.models.insert(id.into(), spec);
        self
    }

    /// Look up the requested model, falling back to the default id when no
    /// model is named. An id absent from the table is `UnknownModel`.
    pub fn resolve(&self, requested: Option<&str>) -> Result<&ModelSpec> {
        let id = requested.unwrap_or(&self.default_model);
        self.models
            .get(id)
            .ok_or_else(|| RelayError::UnknownModel(id.to_string()))
    }

    /// The model id used when a request does not name one.
    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    /// Configured model ids, sorted for stable output.
    pub fn model_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.models.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.models.contains_key(id)
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
