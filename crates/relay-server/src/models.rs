//! Generation request payload.

use serde::Deserialize;

/// Body of `POST /`.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    /// Model id; defaults to the registry's default model when absent.
    pub model: Option<String>,
    /// Sampling temperature; defaults to 0.8 when absent.
    pub temperature: Option<f64>,
    /// Stop sequences checked against accumulated output. An empty list
    /// never ends the stream early.
    #[serde(default)]
    pub stop: Vec<String>,
}
