//! Per-request subprocess invocation spec.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::registry::ModelSpec;

/// Sampling temperature applied when the request does not provide one.
pub const DEFAULT_TEMPERATURE: f64 = 0.8;

/// Everything needed to start one inference subprocess.
///
/// Derived from a request plus the resolved [`ModelSpec`]; owned by a single
/// request's handling and discarded with it.
#[derive(Debug, Clone)]
pub struct LaunchSpec {
    pub binary: PathBuf,
    pub model_file: PathBuf,
    pub temperature: f64,
    pub prompt: String,
}

impl LaunchSpec {
    pub fn new(model: &ModelSpec, temperature: Option<f64>, prompt: impl Into<String>) -> Self {
        Self {
            binary: model.binary.clone(),
            model_file: model.model_file.clone(),
            temperature: temperature.unwrap_or(DEFAULT_TEMPERATURE),
            prompt: prompt.into(),
        }
    }

    /// Argument vector for the inference binary.
    ///
    /// The binary expects `-m <weights> --temp <float> -p <prompt>`, with the
    /// temperature always formatted to six decimal places.
    pub fn argv(&self) -> Vec<OsString> {
        vec![
            OsString::from("-m"),
            self.model_file.clone().into_os_string(),
            OsString::from("--temp"),
            OsString::from(format!("{:.6}", self.temperature)),
            OsString::from("-p"),
            OsString::from(self.prompt.clone()),
        ]
    }
}
