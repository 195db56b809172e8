//! Server configuration from environment variables.
//!
//! Everything is read once at startup; the resulting registry is immutable
//! for the life of the process. The engine crate never reads the
//! environment.

use std::net::SocketAddr;

use relay_engine::{ModelRegistry, ModelSpec};

/// Model ids recognized by the server, paired with the environment variable
/// naming each one's weights file. The id set is fixed at build time.
const MODEL_ENV_VARS: &[(&str, &str)] = &[
    ("llama", "LLAMA_MODEL"),
    ("llama2", "LLAMA2_MODEL"),
    ("codellama", "CODELLAMA_MODEL"),
];

/// Model id used when a request does not name one.
pub const DEFAULT_MODEL: &str = "llama";

const DEFAULT_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 8080);

/// Build the model registry from the process environment.
///
/// `LLAMA_BIN` points at the inference binary shared by all models; each
/// entry of the id table that has its variable set contributes one model.
/// Unset ids are simply not configured and resolve to 404 at request time.
pub fn registry_from_env() -> ModelRegistry {
    registry_from_lookup(|name| std::env::var(name).ok())
}

/// Testable core of [`registry_from_env`].
pub(crate) fn registry_from_lookup(get: impl Fn(&str) -> Option<String>) -> ModelRegistry {
    let binary = get("LLAMA_BIN").unwrap_or_default();
    if binary.is_empty() {
        tracing::warn!("LLAMA_BIN is not set; model launches will fail");
    }

    let mut registry = ModelRegistry::new(DEFAULT_MODEL);
    for &(id, var) in MODEL_ENV_VARS {
        match get(var) {
            Some(model_file) if !model_file.is_empty() => {
                registry = registry.with_model(
                    id,
                    ModelSpec {
                        binary: binary.clone().into(),
                        model_file: model_file.into(),
                    },
                );
            }
            _ => tracing::debug!(model = id, env = var, "model not configured"),
        }
    }
    registry
}

/// Socket address to bind, from `RELAY_ADDR` (default `0.0.0.0:8080`).
pub fn bind_addr() -> SocketAddr {
    let default = SocketAddr::from(DEFAULT_ADDR);
    match std::env::var("RELAY_ADDR") {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(%raw, "RELAY_ADDR is not a valid socket address, using default");
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn all_models_configured() {
        let registry = registry_from_lookup(lookup(&[
            ("LLAMA_BIN", "/opt/llama/main"),
            ("LLAMA_MODEL", "/models/7b.gguf"),
            ("LLAMA2_MODEL", "/models/13b.gguf"),
            ("CODELLAMA_MODEL", "/models/code.gguf"),
        ]));
        assert_eq!(registry.model_ids(), vec!["codellama", "llama", "llama2"]);
        assert_eq!(registry.default_model(), "llama");
        let spec = registry.resolve(None).unwrap();
        assert_eq!(spec.binary, std::path::PathBuf::from("/opt/llama/main"));
    }

    #[test]
    fn unset_model_vars_leave_ids_unconfigured() {
        let registry = registry_from_lookup(lookup(&[
            ("LLAMA_BIN", "/opt/llama/main"),
            ("LLAMA2_MODEL", "/models/13b.gguf"),
        ]));
        assert_eq!(registry.model_ids(), vec!["llama2"]);
        assert!(!registry.contains("llama"));
        // The default id itself can be unconfigured; requests then 404.
        assert!(registry.resolve(None).is_err());
    }

    #[test]
    fn no_vars_yields_empty_registry() {
        let registry = registry_from_lookup(|_| None);
        assert!(registry.is_empty());
    }
}
