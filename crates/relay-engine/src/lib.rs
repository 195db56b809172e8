//! # relay-engine
//!
//! The narrow waist of llama-relay: the model registry, the subprocess
//! invocation contract, and the chunk scanner that turns raw inference
//! output into a client-facing stream. Everything HTTP lives in
//! `relay-server`; this crate never touches the network or the process
//! environment.
//!
//! ## Design Notes
//!
//! ### Scoped teardown
//! [`InferenceProcess`] is spawned with `kill_on_drop`, so the child is
//! signalled on every exit path of its owner, including unwinds and dropped
//! response bodies. Orderly paths call [`InferenceProcess::shutdown`] to
//! also reap the exit status.
//!
//! ### Byte-count prompt skip
//! The inference binary echoes the prompt plus one delimiter byte before
//! generated text. [`StopScanner`] discards that prefix by byte count rather
//! than by searching for the prompt text, so a multi-byte character split
//! across reads cannot shift the boundary.

pub mod forward;
pub mod invocation;
pub mod process;
pub mod registry;

pub use forward::{RelayOutcome, ScanAction, StopScanner, CHUNK_SIZE};
pub use invocation::{LaunchSpec, DEFAULT_TEMPERATURE};
pub use process::InferenceProcess;
pub use registry::{ModelRegistry, ModelSpec};

pub type Result<T> = std::result::Result<T, RelayError>;

/// Top-level error type for relay operations.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("unknown model: {0}")]
    UnknownModel(String),

    #[error("failed to launch inference binary {binary}: {source}")]
    Launch {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("inference process stdout was not captured")]
    NoStdout,
}
