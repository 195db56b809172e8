//! # relay-server
//!
//! HTTP front end for llama-relay. Exposes a single generation endpoint
//! that spawns the configured inference binary and streams its output back
//! to the caller as it is produced, plus a health probe.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod server;
pub mod state;
pub mod streaming;

pub use error::ServerError;
pub use server::{create_router, run_server};
pub use state::AppState;
