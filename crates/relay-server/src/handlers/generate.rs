//! Text generation handler.

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, response::Response, Json};
use uuid::Uuid;

use relay_engine::{InferenceProcess, LaunchSpec, StopScanner};

use crate::{error::ServerError, models::GenerateRequest, state::AppState, streaming};

/// Handle generation requests.
///
/// Normalizes the request (default model and temperature), spawns the
/// inference subprocess, and hands its stdout pipe to the streaming relay.
/// Every failure is decided here, before the first response byte; once the
/// stream starts, errors only truncate it.
pub async fn handle_generate(
    State(state): State<AppState>,
    body: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Response, ServerError> {
    let Json(req) = body.map_err(|err| ServerError::InvalidRequest(err.body_text()))?;

    let request_id = Uuid::new_v4();
    tracing::info!(
        %request_id,
        model = ?req.model.as_deref(),
        prompt_len = req.prompt.len(),
        stop_count = req.stop.len(),
        "generate request"
    );

    let model = state.registry.resolve(req.model.as_deref())?;
    let spec = LaunchSpec::new(model, req.temperature, req.prompt);

    let mut process = InferenceProcess::spawn(&spec)?;
    let stdout = process.take_stdout()?;

    let scanner = StopScanner::new(&spec.prompt, req.stop);
    Ok(streaming::relay_response(process, stdout, scanner, request_id))
}
