//! Streaming relay from the inference subprocess to the HTTP client.
//!
//! The response body is an `async_stream` that owns the subprocess handle:
//! when the client disconnects, axum drops the stream, which drops the
//! handle, which kills the child. Each yielded chunk becomes its own HTTP
//! chunk, written and flushed as produced, so the client observes output
//! without delay.

use std::convert::Infallible;

use axum::body::Body;
use axum::http::{header, StatusCode};
use axum::response::Response;
use bytes::Bytes;
use tokio::io::AsyncReadExt;
use tokio::process::ChildStdout;
use uuid::Uuid;

use relay_engine::{InferenceProcess, RelayOutcome, ScanAction, StopScanner, CHUNK_SIZE};

/// Build the streamed `200 OK` response for one generation request.
///
/// Reads the child's stdout in fixed-size chunks and forwards every byte the
/// scanner lets through, in production order, with at most one chunk of
/// buffering. The loop ends with a tagged [`RelayOutcome`]; whatever was
/// already written stands as the final response on every path, including
/// read errors.
pub fn relay_response(
    process: InferenceProcess,
    stdout: ChildStdout,
    scanner: StopScanner,
    request_id: Uuid,
) -> Response {
    let stream = async_stream::stream! {
        // The process handle lives as long as the stream: dropping the body
        // (client disconnect included) kills the child.
        let mut process = process;
        let mut stdout = stdout;
        let mut scanner = scanner;
        let mut buf = [0u8; CHUNK_SIZE];

        let outcome = loop {
            let n = match stdout.read(&mut buf).await {
                Ok(0) => break RelayOutcome::Completed,
                Ok(n) => n,
                Err(err) => {
                    tracing::warn!(%request_id, %err, "read from inference process failed");
                    break RelayOutcome::ReadError;
                }
            };
            match scanner.scan(&buf[..n]) {
                ScanAction::Skip => {}
                ScanAction::Emit(bytes) => yield Ok::<Bytes, Infallible>(bytes),
                ScanAction::EmitAndStop(bytes) => {
                    yield Ok(bytes);
                    break RelayOutcome::StoppedAtMatch;
                }
            }
        };

        process.shutdown().await;
        tracing::debug!(%request_id, outcome = %outcome, "relay stream closed");
    };

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(Body::from_stream(stream))
        .expect("static response parts are valid")
}
