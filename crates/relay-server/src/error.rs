//! HTTP error handling and response mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use relay_engine::RelayError;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Relay(#[from] RelayError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ServerError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request_error", msg)
            }
            ServerError::Relay(RelayError::UnknownModel(model)) => (
                StatusCode::NOT_FOUND,
                "unknown_model",
                format!("unknown model: {model}"),
            ),
            ServerError::Relay(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "server_error",
                err.to_string(),
            ),
        };

        let body = Json(json!({
            "error": {
                "message": message,
                "type": error_type,
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_model_maps_to_404() {
        let err = ServerError::from(RelayError::UnknownModel("mistral".to_string()));
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn launch_failure_maps_to_500() {
        let err = ServerError::from(RelayError::Launch {
            binary: "/opt/llama/main".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn invalid_request_maps_to_400() {
        let err = ServerError::InvalidRequest("bad json".to_string());
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
