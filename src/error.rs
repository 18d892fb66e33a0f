use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::services::ProviderError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(anyhow::Error),

    #[error("Configuration error: {0}")]
    Config(anyhow::Error),

    #[error("Upstream error: {0}")]
    Upstream(anyhow::Error),

    #[error("Transport error: {0}")]
    Transport(anyhow::Error),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(_, errs)| errs.iter())
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect::<Vec<_>>()
            .join("; ");

        AppError::Validation(anyhow::anyhow!(message))
    }
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Configuration(msg) => AppError::Config(anyhow::anyhow!(msg)),
            ProviderError::Connection(msg) => AppError::Transport(anyhow::anyhow!(msg)),
            ProviderError::SendFailed(msg) => AppError::Upstream(anyhow::anyhow!(msg)),
            ProviderError::InvalidResponse(msg) => AppError::Transport(anyhow::anyhow!(msg)),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            success: bool,
            error: String,
        }

        tracing::error!(error = %self, "Request failed");

        // The source system collapses every failure class to 400 with one
        // body shape; clients depend on it.
        let error = match self {
            AppError::Validation(err)
            | AppError::Config(err)
            | AppError::Upstream(err)
            | AppError::Transport(err) => err.to_string(),
        };

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                success: false,
                error,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "player_ids is required and must be a non-empty array"))]
        player_ids: Vec<String>,
    }

    #[test]
    fn validation_errors_flatten_to_their_messages() {
        let probe = Probe { player_ids: vec![] };
        let err: AppError = probe.validate().unwrap_err().into();

        match err {
            AppError::Validation(inner) => assert_eq!(
                inner.to_string(),
                "player_ids is required and must be a non-empty array"
            ),
            other => panic!("expected validation error, got {other}"),
        }
    }
}
