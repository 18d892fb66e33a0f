use axum::extract::rejection::JsonRejection;
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::error::AppError;
use crate::services::PushAlert;
use crate::startup::AppState;

const CONFIRMATION_MESSAGE: &str = "SOS notification sent";

#[derive(Debug, Deserialize, Validate)]
pub struct SendSosRequest {
    #[validate(length(
        min = 1,
        message = "player_ids is required and must be a non-empty array"
    ))]
    pub player_ids: Vec<String>,
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SendSosResponse {
    pub success: bool,
    pub recipients: Value,
    pub message: String,
}

#[tracing::instrument(skip(state, payload))]
pub async fn send_sos(
    State(state): State<AppState>,
    payload: Result<Json<SendSosRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SendSosResponse>), AppError> {
    // Malformed bodies share the validation path so every failure renders
    // the same {success: false, error} shape.
    let Json(request) = payload.map_err(|e| AppError::Validation(anyhow::anyhow!(e.body_text())))?;
    request.validate()?;

    let alert = PushAlert {
        player_ids: request.player_ids,
        message: request.message,
    };

    let receipt = state.push_provider.send(&alert).await?;

    tracing::info!(
        player_count = alert.player_ids.len(),
        recipients = %receipt.recipients,
        "SOS notification relayed"
    );

    Ok((
        StatusCode::OK,
        Json(SendSosResponse {
            success: true,
            recipients: receipt.recipients,
            message: CONFIRMATION_MESSAGE.to_string(),
        }),
    ))
}
