//! Axum Handlers for the Webhook API
//!
//! This module contains the logic for handling voice-platform requests.
//! It uses `utoipa` doc comments to generate OpenAPI documentation.

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use quiz_core::{SpeechAction, dialogue::Intent};
use std::sync::Arc;
use tracing::error;

use crate::{
    models::{ErrorResponse, SkillEvent, SkillRequest, SkillResponse},
    state::AppState,
};

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    InternalServerError(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { message })).into_response()
            }
            ApiError::InternalServerError(err) => {
                error!("Internal Server Error: {:?}", err);
                let message = "An internal server error occurred.".to_string();
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse { message }),
                )
                    .into_response()
            }
        }
    }
}

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::InternalServerError(err.into())
    }
}

/// Maps a platform event onto the dialogue controller's intent type.
fn intent_from_event(event: SkillEvent) -> Intent {
    match event {
        SkillEvent::Launch => Intent::Launch,
        SkillEvent::AskName => Intent::AskName,
        SkillEvent::NameProvided { name } => Intent::NameProvided { name },
        SkillEvent::AnswerProvided { answer } => Intent::AnswerProvided { answer },
    }
}

/// Handle one turn of a quiz conversation.
///
/// A record-store submission failure is not an error here: the closing
/// speech is still returned with 200, per the skill's absorb-everything
/// policy.
#[utoipa::path(
    post,
    path = "/skill",
    request_body = SkillRequest,
    responses(
        (status = 200, description = "Speech action for the platform to perform", body = SkillResponse),
        (status = 400, description = "Malformed event envelope", body = ErrorResponse)
    )
)]
pub async fn handle_skill_event(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<SkillResponse>, ApiError> {
    let request: SkillRequest = serde_json::from_value(body)
        .map_err(|e| ApiError::BadRequest(format!("Malformed skill event: {}", e)))?;

    // First contact carries no attributes yet.
    let mut session = request.session.unwrap_or_default();

    let intent = intent_from_event(request.event);
    let action = state.controller.handle(&mut session, intent).await;

    let (speech, end_session) = match action {
        SpeechAction::Ask(text) => (text, false),
        SpeechAction::Tell(text) => (text, true),
    };

    Ok(Json(SkillResponse {
        speech,
        end_session,
        session,
    }))
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/healthz",
    responses((status = 200, description = "Service is up"))
)]
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
