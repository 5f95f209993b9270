//! Axum Router Configuration
//!
//! This module defines the HTTP routing for the application, including the
//! webhook endpoint and OpenAPI documentation.

use crate::{
    handlers,
    models::{ErrorResponse, SkillEvent, SkillRequest, SkillResponse},
    state::AppState,
};

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::handle_skill_event, handlers::healthz),
    components(schemas(SkillRequest, SkillResponse, SkillEvent, ErrorResponse)),
    tags(
        (name = "Quiz Skill API", description = "Webhook host for the Big Buck Bunny quiz skill")
    )
)]
pub struct ApiDoc;

/// Creates the main Axum router for the application.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_router = Router::new()
        .route("/skill", post(handlers::handle_skill_event))
        .route("/healthz", get(handlers::healthz))
        .with_state(app_state);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api_router)
}
