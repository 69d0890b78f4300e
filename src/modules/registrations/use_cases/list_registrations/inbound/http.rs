use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::error;

use crate::modules::registrations::use_cases::register_citizen::inbound::http::FeedbackResponse;
use crate::shell::state::AppState;

pub const REGISTRATION_NOT_FOUND: &str = "registration not found";

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.list().await {
        Ok(records) => Json(records).into_response(),
        Err(e) => {
            error!(error = %e, "listing registrations failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn handle_one(
    State(state): State<AppState>,
    Path(citizen_id): Path<String>,
) -> impl IntoResponse {
    match state.store.get(&citizen_id).await {
        Ok(Some(record)) => Json(record).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(FeedbackResponse::new(REGISTRATION_NOT_FOUND)),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, citizen_id = %citizen_id, "loading registration failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
