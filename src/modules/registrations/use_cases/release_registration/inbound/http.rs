use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{error, info};

use crate::modules::registrations::use_cases::list_registrations::inbound::http::REGISTRATION_NOT_FOUND;
use crate::modules::registrations::use_cases::register_citizen::inbound::http::FeedbackResponse;
use crate::shell::state::AppState;

pub const REGISTRATION_RELEASED: &str = "registration released";

// Administrative reset. Frees the citizen ID for a new registration.
pub async fn handle(
    State(state): State<AppState>,
    Path(citizen_id): Path<String>,
) -> impl IntoResponse {
    match state.store.remove(&citizen_id).await {
        Ok(true) => {
            info!(citizen_id = %citizen_id, "registration released");
            Json(FeedbackResponse::new(REGISTRATION_RELEASED)).into_response()
        }
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(FeedbackResponse::new(REGISTRATION_NOT_FOUND)),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, citizen_id = %citizen_id, "releasing registration failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
