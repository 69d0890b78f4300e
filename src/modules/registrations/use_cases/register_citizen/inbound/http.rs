use axum::{
    Form, Json,
    extract::{
        Query, State,
        rejection::{FormRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

use crate::modules::registrations::use_cases::register_citizen::command::RegisterCitizen;
use crate::modules::registrations::use_cases::register_citizen::decision::REGISTRATION_SUCCESS;
use crate::modules::registrations::use_cases::register_citizen::handler::ApplicationError;
use crate::shell::state::AppState;

// Every field is optional at the serde level so a missing one is reported as a
// structural error by us rather than as a deserialization rejection.
#[derive(Debug, Default, Deserialize)]
pub struct RegisterCitizenParams {
    pub citizen_id: Option<String>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub birth_date: Option<String>,
    pub occupation: Option<String>,
    pub phone_number: Option<String>,
    pub is_risk: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("missing required field: {0}")]
pub struct MissingField(pub &'static str);

fn required(value: Option<String>, field: &'static str) -> Result<String, MissingField> {
    value.ok_or(MissingField(field))
}

impl RegisterCitizenParams {
    /// Query string values win; the form body fills the gaps.
    pub fn or(self, fallback: RegisterCitizenParams) -> Self {
        Self {
            citizen_id: self.citizen_id.or(fallback.citizen_id),
            name: self.name.or(fallback.name),
            surname: self.surname.or(fallback.surname),
            birth_date: self.birth_date.or(fallback.birth_date),
            occupation: self.occupation.or(fallback.occupation),
            phone_number: self.phone_number.or(fallback.phone_number),
            is_risk: self.is_risk.or(fallback.is_risk),
            address: self.address.or(fallback.address),
        }
    }

    pub fn into_command(self, submitted_at: DateTime<Utc>) -> Result<RegisterCitizen, MissingField> {
        Ok(RegisterCitizen {
            citizen_id: required(self.citizen_id, "citizen_id")?,
            name: required(self.name, "name")?,
            surname: required(self.surname, "surname")?,
            birth_date: required(self.birth_date, "birth_date")?,
            occupation: required(self.occupation, "occupation")?,
            phone_number: required(self.phone_number, "phone_number")?,
            is_risk: self.is_risk,
            address: required(self.address, "address")?,
            submitted_at,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub feedback: String,
}

impl FeedbackResponse {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    query: Result<Query<RegisterCitizenParams>, QueryRejection>,
    form: Result<Form<RegisterCitizenParams>, FormRejection>,
) -> impl IntoResponse {
    let Query(query) = match query {
        Ok(q) => q,
        Err(_) => return StatusCode::BAD_REQUEST.into_response(),
    };
    let form = form.map(|Form(f)| f).unwrap_or_default();

    let command = match query.or(form).into_command(Utc::now()) {
        Ok(c) => c,
        Err(e) => {
            warn!(field = e.0, "registration request rejected: {e}");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    match state.register_handler.handle(command).await {
        Ok(_) => (
            StatusCode::CREATED,
            Json(FeedbackResponse::new(REGISTRATION_SUCCESS)),
        )
            .into_response(),
        Err(ApplicationError::Domain(reason)) => {
            (StatusCode::OK, Json(FeedbackResponse::new(reason.to_string()))).into_response()
        }
        Err(e) => {
            error!(error = %e, "registration failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
