use async_graphql::{Context, InputObject, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::registrations::use_cases::register_citizen::command::RegisterCitizen;
use crate::modules::registrations::use_cases::register_citizen::decision::REGISTRATION_SUCCESS;
use crate::modules::registrations::use_cases::register_citizen::handler::ApplicationError;
use crate::shell::state::AppState;

/// Registration fields, mirroring the `POST /registration` form.
#[derive(InputObject)]
pub struct RegisterCitizenInput {
    pub citizen_id: String,
    pub name: String,
    pub surname: String,
    pub birth_date: String,
    pub occupation: String,
    pub phone_number: String,
    pub is_risk: Option<String>,
    pub address: String,
}

impl RegisterCitizenInput {
    fn into_command(self) -> RegisterCitizen {
        RegisterCitizen {
            citizen_id: self.citizen_id,
            name: self.name,
            surname: self.surname,
            birth_date: self.birth_date,
            occupation: self.occupation,
            phone_number: self.phone_number,
            is_risk: self.is_risk,
            address: self.address,
            submitted_at: Utc::now(),
        }
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Returns the same feedback string as `POST /registration`.
    async fn register_citizen(
        &self,
        context: &Context<'_>,
        input: RegisterCitizenInput,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();

        match state.register_handler.handle(input.into_command()).await {
            Ok(_) => Ok(REGISTRATION_SUCCESS.to_string()),
            Err(ApplicationError::Domain(reason)) => Ok(reason.to_string()),
            Err(e) => Err(async_graphql::Error::new(e.to_string())),
        }
    }
}
