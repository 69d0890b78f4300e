use crate::modules::registrations::core::ports::{RegistrationStore, StoreError};
use crate::modules::registrations::core::record::RegistrationRecord;
use crate::modules::registrations::core::state::CitizenState;
use crate::modules::registrations::use_cases::register_citizen::command::RegisterCitizen;
use crate::modules::registrations::use_cases::register_citizen::decide::decide_register;
use crate::modules::registrations::use_cases::register_citizen::decision::{DecideError, Decision};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_MINIMUM_AGE: u32 = 12;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("domain rejected: {0}")]
    Domain(DecideError),
}

pub struct RegisterCitizenHandler<TStore>
where
    TStore: RegistrationStore + Send + Sync + 'static,
{
    minimum_age: u32,
    store: Arc<TStore>,
}

impl<TStore> RegisterCitizenHandler<TStore>
where
    TStore: RegistrationStore + Send + Sync + 'static,
{
    pub fn new(minimum_age: u32, store: Arc<TStore>) -> Self {
        Self { minimum_age, store }
    }

    pub async fn handle(
        &self,
        command: RegisterCitizen,
    ) -> Result<RegistrationRecord, ApplicationError> {
        let citizen_id = command.citizen_id.clone();
        let state = CitizenState::from_exists(self.store.contains(&citizen_id).await?);

        match decide_register(state, command, self.minimum_age) {
            Decision::Accepted { record } => match self.store.insert(record.clone()).await {
                Ok(()) => {
                    info!(citizen_id = %citizen_id, "citizen registered");
                    Ok(record)
                }
                Err(StoreError::AlreadyExists { .. }) => {
                    warn!(citizen_id = %citizen_id, "registration lost a race for the citizen id");
                    Err(ApplicationError::Domain(DecideError::AlreadyRegistered))
                }
                Err(e) => Err(ApplicationError::Store(e)),
            },
            Decision::Rejected { reason } => {
                match &reason {
                    DecideError::InvalidAttribute { field } => {
                        info!(citizen_id = %citizen_id, field = *field, "registration rejected: {reason}")
                    }
                    _ => info!(citizen_id = %citizen_id, "registration rejected: {reason}"),
                }
                Err(ApplicationError::Domain(reason))
            }
        }
    }
}
