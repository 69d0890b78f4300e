use crate::modules::registrations::core::record::RegistrationRecord;

pub const REGISTRATION_SUCCESS: &str = "registration success!";

// Display strings are the feedback clients receive, keep them stable.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("registration failed: this person already registered")]
    AlreadyRegistered,

    #[error("registration failed: invalid citizen ID")]
    InvalidCitizenId,

    #[error("registration failed: invalid birth date format")]
    InvalidBirthDate,

    #[error("registration failed: not archived minimum age")]
    BelowMinimumAge,

    #[error("registration failed: invalid attribute")]
    InvalidAttribute { field: &'static str },
}

#[derive(Debug)]
pub enum Decision {
    Accepted { record: RegistrationRecord },
    Rejected { reason: DecideError },
}
