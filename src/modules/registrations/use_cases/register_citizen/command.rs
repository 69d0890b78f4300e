use chrono::{DateTime, Utc};

// Raw registration input, after the transport made sure every required field
// is present. Values are still unchecked text; the decider owns validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterCitizen {
    pub citizen_id: String,
    pub name: String,
    pub surname: String,
    pub birth_date: String,
    pub occupation: String,
    pub phone_number: String,
    pub is_risk: Option<String>,
    pub address: String,
    pub submitted_at: DateTime<Utc>,
}
