use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// Purpose
// - A citizen registration that passed every rule and is held by the store.
//
// Notes
// - birth_date is kept as a calendar date; it serializes back to `YYYY-MM-DD`.
// - citizen_id is the store key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub citizen_id: String,
    pub name: String,
    pub surname: String,
    pub birth_date: NaiveDate,
    pub occupation: String,
    pub phone_number: String,
    pub is_risk: bool,
    pub address: String,
    pub registered_at: DateTime<Utc>,
}
