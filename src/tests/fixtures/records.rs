use crate::modules::registrations::core::record::RegistrationRecord;
use crate::tests::fixtures::commands::register_citizen::fixed_submitted_at;
use chrono::NaiveDate;

pub fn make_registration_record() -> RegistrationRecord {
    RegistrationRecord {
        citizen_id: "1116789838901".into(),
        name: "Benjamin".into(),
        surname: "Lee".into(),
        birth_date: NaiveDate::from_ymd_opt(1999, 5, 17).unwrap(),
        occupation: "bartender".into(),
        phone_number: "0817741235".into(),
        is_risk: false,
        address: "Bangkok".into(),
        registered_at: fixed_submitted_at(),
    }
}
