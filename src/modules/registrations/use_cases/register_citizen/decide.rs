use crate::modules::registrations::core::{
    record::RegistrationRecord,
    rules::{
        age_on, is_blank, is_valid_citizen_id, is_valid_person_name, is_valid_phone_number,
        parse_birth_date, parse_risk_flag,
    },
    state::CitizenState,
};
use crate::modules::registrations::use_cases::register_citizen::{
    command::RegisterCitizen,
    decision::{DecideError, Decision},
};

/// Applies the registration rules in order; the first failing rule decides.
pub fn decide_register(
    state: CitizenState,
    command: RegisterCitizen,
    minimum_age: u32,
) -> Decision {
    match check(state, &command, minimum_age) {
        Ok((birth_date, is_risk)) => Decision::Accepted {
            record: RegistrationRecord {
                citizen_id: command.citizen_id,
                name: command.name,
                surname: command.surname,
                birth_date,
                occupation: command.occupation,
                phone_number: command.phone_number,
                is_risk,
                address: command.address,
                registered_at: command.submitted_at,
            },
        },
        Err(reason) => Decision::Rejected { reason },
    }
}

fn check(
    state: CitizenState,
    command: &RegisterCitizen,
    minimum_age: u32,
) -> Result<(chrono::NaiveDate, bool), DecideError> {
    if state == CitizenState::Registered {
        return Err(DecideError::AlreadyRegistered);
    }
    if !is_valid_citizen_id(&command.citizen_id) {
        return Err(DecideError::InvalidCitizenId);
    }
    let birth_date = parse_birth_date(&command.birth_date).ok_or(DecideError::InvalidBirthDate)?;
    match age_on(birth_date, command.submitted_at.date_naive()) {
        Some(age) if age >= minimum_age => {}
        _ => return Err(DecideError::BelowMinimumAge),
    }
    if !is_valid_person_name(&command.name) {
        return Err(DecideError::InvalidAttribute { field: "name" });
    }
    if !is_valid_person_name(&command.surname) {
        return Err(DecideError::InvalidAttribute { field: "surname" });
    }
    if !is_valid_phone_number(&command.phone_number) {
        return Err(DecideError::InvalidAttribute {
            field: "phone_number",
        });
    }
    if is_blank(&command.occupation) {
        return Err(DecideError::InvalidAttribute { field: "occupation" });
    }
    if is_blank(&command.address) {
        return Err(DecideError::InvalidAttribute { field: "address" });
    }
    let is_risk = match command.is_risk.as_deref() {
        None => false,
        Some(raw) => parse_risk_flag(raw).ok_or(DecideError::InvalidAttribute { field: "is_risk" })?,
    };
    Ok((birth_date, is_risk))
}
