// Shared test fixture for the RegisterCitizen command.
// Defaults come from json/register_citizen.json; the submission time is pinned
// so age checks do not drift with the calendar.

use crate::modules::registrations::use_cases::register_citizen::command::RegisterCitizen;
use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

const REGISTER_CITIZEN_JSON: &str = include_str!("json/register_citizen.json");

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterCitizenDto {
    pub citizen_id: String,
    pub name: String,
    pub surname: String,
    pub birth_date: String,
    pub occupation: String,
    pub phone_number: String,
    pub is_risk: Option<String>,
    pub address: String,
}

pub fn fixed_submitted_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 17, 8, 0, 0).unwrap()
}

pub struct RegisterCitizenBuilder {
    inner: RegisterCitizen,
}

impl Default for RegisterCitizenBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegisterCitizenBuilder {
    pub fn new() -> Self {
        let dto: RegisterCitizenDto = serde_json::from_str(REGISTER_CITIZEN_JSON).unwrap();

        Self {
            inner: RegisterCitizen {
                citizen_id: dto.citizen_id,
                name: dto.name,
                surname: dto.surname,
                birth_date: dto.birth_date,
                occupation: dto.occupation,
                phone_number: dto.phone_number,
                is_risk: dto.is_risk,
                address: dto.address,
                submitted_at: fixed_submitted_at(),
            },
        }
    }

    pub fn citizen_id(mut self, v: impl Into<String>) -> Self {
        self.inner.citizen_id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn surname(mut self, v: impl Into<String>) -> Self {
        self.inner.surname = v.into();
        self
    }

    pub fn birth_date(mut self, v: impl Into<String>) -> Self {
        self.inner.birth_date = v.into();
        self
    }

    pub fn occupation(mut self, v: impl Into<String>) -> Self {
        self.inner.occupation = v.into();
        self
    }

    pub fn phone_number(mut self, v: impl Into<String>) -> Self {
        self.inner.phone_number = v.into();
        self
    }

    pub fn is_risk(mut self, v: Option<&str>) -> Self {
        self.inner.is_risk = v.map(str::to_string);
        self
    }

    pub fn address(mut self, v: impl Into<String>) -> Self {
        self.inner.address = v.into();
        self
    }

    pub fn submitted_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.submitted_at = v;
        self
    }

    pub fn build(self) -> RegisterCitizen {
        self.inner
    }
}

#[cfg(test)]
mod register_citizen_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = RegisterCitizenBuilder::default().build();
        assert_eq!(built.citizen_id, "1116789838901");
        assert_eq!(built.name, "Benjamin");
        assert_eq!(built.surname, "Lee");
        assert_eq!(built.birth_date, "1999-05-17");
        assert_eq!(built.occupation, "bartender");
        assert_eq!(built.phone_number, "0817741235");
        assert_eq!(built.is_risk, Some("False".to_string()));
        assert_eq!(built.address, "Bangkok");
        assert_eq!(built.submitted_at, fixed_submitted_at());
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let submitted_at = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let custom = RegisterCitizenBuilder::new()
            .citizen_id("2222222222222")
            .name("Ada")
            .surname("Lovelace")
            .birth_date("1990-12-10")
            .occupation("engineer")
            .phone_number("0900000000")
            .is_risk(Some("True"))
            .address("London")
            .submitted_at(submitted_at)
            .build();

        assert_eq!(custom.citizen_id, "2222222222222");
        assert_eq!(custom.name, "Ada");
        assert_eq!(custom.surname, "Lovelace");
        assert_eq!(custom.birth_date, "1990-12-10");
        assert_eq!(custom.occupation, "engineer");
        assert_eq!(custom.phone_number, "0900000000");
        assert_eq!(custom.is_risk, Some("True".to_string()));
        assert_eq!(custom.address, "London");
        assert_eq!(custom.submitted_at, submitted_at);
    }
}
