// Service configuration read from the process environment.
//
// The binary loads a `.env` file first when one is present, so local runs can
// keep these values out of the shell.

use crate::modules::registrations::use_cases::register_citizen::handler::DEFAULT_MINIMUM_AGE;
use std::net::SocketAddr;
use std::str::FromStr;
use thiserror::Error;

pub const BIND_ADDRESS_VAR: &str = "REGISTRATION_BIND_ADDRESS";
pub const MINIMUM_AGE_VAR: &str = "REGISTRATION_MINIMUM_AGE";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_address: SocketAddr,
    pub minimum_age: u32,
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: &str,
) -> Result<T, ConfigError> {
    let value = lookup(name).unwrap_or_else(|| default.to_string());
    let parsed: Result<T, _> = value.trim().parse();
    parsed.map_err(|_| ConfigError::Invalid { name, value })
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            bind_address: parse_or(&lookup, BIND_ADDRESS_VAR, DEFAULT_BIND_ADDRESS)?,
            minimum_age: parse_or(&lookup, MINIMUM_AGE_VAR, &DEFAULT_MINIMUM_AGE.to_string())?,
        })
    }
}
