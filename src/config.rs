use dioxus_logger::tracing::Level;

use crate::error::config::ConfigError;

static DEFAULT_LOG_LEVEL: Level = Level::INFO;

pub struct Config {
    pub database_url: String,
    pub log_level: Level,
    /// Minimum roster size a stage must reach before the controller layer allows formation.
    ///
    /// The engine itself pairs any even roster of two or more participants.
    pub min_stage_participants: Option<usize>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            log_level: parse_optional("LOG_LEVEL")?.unwrap_or(DEFAULT_LOG_LEVEL),
            min_stage_participants: parse_optional("MIN_STAGE_PARTICIPANTS")?,
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn parse_optional<T>(var: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        Err(_) => Ok(None),
    }
}
