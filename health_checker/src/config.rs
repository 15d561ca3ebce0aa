use std::{fmt::Display, time::Duration};

use url::Url;

const DEFAULT_POPULAR_REPOS_API_URL: &str = "http://localhost:5000/health";
const DEFAULT_HEALTH_CHECK_INTERVAL_MINUTES: u64 = 1;

#[derive(Debug, PartialEq)]
pub enum SettingsError {
    InvalidVariableFormat(String),
}

impl Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::InvalidVariableFormat(key) => {
                write!(f, "Failed to parse environment variable: {}", key)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

#[derive(Clone, Debug)]
pub struct HealthCheckerSettings {
    api_url: Url,
    interval_minutes: u64,
}

impl HealthCheckerSettings {
    pub fn new() -> Result<Self, SettingsError> {
        Self::from_values(
            get_env_value("POPULAR_REPOS_API_URL"),
            get_env_value("HEALTH_CHECK_INTERVAL_MINUTES"),
        )
    }

    /// Builds the settings from raw values, falling back to the defaults for missing ones.
    pub fn from_values(
        api_url: Option<String>,
        interval_minutes: Option<String>,
    ) -> Result<Self, SettingsError> {
        let api_url = api_url.as_deref().unwrap_or(DEFAULT_POPULAR_REPOS_API_URL);
        let api_url = Url::parse(api_url).map_err(|_| {
            SettingsError::InvalidVariableFormat("POPULAR_REPOS_API_URL".to_string())
        })?;

        let interval_minutes = match interval_minutes {
            Some(value) => value
                .parse::<u64>()
                .ok()
                .filter(|minutes| *minutes > 0)
                .ok_or_else(|| {
                    SettingsError::InvalidVariableFormat(
                        "HEALTH_CHECK_INTERVAL_MINUTES".to_string(),
                    )
                })?,
            None => DEFAULT_HEALTH_CHECK_INTERVAL_MINUTES,
        };

        Ok(Self {
            api_url,
            interval_minutes,
        })
    }

    pub fn get_api_url(&self) -> Url {
        self.api_url.clone()
    }

    pub fn get_interval(&self) -> Duration {
        Duration::from_secs(self.interval_minutes.saturating_mul(60))
    }
}

pub fn get_health_checker_settings() -> Result<HealthCheckerSettings, SettingsError> {
    dotenv::dotenv().ok();

    HealthCheckerSettings::new()
}

fn get_env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
