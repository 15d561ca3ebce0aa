use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::{
    fmt::Display,
    net::{AddrParseError, SocketAddr},
};
use url::Url;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u32 = 5000;
const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

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

#[derive(Clone, Deserialize, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub github: GithubSettings,
}

#[derive(Clone, Deserialize, Debug)]
pub struct ApplicationSettings {
    port: u32,
    host: String,
}

impl ApplicationSettings {
    pub fn new() -> Result<Self, SettingsError> {
        let port: u32 = match get_env_value("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| SettingsError::InvalidVariableFormat("PORT".to_string()))?,
            None => DEFAULT_PORT,
        };
        let host = get_env_value("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        Ok(Self { port, host })
    }

    pub fn get_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    #[allow(dead_code)]
    pub fn set_port(&mut self, port: u32) {
        self.port = port;
    }

    #[allow(dead_code)]
    pub fn set_host(&mut self, host: String) {
        self.host = host;
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct GithubSettings {
    // None when GITHUB_ACCESS_TOKEN is not set
    token: Option<Secret<String>>,
    api_url: String,
}

impl GithubSettings {
    pub fn new() -> Result<Self, SettingsError> {
        let token = get_env_value("GITHUB_ACCESS_TOKEN").map(Secret::new);
        let api_url =
            get_env_value("GITHUB_API_URL").unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string());

        Url::parse(&api_url)
            .map_err(|_| SettingsError::InvalidVariableFormat("GITHUB_API_URL".to_string()))?;

        Ok(GithubSettings { token, api_url })
    }

    pub fn get_token(&self) -> Option<String> {
        self.token
            .as_ref()
            .map(|token| token.expose_secret().clone())
    }

    pub fn get_api_url(&self) -> String {
        self.api_url.clone()
    }

    #[allow(dead_code)]
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token.map(Secret::new);
    }

    #[allow(dead_code)]
    pub fn set_api_url(&mut self, api_url: String) {
        self.api_url = api_url;
    }
}

pub fn get_app_settings() -> Result<Settings, SettingsError> {
    // A missing .env file is fine: every variable can come from the process environment
    dotenv::dotenv().ok();

    Ok(Settings {
        application: ApplicationSettings::new()?,
        github: GithubSettings::new()?,
    })
}

// Empty values are treated like unset ones
fn get_env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
