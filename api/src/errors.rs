use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::error::Error;

pub const NOT_FOUND_MESSAGE: &str = "Resource not found.";
pub const INVALID_CREDENTIALS_MESSAGE: &str =
    "Invalid Github credentials. Set it as the env var GITHUB_ACCESS_TOKEN";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server problems, please try again later.";

#[derive(Debug)]
pub enum PopularReposError {
    RepositoryNotFound,
    InvalidCredentials,
    Reqwest(reqwest::Error),
    GithubAPI(StatusCode, String),
    ParseUrl(url::ParseError),
}

/// Body of every JSON response that only carries a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl PopularReposError {
    /// Translates a failed upstream call into one of the error kinds exposed by the API.
    /// Only 401 and 404 have a dedicated kind, anything else stays as it is and ends up as a 500.
    pub fn classify(self) -> Self {
        match self {
            PopularReposError::GithubAPI(StatusCode::UNAUTHORIZED, _) => {
                PopularReposError::InvalidCredentials
            }
            PopularReposError::GithubAPI(StatusCode::NOT_FOUND, _) => {
                PopularReposError::RepositoryNotFound
            }
            err => err,
        }
    }

    /// Same as [`PopularReposError::classify`] for the API root: only a rejected token has
    /// a dedicated kind there, a 404 means the API is not where it is expected to be.
    pub fn classify_connection_error(self) -> Self {
        match self {
            PopularReposError::GithubAPI(StatusCode::UNAUTHORIZED, _) => {
                PopularReposError::InvalidCredentials
            }
            err => err,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            PopularReposError::RepositoryNotFound => StatusCode::NOT_FOUND,
            PopularReposError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn public_message(&self) -> &'static str {
        match self.status_code() {
            StatusCode::NOT_FOUND => NOT_FOUND_MESSAGE,
            StatusCode::UNAUTHORIZED => INVALID_CREDENTIALS_MESSAGE,
            _ => INTERNAL_ERROR_MESSAGE,
        }
    }
}

impl std::fmt::Display for PopularReposError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PopularReposError::RepositoryNotFound => write!(f, "Github repository not found"),
            PopularReposError::InvalidCredentials => write!(f, "Invalid Github credentials"),
            PopularReposError::Reqwest(err) => {
                tracing::error!("ReqwestError url = {:?}", err.url());
                tracing::error!("ReqwestError status = {:?}", err.status());
                tracing::error!("ReqwestError source = {:?}", err.source());

                write!(f, "ReqwestError error: {}", err)
            }
            PopularReposError::ParseUrl(err) => {
                write!(f, "Parse url error: {}", err)
            }
            PopularReposError::GithubAPI(status_code, message) => {
                write!(f, "Github API error {}: {}", status_code, message)
            }
        }
    }
}

impl std::error::Error for PopularReposError {}

impl IntoResponse for PopularReposError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }

        (
            status_code,
            Json(MessageResponse::new(self.public_message())),
        )
            .into_response()
    }
}
