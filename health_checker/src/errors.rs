use std::{error::Error, time::Duration};

#[derive(Debug)]
pub enum HealthCheckerError {
    Reqwest(reqwest::Error),
    InvalidJobInterval(String, Duration),
}

impl std::fmt::Display for HealthCheckerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthCheckerError::Reqwest(err) => {
                tracing::debug!("ReqwestError source = {:?}", err.source());

                write!(f, "Health check request error: {}", err)
            }
            HealthCheckerError::InvalidJobInterval(name, interval) => {
                write!(f, "Invalid interval {:?} for job {}", interval, name)
            }
        }
    }
}

impl std::error::Error for HealthCheckerError {}
