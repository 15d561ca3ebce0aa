use reqwest::{Client, StatusCode, Url};

use crate::{config::HealthCheckerSettings, errors::HealthCheckerError};

/// Result of one call to the popular repositories API health endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthCheckOutcome {
    Healthy,
    Unhealthy { status: StatusCode, body: String },
}

#[derive(Clone, Debug)]
pub struct ApiHealthClient {
    http_client: Client,
    api_url: Url,
}

impl ApiHealthClient {
    pub fn new(settings: &HealthCheckerSettings) -> Result<Self, HealthCheckerError> {
        let http_client = Client::builder()
            .build()
            .map_err(HealthCheckerError::Reqwest)?;

        Ok(Self {
            http_client,
            api_url: settings.get_api_url(),
        })
    }

    /// Calls the health endpoint once and logs the outcome.
    ///
    /// Only a 200 counts as healthy. Transport failures are returned as errors.
    #[tracing::instrument(
        name = "Check popular repositories API health",
        skip(self),
        fields(url = %self.api_url)
    )]
    pub async fn check_health(&self) -> Result<HealthCheckOutcome, HealthCheckerError> {
        let response = self
            .http_client
            .get(self.api_url.clone())
            .send()
            .await
            .map_err(HealthCheckerError::Reqwest)?;

        let status = response.status();

        if status == StatusCode::OK {
            tracing::info!("Application healthy.");

            return Ok(HealthCheckOutcome::Healthy);
        }

        let body = response
            .text()
            .await
            .map_err(HealthCheckerError::Reqwest)?;

        tracing::error!(%status, "Application with problems: {}", body);

        Ok(HealthCheckOutcome::Unhealthy { status, body })
    }

    /// Scheduled job body: a failed request is logged and left for the next run.
    pub async fn run_health_check(&self) {
        if let Err(err) = self.check_health().await {
            tracing::error!("Application unreachable: {}", err);
        }
    }
}
