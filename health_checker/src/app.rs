use std::sync::Arc;

use crate::{
    api_client::ApiHealthClient, config::HealthCheckerSettings, errors::HealthCheckerError,
    scheduler::Scheduler,
};

pub const HEALTH_CHECK_JOB_NAME: &str = "popular-repos-api-health-check";

pub struct SchedulerBuilder {
    settings: HealthCheckerSettings,
}

impl SchedulerBuilder {
    pub fn new(settings: HealthCheckerSettings) -> Self {
        SchedulerBuilder { settings }
    }

    /// Registers the single health check job on the configured interval.
    pub fn build(&self) -> Result<Scheduler, HealthCheckerError> {
        let client = Arc::new(ApiHealthClient::new(&self.settings)?);
        let mut scheduler = Scheduler::new();

        scheduler.add_job(HEALTH_CHECK_JOB_NAME, self.settings.get_interval(), move || {
            let client = client.clone();

            async move { client.run_health_check().await }
        })?;

        Ok(scheduler)
    }
}
