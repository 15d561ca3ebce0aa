use std::{future::Future, sync::Arc, time::Duration};

use futures_util::future::{join_all, BoxFuture, FutureExt};
use tokio::time::{self, MissedTickBehavior};

use crate::errors::HealthCheckerError;

type JobTask = Arc<dyn Fn() -> BoxFuture<'static, ()> + Send + Sync>;

/// A task fired on a fixed interval, the first time as soon as the scheduler starts.
#[derive(Clone)]
pub struct Job {
    name: String,
    interval: Duration,
    task: JobTask,
}

impl Job {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    // Each run is awaited before the next tick: a slow run delays the following
    // one and runs of the same job never overlap.
    async fn run(self) {
        let mut ticker = time::interval(self.interval);

        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            tracing::debug!(job = %self.name, "Running scheduled job");

            (self.task)().await;
        }
    }
}

impl std::fmt::Debug for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Job")
            .field("name", &self.name)
            .field("interval", &self.interval)
            .finish()
    }
}

#[derive(Debug, Default)]
pub struct Scheduler {
    jobs: Vec<Job>,
}

impl Scheduler {
    pub fn new() -> Self {
        Scheduler { jobs: Vec::new() }
    }

    pub fn add_job<F, Fut>(
        &mut self,
        name: &str,
        interval: Duration,
        task: F,
    ) -> Result<(), HealthCheckerError>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        if interval.is_zero() {
            return Err(HealthCheckerError::InvalidJobInterval(
                name.to_string(),
                interval,
            ));
        }

        self.jobs.push(Job {
            name: name.to_string(),
            interval,
            task: Arc::new(move || task().boxed()),
        });

        Ok(())
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Runs every registered job until `shutdown` resolves.
    pub async fn run_until<S>(self, shutdown: S)
    where
        S: Future<Output = ()>,
    {
        tracing::info!("Scheduler started with {} job(s)", self.jobs.len());

        let jobs = join_all(self.jobs.into_iter().map(Job::run));

        tokio::select! {
            _ = jobs => {},
            _ = shutdown => {
                tracing::info!("Scheduler stopped");
            },
        }
    }
}
