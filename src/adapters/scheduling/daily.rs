//! Daily trigger built on tokio-cron-scheduler.
//!
//! The scheduler is an owned value constructed in `main`; it holds the pipeline
//! callback and lives until the process shuts it down.

use crate::domain::DomainError;
use crate::ports::{PipelinePort, RunLogPort};
use chrono_tz::Tz;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{debug, info};

/// Every day at 05:00:00 (seconds field first).
pub const DEFAULT_SCHEDULE: &str = "0 0 5 * * *";
pub const DEFAULT_TIMEZONE: &str = "America/New_York";

pub struct DailyScheduler {
    scheduler: JobScheduler,
    cron_expression: String,
    timezone: Tz,
}

impl DailyScheduler {
    /// Register `pipeline` to run on `cron_expression` evaluated in `timezone`.
    /// Does not start ticking until [`DailyScheduler::start`].
    pub async fn new(
        cron_expression: &str,
        timezone: &str,
        pipeline: Arc<dyn PipelinePort>,
        run_log: Arc<dyn RunLogPort>,
    ) -> Result<Self, DomainError> {
        let tz: Tz = timezone
            .parse()
            .map_err(|e| DomainError::Config(format!("invalid timezone '{}': {}", timezone, e)))?;

        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| DomainError::Scheduler(format!("create scheduler: {}", e)))?;

        let job = Job::new_async_tz(cron_expression, tz, move |_id, _lock| {
            let pipeline = Arc::clone(&pipeline);
            let run_log = Arc::clone(&run_log);
            Box::pin(async move {
                run_log.record("Running the scheduled scraping task.").await;
                pipeline.run_once().await;
            })
        })
        .map_err(|e| {
            DomainError::Config(format!("invalid schedule '{}': {}", cron_expression, e))
        })?;
        let job_id = job.guid();

        scheduler
            .add(job)
            .await
            .map_err(|e| DomainError::Scheduler(format!("register job: {}", e)))?;
        debug!(cron = cron_expression, tz = %tz, %job_id, "registered check job");

        Ok(Self {
            scheduler,
            cron_expression: cron_expression.to_string(),
            timezone: tz,
        })
    }

    pub async fn start(&self) -> Result<(), DomainError> {
        self.scheduler
            .start()
            .await
            .map_err(|e| DomainError::Scheduler(format!("start: {}", e)))?;
        info!(cron = %self.cron_expression, tz = %self.timezone, "scheduler started");
        Ok(())
    }

    pub async fn shutdown(&mut self) -> Result<(), DomainError> {
        self.scheduler
            .shutdown()
            .await
            .map_err(|e| DomainError::Scheduler(format!("shutdown: {}", e)))?;
        info!("scheduler stopped");
        Ok(())
    }

    /// Human-readable schedule, e.g. `0 0 5 * * * (America/New_York)`.
    pub fn describe(&self) -> String {
        format!("{} ({})", self.cron_expression, self.timezone)
    }
}
