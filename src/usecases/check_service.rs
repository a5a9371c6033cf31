//! Pipeline use case: fetch cell A1 → extract date → check against today.
//!
//! Called by the scheduler on every tick and once at startup with `--run-now`.

use crate::domain::{DomainError, extract};
use crate::ports::{PipelinePort, RunLogPort};
use crate::usecases::maintenance_checker::{CheckOutcome, MaintenanceChecker};
use crate::usecases::sheet_fetcher::SheetFetcher;
use std::sync::Arc;
use tracing::{error, info};

pub struct CheckService {
    fetcher: SheetFetcher,
    checker: MaintenanceChecker,
    run_log: Arc<dyn RunLogPort>,
    sheet_url: String,
}

impl CheckService {
    pub fn new(
        fetcher: SheetFetcher,
        checker: MaintenanceChecker,
        run_log: Arc<dyn RunLogPort>,
        sheet_url: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            checker,
            run_log,
            sheet_url: sheet_url.into(),
        }
    }

    /// One pass. Returns `Ok(None)` when the cell carries no date, and the check
    /// outcome otherwise. Only fetch failures are errors.
    pub async fn scrape_and_check(&self) -> Result<Option<CheckOutcome>, DomainError> {
        let cell = self.fetcher.fetch(&self.sheet_url).await?;
        self.run_log
            .record(&format!("Content in A1: {}", cell))
            .await;

        let Some(date) = extract(cell.as_str()) else {
            self.run_log.record("No valid date found in cell A1.").await;
            return Ok(None);
        };

        self.run_log
            .record(&format!("Extracted date: {}", date))
            .await;
        Ok(Some(self.checker.check(&date).await))
    }
}

#[async_trait::async_trait]
impl PipelinePort for CheckService {
    async fn run_once(&self) {
        match self.scrape_and_check().await {
            Ok(Some(outcome)) => info!(decision = ?outcome.decision, "check run finished"),
            Ok(None) => info!("check run finished; no date in cell"),
            Err(e) => {
                error!(error = %e, "check run failed");
                self.run_log
                    .record(&format!("Error in scraping and checking process: {}", e))
                    .await;
            }
        }
    }
}
