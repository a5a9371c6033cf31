//! Sheet fetch use case: one initial attempt plus a bounded number of immediate retries.

use crate::domain::{CellContent, DomainError};
use crate::ports::{RunLogPort, SheetGateway};
use std::sync::Arc;
use tracing::{debug, warn};

/// Default number of retries after the first failed attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Wraps a [`SheetGateway`] with an explicit retry counter. No backoff between attempts.
pub struct SheetFetcher {
    gateway: Arc<dyn SheetGateway>,
    run_log: Arc<dyn RunLogPort>,
    max_retries: u32,
}

impl SheetFetcher {
    pub fn new(
        gateway: Arc<dyn SheetGateway>,
        run_log: Arc<dyn RunLogPort>,
        max_retries: u32,
    ) -> Self {
        Self {
            gateway,
            run_log,
            max_retries,
        }
    }

    /// Fetch cell A1 of `url`. Makes at most `max_retries + 1` attempts and
    /// returns the last error once retries are exhausted.
    pub async fn fetch(&self, url: &str) -> Result<CellContent, DomainError> {
        let mut retries_left = self.max_retries;
        let mut attempt: u32 = 1;
        loop {
            match self.gateway.read_first_cell(url).await {
                Ok(cell) => {
                    debug!(attempt, "sheet fetched");
                    return Ok(cell);
                }
                Err(e) if retries_left > 0 => {
                    warn!(attempt, retries_left, error = %e, "sheet fetch failed; retrying");
                    self.run_log
                        .record(&format!(
                            "Error scraping Google Sheet, retrying... ({} attempts left)",
                            retries_left
                        ))
                        .await;
                    retries_left -= 1;
                    attempt += 1;
                }
                Err(e) => {
                    self.run_log
                        .record(&format!("Error scraping Google Sheet: {}", e))
                        .await;
                    return Err(e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{RecordingRunLog, ScriptedSheet};

    fn fail(msg: &str) -> Result<CellContent, DomainError> {
        Err(DomainError::Fetch(msg.to_string()))
    }

    #[tokio::test]
    async fn test_succeeds_on_third_attempt() {
        let sheet = Arc::new(ScriptedSheet::new(vec![
            fail("navigation timeout"),
            fail("no table"),
            Ok(CellContent("Bot (05/06/24) completed".into())),
        ]));
        let log = Arc::new(RecordingRunLog::default());
        let fetcher = SheetFetcher::new(sheet.clone(), log.clone(), 3);

        let cell = fetcher.fetch("https://example.test/sheet").await.unwrap();

        assert_eq!(cell.as_str(), "Bot (05/06/24) completed");
        assert_eq!(sheet.calls(), 3);
        assert_eq!(log.count_containing("retrying..."), 2);
        assert_eq!(
            log.entries(),
            vec![
                "Error scraping Google Sheet, retrying... (3 attempts left)",
                "Error scraping Google Sheet, retrying... (2 attempts left)",
            ]
        );
    }

    #[tokio::test]
    async fn test_exhausted_retries_propagate_error() {
        let sheet = Arc::new(ScriptedSheet::new(vec![]));
        let log = Arc::new(RecordingRunLog::default());
        let fetcher = SheetFetcher::new(sheet.clone(), log.clone(), 3);

        let err = fetcher.fetch("https://example.test/sheet").await.unwrap_err();

        assert!(matches!(err, DomainError::Fetch(_)));
        assert_eq!(sheet.calls(), 4);
        assert_eq!(log.count_containing("retrying..."), 3);
        let last = log.entries().pop().unwrap();
        assert!(last.starts_with("Error scraping Google Sheet: Sheet fetch failed:"));
    }

    #[tokio::test]
    async fn test_zero_retries_means_single_attempt() {
        let sheet = Arc::new(ScriptedSheet::new(vec![fail("boom")]));
        let log = Arc::new(RecordingRunLog::default());
        let fetcher = SheetFetcher::new(sheet.clone(), log.clone(), 0);

        assert!(fetcher.fetch("u").await.is_err());
        assert_eq!(sheet.calls(), 1);
        assert_eq!(log.count_containing("retrying..."), 0);
    }
}
