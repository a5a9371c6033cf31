//! Implements SheetGateway using chromiumoxide.
//!
//! Every call launches its own headless browser, opens one page and tears the
//! browser down again whether or not the read succeeded.

use crate::domain::{CellContent, DomainError};
use crate::ports::SheetGateway;
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::error::CdpError;
use futures::StreamExt;
use std::time::Duration;
use tracing::{debug, warn};

/// First row, first column of the rendered sheet table (cell A1).
pub const CELL_A1_SELECTOR: &str = "table tbody tr:nth-child(1) td:nth-child(1)";

/// Default bound for navigation and for the table to appear.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(60);

const TABLE_POLL_INTERVAL: Duration = Duration::from_millis(250);

fn cdp_err(context: &str, e: CdpError) -> DomainError {
    DomainError::Fetch(format!("{}: {}", context, e))
}

/// Headless Chromium sheet reader.
pub struct ChromiumSheetGateway {
    timeout: Duration,
}

impl ChromiumSheetGateway {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    async fn read_cell(&self, browser: &Browser, url: &str) -> Result<CellContent, DomainError> {
        let secs = self.timeout.as_secs();
        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| cdp_err("open page", e))?;

        tokio::time::timeout(self.timeout, async {
            page.goto(url).await?;
            page.wait_for_navigation().await?;
            Ok::<_, CdpError>(())
        })
        .await
        .map_err(|_| DomainError::Fetch(format!("navigation timed out after {}s", secs)))?
        .map_err(|e| cdp_err("navigate", e))?;
        debug!(url, "page loaded");

        // The sheet renders client-side; poll until the grid shows up.
        tokio::time::timeout(self.timeout, async {
            while page.find_element("table").await.is_err() {
                tokio::time::sleep(TABLE_POLL_INTERVAL).await;
            }
        })
        .await
        .map_err(|_| {
            DomainError::Fetch(format!("waiting for selector `table` timed out after {}s", secs))
        })?;

        let cell = page
            .find_element(CELL_A1_SELECTOR)
            .await
            .map_err(|e| cdp_err("locate cell A1", e))?;
        let text = cell
            .inner_text()
            .await
            .map_err(|e| cdp_err("read cell A1", e))?
            .unwrap_or_default();
        Ok(CellContent(text))
    }
}

#[async_trait]
impl SheetGateway for ChromiumSheetGateway {
    async fn read_first_cell(&self, url: &str) -> Result<CellContent, DomainError> {
        let config = BrowserConfig::builder()
            .request_timeout(self.timeout)
            .build()
            .map_err(|e| DomainError::Fetch(format!("browser config: {}", e)))?;
        let (mut browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| cdp_err("launch browser", e))?;
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let result = self.read_cell(&browser, url).await;

        if let Err(e) = browser.close().await {
            warn!(error = %e, "browser close failed");
        }
        if let Err(e) = browser.wait().await {
            warn!(error = %e, "browser process did not exit cleanly");
        }
        handler_task.abort();

        result
    }
}
