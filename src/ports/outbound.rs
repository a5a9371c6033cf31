//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{CellContent, DomainError, Notification};
use chrono::NaiveDate;

/// Spreadsheet access. One call is one attempt; retries belong to the caller.
#[async_trait::async_trait]
pub trait SheetGateway: Send + Sync {
    /// Load the sheet at `url` and return the text of its first data cell.
    async fn read_first_cell(&self, url: &str) -> Result<CellContent, DomainError>;
}

/// Outgoing mail.
#[async_trait::async_trait]
pub trait NotifierPort: Send + Sync {
    /// Send one message. Returns the server's response line on success.
    async fn send(&self, notification: &Notification) -> Result<String, DomainError>;
}

/// Append-only run log.
///
/// Implementations never fail the caller: write errors are reported on the
/// console and dropped.
#[async_trait::async_trait]
pub trait RunLogPort: Send + Sync {
    async fn record(&self, message: &str);
}

/// Source of "today" for day-granularity comparisons.
pub trait ClockPort: Send + Sync {
    fn today(&self) -> NaiveDate;
}
