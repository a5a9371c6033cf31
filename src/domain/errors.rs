//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Browser automation failed (launch, navigation, missing table, timeout).
    #[error("Sheet fetch failed: {0}")]
    Fetch(String),

    #[error("Notification failed: {0}")]
    Notify(String),

    #[error("Log write failed: {0}")]
    LogWrite(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Scheduler error: {0}")]
    Scheduler(String),
}
