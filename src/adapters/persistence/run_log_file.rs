//! Implements RunLogPort. Appends `<ISO-8601 timestamp> - <message>` lines to a text file.
//! Opened in append mode per entry; never truncated, never rotated.

use crate::domain::DomainError;
use crate::ports::RunLogPort;
use chrono::{SecondsFormat, Utc};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{error, info};

pub const DEFAULT_LOG_FILE: &str = "maintenance_log.txt";

/// Append-only text log.
pub struct FileRunLog {
    path: PathBuf,
}

impl FileRunLog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Format one line, e.g. `2024-06-05T09:00:00.123Z - Manual execution triggered.\n`.
    pub fn format_line(message: &str) -> String {
        format!(
            "{} - {}\n",
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            message
        )
    }

    async fn append(&self, line: &str) -> Result<(), DomainError> {
        let mut f = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| DomainError::LogWrite(format!("open {}: {}", self.path.display(), e)))?;
        f.write_all(line.as_bytes())
            .await
            .map_err(|e| DomainError::LogWrite(e.to_string()))?;
        f.flush()
            .await
            .map_err(|e| DomainError::LogWrite(e.to_string()))
    }
}

#[async_trait::async_trait]
impl RunLogPort for FileRunLog {
    async fn record(&self, message: &str) {
        info!("{}", message);
        if let Err(e) = self.append(&Self::format_line(message)).await {
            error!(error = %e, "Error writing to log file");
        }
    }
}
