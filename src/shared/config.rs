//! Application configuration. SMTP credentials, sheet URL, schedule, retry policy.

use crate::adapters::browser::chromium::DEFAULT_FETCH_TIMEOUT;
use crate::adapters::mail::smtp::{DEFAULT_SMTP_HOST, DEFAULT_SMTP_PORT};
use crate::adapters::persistence::run_log_file::DEFAULT_LOG_FILE;
use crate::adapters::scheduling::{DEFAULT_SCHEDULE, DEFAULT_TIMEZONE};
use crate::domain::{DateOrder, DomainError};
use crate::usecases::DEFAULT_MAX_RETRIES;
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

/// Public, view-only maintenance sheet.
pub const DEFAULT_SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/1Av6zU_vCjOSQblRxxr_doGZFw4IXb6Oiz1YEumQWm5w/edit?usp=sharing";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Mailbox used as both sender and recipient. Read from EMAIL_USER.
    #[serde(default)]
    pub email_user: Option<String>,

    /// Mailbox password. Read from EMAIL_PASS.
    #[serde(default)]
    pub email_pass: Option<String>,

    /// Read from MAINT_SHEET_URL.
    #[serde(default)]
    pub sheet_url: Option<String>,

    #[serde(default)]
    pub smtp_host: Option<String>,

    #[serde(default)]
    pub smtp_port: Option<u16>,

    /// Run log location. Read from MAINT_LOG_PATH.
    #[serde(default)]
    pub log_path: Option<String>,

    /// Six-field cron expression (seconds first). Read from MAINT_SCHEDULE.
    #[serde(default)]
    pub schedule: Option<String>,

    /// IANA timezone the schedule is evaluated in. Read from MAINT_TIMEZONE.
    #[serde(default)]
    pub timezone: Option<String>,

    /// Retries after the first failed fetch attempt. Read from MAINT_MAX_RETRIES.
    #[serde(default)]
    pub max_retries: Option<u32>,

    #[serde(default)]
    pub fetch_timeout_secs: Option<u64>,

    /// `dmy` or `mdy`. Read from MAINT_DATE_ORDER.
    #[serde(default)]
    pub date_order: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("MAINT").try_parsing(true));
        if let Ok(path) = std::env::var("MAINT_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let cfg: Self = c.build()?.try_deserialize()?;
        Ok(cfg.with_env_credentials())
    }

    /// Like [`AppConfig::load`], but a bad `MAINT_*` value or config file falls back
    /// to defaults. SMTP credentials are still taken from the environment.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!(error = %e, "config load failed; using defaults");
            Self::default().with_env_credentials()
        })
    }

    /// Credentials are read without the MAINT_ prefix so .env can use EMAIL_USER / EMAIL_PASS.
    pub fn with_env_credentials(mut self) -> Self {
        if let Ok(user) = std::env::var("EMAIL_USER") {
            self.email_user = Some(user);
        }
        if let Ok(pass) = std::env::var("EMAIL_PASS") {
            self.email_pass = Some(pass);
        }
        self
    }

    pub fn sheet_url_or_default(&self) -> String {
        self.sheet_url
            .clone()
            .unwrap_or_else(|| DEFAULT_SHEET_URL.to_string())
    }

    pub fn smtp_host_or_default(&self) -> String {
        self.smtp_host
            .clone()
            .unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string())
    }

    pub fn smtp_port_or_default(&self) -> u16 {
        self.smtp_port.unwrap_or(DEFAULT_SMTP_PORT)
    }

    pub fn log_path_or_default(&self) -> String {
        self.log_path
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())
    }

    pub fn schedule_or_default(&self) -> String {
        self.schedule
            .clone()
            .unwrap_or_else(|| DEFAULT_SCHEDULE.to_string())
    }

    pub fn timezone_or_default(&self) -> String {
        self.timezone
            .clone()
            .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string())
    }

    pub fn max_retries_or_default(&self) -> u32 {
        self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES)
    }

    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_FETCH_TIMEOUT)
    }

    /// Field order for the sheet's date token. Defaults to day-first.
    pub fn date_order(&self) -> Result<DateOrder, DomainError> {
        match self.date_order.as_deref() {
            None => Ok(DateOrder::default()),
            Some(s) => s.parse().map_err(DomainError::Config),
        }
    }

    /// True when both SMTP credentials are present. Absence is not fatal.
    pub fn is_email_configured(&self) -> bool {
        self.email_user.as_deref().is_some_and(|u| !u.is_empty()) && self.email_pass.is_some()
    }
}
