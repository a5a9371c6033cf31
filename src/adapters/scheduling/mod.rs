//! Scheduling adapter. Drives the pipeline from a cron expression.

pub mod daily;

pub use daily::{DEFAULT_SCHEDULE, DEFAULT_TIMEZONE, DailyScheduler};
