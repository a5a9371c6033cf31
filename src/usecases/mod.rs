//! Application use cases. Orchestrate domain logic via ports.

pub mod check_service;
pub mod maintenance_checker;
pub mod sheet_fetcher;

#[cfg(test)]
pub(crate) mod test_support;

pub use check_service::CheckService;
pub use maintenance_checker::{CheckOutcome, MaintenanceChecker, NOTIFICATION_SUBJECT};
pub use sheet_fetcher::{DEFAULT_MAX_RETRIES, SheetFetcher};
