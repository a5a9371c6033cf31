//! Persistence adapters. Only the append-only run log.

pub mod run_log_file;

pub use run_log_file::FileRunLog;
