//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod extract;

pub use entities::{CellContent, DateOrder, Notification, NotificationDecision};
pub use errors::DomainError;
pub use extract::extract;
