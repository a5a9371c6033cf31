//! Infrastructure adapters. Implement outbound ports.
//!
//! Browser, SMTP, filesystem, clock, scheduler. Map errors to DomainError.

pub mod browser;
pub mod clock;
pub mod mail;
pub mod persistence;
pub mod scheduling;
