//! maint-notify: daily spreadsheet check that emails a truck maintenance reminder.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
