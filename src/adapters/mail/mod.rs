//! Mail adapter. Implements NotifierPort over SMTP.

pub mod smtp;

pub use smtp::SmtpNotifier;
