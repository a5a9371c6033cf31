//! SMTP notifier. Sends the reminder from the configured mailbox to itself.
//!
//! STARTTLS upgrade on a plain port (587 by default). Credentials are checked
//! lazily so a missing `EMAIL_USER`/`EMAIL_PASS` only shows up as a failed send.

use crate::domain::{DomainError, Notification};
use crate::ports::NotifierPort;
use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

pub const DEFAULT_SMTP_HOST: &str = "smtp.office365.com";
pub const DEFAULT_SMTP_PORT: u16 = 587;

pub struct SmtpNotifier {
    host: String,
    port: u16,
    user: Option<String>,
    pass: Option<String>,
}

impl SmtpNotifier {
    pub fn new(host: String, port: u16, user: Option<String>, pass: Option<String>) -> Self {
        Self {
            host,
            port,
            user,
            pass,
        }
    }

    fn credentials(&self) -> Result<(&str, &str), DomainError> {
        let user = self
            .user
            .as_deref()
            .filter(|u| !u.is_empty())
            .ok_or_else(|| DomainError::Notify("EMAIL_USER is not set".into()))?;
        let pass = self
            .pass
            .as_deref()
            .ok_or_else(|| DomainError::Notify("EMAIL_PASS is not set".into()))?;
        Ok((user, pass))
    }

    /// Build the self-addressed message.
    fn build_message(user: &str, notification: &Notification) -> Result<Message, DomainError> {
        let mailbox: Mailbox = user
            .parse()
            .map_err(|e| DomainError::Notify(format!("invalid address '{}': {}", user, e)))?;
        Message::builder()
            .from(mailbox.clone())
            .to(mailbox)
            .subject(notification.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(notification.body.clone())
            .map_err(|e| DomainError::Notify(format!("build message: {}", e)))
    }
}

#[async_trait]
impl NotifierPort for SmtpNotifier {
    async fn send(&self, notification: &Notification) -> Result<String, DomainError> {
        let (user, pass) = self.credentials()?;
        let message = Self::build_message(user, notification)?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.host)
            .map_err(|e| DomainError::Notify(format!("SMTP relay: {}", e)))?
            .port(self.port)
            .credentials(Credentials::new(user.to_string(), pass.to_string()))
            .build();

        let response = transport
            .send(message)
            .await
            .map_err(|e| DomainError::Notify(format!("SMTP send: {}", e)))?;

        let line = format!(
            "{} {}",
            response.code(),
            response.first_line().unwrap_or_default()
        );
        info!(host = %self.host, response = %line, "email sent");
        Ok(line)
    }
}
