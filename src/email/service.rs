use std::sync::Arc;

use anyhow::Result;

use super::{
  transport::{EmailTransport, MailBackend},
  types::EmailMessage,
};
use crate::config::MailConfig;

/// Front door to whichever transport the process was started with.
#[derive(Clone)]
pub struct EmailService {
  transport: Arc<dyn EmailTransport>,
}

impl EmailService {
  pub fn new(transport: Arc<dyn EmailTransport>) -> Self {
    EmailService { transport }
  }

  pub fn from_config(config: &MailConfig) -> Result<Self> {
    let backend = MailBackend::from_config(config)?;
    Ok(Self::new(Arc::new(backend)))
  }

  /// Sender mailbox with the given display name, e.g.
  /// `StabilTech Careers <info@stabiltech.de>`.
  pub fn sender(&self, display_name: &str) -> String {
    format!("{} <{}>", display_name, self.transport.sender_address())
  }

  pub async fn send_email(&self, message: &EmailMessage) -> Result<()> {
    self.transport.send(message).await
  }

  /// Sends the operator notification, then the submitter confirmation. Stops
  /// at the first failure; nothing already sent is rolled back.
  pub async fn send_notification_pair(&self, notification: &EmailMessage, confirmation: &EmailMessage) -> Result<()> {
    self.send_email(notification).await?;
    self.send_email(confirmation).await?;
    Ok(())
  }
}
