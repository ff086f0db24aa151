use anyhow::Result;
use async_trait::async_trait;

use super::{resend::ResendTransport, smtp::SmtpTransport, types::EmailMessage};
use crate::config::MailConfig;

/// Something that can deliver a rendered [`EmailMessage`].
#[async_trait]
pub trait EmailTransport: Send + Sync {
  /// Address that outgoing mail is sent from.
  fn sender_address(&self) -> &str;

  async fn send(&self, message: &EmailMessage) -> Result<()>;
}

/// The delivery backends a process can run with.
pub enum MailBackend {
  Resend(ResendTransport),
  Smtp(SmtpTransport),
}

impl MailBackend {
  pub fn from_config(config: &MailConfig) -> Result<Self> {
    let backend = match config {
      MailConfig::Resend(resend) => MailBackend::Resend(ResendTransport::new(resend.clone())?),
      MailConfig::Smtp(smtp) => MailBackend::Smtp(SmtpTransport::new(smtp.clone())?),
    };
    Ok(backend)
  }
}

#[async_trait]
impl EmailTransport for MailBackend {
  fn sender_address(&self) -> &str {
    match self {
      MailBackend::Resend(transport) => transport.sender_address(),
      MailBackend::Smtp(transport) => transport.sender_address(),
    }
  }

  async fn send(&self, message: &EmailMessage) -> Result<()> {
    match self {
      MailBackend::Resend(transport) => transport.send(message).await,
      MailBackend::Smtp(transport) => transport.send(message).await,
    }
  }
}
