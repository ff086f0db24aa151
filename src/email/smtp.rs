use anyhow::Result;
use async_trait::async_trait;
use lettre::{
  message::{header::ContentType, Mailbox},
  transport::smtp::{
    authentication::Credentials,
    client::{Tls, TlsParameters},
  },
  AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::debug;

use super::{
  transport::EmailTransport,
  types::{EmailMessage, SmtpConfig},
};

/// Port on which the server expects TLS from the first byte.
const IMPLICIT_TLS_PORT: u16 = 465;

/// How the SMTP session is secured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsMode {
  /// TLS from the first byte.
  Implicit,
  /// Plaintext, upgraded with `STARTTLS` when the server offers it.
  Opportunistic,
  /// Plaintext only, for local test relays.
  Plain,
}

impl TlsMode {
  pub fn for_server(host: &str, port: u16) -> Self {
    if host == "localhost" || host == "mailhog" {
      TlsMode::Plain
    } else if port == IMPLICIT_TLS_PORT {
      TlsMode::Implicit
    } else {
      TlsMode::Opportunistic
    }
  }
}

pub struct SmtpTransport {
  smtp_config: SmtpConfig,
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpTransport {
  pub fn new(smtp_config: SmtpConfig) -> Result<Self> {
    let creds = Credentials::new(smtp_config.username.clone(), smtp_config.password.clone());

    let builder = match TlsMode::for_server(&smtp_config.host, smtp_config.port) {
      TlsMode::Plain => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host),
      TlsMode::Implicit => AsyncSmtpTransport::<Tokio1Executor>::relay(&smtp_config.host)?,
      TlsMode::Opportunistic => {
        let parameters = TlsParameters::new(smtp_config.host.clone())?;
        AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host).tls(Tls::Opportunistic(parameters))
      }
    };

    let transporter = builder.credentials(creds).port(smtp_config.port).build();

    Ok(SmtpTransport {
      smtp_config,
      transporter,
    })
  }

  fn build_message(&self, message: &EmailMessage) -> Result<Message> {
    let mut builder = Message::builder()
      .from(message.from.parse::<Mailbox>()?)
      .to(message.to.parse::<Mailbox>()?);

    if let Some(reply_to) = &message.reply_to {
      builder = builder.reply_to(reply_to.parse::<Mailbox>()?);
    }

    let email = builder
      .subject(&message.subject)
      .header(ContentType::TEXT_HTML)
      .body(message.html.clone())?;

    Ok(email)
  }
}

#[async_trait]
impl EmailTransport for SmtpTransport {
  fn sender_address(&self) -> &str {
    &self.smtp_config.username
  }

  async fn send(&self, message: &EmailMessage) -> Result<()> {
    let email = self.build_message(message)?;
    self.transporter.send(email).await?;
    debug!(host = %self.smtp_config.host, to = %message.to, "mail accepted by smtp server");
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn smtp_config(host: &str, port: u16) -> SmtpConfig {
    SmtpConfig {
      host: host.to_string(),
      port,
      username: "mailer@stabiltech.de".to_string(),
      password: "test_password".to_string(),
    }
  }

  fn message(reply_to: Option<&str>) -> EmailMessage {
    EmailMessage {
      from: "StabilTech Website <mailer@stabiltech.de>".to_string(),
      to: "info@stabiltech.de".to_string(),
      reply_to: reply_to.map(str::to_string),
      subject: "New Inquiry from Anna - Web Development".to_string(),
      html: "<p>Hello</p>".to_string(),
    }
  }

  #[tokio::test]
  async fn test_smtp_transport_new_with_localhost() -> Result<()> {
    let transport = SmtpTransport::new(smtp_config("localhost", 1025))?;
    assert_eq!(transport.smtp_config.host, "localhost");
    assert_eq!(transport.smtp_config.port, 1025);
    Ok(())
  }

  #[tokio::test]
  async fn test_smtp_transport_new_with_implicit_tls() -> Result<()> {
    let transport = SmtpTransport::new(smtp_config("mail.privateemail.com", 465))?;
    assert_eq!(transport.smtp_config.port, 465);
    assert_eq!(transport.sender_address(), "mailer@stabiltech.de");
    Ok(())
  }

  #[tokio::test]
  async fn test_smtp_transport_new_with_starttls() -> Result<()> {
    let transport = SmtpTransport::new(smtp_config("smtp.example.com", 587))?;
    assert_eq!(transport.smtp_config.host, "smtp.example.com");
    assert_eq!(transport.smtp_config.port, 587);
    Ok(())
  }

  #[test]
  fn test_tls_mode_for_server() {
    assert_eq!(TlsMode::for_server("mail.privateemail.com", 465), TlsMode::Implicit);
    assert_eq!(TlsMode::for_server("mail.privateemail.com", 587), TlsMode::Opportunistic);
    assert_eq!(TlsMode::for_server("smtp.example.com", 25), TlsMode::Opportunistic);
    assert_eq!(TlsMode::for_server("localhost", 465), TlsMode::Plain);
    assert_eq!(TlsMode::for_server("mailhog", 1025), TlsMode::Plain);
  }

  #[tokio::test]
  async fn test_build_message_sets_reply_to_and_html() -> Result<()> {
    let transport = SmtpTransport::new(smtp_config("localhost", 1025))?;
    let email = transport.build_message(&message(Some("anna@example.com")))?;
    let formatted = String::from_utf8(email.formatted())?;

    assert!(formatted.contains("Reply-To: anna@example.com"));
    assert!(formatted.contains("To: info@stabiltech.de"));
    assert!(formatted.contains("Content-Type: text/html"));
    Ok(())
  }

  #[tokio::test]
  async fn test_build_message_without_reply_to() -> Result<()> {
    let transport = SmtpTransport::new(smtp_config("localhost", 1025))?;
    let email = transport.build_message(&message(None))?;
    let formatted = String::from_utf8(email.formatted())?;

    assert!(!formatted.contains("Reply-To"));
    Ok(())
  }

  #[tokio::test]
  async fn test_build_message_rejects_invalid_recipient() -> Result<()> {
    let transport = SmtpTransport::new(smtp_config("localhost", 1025))?;
    let mut invalid = message(None);
    invalid.to = "not-an-email".to_string();

    assert!(transport.build_message(&invalid).is_err());
    Ok(())
  }
}
