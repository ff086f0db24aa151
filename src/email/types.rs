#[derive(Debug, Clone)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
}

#[derive(Debug, Clone)]
pub struct ResendConfig {
  pub api_key: String,
  pub api_url: String,
}

/// A single HTML email ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
  /// Full sender mailbox, e.g. `StabilTech <info@stabiltech.de>`.
  pub from: String,
  pub to: String,
  pub reply_to: Option<String>,
  pub subject: String,
  pub html: String,
}
