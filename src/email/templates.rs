//! HTML bodies for outgoing mail. Every template extends
//! `templates/emails/layout.html`; submitted text is escaped by askama.

use askama::Template;

/// Placeholder shown for optional fields the submitter left out.
pub const EMPTY_VALUE: &str = "—";

pub struct TableRow {
  pub label: &'static str,
  pub value: String,
  pub href: Option<String>,
}

impl TableRow {
  pub fn text(label: &'static str, value: impl Into<String>) -> Self {
    Self {
      label,
      value: value.into(),
      href: None,
    }
  }

  pub fn link(label: &'static str, value: impl Into<String>, href: impl Into<String>) -> Self {
    Self {
      label,
      value: value.into(),
      href: Some(href.into()),
    }
  }

  pub fn mailto(label: &'static str, email: &str) -> Self {
    Self::link(label, email, format!("mailto:{}", email))
  }

  /// A text row that falls back to the placeholder when `value` is absent.
  pub fn optional(label: &'static str, value: Option<&str>) -> Self {
    Self::text(label, value.unwrap_or(EMPTY_VALUE))
  }
}

/// Operator-facing notification: a field table followed by the free-text
/// message.
#[derive(Template)]
#[template(path = "emails/notification.html")]
pub struct NotificationTemplate<'a> {
  pub subtitle: &'a str,
  pub heading: Option<String>,
  pub rows: Vec<TableRow>,
  pub message_label: &'a str,
  pub message_lines: Vec<&'a str>,
  pub footer: &'a str,
}

impl<'a> NotificationTemplate<'a> {
  pub fn new(subtitle: &'a str, rows: Vec<TableRow>, message_label: &'a str, message: &'a str, footer: &'a str) -> Self {
    Self {
      subtitle,
      heading: None,
      rows,
      message_label,
      message_lines: message.lines().collect(),
      footer,
    }
  }

  pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
    self.heading = Some(heading.into());
    self
  }
}

#[derive(Template)]
#[template(path = "emails/contact_confirmation.html")]
pub struct ContactConfirmationTemplate<'a> {
  pub name: &'a str,
  pub contact_email: &'a str,
}

#[derive(Template)]
#[template(path = "emails/application_confirmation.html")]
pub struct ApplicationConfirmationTemplate<'a> {
  pub name: &'a str,
  pub position: &'a str,
}
