use askama::Template;
use async_trait::async_trait;
use std::error::Error;

use super::model::ContactSubmission;
use crate::{
  constants::{service_label, COMPANY_DOMAIN, COMPANY_NAME, CONTACT_EMAIL},
  email::{
    templates::{ContactConfirmationTemplate, NotificationTemplate, TableRow},
    EmailMessage, EmailService,
  },
};

#[derive(Debug)]
pub enum ContactServiceError {
  SendFailed(String),
  MalformedBody(String),
}

impl Error for ContactServiceError {}

impl std::fmt::Display for ContactServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ContactServiceError::SendFailed(msg) => write!(f, "Send Failed: {}", msg),
      ContactServiceError::MalformedBody(msg) => write!(f, "Malformed Body: {}", msg),
    }
  }
}

#[async_trait]
pub trait ContactService: Send + Sync {
  async fn send_inquiry(&self, submission: ContactSubmission) -> Result<(), ContactServiceError>;
}

pub struct ContactServiceImpl {
  email_service: EmailService,
}

impl ContactServiceImpl {
  pub fn new(email_service: EmailService) -> Self {
    Self { email_service }
  }

  /// Message to the company inbox. Replies go straight to the submitter.
  pub fn build_notification(&self, submission: &ContactSubmission) -> anyhow::Result<EmailMessage> {
    let service_text = service_label(submission.service.as_deref());
    let footer = format!("Sent from {} contact form", COMPANY_DOMAIN);

    let html = NotificationTemplate::new(
      "New Contact Form Submission",
      vec![
        TableRow::text("Name", &submission.name),
        TableRow::mailto("Email", &submission.email),
        TableRow::optional("Phone", submission.phone.as_deref()),
        TableRow::text("Service", &service_text),
      ],
      "Message",
      &submission.message,
      &footer,
    )
    .render()?;

    Ok(EmailMessage {
      from: self.email_service.sender(&format!("{} Website", COMPANY_NAME)),
      to: CONTACT_EMAIL.to_string(),
      reply_to: Some(submission.email.clone()),
      subject: format!("New Inquiry from {} - {}", submission.name, service_text),
      html,
    })
  }

  pub fn build_confirmation(&self, submission: &ContactSubmission) -> anyhow::Result<EmailMessage> {
    let html = ContactConfirmationTemplate {
      name: &submission.name,
      contact_email: CONTACT_EMAIL,
    }
    .render()?;

    Ok(EmailMessage {
      from: self.email_service.sender(COMPANY_NAME),
      to: submission.email.clone(),
      reply_to: None,
      subject: format!("Thank you for contacting {}", COMPANY_NAME),
      html,
    })
  }

  async fn dispatch(&self, submission: &ContactSubmission) -> anyhow::Result<()> {
    let notification = self.build_notification(submission)?;
    let confirmation = self.build_confirmation(submission)?;
    self
      .email_service
      .send_notification_pair(&notification, &confirmation)
      .await
  }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
  async fn send_inquiry(&self, submission: ContactSubmission) -> Result<(), ContactServiceError> {
    match self.dispatch(&submission).await {
      Ok(()) => {
        tracing::info!(service = ?submission.service, "Contact inquiry delivered");
        Ok(())
      }
      Err(e) => {
        tracing::error!("Contact form error: {:?}", e);
        Err(ContactServiceError::SendFailed(e.to_string()))
      }
    }
  }
}
