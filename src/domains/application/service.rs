use askama::Template;
use async_trait::async_trait;
use std::error::Error;

use super::model::ApplicationSubmission;
use crate::{
  constants::{CAREERS_EMAIL, COMPANY_DOMAIN, COMPANY_NAME},
  email::{
    templates::{ApplicationConfirmationTemplate, NotificationTemplate, TableRow},
    EmailMessage, EmailService,
  },
};

#[derive(Debug)]
pub enum ApplicationServiceError {
  SendFailed(String),
  MalformedBody(String),
}

impl Error for ApplicationServiceError {}

impl std::fmt::Display for ApplicationServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ApplicationServiceError::SendFailed(msg) => write!(f, "Send Failed: {}", msg),
      ApplicationServiceError::MalformedBody(msg) => write!(f, "Malformed Body: {}", msg),
    }
  }
}

#[async_trait]
pub trait ApplicationService: Send + Sync {
  async fn send_application(&self, submission: ApplicationSubmission) -> Result<(), ApplicationServiceError>;
}

pub struct ApplicationServiceImpl {
  email_service: EmailService,
}

impl ApplicationServiceImpl {
  pub fn new(email_service: EmailService) -> Self {
    Self { email_service }
  }

  /// Application forwarded to the hiring inbox.
  pub fn build_notification(&self, submission: &ApplicationSubmission) -> anyhow::Result<EmailMessage> {
    let portfolio = match submission.portfolio.as_deref() {
      Some(link) => TableRow::link("Portfolio", link, link),
      None => TableRow::optional("Portfolio", None),
    };
    let footer = format!("Sent from {}/careers", COMPANY_DOMAIN);

    let html = NotificationTemplate::new(
      "Neue Bewerbung",
      vec![
        TableRow::text("Name", &submission.name),
        TableRow::mailto("Email", &submission.email),
        TableRow::optional("Telefon", submission.phone.as_deref()),
        portfolio,
      ],
      "Nachricht",
      &submission.message,
      &footer,
    )
    .with_heading(format!("Position: {}", submission.position))
    .render()?;

    Ok(EmailMessage {
      from: self.email_service.sender(&format!("{} Careers", COMPANY_NAME)),
      to: CAREERS_EMAIL.to_string(),
      reply_to: Some(submission.email.clone()),
      subject: format!("Bewerbung: {} - {}", submission.position, submission.name),
      html,
    })
  }

  pub fn build_confirmation(&self, submission: &ApplicationSubmission) -> anyhow::Result<EmailMessage> {
    let html = ApplicationConfirmationTemplate {
      name: &submission.name,
      position: &submission.position,
    }
    .render()?;

    Ok(EmailMessage {
      from: self.email_service.sender(COMPANY_NAME),
      to: submission.email.clone(),
      reply_to: None,
      subject: format!("Bewerbung erhalten - {}", submission.position),
      html,
    })
  }

  async fn dispatch(&self, submission: &ApplicationSubmission) -> anyhow::Result<()> {
    let notification = self.build_notification(submission)?;
    let confirmation = self.build_confirmation(submission)?;
    self
      .email_service
      .send_notification_pair(&notification, &confirmation)
      .await
  }
}

#[async_trait]
impl ApplicationService for ApplicationServiceImpl {
  async fn send_application(&self, submission: ApplicationSubmission) -> Result<(), ApplicationServiceError> {
    match self.dispatch(&submission).await {
      Ok(()) => {
        tracing::info!(position = %submission.position, "Job application delivered");
        Ok(())
      }
      Err(e) => {
        tracing::error!("Application error: {:?}", e);
        Err(ApplicationServiceError::SendFailed(e.to_string()))
      }
    }
  }
}
