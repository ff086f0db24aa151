use std::sync::Arc;

use crate::{
  config::RateLimitConfig,
  domains::{
    application::{
      model::ApplicationSubmission,
      service::{ApplicationService, ApplicationServiceError, ApplicationServiceImpl},
    },
    contact::{
      model::ContactSubmission,
      service::{ContactService, ContactServiceError, ContactServiceImpl},
    },
  },
  email::EmailService,
  rate_limit::{RateLimitResult, RateLimiter},
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn check_rate_limit(&self, key: &str) -> RateLimitResult;
  fn send_inquiry(
    &self,
    submission: ContactSubmission,
  ) -> impl std::future::Future<Output = Result<(), ContactServiceError>> + Send;
  fn send_application(
    &self,
    submission: ApplicationSubmission,
  ) -> impl std::future::Future<Output = Result<(), ApplicationServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub rate_limiter: Arc<RateLimiter>,
  pub contact_service: Arc<ContactServiceImpl>,
  pub application_service: Arc<ApplicationServiceImpl>,
}

impl SharedAppState {
  pub fn new(email_service: EmailService, rate_limit: RateLimitConfig) -> Self {
    let rate_limiter = Arc::new(RateLimiter::new(rate_limit));
    let contact_service = Arc::new(ContactServiceImpl::new(email_service.clone()));
    let application_service = Arc::new(ApplicationServiceImpl::new(email_service));

    Self {
      rate_limiter,
      contact_service,
      application_service,
    }
  }
}

impl AppState for SharedAppState {
  fn check_rate_limit(&self, key: &str) -> RateLimitResult {
    self.rate_limiter.check(key)
  }

  async fn send_inquiry(&self, submission: ContactSubmission) -> Result<(), ContactServiceError> {
    self.contact_service.send_inquiry(submission).await
  }

  async fn send_application(&self, submission: ApplicationSubmission) -> Result<(), ApplicationServiceError> {
    self.application_service.send_application(submission).await
  }
}
