use std::sync::{Arc, Mutex};

use anyhow::bail;
use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use tower::ServiceExt;

use crate::{
  app::create_app,
  config::RateLimitConfig,
  email::{EmailMessage, EmailService, EmailTransport},
  state::SharedAppState,
};

/// Transport that keeps every delivered message in memory. Optionally fails
/// the n-th send attempt (zero-based).
#[derive(Default)]
pub struct RecordingTransport {
  sent: Mutex<Vec<EmailMessage>>,
  attempts: Mutex<usize>,
  fail_on: Option<usize>,
}

impl RecordingTransport {
  pub fn failing_on(attempt: usize) -> Self {
    Self {
      fail_on: Some(attempt),
      ..Default::default()
    }
  }

  pub fn sent(&self) -> Vec<EmailMessage> {
    self.sent.lock().unwrap().clone()
  }

  pub fn attempts(&self) -> usize {
    *self.attempts.lock().unwrap()
  }
}

#[async_trait]
impl EmailTransport for RecordingTransport {
  fn sender_address(&self) -> &str {
    "mailer@stabiltech.de"
  }

  async fn send(&self, message: &EmailMessage) -> anyhow::Result<()> {
    let attempt = {
      let mut attempts = self.attempts.lock().unwrap();
      *attempts += 1;
      *attempts - 1
    };
    if self.fail_on == Some(attempt) {
      bail!("connection refused");
    }
    self.sent.lock().unwrap().push(message.clone());
    Ok(())
  }
}

pub fn email_service(transport: Arc<RecordingTransport>) -> EmailService {
  EmailService::new(transport)
}

pub fn app_with_transport(transport: Arc<RecordingTransport>) -> Router {
  let state = SharedAppState::new(email_service(transport), RateLimitConfig::default());
  create_app(state)
}

pub async fn post_raw(app: Router, uri: &str, forwarded_for: Option<&str>, body: impl Into<Body>) -> (StatusCode, Bytes) {
  let mut builder = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json");
  if let Some(ip) = forwarded_for {
    builder = builder.header("x-forwarded-for", ip);
  }
  send(app, builder.body(body.into()).expect("build request")).await
}

/// Posts `body` with no `Content-Type` header at all.
pub async fn post_untyped(app: Router, uri: &str, body: impl Into<Body>) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .body(body.into())
    .expect("build request");
  send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: &serde_json::Value) -> (StatusCode, Bytes) {
  post_raw(app, uri, None, serde_json::to_vec(body).expect("serialize request body")).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Bytes) {
  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}
