use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
  pub details: Option<Value>,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
      details: None,
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn too_many_requests(message: impl Into<String>) -> Self {
    Self::new(StatusCode::TOO_MANY_REQUESTS, message)
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }

  /// Attaches machine-readable detail to the response body.
  pub fn with_details(mut self, details: impl Serialize) -> Self {
    self.details = serde_json::to_value(details).ok();
    self
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = match self.details {
      Some(details) => json!({ "error": self.message, "details": details }),
      None => json!({ "error": self.message }),
    };

    (self.status_code, Json(body)).into_response()
  }
}

impl From<crate::domains::contact::service::ContactServiceError> for AppError {
  fn from(error: crate::domains::contact::service::ContactServiceError) -> Self {
    use crate::domains::contact::service::ContactServiceError;
    match error {
      ContactServiceError::SendFailed(_) | ContactServiceError::MalformedBody(_) => {
        AppError::internal_server_error("Failed to send message")
      }
    }
  }
}

impl From<crate::domains::application::service::ApplicationServiceError> for AppError {
  fn from(error: crate::domains::application::service::ApplicationServiceError) -> Self {
    use crate::domains::application::service::ApplicationServiceError;
    match error {
      ApplicationServiceError::SendFailed(_) | ApplicationServiceError::MalformedBody(_) => {
        AppError::internal_server_error("Failed to send")
      }
    }
  }
}
