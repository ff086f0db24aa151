use axum::{
  body::Bytes,
  extract::State,
  response::Json as JsonResponse,
  routing::{post, Router},
};

use super::{
  model::{ApplicationForm, ApplicationResponse},
  service::ApplicationServiceError,
};
use crate::{
  state::{AppState, SharedAppState},
  utils::{parse_json_body, BodyError},
  AppError,
};

const INVALID_DATA: &str = "Invalid data";

pub fn application_routes() -> Router<SharedAppState> {
  Router::new().route("/apply", post(apply_handler))
}

pub async fn apply_handler(
  State(state): State<SharedAppState>,
  body: Bytes,
) -> Result<JsonResponse<ApplicationResponse>, AppError> {
  let form: ApplicationForm = match parse_json_body(&body) {
    Ok(form) => form,
    Err(BodyError::Invalid(_)) => return Err(AppError::bad_request(INVALID_DATA)),
    Err(BodyError::Unreadable(e)) => {
      tracing::error!("Application error: {:?}", e);
      return Err(ApplicationServiceError::MalformedBody(e.to_string()).into());
    }
  };

  let submission = form
    .into_submission()
    .map_err(|_| AppError::bad_request(INVALID_DATA))?;

  state.send_application(submission).await?;

  Ok(JsonResponse(ApplicationResponse::sent()))
}

#[cfg(test)]
mod tests {
  use crate::test_support::{app_with_transport, post_json, post_raw, post_untyped, RecordingTransport};
  use axum::http::StatusCode;
  use serde_json::{json, Value};
  use std::sync::Arc;

  fn payload() -> Value {
    json!({
      "name": "Tom",
      "email": "tom@x.com",
      "message": "I'd like to apply.",
      "position": "Full-Stack Developer"
    })
  }

  #[tokio::test]
  async fn apply_endpoint_success() {
    let transport = Arc::new(RecordingTransport::default());
    let app = app_with_transport(transport.clone());

    let (status, body) = post_json(app, "/api/apply", &payload()).await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_slice(&body).expect("deserialize response");
    assert_eq!(body, json!({ "message": "Application sent" }));
    assert_eq!(transport.sent().len(), 2);
  }

  #[tokio::test]
  async fn apply_endpoint_invalid_data() {
    let transport = Arc::new(RecordingTransport::default());
    let app = app_with_transport(transport.clone());

    let mut payload = payload();
    payload["position"] = json!("");
    let (status, body) = post_json(app, "/api/apply", &payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let body: Value = serde_json::from_slice(&body).expect("deserialize response");
    assert_eq!(body, json!({ "error": "Invalid data" }));
    assert!(transport.sent().is_empty());
  }

  #[tokio::test]
  async fn apply_endpoint_is_not_rate_limited() {
    let transport = Arc::new(RecordingTransport::default());
    let app = app_with_transport(transport.clone());

    for _ in 0..5 {
      let (status, _) = post_json(app.clone(), "/api/apply", &payload()).await;
      assert_eq!(status, StatusCode::OK);
    }
    assert_eq!(transport.sent().len(), 10);
  }

  #[tokio::test]
  async fn apply_endpoint_transport_failure() {
    let transport = Arc::new(RecordingTransport::failing_on(1));
    let app = app_with_transport(transport);

    let (status, body) = post_json(app, "/api/apply", &payload()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = serde_json::from_slice(&body).expect("deserialize response");
    assert_eq!(body, json!({ "error": "Failed to send" }));
  }

  #[tokio::test]
  async fn apply_endpoint_malformed_json() {
    let transport = Arc::new(RecordingTransport::default());
    let app = app_with_transport(transport.clone());

    let (status, body) = post_raw(app, "/api/apply", None, "position=Dev&name=Tom").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = serde_json::from_slice(&body).expect("deserialize response");
    assert_eq!(body, json!({ "error": "Failed to send" }));
    assert!(transport.sent().is_empty());
  }

  #[tokio::test]
  async fn apply_endpoint_wrong_field_type() {
    let transport = Arc::new(RecordingTransport::default());
    let app = app_with_transport(transport.clone());

    let mut payload = payload();
    payload["position"] = json!(["Full-Stack Developer"]);
    let (status, body) = post_json(app, "/api/apply", &payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let body: Value = serde_json::from_slice(&body).expect("deserialize response");
    assert_eq!(body, json!({ "error": "Invalid data" }));
    assert!(transport.sent().is_empty());
  }

  #[tokio::test]
  async fn apply_endpoint_without_content_type() {
    let transport = Arc::new(RecordingTransport::default());
    let app = app_with_transport(transport.clone());

    let body = serde_json::to_vec(&payload()).unwrap();
    let (status, body) = post_untyped(app, "/api/apply", body).await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_slice(&body).expect("deserialize response");
    assert_eq!(body, json!({ "message": "Application sent" }));
    assert_eq!(transport.sent().len(), 2);
  }
}
