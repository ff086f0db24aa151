use axum::{
  body::Bytes,
  extract::State,
  response::Json as JsonResponse,
  routing::{post, Router},
};

use super::{
  model::{ContactForm, ContactResponse},
  service::ContactServiceError,
};
use crate::{
  middleware::client_ip::ClientKey,
  rate_limit::RateLimitResult,
  state::{AppState, SharedAppState},
  utils::{parse_json_body, validation_details, BodyError, FieldError},
  AppError,
};

const INVALID_FORM_DATA: &str = "Invalid form data";

pub fn contact_routes() -> Router<SharedAppState> {
  Router::new().route("/contact", post(contact_handler))
}

/// Rate limiting runs before the body is looked at, so malformed requests
/// still count against the sender. The body is read as JSON whatever its
/// `Content-Type`; a body that is not JSON at all is a server-side failure.
pub async fn contact_handler(
  State(state): State<SharedAppState>,
  ClientKey(key): ClientKey,
  body: Bytes,
) -> Result<JsonResponse<ContactResponse>, AppError> {
  if let RateLimitResult::Limited { retry_after } = state.check_rate_limit(&key) {
    tracing::warn!(key = %key, retry_after_secs = retry_after.as_secs(), "Contact form rate limited");
    return Err(AppError::too_many_requests("Too many requests."));
  }

  let form: ContactForm = match parse_json_body(&body) {
    Ok(form) => form,
    Err(BodyError::Invalid(e)) => {
      return Err(AppError::bad_request(INVALID_FORM_DATA).with_details(vec![FieldError::invalid_body(e.to_string())]));
    }
    Err(BodyError::Unreadable(e)) => {
      tracing::error!("Contact form error: {:?}", e);
      return Err(ContactServiceError::MalformedBody(e.to_string()).into());
    }
  };

  let submission = form
    .into_submission()
    .map_err(|e| AppError::bad_request(INVALID_FORM_DATA).with_details(validation_details(&e)))?;

  state.send_inquiry(submission).await?;

  Ok(JsonResponse(ContactResponse::sent()))
}
