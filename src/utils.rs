use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::error::Category;
use validator::ValidationErrors;

pub mod error;

/// One failed validation rule, as reported to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
  pub field: String,
  pub code: String,
  pub message: String,
}

impl FieldError {
  /// Detail for a request body that could not be read as the expected JSON.
  pub fn invalid_body(message: impl Into<String>) -> Self {
    FieldError {
      field: "body".to_string(),
      code: "invalid_body".to_string(),
      message: message.into(),
    }
  }
}

/// Flattens validator output into a list ordered by field name.
pub fn validation_details(errors: &ValidationErrors) -> Vec<FieldError> {
  let mut details: Vec<FieldError> = errors
    .field_errors()
    .into_iter()
    .flat_map(|(field, errors)| {
      errors.iter().map(move |error| FieldError {
        field: field.to_string(),
        code: error.code.to_string(),
        message: error
          .message
          .as_ref()
          .map(|message| message.to_string())
          .unwrap_or_else(|| error.code.to_string()),
      })
    })
    .collect();

  details.sort_by(|a, b| a.field.cmp(&b.field));
  details
}

/// Why a request body could not be decoded into a form.
#[derive(Debug)]
pub enum BodyError {
  /// Well-formed JSON whose shape or field types do not fit the form.
  Invalid(serde_json::Error),
  /// Not JSON at all, or a truncated document.
  Unreadable(serde_json::Error),
}

/// Decodes a JSON form body. The request's `Content-Type` is not consulted.
pub fn parse_json_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, BodyError> {
  serde_json::from_slice(body).map_err(|e| match e.classify() {
    Category::Data => BodyError::Invalid(e),
    Category::Syntax | Category::Eof | Category::Io => BodyError::Unreadable(e),
  })
}

/// Treats an empty optional string the same as a missing one.
pub fn non_empty(value: Option<String>) -> Option<String> {
  value.filter(|v| !v.is_empty())
}
