use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::utils::non_empty;

/// Job application body posted from the careers page.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct ApplicationForm {
  #[validate(length(min = 1, message = "Name is required"))]
  pub name: String,
  #[validate(email(message = "Invalid email address"))]
  pub email: String,
  pub phone: Option<String>,
  pub portfolio: Option<String>,
  #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
  pub message: String,
  #[validate(length(min = 1, message = "Position is required"))]
  pub position: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationSubmission {
  pub name: String,
  pub email: String,
  pub phone: Option<String>,
  pub portfolio: Option<String>,
  pub message: String,
  pub position: String,
}

impl ApplicationForm {
  pub fn into_submission(self) -> Result<ApplicationSubmission, ValidationErrors> {
    self.validate()?;

    Ok(ApplicationSubmission {
      name: self.name,
      email: self.email,
      phone: non_empty(self.phone),
      portfolio: non_empty(self.portfolio),
      message: self.message,
      position: self.position,
    })
  }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApplicationResponse {
  pub message: String,
}

impl ApplicationResponse {
  pub fn sent() -> Self {
    Self {
      message: "Application sent".to_string(),
    }
  }
}
