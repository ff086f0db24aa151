use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::utils::non_empty;

/// Contact form body as posted by the site. Missing required fields
/// deserialize as empty strings so they fail validation instead of parsing.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct ContactForm {
  #[validate(length(min = 1, message = "Name is required"))]
  pub name: String,
  #[validate(email(message = "Invalid email address"))]
  pub email: String,
  pub phone: Option<String>,
  pub service: Option<String>,
  #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
  pub message: String,
}

/// A contact request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
  pub name: String,
  pub email: String,
  pub phone: Option<String>,
  pub service: Option<String>,
  pub message: String,
}

impl ContactForm {
  pub fn into_submission(self) -> Result<ContactSubmission, ValidationErrors> {
    self.validate()?;

    Ok(ContactSubmission {
      name: self.name,
      email: self.email,
      phone: non_empty(self.phone),
      service: non_empty(self.service),
      message: self.message,
    })
  }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContactResponse {
  pub message: String,
}

impl ContactResponse {
  pub fn sent() -> Self {
    Self {
      message: "Message sent successfully".to_string(),
    }
  }
}
