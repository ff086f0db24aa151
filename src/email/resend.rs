use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
  transport::EmailTransport,
  types::{EmailMessage, ResendConfig},
};
use crate::constants::{COMPANY_URL, CONTACT_EMAIL};

/// Sends mail through the Resend HTTP API. The sending domain is verified
/// with Resend, so mail always leaves from the public contact address.
pub struct ResendTransport {
  config: ResendConfig,
  client: reqwest::Client,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
  from: &'a str,
  to: [&'a str; 1],
  #[serde(skip_serializing_if = "Option::is_none")]
  reply_to: Option<&'a str>,
  subject: &'a str,
  html: &'a str,
}

#[derive(Deserialize)]
struct ErrorResponse {
  message: String,
}

impl ResendTransport {
  pub fn new(config: ResendConfig) -> Result<Self> {
    let client = reqwest::Client::builder()
      .user_agent(format!("stabiltech-api/{} (+{})", env!("CARGO_PKG_VERSION"), COMPANY_URL))
      .build()
      .context("failed to build Resend HTTP client")?;

    Ok(Self { config, client })
  }

  fn endpoint(&self) -> String {
    format!("{}/emails", self.config.api_url.trim_end_matches('/'))
  }
}

#[async_trait]
impl EmailTransport for ResendTransport {
  fn sender_address(&self) -> &str {
    CONTACT_EMAIL
  }

  async fn send(&self, message: &EmailMessage) -> Result<()> {
    let request = SendEmailRequest {
      from: &message.from,
      to: [&message.to],
      reply_to: message.reply_to.as_deref(),
      subject: &message.subject,
      html: &message.html,
    };

    let response = self
      .client
      .post(self.endpoint())
      .bearer_auth(&self.config.api_key)
      .json(&request)
      .send()
      .await
      .context("failed to reach Resend API")?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      let reason = serde_json::from_str::<ErrorResponse>(&body)
        .map(|err| err.message)
        .unwrap_or(body);
      bail!("Resend API returned {}: {}", status, reason);
    }

    debug!(to = %message.to, "mail accepted by Resend");
    Ok(())
  }
}
