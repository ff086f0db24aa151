use std::{env, time::Duration};

use anyhow::{bail, Result};

use crate::email::{ResendConfig, SmtpConfig};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_SMTP_HOST: &str = "mail.privateemail.com";
const DEFAULT_SMTP_PORT: u16 = 465;
const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub bind_addr: String,
  pub mail: MailConfig,
  pub rate_limit: RateLimitConfig,
}

/// Which delivery backend the process uses. Decided once at startup.
#[derive(Debug, Clone)]
pub enum MailConfig {
  Resend(ResendConfig),
  Smtp(SmtpConfig),
}

#[derive(Debug, Clone)]
pub struct RateLimitConfig {
  pub max_requests: u32,
  pub window: Duration,
}

impl Default for RateLimitConfig {
  fn default() -> Self {
    RateLimitConfig {
      max_requests: 3,
      window: Duration::from_secs(60),
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    Ok(AppConfig {
      bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
      mail: MailConfig::from_env()?,
      rate_limit: RateLimitConfig::from_env(),
    })
  }
}

impl MailConfig {
  pub fn from_env() -> Result<Self> {
    if let Some(api_key) = non_empty_var("RESEND_API_KEY") {
      return Ok(MailConfig::Resend(ResendConfig {
        api_key,
        api_url: non_empty_var("RESEND_API_URL").unwrap_or_else(|| DEFAULT_RESEND_API_URL.to_string()),
      }));
    }

    let Some(username) = non_empty_var("SMTP_USER") else {
      bail!("SMTP_USER must be set when RESEND_API_KEY is absent");
    };
    let Some(password) = non_empty_var("SMTP_PASS") else {
      bail!("SMTP_PASS must be set when RESEND_API_KEY is absent");
    };

    Ok(MailConfig::Smtp(SmtpConfig {
      host: non_empty_var("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
      port: parse_port(env::var("SMTP_PORT").ok().as_deref()),
      username,
      password,
    }))
  }

  pub fn backend_name(&self) -> &'static str {
    match self {
      MailConfig::Resend(_) => "resend",
      MailConfig::Smtp(_) => "smtp",
    }
  }
}

impl RateLimitConfig {
  pub fn from_env() -> Self {
    let defaults = RateLimitConfig::default();
    RateLimitConfig {
      max_requests: env::var("RATE_LIMIT_MAX_REQUESTS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(defaults.max_requests),
      window: env::var("RATE_LIMIT_WINDOW_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or(defaults.window),
    }
  }
}

fn non_empty_var(key: &str) -> Option<String> {
  env::var(key).ok().filter(|v| !v.is_empty())
}

// Zero and garbage both fall back to the implicit-TLS port.
fn parse_port(value: Option<&str>) -> u16 {
  value
    .and_then(|v| v.trim().parse::<u16>().ok())
    .filter(|port| *port != 0)
    .unwrap_or(DEFAULT_SMTP_PORT)
}
