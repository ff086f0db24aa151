use std::convert::Infallible;

use axum::{
  extract::FromRequestParts,
  http::{request::Parts, HeaderMap},
};

pub const FORWARDED_FOR: &str = "x-forwarded-for";
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Rate limit key for the caller: the raw `x-forwarded-for` value as set by
/// the reverse proxy, or `unknown` when the header is absent. All clients
/// without the header share one bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientKey(pub String);

impl ClientKey {
  pub fn from_headers(headers: &HeaderMap) -> Self {
    let key = headers
      .get(FORWARDED_FOR)
      .and_then(|value| value.to_str().ok())
      .filter(|value| !value.is_empty())
      .unwrap_or(UNKNOWN_CLIENT);

    ClientKey(key.to_string())
  }
}

impl<S> FromRequestParts<S> for ClientKey
where
  S: Send + Sync,
{
  type Rejection = Infallible;

  async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
    Ok(Self::from_headers(&parts.headers))
  }
}
