use axum::{response::Json, routing::get, Router};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::{
  domains::{application::rest::application_routes, contact::rest::contact_routes},
  state::SharedAppState,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
  pub status: String,
  pub service: String,
  pub version: String,
}

pub fn create_app(state: SharedAppState) -> Router {
  Router::new()
    .route("/health", get(health_handler))
    .nest("/api", contact_routes().merge(application_routes()))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

pub async fn health_handler() -> Json<HealthResponse> {
  Json(HealthResponse {
    status: "healthy".to_string(),
    service: env!("CARGO_PKG_NAME").to_string(),
    version: env!("CARGO_PKG_VERSION").to_string(),
  })
}
