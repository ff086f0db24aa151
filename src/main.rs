use std::time::Duration;

use dotenvy::dotenv;
use tokio::signal;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use stabiltech_api::app::create_app;
use stabiltech_api::config::AppConfig;
use stabiltech_api::email::EmailService;
use stabiltech_api::state::SharedAppState;

const RATE_LIMIT_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::registry()
    .with(fmt::layer())
    .with(
      EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let config = AppConfig::from_env()?;
  info!(
    bind_addr = %config.bind_addr,
    mail_backend = config.mail.backend_name(),
    rate_limit_max = config.rate_limit.max_requests,
    rate_limit_window_secs = config.rate_limit.window.as_secs(),
    "Starting StabilTech API"
  );

  let email_service = EmailService::from_config(&config.mail)?;
  let app_state = SharedAppState::new(email_service, config.rate_limit.clone());

  let limiter = app_state.rate_limiter.clone();
  tokio::spawn(async move {
    let mut interval = tokio::time::interval(RATE_LIMIT_SWEEP_INTERVAL);
    loop {
      interval.tick().await;
      let removed = limiter.cleanup();
      if removed > 0 {
        tracing::debug!(removed, "Expired rate limit records dropped");
      }
    }
  });

  let app = create_app(app_state);

  let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

  info!(addr = %config.bind_addr, "Server listening");

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
  };

  #[cfg(unix)]
  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("Failed to install signal handler")
      .recv()
      .await;
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  info!("Received termination signal, shutting down gracefully...");
}
