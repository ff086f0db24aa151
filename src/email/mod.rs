//! Outbound email for form submissions.
//!
//! Messages are rendered from askama templates and handed to whichever
//! delivery backend the process was configured with: the Resend HTTP API when
//! an API key is present, a direct SMTP session otherwise.

mod resend;
mod service;
mod smtp;
pub mod templates;
mod transport;
mod types;

pub use resend::ResendTransport;
pub use service::EmailService;
pub use smtp::SmtpTransport;
pub use transport::{EmailTransport, MailBackend};
pub use types::{EmailMessage, ResendConfig, SmtpConfig};
