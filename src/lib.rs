pub mod app;
pub mod config;
pub mod constants;
pub mod domains;
pub mod email;
pub mod middleware;
pub mod rate_limit;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use utils::error::AppError;
