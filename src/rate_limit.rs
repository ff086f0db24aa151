//! Fixed-window request counter for the contact endpoint.
//!
//! Each key gets a window that opens on its first request and closes
//! `window` later. Inside a window at most `max_requests` are admitted; once
//! the window has passed the next request opens a fresh one. Because windows
//! reset wholesale, a client can land up to twice the limit in quick
//! succession around a boundary.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::config::RateLimitConfig;

/// Outcome of a rate limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitResult {
  /// Request admitted; `count` is its position within the current window.
  Allowed { count: u32 },
  /// Request rejected until the window closes.
  Limited { retry_after: Duration },
}

impl RateLimitResult {
  pub fn is_allowed(&self) -> bool {
    matches!(self, RateLimitResult::Allowed { .. })
  }
}

#[derive(Debug, Clone, Copy)]
struct RateLimitRecord {
  count: u32,
  reset_at: Instant,
}

pub struct RateLimiter {
  config: RateLimitConfig,
  records: Mutex<HashMap<String, RateLimitRecord>>,
}

impl RateLimiter {
  pub fn new(config: RateLimitConfig) -> Self {
    Self {
      config,
      records: Mutex::new(HashMap::new()),
    }
  }

  /// Returns true if a request from `key` is admitted right now.
  pub fn allow(&self, key: &str) -> bool {
    self.check(key).is_allowed()
  }

  pub fn check(&self, key: &str) -> RateLimitResult {
    self.check_at(key, Instant::now())
  }

  pub fn check_at(&self, key: &str, now: Instant) -> RateLimitResult {
    let fresh = RateLimitRecord {
      count: 1,
      reset_at: now + self.config.window,
    };
    let mut records = self.records();
    let record = records.entry(key.to_string()).or_insert(RateLimitRecord { count: 0, ..fresh });

    if record.count == 0 || now > record.reset_at {
      *record = fresh;
      return RateLimitResult::Allowed { count: 1 };
    }

    if record.count >= self.config.max_requests {
      let retry_after = record.reset_at.saturating_duration_since(now);
      debug!(key, ?retry_after, "rate limit exceeded");
      return RateLimitResult::Limited { retry_after };
    }

    record.count += 1;
    RateLimitResult::Allowed { count: record.count }
  }

  /// Drops every record whose window has closed. Returns how many were removed.
  pub fn cleanup(&self) -> usize {
    self.cleanup_at(Instant::now())
  }

  pub fn cleanup_at(&self, now: Instant) -> usize {
    let mut records = self.records();
    let before = records.len();
    records.retain(|_, record| now <= record.reset_at);
    before - records.len()
  }

  pub fn tracked_keys(&self) -> usize {
    self.records().len()
  }

  // A panic elsewhere never leaves a record half-updated, so a poisoned map
  // is still usable.
  fn records(&self) -> MutexGuard<'_, HashMap<String, RateLimitRecord>> {
    self.records.lock().unwrap_or_else(PoisonError::into_inner)
  }
}
