//! Fixed-window rate limiting, keyed per caller.
//!
//! Each key owns a window: while under quota the window is open and every
//! check decrements the remaining budget; once the budget hits zero further
//! requests are rejected until the window rolls over, which resets the key
//! back to open. State is in-memory only and does not survive a restart.

use axum::http::{HeaderMap, HeaderValue};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Quota configuration shared by all caller keys.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub max_requests: u32,
    pub window: Duration,
}

#[derive(Debug)]
struct Window {
    started: Instant,
    used: u32,
}

/// Per-caller fixed-window quota tracker.
///
/// The counter map is behind one async lock, so concurrent requests against
/// the same key observe a consistent budget: with a quota of N, the (N+1)-th
/// check inside a window is rejected no matter how the requests interleave.
pub struct RateLimiter {
    config: RateLimitConfig,
    windows: Mutex<HashMap<String, Window>>,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Charges one request against `key` and reports the outcome together
    /// with the header values the response must carry.
    pub async fn check(&self, key: &str) -> RateLimitDecision {
        let now = Instant::now();
        let mut windows = self.windows.lock().await;
        let window = windows.entry(key.to_string()).or_insert(Window {
            started: now,
            used: 0,
        });

        if now.duration_since(window.started) >= self.config.window {
            window.started = now;
            window.used = 0;
        }

        let allowed = window.used < self.config.max_requests;
        if allowed {
            window.used += 1;
        }

        RateLimitDecision {
            allowed,
            limit: self.config.max_requests,
            remaining: self.config.max_requests.saturating_sub(window.used),
            reset_after: self
                .config
                .window
                .saturating_sub(now.duration_since(window.started)),
        }
    }
}

/// Outcome of one quota check.
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitDecision {
    pub allowed: bool,
    pub limit: u32,
    pub remaining: u32,
    pub reset_after: Duration,
}

impl RateLimitDecision {
    /// Attaches the quota headers to a response. Every response that reached
    /// the limiter stage carries them; rejections additionally advertise
    /// `retry-after`.
    pub fn apply(&self, headers: &mut HeaderMap) {
        let reset_secs = self.reset_after.as_secs();
        headers.insert("x-ratelimit-limit", HeaderValue::from(self.limit));
        headers.insert("x-ratelimit-remaining", HeaderValue::from(self.remaining));
        headers.insert("x-ratelimit-reset", HeaderValue::from(reset_secs));
        if !self.allowed {
            headers.insert("retry-after", HeaderValue::from(reset_secs.max(1)));
        }
    }
}

/// Derives the quota key identifying a caller. Exact derivation is policy,
/// not contract, so deployments can swap strategies.
pub trait KeyPolicy: Send + Sync {
    fn caller_key(&self, headers: &HeaderMap, peer: Option<SocketAddr>) -> String;
}

/// Default policy: first `x-forwarded-for` entry when present, otherwise the
/// peer socket's IP, otherwise a shared fallback key.
pub struct ForwardedForPolicy;

impl KeyPolicy for ForwardedForPolicy {
    fn caller_key(&self, headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
        headers
            .get("x-forwarded-for")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .or_else(|| peer.map(|addr| addr.ip().to_string()))
            .unwrap_or_else(|| "unknown".to_string())
    }
}
