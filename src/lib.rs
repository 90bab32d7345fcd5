//! # Questions API
//!
//! HTTP service answering discipline-filtered queries over a read-only
//! corpus of exam questions, one JSON record per file under a nested
//! `root/<year>/questions/<question-id>/<file>.json` tree.
//!
//! ## Architecture
//!
//! The crate is layered bottom-up:
//!
//! - `models` — the question record and its structural validation
//! - `corpus` — concurrent directory fan-out, per-file loading, and the
//!   case-insensitive discipline filter; best-effort per branch
//! - `pagination` — limit/offset resolution, slicing, page metadata
//! - `rate_limit` — per-caller fixed-window quotas and their headers
//! - `services` — the retrieval pipeline for one request
//! - `handlers` / `extractors` — the axum boundary
//!
//! The corpus is rebuilt from disk on every request; the rate-limit
//! counters are the only state shared across requests.

pub mod config;
pub mod corpus;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod logger;
pub mod models;
pub mod pagination;
pub mod rate_limit;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
pub use models::{Alternative, Question};
pub use pagination::{paginate, DisciplinePage, PageMetadata, PageParams};
pub use rate_limit::{ForwardedForPolicy, KeyPolicy, RateLimitConfig, RateLimiter};
pub use services::QuestionService;

use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<QuestionService>,
    pub limiter: Arc<RateLimiter>,
    pub key_policy: Arc<dyn KeyPolicy>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            service: Arc::new(QuestionService::new(config)),
            limiter: Arc::new(RateLimiter::new(RateLimitConfig {
                max_requests: config.rate_limit_max_requests,
                window: Duration::from_secs(config.rate_limit_window_secs),
            })),
            key_policy: Arc::new(ForwardedForPolicy),
        }
    }
}

pub fn router(state: AppState) -> axum::Router {
    handlers::routes().with_state(state)
}
