/// Service configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Root directory of the question corpus.
    pub corpus_dir: String,
    /// Address the HTTP server binds to.
    pub bind_address: String,
    /// Requests allowed per caller within one rate-limit window.
    pub rate_limit_max_requests: u32,
    /// Rate-limit window length in seconds.
    pub rate_limit_window_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus_dir: "public".to_string(),
            bind_address: "127.0.0.1:3000".to_string(),
            rate_limit_max_requests: 60,
            rate_limit_window_secs: 60,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            corpus_dir: std::env::var("CORPUS_DIR").unwrap_or(default.corpus_dir),
            bind_address: std::env::var("BIND_ADDRESS").unwrap_or(default.bind_address),
            rate_limit_max_requests: std::env::var("RATE_LIMIT_MAX_REQUESTS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.rate_limit_max_requests),
            rate_limit_window_secs: std::env::var("RATE_LIMIT_WINDOW_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.rate_limit_window_secs),
        }
    }
}
