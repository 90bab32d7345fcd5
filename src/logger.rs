/// Initializes the tracing subscriber, honoring `RUST_LOG` when set.
pub fn init() {
    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "info,questions_api=debug".to_owned());
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
