use anyhow::Result;
use questions_api::{logger, router, AppState, Config};
use std::net::SocketAddr;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    logger::init();

    let config = Config::from_env();
    info!(
        corpus_dir = %config.corpus_dir,
        "starting questions API on {}",
        config.bind_address
    );

    let state = AppState::new(&config);
    let app = router(state).into_make_service_with_connect_info::<SocketAddr>();

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
