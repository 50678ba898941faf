//! HTTP transport for poolstat
//!
//! Exposes the pool store over JSON-over-HTTP:
//!
//! | Method | Path | Purpose |
//! |--------|------|---------|
//! | POST | `/pools/update` | insert or append samples |
//! | POST | `/pools/query` | compute a percentile |
//! | GET | `/`, `/health` | service description |
//! | GET | `/info` | store summary |
//!
//! Executor errors become HTTP status codes here and nowhere else. Every
//! non-2xx response carries the `{code, message, details}` envelope,
//! including a body over `max_body_bytes` (413, `PayloadTooLarge`).

mod config;
mod error;
mod handlers;
mod router;
mod state;

pub use config::{ListenConfig, ServerConfig};
pub use error::{status_for, ApiError, ServerError};
pub use router::create_router;
pub use state::AppState;

/// Run the HTTP server until ctrl-c
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let state =
        AppState::new(config.store.clone()).with_body_limit(config.listen.max_body_bytes);
    let router = create_router(state);

    let addr = config.listen.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        max_pool_size = ?config.store.max_pool_size,
        max_body_bytes = ?config.listen.max_body_bytes,
        "poolstat listening on http://{}",
        addr
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("poolstat stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
