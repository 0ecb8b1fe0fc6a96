//! HTTP echo server
//!
//! - `POST /b64`: base64-decode the body and echo the decoded data
//! - `POST` anywhere else: echo the body
//! - any other method: 405
//!
//! Local interface addresses are logged before binding.

pub mod handlers;
pub mod interfaces;

use crate::config::ServerConfig;
use crate::errors::{AppError, AppResult};
use axum::extract::DefaultBodyLimit;
use axum::routing::any;
use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Build the router with the given request body limit
pub fn router(max_body_bytes: usize) -> Router {
    Router::new()
        .route("/b64", any(handlers::decode_body))
        .fallback(handlers::echo_body)
        .layer(DefaultBodyLimit::max(max_body_bytes))
}

/// Bind `host:port` from the config and serve until Ctrl-C
pub async fn serve(config: &ServerConfig) -> AppResult<()> {
    interfaces::log_network_interfaces();

    let bind_addr = format!("{}:{}", config.host, config.port);
    info!("Starting server on {}", bind_addr);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| AppError::Server(format!("Failed to bind {}: {}", bind_addr, e)))?;

    serve_on(listener, config.max_body_bytes, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves
pub async fn serve_on<F>(listener: TcpListener, max_body_bytes: usize, shutdown: F) -> AppResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr()?;
    info!("Echo server listening on http://{}", local_addr);

    axum::serve(listener, router(max_body_bytes))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Echo server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            // Without a signal handler the server just runs until killed
            warn!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
