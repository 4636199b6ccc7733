//! VipChatBot status API.
//!
//! Serves a single `GET /` route returning a fixed JSON banner. Everything
//! else (unmatched routes, wrong methods, malformed requests) falls through to
//! axum's defaults.

pub mod config;
pub mod error;
pub mod routes;

use std::{future::Future, net::SocketAddr};

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use config::Config;
use error::ServerError;

/// Build the router: one route plus the middleware stack.
pub fn app() -> Router {
    with_middleware(Router::new().route("/", get(routes::status::handler)))
}

fn with_middleware(router: Router) -> Router {
    router
        // A panicking handler becomes a 500 instead of a dropped connection.
        .layer(CatchPanicLayer::new())
        // The browser frontend is served from a different origin.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve [`app`] on an already-bound listener until `shutdown` resolves.
/// In-flight requests are drained before returning.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)
}

/// Bind the configured address and serve until SIGINT/SIGTERM.
pub async fn start(config: &Config) -> Result<(), ServerError> {
    let addr = config.socket_addr()?;
    let listener = bind(addr).await?;
    let local = listener.local_addr().map_err(ServerError::LocalAddr)?;

    // Printed rather than logged so RUST_LOG cannot hide it.
    println!("🚀 VipChatBot API starting on http://{local}");
    tracing::debug!(%local, "Listener bound");

    serve(listener, shutdown_signal()).await?;

    tracing::info!("VipChatBot API stopped");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix. If a handler cannot be installed
/// that branch never resolves, so the server keeps running.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received SIGINT, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
