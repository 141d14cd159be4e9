//! User API Library
//!
//! The HTTP transport for the user service: routing, request extraction,
//! error rendering and the server loop.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use tracing::info;

use common::AppError;
use user_service_lib::{build_user_service, infra::Database};

use crate::config::ServeArgs;
use crate::routes::create_router;
use crate::state::AppState;

/// Connect to the database and serve HTTP until a shutdown signal arrives.
pub async fn serve(args: ServeArgs) -> Result<(), AppError> {
    let db = Database::connect(&args.database).await?;
    let state = AppState::new(build_user_service(&db));
    let app = create_router(state);

    let addr = args.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;
    info!("User API listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    info!("Server stopped, closing database pool");
    db.close().await?;

    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
