//! OS signal handling.
//!
//! Translates SIGTERM / Ctrl-C (or the in-process trigger) into completion
//! of the future the server's graceful shutdown waits on.

use tokio::sync::broadcast;

/// Resolves when the process should stop accepting connections.
pub async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("SIGINT received, shutting down"),
        _ = terminate => tracing::info!("SIGTERM received, shutting down"),
        _ = shutdown.recv() => tracing::info!("Shutdown trigger received"),
    }
}
