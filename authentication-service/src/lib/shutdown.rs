use std::future::Future;
use std::io;

/// Resolves once Ctrl-C is received.
///
/// If the handler cannot be installed the server keeps running and never
/// shuts down gracefully.
pub async fn shutdown_signal() {
    wait_for(tokio::signal::ctrl_c()).await
}

async fn wait_for<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    if let Err(e) = signal.await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
