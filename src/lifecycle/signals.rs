//! OS signal handling.

use tokio::sync::broadcast;

/// Resolve when Ctrl+C is pressed or the shutdown broadcast fires.
pub async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        _ = ctrl_c => tracing::info!("Shutdown signal received"),
        _ = shutdown.recv() => tracing::info!("Shutdown requested"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::Shutdown;
    use std::time::Duration;

    #[tokio::test]
    async fn test_resolves_on_broadcast() {
        let shutdown = Shutdown::new();
        let rx = shutdown.subscribe();
        let handle = tokio::spawn(shutdown_signal(rx));
        shutdown.trigger();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("signal future did not resolve")
            .unwrap();
    }
}
