use anyhow::Context;
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::Notify;

/// Serve `app` until `shutdown` resolves, then stop accepting connections and
/// give in-flight requests `grace` to finish. Requests still running after
/// that are abandoned and an error is returned.
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    grace: Duration,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let stop = Arc::new(Notify::new());
    let stopped = stop.clone();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { stopped.notified().await })
            .await
    });

    tokio::select! {
        result = &mut server => {
            return result.context("server task panicked")?.context("server error");
        }
        _ = shutdown => {}
    }

    tracing::info!("Shutting down server...");
    stop.notify_one();

    match tokio::time::timeout(grace, server).await {
        Ok(result) => {
            result
                .context("server task panicked")?
                .context("server error")?;
            tracing::info!("Server shutdown completed.");
            Ok(())
        }
        Err(_) => anyhow::bail!(
            "server forced to shutdown: requests still running after {:?}",
            grace
        ),
    }
}

/// Resolves on Ctrl+C or, on unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
