//! HTTP listener.

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::error::Result;

/// Bind `addr` and serve `router` until `shutdown` resolves.
///
/// In-flight requests are allowed to finish once shutdown begins.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve<F>(router: Router, addr: SocketAddr, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("server stopped");
    Ok(())
}
