use std::net::SocketAddr;

use tracing::info;
use tracing::instrument;

pub mod rest;

#[instrument]
pub async fn run(addr: &SocketAddr) -> anyhow::Result<()> {
    let router = rest::router();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening");
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(error) = tokio::signal::ctrl_c().await {
                tracing::error!(%error, "failed to listen for ctrl-c");
            }
            info!("shutting down");
        })
        .await?;
    Ok(())
}
