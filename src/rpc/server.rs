use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::rpc::handlers;
use crate::utils::{KuberError, Result};

/// Build the chain router. It is assembled once and never mutated.
///
/// `/rpc` reads bodies of any size so every call gets the stub envelope.
pub fn build_router() -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/rpc", post(handlers::rpc).layer(DefaultBodyLimit::disable()))
        .route("/metrics", get(handlers::metrics))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

/// Bind a TCP listener, reporting the address on failure.
pub async fn bind_listener(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| KuberError::Bind { addr, source })
}

/// Serve `app` on `listener` until `shutdown_rx` flips to true (or its sender
/// goes away), then drain in-flight requests.
pub async fn serve_router(
    listener: TcpListener,
    app: Router,
    mut shutdown_rx: watch::Receiver<bool>,
) -> Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.wait_for(|stop| *stop).await;
        })
        .await?;
    Ok(())
}

/// RpcServer owns the bound listener for the chain HTTP surface.
pub struct RpcServer {
    listener: TcpListener,
    addr: SocketAddr,
}

impl RpcServer {
    pub async fn bind(addr: SocketAddr) -> Result<Self> {
        let listener = bind_listener(addr).await?;
        let addr = listener.local_addr()?;
        Ok(Self { listener, addr })
    }

    /// Address actually bound (differs from the requested one for port 0).
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    pub async fn serve(self, shutdown_rx: watch::Receiver<bool>) -> Result<()> {
        info!("Starting RPC server on {}", self.addr);
        serve_router(self.listener, build_router(), shutdown_rx).await?;
        info!("RPC server on {} stopped", self.addr);
        Ok(())
    }
}
