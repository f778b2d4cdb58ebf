use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::mint::handlers::{self, MintState};
use crate::mint::store::TokenStore;
use crate::rpc::server::{bind_listener, serve_router};
use crate::utils::Result;

pub fn build_router(store: Arc<dyn TokenStore>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/mint", post(handlers::mint))
        .route("/metrics", get(crate::rpc::handlers::metrics))
        .with_state(MintState { store })
        .layer(TraceLayer::new_for_http())
}

/// MintServer owns the bound listener and the token store.
pub struct MintServer {
    listener: TcpListener,
    addr: SocketAddr,
    store: Arc<dyn TokenStore>,
}

impl MintServer {
    pub async fn bind(addr: SocketAddr, store: Arc<dyn TokenStore>) -> Result<Self> {
        let listener = bind_listener(addr).await?;
        let addr = listener.local_addr()?;
        Ok(Self { listener, addr, store })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    pub async fn serve(self, shutdown_rx: watch::Receiver<bool>) -> Result<()> {
        info!("Starting mint server on {}", self.addr);
        serve_router(self.listener, build_router(self.store), shutdown_rx).await?;
        info!("Mint server on {} stopped", self.addr);
        Ok(())
    }
}
