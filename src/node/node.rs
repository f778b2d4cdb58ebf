//! Node orchestration: bind the HTTP servers and hand their tasks to a
//! `ServiceHandle`.

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use crate::mint::{FsTokenStore, MintServer, TokenStore};
use crate::node::config::{MintConfig, NodeConfig};
use crate::node::service_handle::ServiceHandle;
use crate::rpc::RpcServer;
use crate::utils::Result;

/// Chain node: serves `/health` and `/rpc`.
pub struct Node {
    cfg: NodeConfig,
}

impl Node {
    pub fn new(cfg: NodeConfig) -> Self {
        Self { cfg }
    }

    /// Bind the RPC server and start serving. Bind failure is returned
    /// before anything is spawned.
    pub async fn start(self) -> Result<(ServiceHandle, SocketAddr)> {
        let (mut svc, shutdown_rx) = ServiceHandle::new();

        let server = RpcServer::bind(self.cfg.bind_addr()?).await?;
        let addr = server.local_addr();
        svc.spawn("rpc-server", server.serve(shutdown_rx));

        info!("Kuber Chain running on {}", addr.port());
        Ok((svc, addr))
    }
}

/// NFT mint service node.
pub struct MintNode {
    cfg: MintConfig,
}

impl MintNode {
    pub fn new(cfg: MintConfig) -> Self {
        Self { cfg }
    }

    pub async fn start(self) -> Result<(ServiceHandle, SocketAddr)> {
        let (mut svc, shutdown_rx) = ServiceHandle::new();

        let store: Arc<dyn TokenStore> = Arc::new(FsTokenStore::open(&self.cfg.data_dir)?);
        let server = MintServer::bind(self.cfg.bind_addr()?, store).await?;
        let addr = server.local_addr();
        svc.spawn("mint-server", server.serve(shutdown_rx));

        info!(
            data_dir = %self.cfg.data_dir.display(),
            "Kuber NFT Mint running on {}",
            addr.port()
        );
        Ok((svc, addr))
    }
}
