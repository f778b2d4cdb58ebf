use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use crate::node::config::{FileConfig, MintConfig, NodeConfig};
use crate::node::{MintNode, Node, ServiceHandle};
use crate::utils::init_logging;
use crate::wallet::generate_address;

/// CLI for the Kuber Chain node and its companion services.
#[derive(Parser, Debug)]
#[clap(name = "kuber-node", version)]
pub struct Cli {
    /// Optional TOML config file
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[clap(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Defaults to `run`
    #[clap(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Cmd {
    /// Run the chain node (health + JSON-RPC)
    Run {
        /// bind address (IP)
        #[clap(long)]
        host: Option<String>,

        /// port; falls back to $PORT, then 26657
        #[clap(long)]
        port: Option<u16>,
    },
    /// Run the NFT mint service
    Mint {
        /// bind address (IP)
        #[clap(long)]
        host: Option<String>,

        /// port; falls back to $PORT, then 3001
        #[clap(long)]
        port: Option<u16>,

        /// token directory; falls back to $DATA_DIR, then ./data
        #[clap(long)]
        data_dir: Option<PathBuf>,
    },
    /// Generate random wallet addresses
    Address {
        #[clap(long, short = 'n', default_value_t = 1)]
        count: usize,
    },
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let file = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };

    match cli.cmd.unwrap_or(Cmd::Run { host: None, port: None }) {
        Cmd::Run { host, port } => {
            let cfg = NodeConfig::resolve(host, port, &file)?;
            let (svc, _addr) = Node::new(cfg).start().await?;
            wait_and_shutdown(svc).await
        }
        Cmd::Mint { host, port, data_dir } => {
            let cfg = MintConfig::resolve(host, port, data_dir, &file)?;
            let (svc, _addr) = MintNode::new(cfg).start().await?;
            wait_and_shutdown(svc).await
        }
        Cmd::Address { count } => {
            for _ in 0..count {
                println!("{}", generate_address());
            }
            Ok(())
        }
    }
}

async fn wait_and_shutdown(svc: ServiceHandle) -> Result<()> {
    tokio::signal::ctrl_c().await?;
    info!("Shutting down...");
    svc.shutdown().await?;
    info!("Stopped");
    Ok(())
}
