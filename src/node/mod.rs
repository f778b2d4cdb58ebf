pub mod node;
pub mod config;
pub mod service_handle;
pub mod cli;

pub use node::{MintNode, Node};
pub use config::{FileConfig, MintConfig, NodeConfig};
pub use service_handle::ServiceHandle;
pub use cli::run_cli;
