//! NFT mint service
//!
//! - `GET /health`: fixed liveness payload
//! - `POST /mint`: record `{owner, metadata}` as a new token with a random id
//!
//! Tokens are written through a `TokenStore`; `FsTokenStore` keeps one JSON
//! file per token in the configured data directory.

pub mod handlers;
pub mod server;
pub mod store;
pub mod types;

pub use server::{build_router, MintServer};
pub use store::{FsTokenStore, TokenStore};
pub use types::{MintResponse, Token};
