//! Kuber Chain node.
//!
//! Serves a fixed health payload and a JSON-RPC 2.0 endpoint that answers
//! every call with a stub result. The same binary also runs the NFT mint
//! service and generates wallet addresses.

pub mod node;
pub mod rpc;
pub mod mint;
pub mod wallet;
pub mod utils;

#[cfg(test)]
mod tests;

