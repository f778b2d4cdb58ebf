//! RPC module
//!
//! - `GET /health`: fixed liveness payload
//! - `POST /rpc`: JSON-RPC 2.0 envelope; every call returns the stub result
//!   and echoes the request `id`
//! - `GET /metrics`: process counters in Prometheus text format

pub mod server;
pub mod handlers;
pub mod types;

pub use server::{build_router, RpcServer};
pub use types::{HealthResponse, RpcResponse};
