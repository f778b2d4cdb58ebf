use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SERVICE_NAME: &str = "kuber-chain";
pub const JSONRPC_VERSION: &str = "2.0";
/// Result returned for every RPC call, whatever the method.
pub const STUB_RESULT: &str = "stub-response";

/// Body of `GET /health`. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self { service: SERVICE_NAME.into(), status: "ok".into() }
    }
}

/// JSON-RPC 2.0 response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub id: Value,
    pub result: Value,
}

impl RpcResponse {
    pub fn stub(id: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.into(),
            id,
            result: Value::String(STUB_RESULT.into()),
        }
    }
}
