use axum::{
    body::Bytes,
    http::header,
    response::IntoResponse,
    Json,
};
use serde::de::Error as _;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::rpc::types::{HealthResponse, RpcResponse};
use crate::utils::metrics::{self, METRICS};

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    METRICS.inc_counter(metrics::HEALTH_REQUESTS);
    Json(HealthResponse::ok())
}

/// POST /rpc
///
/// Every call gets the stub result. Only `id` is read from the body; a body
/// that does not decode is logged and answered with `id: null`.
pub async fn rpc(body: Bytes) -> Json<RpcResponse> {
    METRICS.inc_counter(metrics::RPC_REQUESTS);

    let id = match decode_request(&body) {
        Ok(mut req) => {
            debug!(method = ?req.get("method"), "rpc request");
            req.remove("id").unwrap_or(Value::Null)
        }
        Err(e) => {
            METRICS.inc_counter(metrics::RPC_DECODE_ERRORS);
            warn!("failed to decode rpc request body: {}", e);
            Value::Null
        }
    };

    Json(RpcResponse::stub(id))
}

/// GET /metrics
pub async fn metrics() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        METRICS.render(),
    )
}

/// Decode the first JSON value of `body` as an object. Bytes after that
/// value are not inspected; invalid UTF-8 becomes U+FFFD.
pub fn decode_request(body: &[u8]) -> serde_json::Result<Map<String, Value>> {
    let text = String::from_utf8_lossy(body);
    let mut stream = serde_json::Deserializer::from_str(&text).into_iter::<Map<String, Value>>();
    match stream.next() {
        Some(req) => req,
        None => Err(serde_json::Error::custom("empty request body")),
    }
}
