use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::mint::store::TokenStore;
use crate::mint::types::{is_truthy, ErrorBody, MintHealth, MintResponse, Token};
use crate::utils::metrics::{self, METRICS};
use crate::utils::KuberError;

#[derive(Clone)]
pub struct MintState {
    pub store: Arc<dyn TokenStore>,
}

#[derive(Debug, Error)]
pub enum MintError {
    #[error("invalid JSON body")]
    InvalidBody,
    #[error("owner & metadata required")]
    MissingFields,
    #[error("{0}")]
    Store(#[from] KuberError),
}

impl MintError {
    fn status(&self) -> StatusCode {
        match self {
            MintError::InvalidBody | MintError::MissingFields => StatusCode::BAD_REQUEST,
            MintError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for MintError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

/// GET /health
pub async fn health() -> Json<MintHealth> {
    Json(MintHealth::ok())
}

/// POST /mint
///
/// Only `application/json` bodies are parsed; anything else reads as `{}`.
pub async fn mint(
    State(state): State<MintState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<MintResponse>, MintError> {
    METRICS.inc_counter(metrics::MINT_REQUESTS);

    let body: &[u8] = if is_json_content(&headers) { &body[..] } else { &[] };
    let mut req = parse_body(body).map_err(|e| {
        METRICS.inc_counter(metrics::MINT_REJECTED);
        e
    })?;

    let owner = req.remove("owner").filter(is_truthy);
    let metadata = req.remove("metadata").filter(is_truthy);
    let (owner, metadata) = match (owner, metadata) {
        (Some(o), Some(m)) => (o, m),
        _ => {
            METRICS.inc_counter(metrics::MINT_REJECTED);
            return Err(MintError::MissingFields);
        }
    };

    let token = Token::new(owner, metadata);
    if let Err(e) = state.store.put(&token).await {
        error!(id = %token.id, store = %state.store.name(), "failed to persist token: {}", e);
        return Err(e.into());
    }

    METRICS.inc_counter(metrics::TOKENS_MINTED);
    info!(id = %token.id, "minted token");
    Ok(Json(MintResponse { success: true, token }))
}

fn is_json_content(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map_or(false, |mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

/// An empty body counts as an empty object.
fn parse_body(body: &[u8]) -> Result<Map<String, Value>, MintError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Ok(Map::new()),
        Err(e) => {
            warn!("failed to decode mint request body: {}", e);
            Err(MintError::InvalidBody)
        }
    }
}
