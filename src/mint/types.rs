use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};

pub const MINT_SERVICE_NAME: &str = "kuber-nft-mint";
pub const TOKEN_ID_LEN: usize = 10;

/// URL-safe id alphabet
const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Body of the mint service `GET /health`. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MintHealth {
    pub status: String,
    pub service: String,
}

impl MintHealth {
    pub fn ok() -> Self {
        Self { status: "ok".into(), service: MINT_SERVICE_NAME.into() }
    }
}

/// A minted token, persisted as `<id>.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub id: String,
    pub owner: Value,
    pub metadata: Value,
    /// milliseconds since the Unix epoch
    pub time: u64,
}

impl Token {
    pub fn new(owner: Value, metadata: Value) -> Self {
        Self { id: new_token_id(), owner, metadata, time: now_millis() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MintResponse {
    pub success: bool,
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn new_token_id() -> String {
    let mut rng = rand::thread_rng();
    (0..TOKEN_ID_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

pub fn is_valid_token_id(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| ID_ALPHABET.contains(&b))
}

/// Loose truthiness for required request fields: null, false, zero and the
/// empty string do not count as provided.
pub fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
