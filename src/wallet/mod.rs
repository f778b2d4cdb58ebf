//! Wallet helpers.

use rand::RngCore;

/// Length of an address payload in bytes (40 hex chars).
pub const ADDRESS_BYTES: usize = 20;

/// Random `0x`-prefixed address with 40 lowercase hex digits.
pub fn generate_address() -> String {
    let mut bytes = [0u8; ADDRESS_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    format!("0x{}", hex::encode(bytes))
}
