//! Hashing and hex helpers shared with the node tooling

use sha3::{Digest, Keccak256};

/// Keccak-256 of `input`, `0x`-prefixed lowercase hex
pub fn sha3(input: &str) -> String {
    let digest = Keccak256::digest(input.as_bytes());
    bytes_to_hex(&digest)
}

/// `0x`-prefixed lowercase hex of `bytes`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Hex of `bytes` without the `0x` prefix, the form content hashes use
pub fn bytes_to_bare_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
