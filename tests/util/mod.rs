#![allow(dead_code)]

#[path = "../../src/fixtures.rs"]
mod fixtures;

pub use fixtures::*;
use k256::ecdsa::SigningKey;

/// Signs a message with a test secret, returning the signer's public key and
/// the 65-byte `r || s || v` signature.
pub fn sign(secret: [u8; 32], message: &[u8]) -> (pubkey::secp256k1::PublicKey, Vec<u8>) {
    let key = SigningKey::from_slice(&secret).unwrap();
    let (signature, recovery_id) = key.sign_recoverable(message).unwrap();

    let mut bytes = signature.to_bytes().to_vec();
    bytes.push(recovery_id.to_byte());
    (key.verifying_key().into(), bytes)
}
