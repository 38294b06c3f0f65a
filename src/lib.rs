//! Public keys for ECDSA signature verification.
//!
//! This crate implements parsing and encoding `secp256k1` public keys in their
//! compressed, raw and uncompressed forms, verifying ECDSA signatures over
//! arbitrary messages, and a small key-kind registry for handling public keys
//! of different kinds behind a single type.

pub mod hash;
pub mod key;
pub mod secp256k1;
mod serialization;

pub use self::key::{Kind, Verifiable};

#[cfg(test)]
mod fixtures;
