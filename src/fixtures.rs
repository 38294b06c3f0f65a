//! Module containing deterministic keys for testing.

use hex_literal::hex;

/// Alice's public key as raw, untagged affine coordinates.
pub const ALICE_RAW: [u8; 64] = hex!(
    "69d908510e355beb1d5bf2df8129e5b6401e1969891e8016a0b2300739bbb006"
    "87055e5924a2fd8dd35f069dc14d8147aa11c1f7e2f271573487e1beeb2be9d0"
);

/// Alice's public key in compressed SEC1 encoding.
pub const ALICE_COMPRESSED: [u8; 33] =
    hex!("0269d908510e355beb1d5bf2df8129e5b6401e1969891e8016a0b2300739bbb006");

/// Bob's public key as raw, untagged affine coordinates.
pub const BOB_RAW: [u8; 64] = hex!(
    "bdf6fb97c97c126b492186a4d5b28f34f0671a5aacc974da3bde0be93e45a1c5"
    "0f89ceff72bd04ac9e25a04a1a6cb010aedaf65f91cec8ebe75901c49b63355d"
);

/// Bob's public key in compressed SEC1 encoding.
pub const BOB_COMPRESSED: [u8; 33] =
    hex!("03bdf6fb97c97c126b492186a4d5b28f34f0671a5aacc974da3bde0be93e45a1c5");

/// A signing secret used for generating test signatures.
pub const SIGNER_SECRET: [u8; 32] =
    hex!("4f3edf983ac636a65a842ce7c78d9aa706d3b113bce9c46f30d7d21715b23b1d");

/// A second signing secret, for signatures made by the wrong key.
pub const OTHER_SECRET: [u8; 32] =
    hex!("6cbed15c793ce57650b9877cf6fa156fbef513c4e6134f022a85b1ffdd59b2a1");

/// Returns the 65-byte uncompressed SEC1 encoding for raw coordinates.
pub fn uncompressed(raw: [u8; 64]) -> [u8; 65] {
    let mut bytes = [0; 65];
    bytes[0] = 0x04;
    bytes[1..].copy_from_slice(&raw);
    bytes
}
