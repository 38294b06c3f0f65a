//! Module implementing `secp256k1` public keys.
//!
//! Public keys are accepted in three encodings: the 33-byte compressed SEC1
//! encoding, the 65-byte uncompressed SEC1 encoding, and a 64-byte raw
//! encoding that is the uncompressed encoding without its leading tag byte.
//! The compressed encoding is canonical.

mod signature;

pub use self::signature::Signature;
use crate::{
    hash,
    key::{Kind, Verifiable},
    serialization,
};
use anyhow::{bail, Context as _, Result};
use ethnum::U256;
use k256::{
    ecdsa::{signature::hazmat::PrehashVerifier as _, RecoveryId, VerifyingKey},
    elliptic_curve::sec1::{FromEncodedPoint as _, ToEncodedPoint as _},
    EncodedPoint, FieldBytes,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{
    fmt::{self, Debug, Display, Formatter},
    str::FromStr,
};

/// Length of a compressed SEC1 encoded public key.
pub const COMPRESSED_LENGTH: usize = 33;

/// Length of a raw public key.
pub const RAW_LENGTH: usize = 64;

/// Length of an uncompressed SEC1 encoded public key.
pub const UNCOMPRESSED_LENGTH: usize = 65;

/// SEC1 tag byte for uncompressed points.
const UNCOMPRESSED_TAG: u8 = 0x04;

/// A public key on the `secp256k1` curve.
///
/// The wrapped point is always a valid, non-identity curve point.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct PublicKey(k256::PublicKey);

impl PublicKey {
    /// Parses a public key from its compressed, raw or uncompressed encoding.
    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let bytes = bytes.as_ref();
        decode(bytes)
            .inspect_err(|err| {
                tracing::debug!(length = bytes.len(), %err, "rejected public key encoding")
            })
            .map(Self)
            .context("invalid public key")
    }

    /// Creates a public key from its affine coordinates.
    pub fn from_coordinates(x: U256, y: U256) -> Result<Self> {
        let point = EncodedPoint::from_affine_coordinates(
            &FieldBytes::from(x.to_be_bytes()),
            &FieldBytes::from(y.to_be_bytes()),
            false,
        );
        let key = Option::<k256::PublicKey>::from(k256::PublicKey::from_encoded_point(&point))
            .context("point is not on the curve")
            .context("invalid public key")?;
        Ok(Self(key))
    }

    /// Recovers the public key that signed a message.
    ///
    /// The signature must have a trailing recovery byte.
    pub fn recover(message: impl AsRef<[u8]>, signature: impl AsRef<[u8]>) -> Result<Self> {
        let signature = Signature::from_bytes(signature)?;
        let recovery_id = signature.recovery_id()?;

        let (signature, normalized) = signature.normalized();
        let recovery_id = if normalized {
            RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced())
        } else {
            recovery_id
        };

        let key =
            VerifyingKey::recover_from_prehash(&hash::sha256(message), &signature, recovery_id)
                .context("unable to recover public key from signature")?;
        Ok(Self::from(&key))
    }

    /// Returns the compressed SEC1 encoding of the public key.
    pub fn bytes(&self) -> [u8; COMPRESSED_LENGTH] {
        self.0
            .to_encoded_point(true)
            .as_bytes()
            .try_into()
            .expect("unexpected compressed public key length")
    }

    /// Returns the uncompressed SEC1 encoding of the public key.
    pub fn uncompressed_bytes(&self) -> [u8; UNCOMPRESSED_LENGTH] {
        self.0
            .to_encoded_point(false)
            .as_bytes()
            .try_into()
            .expect("unexpected uncompressed public key length")
    }

    /// Returns the raw encoding of the public key, that is the concatenation
    /// of its 32-byte big-endian X and Y coordinates.
    pub fn raw_bytes(&self) -> [u8; RAW_LENGTH] {
        let mut raw = [0; RAW_LENGTH];
        raw.copy_from_slice(&self.uncompressed_bytes()[1..]);
        raw
    }

    /// Returns the affine X and Y coordinates of the public key.
    pub fn coordinates(&self) -> (U256, U256) {
        let raw = self.raw_bytes();
        let (mut x, mut y) = ([0; 32], [0; 32]);
        x.copy_from_slice(&raw[..32]);
        y.copy_from_slice(&raw[32..]);
        (U256::from_be_bytes(x), U256::from_be_bytes(y))
    }

    /// Returns the kind of the public key.
    pub fn kind(&self) -> Kind {
        Kind::Secp256k1
    }

    /// Returns the public key as a generic ECDSA verifying key.
    pub fn ecdsa(&self) -> VerifyingKey {
        VerifyingKey::from(&self.0)
    }

    /// Verifies an ECDSA signature for the specified message.
    ///
    /// The signature is either 64 bytes `r || s` or 65 bytes `r || s || v`
    /// where the trailing recovery byte is ignored. The message is hashed with
    /// SHA-256 before verification. Any malformed signature is reported as
    /// invalid.
    pub fn verify(&self, message: impl AsRef<[u8]>, signature: impl AsRef<[u8]>) -> bool {
        match Signature::from_bytes(signature) {
            Ok(signature) => self.verify_signature(message, &signature),
            Err(err) => {
                tracing::debug!(%err, "malformed signature");
                false
            }
        }
    }

    /// Verifies a parsed ECDSA signature for the specified message.
    ///
    /// Both low-S and high-S forms of a signature are accepted.
    pub fn verify_signature(&self, message: impl AsRef<[u8]>, signature: &Signature) -> bool {
        let (signature, _) = signature.normalized();
        let digest = hash::sha256(message);
        match self.ecdsa().verify_prehash(&digest, &signature) {
            Ok(()) => true,
            Err(_) => {
                tracing::debug!(key = %self, "signature verification failed");
                false
            }
        }
    }
}

fn decode(bytes: &[u8]) -> Result<k256::PublicKey> {
    let key = match bytes.len() {
        COMPRESSED_LENGTH | UNCOMPRESSED_LENGTH => k256::PublicKey::from_sec1_bytes(bytes)?,
        RAW_LENGTH => {
            let mut tagged = [0; UNCOMPRESSED_LENGTH];
            tagged[0] = UNCOMPRESSED_TAG;
            tagged[1..].copy_from_slice(bytes);
            k256::PublicKey::from_sec1_bytes(&tagged)?
        }
        length => bail!(
            "unsupported encoding length of {length} bytes, expected \
             {COMPRESSED_LENGTH}, {RAW_LENGTH} or {UNCOMPRESSED_LENGTH}"
        ),
    };
    Ok(key)
}

impl From<&VerifyingKey> for PublicKey {
    fn from(key: &VerifyingKey) -> Self {
        Self(key.into())
    }
}

impl Verifiable for PublicKey {
    fn kind(&self) -> Kind {
        Kind::Secp256k1
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.bytes().to_vec()
    }

    fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        PublicKey::verify(self, message, signature)
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_tuple("PublicKey")
            .field(&format_args!("{self}"))
            .finish()
    }
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.bytes()))
    }
}

impl FromStr for PublicKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(serialization::permissive_hex(s)?)
    }
}

impl Serialize for PublicKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialization::string::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serialization::string::deserialize(deserializer)
    }
}
