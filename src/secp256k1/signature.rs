//! Module containing the ECDSA signature data model.

use crate::serialization;
use anyhow::{bail, Context as _, Result};
use ethnum::U256;
use k256::ecdsa::{self, RecoveryId};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// A secp256k1 ECDSA signature with an optional trailing recovery byte.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Signature {
    signature: ecdsa::Signature,
    v: Option<u8>,
}

impl Signature {
    /// Parses a signature from its `r || s` or `r || s || v` encoding.
    ///
    /// The recovery byte `v` is kept verbatim and only validated when the
    /// recovery ID is requested.
    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let bytes = bytes.as_ref();
        let (rs, v) = match bytes.len() {
            64 => (bytes, None),
            65 => (&bytes[..64], Some(bytes[64])),
            len => bail!("invalid signature length of {len} bytes, expected 64 or 65"),
        };
        let signature =
            ecdsa::Signature::from_slice(rs).context("invalid signature R or S value")?;
        Ok(Self { signature, v })
    }

    /// Creates a signature from its raw parts.
    pub fn from_parts(r: [u8; 32], s: [u8; 32], v: Option<u8>) -> Result<Self> {
        let signature =
            ecdsa::Signature::from_scalars(r, s).context("invalid signature R or S value")?;
        Ok(Self { signature, v })
    }

    /// Returns the signature's 32-byte R-value in big-endian representation.
    pub fn r(&self) -> U256 {
        let (r, _) = self.signature.split_bytes();
        U256::from_be_bytes(r.into())
    }

    /// Returns the signature's 32-byte S-value in big-endian representation.
    pub fn s(&self) -> U256 {
        let (_, s) = self.signature.split_bytes();
        U256::from_be_bytes(s.into())
    }

    /// Returns the raw trailing recovery byte, if any.
    pub fn v(&self) -> Option<u8> {
        self.v
    }

    /// Returns the recovery ID encoded in the trailing recovery byte.
    ///
    /// Both raw recovery IDs `0..=3` and Ethereum style `27..=30` values are
    /// accepted.
    pub fn recovery_id(&self) -> Result<RecoveryId> {
        let v = self.v.context("signature has no recovery byte")?;
        let id = match v {
            0..=3 => v,
            27..=30 => v - 27,
            _ => bail!("invalid recovery byte {v}, must be 0-3 or 27-30"),
        };
        RecoveryId::from_byte(id).context("invalid recovery ID")
    }

    /// Returns the signature bytes, including the recovery byte if present.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.signature.to_bytes().to_vec();
        bytes.extend(self.v);
        bytes
    }

    /// Returns the underlying ECDSA signature normalized to its low-S form,
    /// along with whether normalization took place.
    ///
    /// Negating S negates the ephemeral point, so the Y-parity of a recovery
    /// ID for the normalized signature flips when this returns `true`.
    pub(super) fn normalized(&self) -> (ecdsa::Signature, bool) {
        match self.signature.normalize_s() {
            Some(signature) => (signature, true),
            None => (self.signature.clone(), false),
        }
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.signature.to_bytes()))?;
        if let Some(v) = self.v {
            write!(f, "{v:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for Signature {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(serialization::permissive_hex(s)?)
    }
}

impl Serialize for Signature {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialization::string::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serialization::string::deserialize(deserializer)
    }
}
