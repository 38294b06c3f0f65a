//! Module implementing the registry of supported public key kinds.
//!
//! Each kind of public key is a variant of [`PublicKey`], and all kinds share
//! the signature verification capability described by [`Verifiable`].

use crate::{secp256k1, serialization};
use anyhow::{bail, Context as _, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// A kind of public key.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Kind {
    /// ECDSA over the `secp256k1` curve.
    Secp256k1,
}

impl Kind {
    /// All supported key kinds.
    pub const ALL: &'static [Kind] = &[Kind::Secp256k1];

    /// Returns the identifier of the key kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Secp256k1 => "secp256k1",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Kind::ALL.iter().find(|kind| kind.as_str() == s) {
            Some(kind) => Ok(*kind),
            None => bail!("unsupported key kind '{s}'"),
        }
    }
}

/// A public key that can verify signatures.
pub trait Verifiable {
    /// Returns the kind of the public key.
    fn kind(&self) -> Kind;

    /// Returns the canonical encoding of the public key.
    fn to_bytes(&self) -> Vec<u8>;

    /// Verifies a signature for the specified message. Malformed signatures
    /// are reported as invalid.
    fn verify(&self, message: &[u8], signature: &[u8]) -> bool;
}

/// A public key of any supported kind.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PublicKey {
    Secp256k1(secp256k1::PublicKey),
}

impl PublicKey {
    /// Parses a public key of the specified kind from its encoding.
    pub fn from_bytes(kind: Kind, bytes: impl AsRef<[u8]>) -> Result<Self> {
        match kind {
            Kind::Secp256k1 => Ok(Self::Secp256k1(secp256k1::PublicKey::from_bytes(bytes)?)),
        }
    }

    fn as_verifiable(&self) -> &dyn Verifiable {
        match self {
            Self::Secp256k1(key) => key,
        }
    }
}

impl Verifiable for PublicKey {
    fn kind(&self) -> Kind {
        self.as_verifiable().kind()
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.as_verifiable().to_bytes()
    }

    fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        self.as_verifiable().verify(message, signature)
    }
}

impl From<secp256k1::PublicKey> for PublicKey {
    fn from(key: secp256k1::PublicKey) -> Self {
        Self::Secp256k1(key)
    }
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}:0x{}", self.kind(), hex::encode(self.to_bytes()))
    }
}

impl FromStr for PublicKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, key) = s
            .split_once(':')
            .context("public key missing '<kind>:' prefix")?;
        Self::from_bytes(kind.parse()?, serialization::permissive_hex(key)?)
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
