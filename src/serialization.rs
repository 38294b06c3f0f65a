//! Module with hex and serde serialization helpers.

use anyhow::Result;

/// Decodes a hexadecimal string with an optional `0x` prefix.
pub fn permissive_hex(s: &str) -> Result<Vec<u8>> {
    let s = s.trim();
    let s = s.strip_prefix("0x").unwrap_or(s);
    Ok(hex::decode(s)?)
}

/// Serialization methods for types with string representations.
///
/// Values are serialized with their `Display` implementation and deserialized
/// with their `FromStr` implementation.
pub mod string {
    use serde::{
        de::{self, Deserializer},
        Deserialize as _, Serializer,
    };
    use std::{borrow::Cow, fmt::Display, str::FromStr};

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let s = Cow::<str>::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
