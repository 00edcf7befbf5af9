//! Serde adapter for `u128` fields in human-readable formats.
//!
//! TOML has no integer type wider than `i64`, so human-readable output writes
//! values that fit in an `i64` as integers and larger ones as decimal strings.
//! Binary formats (bincode) use the native 16-byte encoding.
//!
//! Use with `#[serde(with = "ballot_types::serde_u128")]`.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serializer};
use std::fmt;

pub fn serialize<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
    if !serializer.is_human_readable() {
        return serializer.serialize_u128(*value);
    }
    match i64::try_from(*value) {
        Ok(small) => serializer.serialize_i64(small),
        Err(_) => serializer.serialize_str(&value.to_string()),
    }
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
    if deserializer.is_human_readable() {
        deserializer.deserialize_any(U128Visitor)
    } else {
        u128::deserialize(deserializer)
    }
}

struct U128Visitor;

impl<'de> Visitor<'de> for U128Visitor {
    type Value = u128;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative integer or a decimal string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<u128, E> {
        Ok(v as u128)
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<u128, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<u128, E> {
        u128::try_from(v).map_err(|_| E::custom(format!("negative value {v}")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<u128, E> {
        v.trim()
            .parse::<u128>()
            .map_err(|e| E::custom(format!("invalid integer {v:?}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Holder {
        #[serde(with = "crate::serde_u128")]
        value: u128,
    }

    #[test]
    fn small_values_are_json_integers() {
        let json = serde_json::to_string(&Holder { value: 42 }).unwrap();
        assert_eq!(json, r#"{"value":42}"#);
    }

    #[test]
    fn large_values_are_json_strings() {
        let h = Holder { value: u128::MAX };
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, format!(r#"{{"value":"{}"}}"#, u128::MAX));
        let back: Holder = serde_json::from_str(&json).unwrap();
        assert_eq!(back, h);
    }

    #[test]
    fn bincode_uses_native_width() {
        let h = Holder { value: u128::MAX - 1 };
        let bytes = bincode::serialize(&h).unwrap();
        assert_eq!(bytes.len(), 16);
        let back: Holder = bincode::deserialize(&bytes).unwrap();
        assert_eq!(back, h);
    }

    #[test]
    fn negative_integers_are_rejected() {
        assert!(serde_json::from_str::<Holder>(r#"{"value":-1}"#).is_err());
    }
}
