//! Codecs for the non-standard encodings used by the fields API.
//!
//! * booleans that travel as integers (`0` / `1`);
//! * item lists that travel as one string, `"key, value"` per line;
//! * integers of arbitrary precision.
//!
//! The `serde` submodules plug these into `#[serde(with = ...)]`.

use indexmap::IndexMap;
use serde_json::Value;

use crate::errors::DecodeError;

pub const ITEM_DELIMITER: char = '\n';
pub const KEY_VALUE_SEPARATOR: char = ',';

/// Decode an integer token as a boolean: `0` is `false`, any other integer is `true`
pub fn int_to_bool(value: &Value) -> Result<bool, DecodeError> {
    match value {
        Value::Number(number) => {
            let text = number.to_string();
            if !is_integer_literal(&text) {
                return Err(DecodeError::ExpectedInteger(text));
            }
            Ok(text.trim_start_matches('-').bytes().any(|digit| digit != b'0'))
        }
        other => Err(DecodeError::ExpectedInteger(other.to_string())),
    }
}

pub fn bool_to_int(value: bool) -> u8 {
    u8::from(value)
}

/// `true` for an optional minus sign followed by decimal digits only
pub fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Decode `"1, Red\n2, Green"` into an ordered `{"1": "Red", "2": "Green"}`.
///
/// Only the first comma of an entry separates key from value. Blank entries
/// are skipped; a repeated key keeps its first position and takes the last value.
pub fn decode_items(encoded: &str) -> Result<IndexMap<String, String>, DecodeError> {
    let mut items = IndexMap::new();
    for entry in encoded.split(ITEM_DELIMITER).map(str::trim) {
        if entry.is_empty() {
            continue;
        }
        let (key, value) = entry
            .split_once(KEY_VALUE_SEPARATOR)
            .ok_or_else(|| DecodeError::MissingItemSeparator(entry.to_string()))?;
        items.insert(key.trim().to_string(), value.trim().to_string());
    }
    Ok(items)
}

/// Inverse of [`decode_items`].
///
/// Keys or values holding a line break, or keys holding a comma, do not
/// survive a round trip. No escaping exists on the wire for them.
pub fn encode_items(items: &IndexMap<String, String>) -> String {
    items
        .iter()
        .map(|(key, value)| format!("{key}{KEY_VALUE_SEPARATOR} {value}"))
        .collect::<Vec<_>>()
        .join(&ITEM_DELIMITER.to_string())
}

/// `null` reads as the type's default, as for a missing member
pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de> + Default,
{
    <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Option::unwrap_or_default)
}

pub mod int_bool {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(super::bool_to_int(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(false),
            value => super::int_to_bool(&value).map_err(D::Error::custom),
        }
    }
}

pub mod delimited_map {
    use indexmap::IndexMap;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    use crate::errors::DecodeError;

    pub fn serialize<S: Serializer>(
        items: &Option<IndexMap<String, String>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match items {
            Some(items) => serializer.serialize_str(&super::encode_items(items)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<IndexMap<String, String>>, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            Value::String(encoded) => super::decode_items(&encoded).map(Some).map_err(D::Error::custom),
            other => Err(D::Error::custom(DecodeError::UnexpectedType {
                member: "items",
                expected: "a string",
                found: other.to_string(),
            })),
        }
    }
}

pub mod integer {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::{Number, Value};

    use crate::errors::DecodeError;

    pub fn serialize<S: Serializer>(value: &Option<Number>, serializer: S) -> Result<S::Ok, S::Error> {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Number>, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            Value::Number(number) if super::is_integer_literal(&number.to_string()) => Ok(Some(number)),
            Value::Number(number) => Err(D::Error::custom(DecodeError::InvalidInteger(number.to_string()))),
            other => Err(D::Error::custom(DecodeError::UnexpectedType {
                member: "defaultValue",
                expected: "an integer",
                found: other.to_string(),
            })),
        }
    }
}
