//! Thin wrappers over `serde_json` that log failures before surfacing them.
//!
//! Serialization failures in the services are almost always programming
//! errors; logging them at the call site keeps the evidence next to the
//! payload that triggered them while the error still propagates to the
//! caller.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::error;

/// A JSON conversion failure.
#[derive(Debug, thiserror::Error)]
pub enum JsonError {
    #[error("json serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("json deserialization failed: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// Serializes `value` to a compact JSON string.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string(value).map_err(|e| {
        error!(error = %e, "failed to serialize value to json");
        JsonError::Serialize(e)
    })
}

/// Serializes `value` to a pretty-printed JSON string.
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string_pretty(value).map_err(|e| {
        error!(error = %e, "failed to serialize value to pretty json");
        JsonError::Serialize(e)
    })
}

/// Deserializes a value from a JSON string.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, JsonError> {
    serde_json::from_str(json).map_err(|e| {
        error!(error = %e, "failed to deserialize json");
        JsonError::Deserialize(e)
    })
}

/// Converts `value` into a loosely-typed JSON tree.
pub fn to_value<T: Serialize>(value: &T) -> Result<Value, JsonError> {
    serde_json::to_value(value).map_err(|e| {
        error!(error = %e, "failed to convert value to json tree");
        JsonError::Serialize(e)
    })
}

/// Converts a loosely-typed JSON tree into a concrete value.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, JsonError> {
    serde_json::from_value(value).map_err(|e| {
        error!(error = %e, "failed to convert json tree to value");
        JsonError::Deserialize(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        id: crate::SnowflakeId,
        name: String,
    }

    fn sample() -> Sample {
        Sample {
            id: crate::SnowflakeId::from_parts(1_000, 3, 7),
            name: "alice".into(),
        }
    }

    #[test]
    fn string_round_trip() {
        let json = to_json(&sample()).unwrap();
        let back: Sample = from_json(&json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn pretty_output_is_parseable() {
        let json = to_json_pretty(&sample()).unwrap();
        assert!(json.contains('\n'));
        let back: Sample = from_json(&json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn value_round_trip() {
        let value = to_value(&sample()).unwrap();
        assert_eq!(value["name"], "alice");
        let back: Sample = from_value(value).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn malformed_input_is_an_error() {
        assert!(matches!(
            from_json::<Sample>("{\"id\": oops"),
            Err(JsonError::Deserialize(_))
        ));
    }
}
