//! RPC protocol types shared by every resource module.
//!
//! Requests arrive as a JSON envelope carrying an action name and an untyped
//! parameter bag; responses carry a numeric status code alongside a
//! human-readable message. This module defines the envelope, the status
//! enumeration, the dispatch seam between the transport and the resource
//! modules, and the tolerant parameter decoder.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// Envelope
// ============================================================================

/// The outer JSON object wrapping every request.
///
/// Both `{"Action": ..., "Params": ...}` and the lowercase spellings are
/// accepted. A missing `Params` decodes as an empty parameter bag, and a
/// missing `Action` as the empty action name (which falls through to
/// unknown-action handling).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    /// The action name to dispatch on.
    #[serde(rename = "Action", alias = "action", default)]
    pub action: String,

    /// The untyped parameter bag for the action.
    #[serde(rename = "Params", alias = "params", default)]
    pub params: Value,
}

// ============================================================================
// Status codes
// ============================================================================

/// Response status codes.
///
/// A small closed enumeration serialized as bare integers: `Ok = 0`,
/// `ParamsError = 1`, `NotFound = 2`. No other codes exist; transport-level
/// failures are reported through HTTP status codes instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The action completed successfully.
    Ok,

    /// The parameter bag could not be decoded into the action's request shape.
    ParamsError,

    /// The addressed record does not exist.
    NotFound,
}

impl Status {
    /// The numeric wire representation of this status.
    pub const fn code(self) -> u32 {
        match self {
            Self::Ok => 0,
            Self::ParamsError => 1,
            Self::NotFound => 2,
        }
    }

    /// Parse a status from its wire representation.
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Ok),
            1 => Some(Self::ParamsError),
            2 => Some(Self::NotFound),
            _ => None,
        }
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.code())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u32::deserialize(deserializer)?;
        Self::from_code(code)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown status code {code}")))
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// Errors raised while routing an envelope to a handler.
///
/// These are transport-level failures. Domain outcomes (decode errors,
/// missing records) are reported in-band through [`Status`] instead.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No resource module is mounted at the requested path.
    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    /// The resource module has no handler for the requested action.
    #[error("Unknown action: {action} (resource {resource})")]
    UnknownAction {
        /// The resource the envelope was addressed to.
        resource: String,
        /// The unrecognized action name.
        action: String,
    },

    /// The handler's response could not be serialized.
    #[error("Response serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl DispatchError {
    /// Create an unknown-resource error.
    pub fn unknown_resource(resource: impl Into<String>) -> Self {
        Self::UnknownResource(resource.into())
    }

    /// Create an unknown-action error.
    pub fn unknown_action(resource: impl Into<String>, action: impl Into<String>) -> Self {
        Self::UnknownAction {
            resource: resource.into(),
            action: action.into(),
        }
    }
}

/// Dispatch seam between the transport and one resource module.
///
/// A resource module resolves action names to typed handlers and reports
/// every domain outcome inside the returned JSON value; only unknown actions
/// and serialization failures surface as [`DispatchError`].
#[async_trait]
pub trait ResourceDispatcher: Send + Sync {
    /// The path segment this resource is mounted under.
    fn resource(&self) -> &'static str;

    /// Names of the actions this resource handles.
    fn action_names(&self) -> Vec<&'static str>;

    /// Decode the parameter bag, invoke the action handler, and return the
    /// serialized response.
    async fn dispatch(&self, action: &str, params: Value) -> Result<Value, DispatchError>;
}

// ============================================================================
// Tolerant parameter decoding
// ============================================================================

/// Decode an untyped parameter bag into a typed request shape.
///
/// Unknown fields are ignored and missing fields take their defaults; a
/// `null` bag decodes the same as an empty object. A field whose value
/// cannot be converted to the target type fails the decode.
pub fn decode_params<T>(params: Value) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned,
{
    let params = match params {
        Value::Null => Value::Object(serde_json::Map::new()),
        other => other,
    };
    serde_json::from_value(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct SampleParams {
        #[serde(default)]
        id: String,
        #[serde(default)]
        count: u64,
    }

    #[test]
    fn test_envelope_pascal_case() {
        let envelope: Envelope =
            serde_json::from_value(json!({"Action": "create", "Params": {"Name": "a"}})).unwrap();
        assert_eq!(envelope.action, "create");
        assert_eq!(envelope.params, json!({"Name": "a"}));
    }

    #[test]
    fn test_envelope_lowercase_aliases() {
        let envelope: Envelope =
            serde_json::from_value(json!({"action": "list", "params": {}})).unwrap();
        assert_eq!(envelope.action, "list");
    }

    #[test]
    fn test_envelope_missing_fields_default() {
        let envelope: Envelope = serde_json::from_value(json!({})).unwrap();
        assert_eq!(envelope.action, "");
        assert_eq!(envelope.params, Value::Null);
    }

    #[test]
    fn test_status_serializes_as_bare_integer() {
        assert_eq!(serde_json::to_value(Status::Ok).unwrap(), json!(0));
        assert_eq!(serde_json::to_value(Status::ParamsError).unwrap(), json!(1));
        assert_eq!(serde_json::to_value(Status::NotFound).unwrap(), json!(2));
    }

    #[test]
    fn test_status_round_trip() {
        for status in [Status::Ok, Status::ParamsError, Status::NotFound] {
            let value = serde_json::to_value(status).unwrap();
            let parsed: Status = serde_json::from_value(value).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_status_rejects_unknown_code() {
        let result: Result<Status, _> = serde_json::from_value(json!(9));
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_params_ignores_unknown_fields() {
        let params: SampleParams =
            decode_params(json!({"id": "3", "count": 2, "extra": true})).unwrap();
        assert_eq!(params.id, "3");
        assert_eq!(params.count, 2);
    }

    #[test]
    fn test_decode_params_defaults_missing_fields() {
        let params: SampleParams = decode_params(json!({})).unwrap();
        assert_eq!(params, SampleParams::default());
    }

    #[test]
    fn test_decode_params_null_bag() {
        let params: SampleParams = decode_params(Value::Null).unwrap();
        assert_eq!(params, SampleParams::default());
    }

    #[test]
    fn test_decode_params_rejects_type_mismatch() {
        let result: Result<SampleParams, _> = decode_params(json!({"count": "three"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_action_display() {
        let err = DispatchError::unknown_action("cluster", "restart");
        assert_eq!(err.to_string(), "Unknown action: restart (resource cluster)");
    }
}
