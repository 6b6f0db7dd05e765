//! The tagged success/error wrapper every enveloped endpoint returns.
//!
//! Wire shape:
//!
//! ```text
//! { "type": "Resp",  "value": <V> }
//! { "type": "Error", "value": { "description": "<string>" } }
//! ```
//!
//! Decoding looks at the top-level `type` field only. A payload that itself
//! contains a `type` key is never mistaken for an envelope.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, Result};

const RESP_TAG: &str = "Resp";
const ERROR_TAG: &str = "Error";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum JsonResponse<V> {
    Resp(V),
    Error(ApiErrorResponse),
}

/// Payload of an `Error` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub description: String,
}

impl ApiErrorResponse {
    pub fn new<S: Into<String>>(description: S) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl From<ApiErrorResponse> for ApiError {
    fn from(err: ApiErrorResponse) -> Self {
        ApiError::Api {
            description: err.description,
        }
    }
}

impl<V> JsonResponse<V> {
    pub fn okay(value: V) -> Self {
        Self::Resp(value)
    }

    pub fn error<S: Into<String>>(description: S) -> Self {
        Self::Error(ApiErrorResponse::new(description))
    }

    pub fn ok(self) -> std::result::Result<V, ApiErrorResponse> {
        match self {
            Self::Resp(v) => Ok(v),
            Self::Error(e) => Err(e),
        }
    }

    pub fn as_ok(&self) -> std::result::Result<&V, &ApiErrorResponse> {
        match self {
            Self::Resp(v) => Ok(v),
            Self::Error(e) => Err(e),
        }
    }

    pub fn map<N, F: FnOnce(V) -> N>(self, func: F) -> JsonResponse<N> {
        match self {
            Self::Resp(v) => JsonResponse::Resp(func(v)),
            Self::Error(e) => JsonResponse::Error(e),
        }
    }
}

/// Untyped view of an envelope, so the tag can be checked before the
/// payload is committed to `V` or `ApiErrorResponse`.
#[derive(Deserialize)]
struct RawEnvelope {
    #[serde(rename = "type")]
    tag: String,
    #[serde(default)]
    value: Value,
}

impl<V: DeserializeOwned> JsonResponse<V> {
    /// Decode an envelope from a response body.
    ///
    /// Unknown tags fail with `UnrecognizedEnvelope` instead of being
    /// treated as errors.
    pub fn from_body(body: &str) -> Result<Self> {
        let raw: RawEnvelope = serde_json::from_str(body).map_err(ApiError::Deserialization)?;
        match raw.tag.as_str() {
            RESP_TAG => serde_json::from_value(raw.value)
                .map(Self::Resp)
                .map_err(ApiError::Deserialization),
            ERROR_TAG => serde_json::from_value(raw.value)
                .map(Self::Error)
                .map_err(ApiError::Deserialization),
            _ => Err(ApiError::UnrecognizedEnvelope { tag: raw.tag }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_adjacently_tagged() {
        let resp = serde_json::to_value(JsonResponse::okay(json!({"a": 1}))).unwrap();
        assert_eq!(resp, json!({"type": "Resp", "value": {"a": 1}}));

        let err = serde_json::to_value(JsonResponse::<()>::error("nope")).unwrap();
        assert_eq!(err, json!({"type": "Error", "value": {"description": "nope"}}));
    }

    #[test]
    fn decodes_success() {
        let env: JsonResponse<Vec<u32>> =
            JsonResponse::from_body(r#"{"type":"Resp","value":[1,2,3]}"#).unwrap();
        assert_eq!(env, JsonResponse::Resp(vec![1, 2, 3]));
    }

    #[test]
    fn decodes_error() {
        let env: JsonResponse<Value> =
            JsonResponse::from_body(r#"{"type":"Error","value":{"description":"Addon not found"}}"#)
                .unwrap();
        assert_eq!(env.ok().unwrap_err().description, "Addon not found");
    }

    #[test]
    fn nested_type_field_is_payload() {
        let body = r#"{"type":"Resp","value":{"type":"Error","value":{"description":"x"}}}"#;
        let env: JsonResponse<Value> = JsonResponse::from_body(body).unwrap();
        assert_eq!(
            env.ok().unwrap(),
            json!({"type": "Error", "value": {"description": "x"}})
        );
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = JsonResponse::<Value>::from_body(r#"{"type":"Redirect","value":"/"}"#).unwrap_err();
        assert!(matches!(err, ApiError::UnrecognizedEnvelope { ref tag } if tag == "Redirect"));
    }

    #[test]
    fn missing_tag_is_a_parse_failure() {
        let err = JsonResponse::<Value>::from_body(r#"{"value":1}"#).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn map_and_as_ok() {
        let env = JsonResponse::okay(2).map(|v| v * 10);
        assert_eq!(env.as_ok(), Ok(&20));
        let err: JsonResponse<i32> = JsonResponse::error("bad");
        assert_eq!(err.map(|v| v + 1).as_ok().unwrap_err().description, "bad");
    }

    #[test]
    fn error_payload_converts_to_api_error() {
        let err: ApiError = ApiErrorResponse::new("denied").into();
        assert_eq!(err.to_string(), "denied");
    }
}
