//! Pure request preparation and response parsing.
//!
//! # Design
//! Every call is split into a prepare step that produces an `HttpRequest`
//! and a parse step that consumes an `HttpResponse`. Nothing here touches
//! the network, so the transport policy and the unwrapping rules can be
//! tested as plain functions. None of the parse steps look at the status
//! code: the envelope alone decides success.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::envelope::JsonResponse;
use crate::error::{ApiError, Result};
use crate::http::{Credentials, HttpMethod, HttpRequest, HttpResponse, RequestMode};

pub const CONTENT_TYPE: &str = "content-type";
pub const APPLICATION_JSON: &str = "application/json";

/// Caller-supplied request options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestInit {
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestInit {
    pub fn new(method: HttpMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn get() -> Self {
        Self::new(HttpMethod::Get)
    }

    pub fn post() -> Self {
        Self::new(HttpMethod::Post)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Serialize `body` to JSON and store it as the request body.
    pub fn with_json_body<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        let json = serde_json::to_string(body).map_err(ApiError::Serialization)?;
        self.body = Some(json);
        Ok(self)
    }
}

/// Apply the fixed transport policy to `init`.
///
/// Requests always go out cross-origin with credentials included. A
/// request with a body is labelled JSON, replacing any content type the
/// caller set.
pub fn prepare_request(url: impl Into<String>, init: RequestInit) -> HttpRequest {
    let RequestInit {
        method,
        mut headers,
        body,
    } = init;

    if body.is_some() {
        headers.retain(|(name, _)| !name.eq_ignore_ascii_case(CONTENT_TYPE));
        headers.push((CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string()));
    }

    HttpRequest {
        method,
        url: url.into(),
        mode: RequestMode::Cors,
        credentials: Credentials::Include,
        headers,
        body,
    }
}

/// Parse an enveloped body and return the success payload.
pub fn unwrap_json<V: DeserializeOwned>(response: &HttpResponse) -> Result<V> {
    match JsonResponse::<V>::from_body(&response.body)? {
        JsonResponse::Resp(value) => Ok(value),
        JsonResponse::Error(err) => {
            tracing::debug!(status = response.status, description = %err.description, "error envelope");
            Err(err.into())
        }
    }
}

/// Parse the body as JSON without looking for an envelope.
pub fn parse_json_raw<V: DeserializeOwned>(response: &HttpResponse) -> Result<V> {
    serde_json::from_str(&response.body).map_err(ApiError::Deserialization)
}

/// Return the body text unchanged.
pub fn parse_string(response: HttpResponse) -> String {
    response.body
}
