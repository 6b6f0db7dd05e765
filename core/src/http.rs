//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. The request module builds
//! `HttpRequest` values and parses `HttpResponse` values; a `Transport`
//! performs the actual exchange. Fetch-style policy (request mode and
//! credential inclusion) travels with the request so every transport sees
//! the same contract and tests can assert on it without a network.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Cross-origin policy of a request, as understood by the fetch standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMode {
    Cors,
    SameOrigin,
    NoCors,
}

/// Whether credentials (cookies, auth headers) accompany a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credentials {
    Omit,
    SameOrigin,
    Include,
}

/// An HTTP request described as plain data.
///
/// Produced by `request::prepare_request`, so `mode` and `credentials`
/// always carry the client's fixed transport policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub mode: RequestMode,
    pub credentials: Credentials,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// An HTTP response described as plain data.
///
/// `status` is recorded for diagnostics only; the client decides success
/// from the response body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
