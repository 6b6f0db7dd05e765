//! The seam between the client and the network.
//!
//! # Design
//! `Transport` executes one `HttpRequest` and returns the `HttpResponse`
//! as data. Non-2xx statuses are responses, not errors; only a failed
//! exchange is an `Err`, and the client passes that error on untouched as
//! the `source` of `ApiError::Transport`.

use std::error::Error as StdError;
use std::time::Duration;

use crate::http::{HttpMethod, HttpRequest, HttpResponse};

pub trait Transport {
    type Error: StdError + Send + Sync + 'static;

    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &T {
    type Error = T::Error;

    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Self::Error> {
        (**self).execute(request)
    }
}

/// Failures of `UreqTransport`.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] ureq::Error),

    /// The method cannot carry a request body, so the request is refused
    /// rather than sent without it.
    #[error("{} request cannot have a body", .method.as_str())]
    BodyNotAllowed { method: HttpMethod },
}

/// Blocking transport backed by a `ureq` agent.
///
/// The agent keeps a cookie jar across calls, which is how
/// `Credentials::Include` is honoured outside a browser. `RequestMode`
/// has no meaning outside a browser and is not acted on.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(None)
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

impl Transport for UreqTransport {
    type Error = TransportError;

    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Self::Error> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
            ..
        } = request;

        let mut response = match (method, body) {
            (HttpMethod::Get, Some(_)) => {
                return Err(TransportError::BodyNotAllowed {
                    method: HttpMethod::Get,
                })
            }
            (HttpMethod::Get, None) => with_headers(self.agent.get(&url), &headers).call(),
            (HttpMethod::Delete, Some(body)) => with_headers(self.agent.delete(&url), &headers)
                .force_send_body()
                .send(body.as_bytes()),
            (HttpMethod::Delete, None) => with_headers(self.agent.delete(&url), &headers).call(),
            (HttpMethod::Post, Some(body)) => {
                with_headers(self.agent.post(&url), &headers).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => with_headers(self.agent.post(&url), &headers).send_empty(),
            (HttpMethod::Put, Some(body)) => {
                with_headers(self.agent.put(&url), &headers).send(body.as_bytes())
            }
            (HttpMethod::Put, None) => with_headers(self.agent.put(&url), &headers).send_empty(),
        }?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.body_mut().read_to_string()?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{Credentials, RequestMode};

    #[test]
    fn get_with_body_is_refused_before_sending() {
        // Nothing listens on the discard port; the request must not get that far.
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: "http://127.0.0.1:9/x".to_string(),
            mode: RequestMode::Cors,
            credentials: Credentials::Include,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some("{}".to_string()),
        };
        let err = UreqTransport::default().execute(request).unwrap_err();
        assert!(matches!(err, TransportError::BodyNotAllowed { method: HttpMethod::Get }));
        assert_eq!(err.to_string(), "GET request cannot have a body");
    }
}
