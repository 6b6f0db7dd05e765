//! Stateless request client for the blog dashboard API.
//!
//! # Design
//! `DashboardClient` holds only its configuration and a transport. Each
//! call prepares a request with the fixed transport policy, hands it to the
//! transport, and parses the response with one of the `request` parsers.
//! Calls share no mutable state, so concurrent callers need no ordering.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::http::HttpResponse;
use crate::request::{self, RequestInit};
use crate::transport::{Transport, UreqTransport};

#[derive(Debug, Clone)]
pub struct DashboardClient<T = UreqTransport> {
    config: ClientConfig,
    transport: T,
}

impl DashboardClient<UreqTransport> {
    /// Client over a blocking `ureq` transport honouring `config.timeout`.
    pub fn connect(config: ClientConfig) -> Self {
        let transport = UreqTransport::new(config.timeout);
        Self::new(config, transport)
    }
}

impl<T: Transport> DashboardClient<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Append `path` to the API base URL. `path` is used as given.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.config.api_url())
    }

    /// URL of a resource scoped to this client's blog instance.
    pub fn instance_url(&self, suffix: &str) -> String {
        self.api_url(&format!("/blog/{}{suffix}", self.config.instance_uuid()))
    }

    fn send(&self, url: &str, init: RequestInit) -> Result<HttpResponse> {
        let request = request::prepare_request(url, init);
        tracing::debug!(method = request.method.as_str(), url = %request.url, "sending request");
        self.transport.execute(request).map_err(ApiError::transport)
    }

    /// Enveloped call: returns the `Resp` payload or fails with the
    /// server's description.
    pub fn fetch_json<V: DeserializeOwned>(&self, url: &str, init: RequestInit) -> Result<V> {
        let response = self.send(url, init)?;
        request::unwrap_json(&response)
    }

    /// Like `fetch_json`, for bodies that are not wrapped in an envelope.
    pub fn fetch_json_raw<V: DeserializeOwned>(&self, url: &str, init: RequestInit) -> Result<V> {
        let response = self.send(url, init)?;
        request::parse_json_raw(&response)
    }

    pub fn fetch_string(&self, url: &str, init: RequestInit) -> Result<String> {
        let response = self.send(url, init)?;
        Ok(request::parse_string(response))
    }

    /// Serialize `body` into `init`, then make an enveloped call.
    pub fn fetch_json_body<V, B>(&self, url: &str, init: RequestInit, body: &B) -> Result<V>
    where
        V: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let init = init.with_json_body(body)?;
        self.fetch_json(url, init)
    }
}
