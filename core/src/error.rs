//! Error types for the dashboard request client.
//!
//! # Design
//! The HTTP status code never decides success; the response envelope does.
//! That leaves three ways for a call to fail: the transport itself, a body
//! that does not parse, and a server that answers with an `Error` envelope.
//! Transport and parse failures keep the underlying error as their
//! `source` so callers can downcast to the original type.

use std::error::Error as StdError;

pub type Result<T, E = ApiError> = std::result::Result<T, E>;

/// Errors returned by `DashboardClient` and the request helpers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The transport could not complete the exchange (DNS, connect, abort).
    #[error("transport failed: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The response body was not the JSON shape the caller asked for.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The request body could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The server answered with an `Error` envelope. Displays as the
    /// server-supplied description, verbatim.
    #[error("{description}")]
    Api { description: String },

    /// The envelope carried a `type` tag other than `Resp` or `Error`.
    #[error("unrecognized response envelope type {tag:?}")]
    UnrecognizedEnvelope { tag: String },
}

impl ApiError {
    pub fn transport<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        ApiError::Transport(Box::new(err))
    }

    /// The server description for `Api` errors.
    pub fn description(&self) -> Option<&str> {
        match self {
            ApiError::Api { description } => Some(description),
            _ => None,
        }
    }
}
