//! Request client core for the blog dashboard.
//!
//! # Overview
//! Talks JSON over HTTP to the blog API. Responses arrive wrapped in a
//! tagged envelope (`Resp` or `Error`); the client unwraps it into a typed
//! value or an `ApiError` carrying the server's description.
//!
//! # Design
//! - `request` holds the pure halves of a call: preparing an
//!   `HttpRequest` with the fixed transport policy (CORS mode, credentials
//!   included, JSON content type for bodies) and parsing an `HttpResponse`.
//! - `Transport` is the only I/O seam. `UreqTransport` is the blocking
//!   default; tests substitute an in-memory one.
//! - `DashboardClient` is stateless apart from its `ClientConfig`, so calls
//!   from different threads never interact.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod blog;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod request;
pub mod route;
pub mod transport;
pub mod types;

pub use client::DashboardClient;
pub use config::ClientConfig;
pub use envelope::{ApiErrorResponse, JsonResponse};
pub use error::{ApiError, Result};
pub use http::{Credentials, HttpMethod, HttpRequest, HttpResponse, RequestMode};
pub use request::{parse_json_raw, parse_string, prepare_request, unwrap_json, RequestInit};
pub use route::initial_route;
pub use transport::{Transport, TransportError, UreqTransport};
pub use types::{ListResponse, NewPost, PostFull, PostRef, PostSimple, PostStatus, UpdatePost};
