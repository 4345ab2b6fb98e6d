//! HTTP transport types and the transport seam.
//!
//! # Design
//! Requests and responses are plain data. `ApiClient` builds `HttpRequest`
//! values and parses `HttpResponse` values without ever touching the network;
//! the `HttpTransport` implementation executes the round-trip in between.
//! This keeps the client deterministic, and lets module tests substitute a
//! scripted transport for the real one.
//!
//! All fields use owned types (`String`, `Vec`) so values can be stored,
//! logged, or replayed without lifetime concerns.

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data, built by `ApiClient::build_*`
/// methods.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data, consumed by
/// `ApiClient::parse_*` methods.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Executes one HTTP round-trip.
///
/// The error type is `ApiError` rather than a transport-specific one: the
/// modules do not distinguish a connection failure from a server failure,
/// so both arrive through the same channel. Implementations must return
/// non-2xx responses as `Ok` — status interpretation belongs to the client's
/// parse methods.
pub trait HttpTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}
