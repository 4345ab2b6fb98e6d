//! Error types for the dashboard API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the server returned an unexpected
//! status." All other non-2xx responses land in `Http` with the raw status
//! code and body for debugging. `Transport` covers failures below the HTTP
//! layer (connection refused, DNS, timeout); the modules treat it no
//! differently from a server-side failure.

use thiserror::Error;

/// Errors returned by `ApiClient` parse methods and module operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 — the requested record does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The HTTP round-trip itself failed before a response arrived.
    #[error("transport failed: {0}")]
    Transport(String),
}
