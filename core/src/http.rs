//! HTTP exchange types for the host-does-IO pattern.
//!
//! # Design
//! The client builds `HttpRequest` values and parses `HttpResponse` values
//! as plain data. A `Transport` (see `transport.rs`) performs the exchange
//! in between, so the build and parse halves stay deterministic and can be
//! tested without a network. Every geocoding call is a GET, so the request
//! carries no method or body.

/// A GET request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Full URL including the encoded query string.
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
///
/// Produced by a `Transport`, then passed to `GeocodeClient::parse_lookup`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
