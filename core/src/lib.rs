//! Synchronous client for the Google-style geocoding API.
//!
//! # Overview
//! Turns a free-form address or a coordinate pair into structured location
//! data: `build_parameters` assembles the query, `GeocodeClient` issues one
//! GET through a `Transport` and decodes the JSON, and `flatten` reduces each
//! result to a simple street/city/postcode record.
//!
//! # Design
//! - `GeocodeClient` is stateless; it holds only the endpoint.
//! - A lookup is split into `build_lookup` (produces an `HttpRequest`) and
//!   `parse_lookup` (consumes an `HttpResponse`), so the I/O boundary is
//!   explicit and the transport is swappable.
//! - Parameter building is pure. `PreparedRequest` is the explicit memo for
//!   callers that reuse a request.
//! - No retries, caching or timeouts; the transport owns those concerns.

pub mod client;
pub mod error;
pub mod flatten;
pub mod http;
pub mod params;
pub mod request;
pub mod transport;
pub mod types;

pub use client::{GeocodeClient, DEFAULT_ENDPOINT};
pub use error::{ApiError, Result};
pub use flatten::{flatten, FlattenOptions, FlattenedAddress};
pub use http::{HttpRequest, HttpResponse};
pub use params::{build_parameters, ParamSet, PreparedRequest};
pub use request::GeocodeRequest;
pub use transport::{Transport, UreqTransport};
pub use types::{AddressPart, Bounds, GeocodeResponse, GeocodeResult, Geometry, Point, Status};
