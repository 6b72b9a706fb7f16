//! Wire records for the geocoding API.
//!
//! # Design
//! Field order in each struct matches the order the service documents, so a
//! decode/encode pass reproduces the payload byte for byte. Optional fields
//! that the service omits (`bounds`, `partial_match`, `place_id`) are skipped
//! on output rather than written as zero values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::flatten::{flatten, FlattenOptions, FlattenedAddress};

/// Service-level status carried in every response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Ok,
    ZeroResults,
    OverQueryLimit,
    RequestDenied,
    InvalidRequest,
    UnknownError,
}

impl Status {
    /// The wire spelling, e.g. `"ZERO_RESULTS"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::ZeroResults => "ZERO_RESULTS",
            Status::OverQueryLimit => "OVER_QUERY_LIMIT",
            Status::RequestDenied => "REQUEST_DENIED",
            Status::InvalidRequest => "INVALID_REQUEST",
            Status::UnknownError => "UNKNOWN_ERROR",
        }
    }

    /// True for statuses that the client reports as `ApiError::Service`.
    /// `ZERO_RESULTS` is a valid, empty answer and is not an error.
    pub fn is_error(self) -> bool {
        !matches!(self, Status::Ok | Status::ZeroResults)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded geocoding response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResponse {
    pub status: Status,
    #[serde(default)]
    pub error_message: String,
    /// Relevance-ranked, in the order the service returned them.
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

impl GeocodeResponse {
    pub fn flatten(&self, options: FlattenOptions) -> Vec<FlattenedAddress> {
        flatten(self, options)
    }
}

/// One candidate location for the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub formatted_address: String,
    #[serde(rename = "address_components", default)]
    pub address_parts: Vec<AddressPart>,
    pub geometry: Geometry,
    #[serde(default)]
    pub types: Vec<String>,
    /// Set when the service could not match the whole input.
    #[serde(default, skip_serializing_if = "is_false")]
    pub partial_match: bool,
    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    pub place_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressPart {
    pub long_name: String,
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

impl AddressPart {
    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Absent unless the service reports a precise bounding box.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
    pub location: Point,
    pub location_type: String,
    pub viewport: Bounds,
}

/// A box given by its northeast and southwest corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub northeast: Point,
    pub southwest: Point,
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.northeast, self.southwest)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// `lat,lng`, each in the shortest form that parses back to the same `f64`.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}

fn is_none_or_empty(s: &Option<String>) -> bool {
    s.as_deref().map_or(true, str::is_empty)
}
