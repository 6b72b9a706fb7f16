//! In-process stand-in for the geocoding endpoint.
//!
//! Answers `GET /maps/api/geocode/json` from a fixed set of fixtures so the
//! client can be exercised end to end without network access or credentials.
//! A handful of magic addresses trigger the failure paths.

use std::collections::HashMap;

use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const GEOCODE_PATH: &str = "/maps/api/geocode/json";

/// API key the mock rejects with `REQUEST_DENIED`.
pub const DENIED_KEY: &str = "denied-key";

/// Address answered with HTTP 500.
pub const HTTP_ERROR_ADDRESS: &str = "__http_500";
/// Address answered with a body that is not JSON.
pub const GARBAGE_ADDRESS: &str = "__not_json";
/// Address answered with `OVER_QUERY_LIMIT`.
pub const OVER_LIMIT_ADDRESS: &str = "__over_limit";

pub const AMPHITHEATRE_LATLNG: &str = "37.4229181,-122.0854212";

pub fn app() -> Router {
    Router::new().route(GEOCODE_PATH, get(geocode))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn geocode(Query(params): Query<HashMap<String, String>>) -> Response {
    if params.get("key").map(String::as_str) == Some(DENIED_KEY) {
        return status_only("REQUEST_DENIED", "The provided API key is invalid.");
    }

    let address = params.get("address").filter(|a| !a.is_empty());
    let latlng = params.get("latlng").filter(|l| !l.is_empty());

    match (address, latlng) {
        (Some(address), None) => by_address(address),
        (None, Some(latlng)) if latlng == AMPHITHEATRE_LATLNG => ok(vec![amphitheatre()]),
        (None, Some(_)) => status_only("ZERO_RESULTS", ""),
        _ => status_only(
            "INVALID_REQUEST",
            "Invalid request. Missing the 'address', 'components', 'latlng' or 'place_id' parameter.",
        ),
    }
}

fn by_address(address: &str) -> Response {
    match address {
        HTTP_ERROR_ADDRESS => (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response(),
        GARBAGE_ADDRESS => (StatusCode::OK, "<html>maintenance</html>").into_response(),
        OVER_LIMIT_ADDRESS => {
            status_only("OVER_QUERY_LIMIT", "You have exceeded your daily request quota for this API.")
        }
        a if a.contains("Amphitheatre") => ok(vec![amphitheatre()]),
        a if a.contains("Winnetka") => ok(vec![winnetka(), winnetka_partial()]),
        _ => status_only("ZERO_RESULTS", ""),
    }
}

fn ok(results: Vec<Value>) -> Response {
    Json(json!({ "results": results, "status": "OK" })).into_response()
}

fn status_only(status: &str, message: &str) -> Response {
    let mut body = json!({ "results": [], "status": status });
    if !message.is_empty() {
        body["error_message"] = Value::String(message.to_string());
    }
    Json(body).into_response()
}

fn component(long: &str, short: &str, types: &[&str]) -> Value {
    json!({ "long_name": long, "short_name": short, "types": types })
}

fn point(lat: f64, lng: f64) -> Value {
    json!({ "lat": lat, "lng": lng })
}

pub fn amphitheatre() -> Value {
    json!({
        "address_components": [
            component("1600", "1600", &["street_number"]),
            component("Amphitheatre Parkway", "Amphitheatre Pkwy", &["route"]),
            component("Mountain View", "Mountain View", &["locality", "political"]),
            component("Santa Clara County", "Santa Clara County", &["administrative_area_level_2", "political"]),
            component("California", "CA", &["administrative_area_level_1", "political"]),
            component("United States", "US", &["country", "political"]),
            component("94043", "94043", &["postal_code"]),
        ],
        "formatted_address": "1600 Amphitheatre Pkwy, Mountain View, CA 94043, USA",
        "geometry": {
            "location": point(37.4229181, -122.0854212),
            "location_type": "ROOFTOP",
            "viewport": {
                "northeast": point(37.42426708029149, -122.0840722197085),
                "southwest": point(37.4215691197085, -122.0867701802915),
            }
        },
        "place_id": "ChIJ2eUgeAK6j4ARbn5u_wAGqWA",
        "types": ["street_address"]
    })
}

pub fn winnetka() -> Value {
    json!({
        "address_components": [
            component("Winnetka", "Winnetka", &["locality", "political"]),
            component("New Trier Township", "New Trier Township", &["administrative_area_level_3", "political"]),
            component("Illinois", "IL", &["administrative_area_level_1", "political"]),
            component("United States", "US", &["country", "political"]),
        ],
        "formatted_address": "Winnetka, IL, USA",
        "geometry": {
            "bounds": {
                "northeast": point(42.1282269, -87.7108162),
                "southwest": point(42.0886089, -87.7708629),
            },
            "location": point(42.10808340000001, -87.735895),
            "location_type": "APPROXIMATE",
            "viewport": {
                "northeast": point(42.1282269, -87.7108162),
                "southwest": point(42.0886089, -87.7708629),
            }
        },
        "place_id": "ChIJW8Va5TnED4gRY91Ng47qy3Q",
        "types": ["locality", "political"]
    })
}

pub fn winnetka_partial() -> Value {
    json!({
        "address_components": [
            component("20", "20", &["street_number"]),
            component("Green Bay Road", "Green Bay Rd", &["route"]),
            component("Winnetka", "Winnetka", &["locality", "political"]),
            component("United States", "US", &["country", "political"]),
            component("60093", "60093", &["postal_code"]),
        ],
        "formatted_address": "20 Green Bay Rd, Winnetka, IL 60093, USA",
        "geometry": {
            "location": point(42.1066, -87.7318),
            "location_type": "RANGE_INTERPOLATED",
            "viewport": {
                "northeast": point(42.1079, -87.7304),
                "southwest": point(42.1052, -87.7331),
            }
        },
        "partial_match": true,
        "place_id": "EixHcmVlbiBCYXkgUmQsIFdpbm5ldGthLCBJTA",
        "types": ["street_address"]
    })
}
