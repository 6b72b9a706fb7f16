//! Simplified address records derived from geocoding results.

use serde::{Deserialize, Serialize};

use crate::types::{AddressPart, GeocodeResponse, GeocodeResult, Status};

/// Which results `flatten` keeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlattenOptions {
    pub include_partial_matches: bool,
    /// Drop results with neither a street number nor a premise.
    pub require_street_number: bool,
}

/// A flat view of one result. Fields with no matching address part stay
/// empty (or zero for coordinates).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlattenedAddress {
    pub place_id: String,
    pub partial_match: bool,
    pub formatted_address: String,
    pub number: String,
    pub premise: String,
    pub street: String,
    pub city: String,
    pub country: String,
    pub country_code: String,
    pub postcode: String,
    pub lat: f64,
    pub lng: f64,
}

impl FlattenedAddress {
    pub fn from_result(result: &GeocodeResult) -> Self {
        let mut flat = FlattenedAddress {
            place_id: result.place_id.clone().unwrap_or_default(),
            partial_match: result.partial_match,
            formatted_address: result.formatted_address.clone(),
            lat: result.geometry.location.lat,
            lng: result.geometry.location.lng,
            ..Self::default()
        };
        for part in &result.address_parts {
            flat.apply(part);
        }
        flat
    }

    // Later parts overwrite earlier ones that carry the same tag.
    fn apply(&mut self, part: &AddressPart) {
        for tag in &part.types {
            match tag.as_str() {
                "street_number" => self.number.clone_from(&part.long_name),
                "premise" => self.premise.clone_from(&part.long_name),
                "route" => self.street.clone_from(&part.short_name),
                "locality" | "postal_town" => self.city.clone_from(&part.long_name),
                "country" => {
                    self.country.clone_from(&part.long_name);
                    self.country_code.clone_from(&part.short_name);
                }
                "postal_code" => self.postcode.clone_from(&part.long_name),
                _ => {}
            }
        }
    }

    pub fn has_street_number(&self) -> bool {
        !self.number.is_empty() || !self.premise.is_empty()
    }
}

/// Flatten every retained result of an `OK` response, in service order.
///
/// Any other status, including `ZERO_RESULTS`, yields an empty vector.
pub fn flatten(response: &GeocodeResponse, options: FlattenOptions) -> Vec<FlattenedAddress> {
    if response.status != Status::Ok {
        return Vec::new();
    }
    response
        .results
        .iter()
        .filter(|result| options.include_partial_matches || !result.partial_match)
        .map(FlattenedAddress::from_result)
        .filter(|flat| !options.require_street_number || flat.has_street_number())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Bounds, Geometry, Point};

    fn part(long: &str, short: &str, types: &[&str]) -> AddressPart {
        AddressPart {
            long_name: long.to_string(),
            short_name: short.to_string(),
            types: types.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn result(address: &str, parts: Vec<AddressPart>, partial_match: bool) -> GeocodeResult {
        let location = Point::new(37.4229181, -122.0854212);
        GeocodeResult {
            formatted_address: address.to_string(),
            address_parts: parts,
            geometry: Geometry {
                bounds: None,
                location,
                location_type: "ROOFTOP".to_string(),
                viewport: Bounds {
                    northeast: location,
                    southwest: location,
                },
            },
            types: vec!["street_address".to_string()],
            partial_match,
            place_id: Some(format!("id-{address}")),
        }
    }

    fn ok(results: Vec<GeocodeResult>) -> GeocodeResponse {
        GeocodeResponse {
            status: Status::Ok,
            error_message: String::new(),
            results,
        }
    }

    fn amphitheatre() -> GeocodeResult {
        result(
            "1600 Amphitheatre Pkwy, Mountain View, CA 94043, USA",
            vec![
                part("1600", "1600", &["street_number"]),
                part("Amphitheatre Parkway", "Amphitheatre Pkwy", &["route"]),
                part("Mountain View", "Mountain View", &["locality", "political"]),
                part("United States", "US", &["country", "political"]),
                part("94043", "94043", &["postal_code"]),
            ],
            false,
        )
    }

    #[test]
    fn maps_tags_to_fields() {
        let flat = flatten(&ok(vec![amphitheatre()]), FlattenOptions::default());
        assert_eq!(flat.len(), 1);
        let flat = &flat[0];
        assert_eq!(flat.number, "1600");
        assert_eq!(flat.street, "Amphitheatre Pkwy");
        assert_eq!(flat.city, "Mountain View");
        assert_eq!(flat.country, "United States");
        assert_eq!(flat.country_code, "US");
        assert_eq!(flat.postcode, "94043");
        assert_eq!(flat.lat, 37.4229181);
        assert_eq!(flat.lng, -122.0854212);
        assert_eq!(
            flat.place_id,
            "id-1600 Amphitheatre Pkwy, Mountain View, CA 94043, USA"
        );
        assert!(flat.premise.is_empty());
    }

    #[test]
    fn missing_tags_stay_empty() {
        let r = result("Nowhere", vec![part("Atlantis", "AT", &["natural_feature"])], false);
        let flat = FlattenedAddress::from_result(&r);
        assert!(flat.number.is_empty());
        assert!(flat.street.is_empty());
        assert!(flat.city.is_empty());
        assert!(flat.country.is_empty());
        assert!(flat.postcode.is_empty());
    }

    #[test]
    fn later_parts_overwrite_earlier() {
        let r = result(
            "London",
            vec![
                part("Westminster", "Westminster", &["locality"]),
                part("London", "London", &["postal_town"]),
            ],
            false,
        );
        assert_eq!(FlattenedAddress::from_result(&r).city, "London");
    }

    #[test]
    fn zero_results_flattens_to_empty() {
        let resp = GeocodeResponse {
            status: Status::ZeroResults,
            error_message: String::new(),
            results: Vec::new(),
        };
        assert!(flatten(&resp, FlattenOptions::default()).is_empty());
    }

    #[test]
    fn non_ok_status_ignores_results() {
        let mut resp = ok(vec![amphitheatre()]);
        resp.status = Status::UnknownError;
        assert!(resp.flatten(FlattenOptions::default()).is_empty());
    }

    #[test]
    fn partial_matches_skipped_by_default() {
        let resp = ok(vec![
            result("Partial", vec![part("1", "1", &["street_number"])], true),
            amphitheatre(),
        ]);
        let flat = flatten(&resp, FlattenOptions::default());
        assert_eq!(flat.len(), 1);
        assert!(!flat[0].partial_match);

        let flat = flatten(
            &resp,
            FlattenOptions {
                include_partial_matches: true,
                ..FlattenOptions::default()
            },
        );
        assert_eq!(flat.len(), 2);
        assert_eq!(flat[0].formatted_address, "Partial");
        assert!(flat[0].partial_match);
    }

    #[test]
    fn require_street_number_drops_streetless_results() {
        let town = part("Mountain View", "Mountain View", &["locality"]);
        let building = part("Empire State Building", "Empire State Building", &["premise"]);
        let resp = ok(vec![
            result("Mountain View", vec![town], false),
            amphitheatre(),
            result("Empire State Building", vec![building], false),
        ]);
        let options = FlattenOptions {
            require_street_number: true,
            ..FlattenOptions::default()
        };
        let flat = flatten(&resp, options);
        let names: Vec<_> = flat.iter().map(|f| f.formatted_address.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "1600 Amphitheatre Pkwy, Mountain View, CA 94043, USA",
                "Empire State Building"
            ]
        );
        assert_eq!(flat[1].premise, "Empire State Building");
    }

    #[test]
    fn preserves_result_order() {
        let resp = ok(vec![
            result("b", Vec::new(), false),
            result("a", Vec::new(), false),
            result("c", Vec::new(), false),
        ]);
        let flat = flatten(&resp, FlattenOptions::default());
        let names: Vec<_> = flat.iter().map(|f| f.formatted_address.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }
}
