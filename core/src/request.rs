//! The caller-facing description of a geocoding query.

use serde::{Deserialize, Serialize};

use crate::types::{Bounds, Point};

/// What to look up and how.
///
/// Exactly one of `address` or `location` must be set. That rule is checked
/// when parameters are built, not here, so a request can be filled in
/// field by field. An empty string counts as unset for every text field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocodeRequest {
    pub address: Option<String>,
    pub location: Option<Point>,

    /// Prefer results inside this viewport.
    pub bounds: Option<Bounds>,
    /// Region bias as a ccTLD code, e.g. `"es"`.
    pub region: Option<String>,
    pub language: Option<String>,
    /// Component filter, e.g. `"country:DE|postal_code:10555"`.
    pub components: Option<String>,
    pub channel: Option<String>,

    /// Legacy flag; always sent.
    pub sensor: bool,

    /// Premium client id. When set, `api_key` is ignored.
    pub client: Option<String>,
    pub signature: Option<String>,
    pub api_key: Option<String>,
}

impl GeocodeRequest {
    pub fn address(address: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
            ..Self::default()
        }
    }

    pub fn location(location: Point) -> Self {
        Self {
            location: Some(location),
            ..Self::default()
        }
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_components(mut self, components: impl Into<String>) -> Self {
        self.components = Some(components.into());
        self
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    pub fn with_sensor(mut self, sensor: bool) -> Self {
        self.sensor = sensor;
        self
    }

    /// Sign requests as a premium client.
    pub fn with_client(mut self, client: impl Into<String>, signature: impl Into<String>) -> Self {
        self.client = Some(client.into());
        self.signature = Some(signature.into());
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }
}
