//! Query-parameter assembly.
//!
//! # Design
//! `build_parameters` is a pure function of the request. Callers that want
//! to build once and reuse the result hold a `PreparedRequest`, which memoises
//! the `ParamSet` next to the request it was built from. The memo sits in a
//! `OnceCell`, so a `PreparedRequest` is `Send` but not `Sync`: one instance
//! must not be shared between threads. Concurrent lookups use independent
//! requests.

use std::cell::OnceCell;
use std::collections::BTreeMap;

use url::form_urlencoded;

use crate::error::{ApiError, Result};
use crate::request::GeocodeRequest;

/// Query parameters, kept sorted by name so encoding is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamSet(BTreeMap<&'static str, String>);

impl ParamSet {
    fn set(&mut self, name: &'static str, value: impl Into<String>) {
        self.0.insert(name, value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// `application/x-www-form-urlencoded` form, e.g.
    /// `address=1600+Amphitheatre&sensor=false`.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.0 {
            serializer.append_pair(name, value);
        }
        serializer.finish()
    }
}

/// Turn a request into the service's query parameters.
///
/// Fails with `ApiError::InvalidRequest` unless exactly one of `address`
/// and `location` is set.
pub fn build_parameters(request: &GeocodeRequest) -> Result<ParamSet> {
    let mut params = ParamSet::default();

    match (non_empty(&request.address), request.location) {
        (Some(address), None) => params.set("address", address),
        (None, Some(location)) => params.set("latlng", location.to_string()),
        (None, None) => {
            return Err(ApiError::InvalidRequest(
                "missing address or latlng argument".to_string(),
            ))
        }
        (Some(_), Some(_)) => {
            return Err(ApiError::InvalidRequest(
                "address and latlng are mutually exclusive".to_string(),
            ))
        }
    }

    if let Some(bounds) = request.bounds {
        params.set("bounds", bounds.to_string());
    }
    if let Some(region) = non_empty(&request.region) {
        params.set("region", region);
    }
    if let Some(language) = non_empty(&request.language) {
        params.set("language", language);
    }
    if let Some(components) = non_empty(&request.components) {
        params.set("components", components);
    }
    if let Some(channel) = non_empty(&request.channel) {
        params.set("channel", channel);
    }

    // A client id switches to signed premium requests; the key is dropped.
    if let Some(client) = non_empty(&request.client) {
        params.set("client", client);
        if let Some(signature) = non_empty(&request.signature) {
            params.set("signature", signature);
        }
    } else if let Some(key) = non_empty(&request.api_key) {
        params.set("key", key);
    }

    params.set("sensor", request.sensor.to_string());

    Ok(params)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// A request together with its lazily built parameters.
#[derive(Debug)]
pub struct PreparedRequest {
    request: GeocodeRequest,
    params: OnceCell<ParamSet>,
}

impl PreparedRequest {
    pub fn new(request: GeocodeRequest) -> Self {
        Self {
            request,
            params: OnceCell::new(),
        }
    }

    pub fn request(&self) -> &GeocodeRequest {
        &self.request
    }

    /// Build on first call, then return the same set. A failed build is not
    /// cached; the error is returned again on the next call.
    pub fn parameters(&self) -> Result<&ParamSet> {
        if let Some(params) = self.params.get() {
            return Ok(params);
        }
        let built = build_parameters(&self.request)?;
        Ok(self.params.get_or_init(|| built))
    }

    pub fn query(&self) -> Result<String> {
        Ok(self.parameters()?.encode())
    }

    pub fn into_request(self) -> GeocodeRequest {
        self.request
    }
}

impl From<GeocodeRequest> for PreparedRequest {
    fn from(request: GeocodeRequest) -> Self {
        Self::new(request)
    }
}
