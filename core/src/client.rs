//! Request building and response parsing for the geocoding endpoint.
//!
//! # Design
//! `GeocodeClient` holds only the endpoint URL and carries no mutable state
//! between calls. A lookup is split into `build_lookup`, which produces an
//! `HttpRequest`, and `parse_lookup`, which consumes an `HttpResponse`. The
//! `lookup*` methods join the two halves through a `Transport`, making
//! exactly one round trip and never retrying.

use tracing::{debug, warn};

use crate::error::{ApiError, Result};
use crate::http::{HttpRequest, HttpResponse};
use crate::params::{build_parameters, ParamSet, PreparedRequest};
use crate::request::GeocodeRequest;
use crate::transport::{Transport, UreqTransport};
use crate::types::GeocodeResponse;

pub const DEFAULT_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Synchronous client for the geocoding API.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    endpoint: String,
}

impl GeocodeClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Look up `request` over the default `ureq` transport.
    pub fn lookup(&self, request: &GeocodeRequest) -> Result<GeocodeResponse> {
        self.lookup_with(request, &UreqTransport::new())
    }

    pub fn lookup_with<T>(&self, request: &GeocodeRequest, transport: &T) -> Result<GeocodeResponse>
    where
        T: Transport + ?Sized,
    {
        let params = build_parameters(request)?;
        self.execute(&params, transport)
    }

    /// Like `lookup_with`, reusing the parameters memoised in `prepared`.
    pub fn lookup_prepared<T>(
        &self,
        prepared: &PreparedRequest,
        transport: &T,
    ) -> Result<GeocodeResponse>
    where
        T: Transport + ?Sized,
    {
        self.execute(prepared.parameters()?, transport)
    }

    fn execute<T>(&self, params: &ParamSet, transport: &T) -> Result<GeocodeResponse>
    where
        T: Transport + ?Sized,
    {
        let request = self.build_lookup(params)?;
        debug!(
            endpoint = %self.endpoint,
            params = ?params.names().collect::<Vec<_>>(),
            "issuing geocode lookup"
        );
        let response = transport.execute(&request)?;
        self.parse_lookup(response)
    }

    /// Build the GET request for an already assembled parameter set.
    ///
    /// An empty set means no address or location was given and fails with
    /// `ApiError::InvalidRequest` instead of producing a request.
    pub fn build_lookup(&self, params: &ParamSet) -> Result<HttpRequest> {
        if params.is_empty() {
            return Err(ApiError::InvalidRequest(
                "missing address or latlng argument".to_string(),
            ));
        }
        Ok(HttpRequest {
            url: format!("{}?{}", self.endpoint, params.encode()),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        })
    }

    /// Check the HTTP status, decode the body, then check the service status.
    pub fn parse_lookup(&self, response: HttpResponse) -> Result<GeocodeResponse> {
        check_status(&response)?;
        let decoded: GeocodeResponse = serde_json::from_str(&response.body)?;
        debug!(
            status = %decoded.status,
            results = decoded.results.len(),
            "geocode response decoded"
        );
        if decoded.status.is_error() {
            warn!(status = %decoded.status, message = %decoded.error_message, "geocode lookup rejected");
            return Err(ApiError::Service {
                status: decoded.status,
                message: decoded.error_message,
            });
        }
        Ok(decoded)
    }
}

impl Default for GeocodeClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

/// Map non-2xx statuses to `ApiError::HttpStatus`.
fn check_status(response: &HttpResponse) -> Result<()> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::HttpStatus {
        status: response.status,
        body: response.body.clone(),
    })
}
