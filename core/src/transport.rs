//! Pluggable HTTP transport.
//!
//! # Design
//! `Transport` is the only place the crate touches the network. The default
//! implementation wraps a `ureq::Agent`; tests and embedders can supply a
//! closure or their own type instead. Timeouts, proxies and TLS settings
//! belong to the transport, not to the client.

use crate::error::{ApiError, Result};
use crate::http::{HttpRequest, HttpResponse};

/// Executes one GET exchange.
///
/// Implementations return non-2xx responses as data and reserve `Err` for
/// failures where no response was received.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse>;
}

impl<F> Transport for F
where
    F: Fn(&HttpRequest) -> Result<HttpResponse>,
{
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        self(request)
    }
}

/// Blocking transport backed by `ureq`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Agent with ureq's defaults, except that 4xx/5xx come back as
    /// responses so the client can report them as `HttpStatus`.
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Use a caller-configured agent (timeouts, proxy, TLS).
    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let mut builder = self.agent.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let mut response = match builder.call() {
            Ok(response) => response,
            // Only reachable with an agent that treats statuses as errors.
            Err(ureq::Error::StatusCode(status)) => {
                return Ok(HttpResponse {
                    status,
                    headers: Vec::new(),
                    body: String::new(),
                })
            }
            Err(e) => return Err(ApiError::transport(e)),
        };

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        // Bytes that are not UTF-8 are replaced, so the client still sees
        // the status and a 2xx body fails as `Decode` rather than `Transport`.
        let bytes = response
            .body_mut()
            .read_to_vec()
            .map_err(ApiError::transport)?;
        let body = String::from_utf8_lossy(&bytes).into_owned();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
