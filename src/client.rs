//! Blocking HTTP execution of lookup requests.

use log::debug;
use reqwest::blocking::Client;

use crate::error::LookupError;
use crate::request::LookupRequest;

/// Blocking HTTP client for issuing lookups.
///
/// Wraps a single reusable `reqwest` blocking client. The client itself is
/// stateless per call: each execute takes an immutable snapshot of the
/// request, builds the URL, and performs one GET. Relies on reqwest's default
/// timeout behavior; no timeout is configured here.
pub struct LookupClient {
    http: Client,
}

impl LookupClient {
    /// Builds a client with default settings.
    pub fn new() -> Result<Self, LookupError> {
        let http = Client::builder().build()?;
        Ok(LookupClient { http })
    }

    /// Executes a single blocking GET for the given request.
    ///
    /// Returns the response body decoded as text for any HTTP status code;
    /// 4xx/5xx responses are not distinguished from success, so callers must
    /// inspect the payload to detect API-level errors. Transport failures
    /// propagate as [`LookupError::Transport`] with no retry.
    pub fn execute(&self, request: &LookupRequest) -> Result<String, LookupError> {
        debug!(
            "looking up subject={} format={}",
            request.subject(),
            request.format()
        );
        self.get(&request.url())
    }

    /// Issues a blocking GET to an already-built URL and returns the body.
    pub fn get(&self, url: &str) -> Result<String, LookupError> {
        debug!("GET {url}");
        let response = self.http.get(url).send()?;
        debug!("received status {} from {url}", response.status());
        Ok(response.text()?)
    }
}
