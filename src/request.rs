//! Reusable lookup request and URL construction.

use std::str::FromStr;

use crate::client::LookupClient;
use crate::config::{OPENCNAM_BASE_URL, PARAM_API_KEY, PARAM_FORMAT, PARAM_USERNAME};
use crate::error::LookupError;
use crate::format::Format;

/// A reusable CNAM lookup request.
///
/// Holds the subject phone number, the desired response format, and optional
/// account credentials. The same request object can be reused across calls by
/// mutating its fields between invocations of [`LookupRequest::execute`].
///
/// The subject is interpolated into the URL verbatim; the caller is
/// responsible for escaping it if needed.
#[derive(Debug, Clone, Default)]
pub struct LookupRequest {
    subject: String,
    format: Format,
    username: Option<String>,
    api_key: Option<String>,
}

impl LookupRequest {
    /// Creates a request for the given subject with the default text format
    /// and no credentials.
    pub fn new(subject: impl Into<String>) -> Self {
        LookupRequest {
            subject: subject.into(),
            ..Default::default()
        }
    }

    /// Creates a fully configured request in one call.
    pub fn with_credentials(
        subject: impl Into<String>,
        format: Format,
        username: Option<String>,
        api_key: Option<String>,
    ) -> Self {
        LookupRequest {
            subject: subject.into(),
            format,
            username,
            api_key,
        }
    }

    /// Sets the phone number to be looked up on the next execute.
    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.subject = subject.into();
    }

    /// Sets the optional username parameter.
    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = Some(username.into());
    }

    /// Sets the optional API key parameter.
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = Some(api_key.into());
    }

    /// Sets the response serialization format from its wire token.
    ///
    /// Accepts only `xml`, `json`, or `text`. Any other value fails with
    /// [`LookupError::InvalidFormat`] and leaves the stored format unchanged.
    pub fn set_format(&mut self, format: &str) -> Result<(), LookupError> {
        self.format = Format::from_str(format)?;
        Ok(())
    }

    /// The subject phone number.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The currently configured response format.
    pub fn format(&self) -> Format {
        self.format
    }

    /// Builds the request URL.
    ///
    /// Shape: `<base><subject>?format=<fmt>[&api_key=<key>][&username=<user>]`.
    /// Parameter order is fixed (format, api_key, username); consumers
    /// comparing URL strings rely on it.
    pub fn url(&self) -> String {
        let mut url = format!(
            "{OPENCNAM_BASE_URL}{}?{PARAM_FORMAT}={}",
            self.subject,
            self.format.as_str()
        );

        if let Some(api_key) = &self.api_key {
            url.push_str(&format!("&{PARAM_API_KEY}={api_key}"));
        }

        if let Some(username) = &self.username {
            url.push_str(&format!("&{PARAM_USERNAME}={username}"));
        }

        url
    }

    /// Executes this request on the given client.
    ///
    /// Convenience wrapper around [`LookupClient::execute`].
    pub fn execute(&self, client: &LookupClient) -> Result<String, LookupError> {
        client.execute(self)
    }
}
