//! Response serialization formats.

use std::fmt;
use std::str::FromStr;

use crate::error::LookupError;

/// Serialization format for the response body.
///
/// The API serializes the CNAM result as XML, JSON, or plain text depending
/// on the `format` query parameter. Plain text is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// XML response body.
    Xml,
    /// JSON response body.
    Json,
    /// Plain text response body (the CNAM value alone).
    #[default]
    Text,
}

impl Format {
    /// Wire token used in the query string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Xml => "xml",
            Format::Json => "json",
            Format::Text => "text",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xml" => Ok(Format::Xml),
            "json" => Ok(Format::Json),
            "text" => Ok(Format::Text),
            other => Err(LookupError::InvalidFormat {
                value: other.to_string(),
            }),
        }
    }
}
