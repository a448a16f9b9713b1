//! cnam_lookup: a minimal blocking client for the OpenCNAM caller-ID (CNAM)
//! lookup API.
//!
//! The crate does one thing: build a lookup URL for a phone number, issue a
//! single blocking GET, and hand back the raw response body as text. The
//! caller picks the serialization format (xml/json/text) and parses the body
//! themselves. There is no retry logic, no caching, and no response
//! deserialization.
//!
//! # Example
//!
//! ```no_run
//! use cnam_lookup::{LookupClient, LookupRequest};
//!
//! # fn main() -> Result<(), cnam_lookup::LookupError> {
//! let client = LookupClient::new()?;
//!
//! let mut request = LookupRequest::new("14158586273");
//! request.set_format("json")?;
//! request.set_api_key("my-api-key");
//!
//! let body = request.execute(&client)?;
//! println!("{body}");
//! # Ok(())
//! # }
//! ```
//!
//! The request object is reusable: mutate its fields between calls to look up
//! another number or switch formats. It is not safe to mutate and execute
//! concurrently from multiple threads without external synchronization.

#![warn(missing_docs)]

mod client;
pub mod config;
mod error;
mod format;
mod request;

// Re-export public API
pub use client::LookupClient;
pub use error::LookupError;
pub use format::Format;
pub use request::LookupRequest;
