//! Fixed constants for request construction.

/// Base URL for all lookups. Must keep the trailing slash: the subject is
/// appended directly as the next path segment.
pub const OPENCNAM_BASE_URL: &str = "https://api.opencnam.com/v1/phone/";

// Query parameter names
/// Name of the serialization format query parameter.
pub const PARAM_FORMAT: &str = "format";
/// Name of the API key query parameter.
pub const PARAM_API_KEY: &str = "api_key";
/// Name of the username query parameter.
pub const PARAM_USERNAME: &str = "username";
