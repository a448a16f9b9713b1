//! URL construction behavior for lookup requests.
//!
//! The lookup URL is built by string concatenation with a fixed parameter
//! order (format, api_key, username), since downstream consumers compare URL
//! strings for equality. These tests pin both the exact strings and the
//! query-pair order as seen by a URL parser.

use cnam_lookup::{Format, LookupRequest};
use url::Url;

#[test]
fn default_request_builds_documented_url() {
    let request = LookupRequest::new("14158586273");
    assert_eq!(
        request.url(),
        "https://api.opencnam.com/v1/phone/14158586273?format=text"
    );
}

#[test]
fn api_key_only_builds_documented_url() {
    let mut request = LookupRequest::new("14158586273");
    request.set_format("json").expect("json is a valid format");
    request.set_api_key("abc");
    assert_eq!(
        request.url(),
        "https://api.opencnam.com/v1/phone/14158586273?format=json&api_key=abc"
    );
}

#[test]
fn built_url_parses_with_subject_as_path_segment() {
    let request = LookupRequest::new("14158586273");
    let url = Url::parse(&request.url()).expect("built URL should parse");

    assert_eq!(url.scheme(), "https");
    assert_eq!(url.host_str(), Some("api.opencnam.com"));
    assert_eq!(url.path(), "/v1/phone/14158586273");
}

#[test]
fn query_pair_order_is_format_then_api_key_then_username() {
    let request = LookupRequest::with_credentials(
        "14158586273",
        Format::Xml,
        Some("tom".to_string()),
        Some("abc".to_string()),
    );
    let url = Url::parse(&request.url()).expect("built URL should parse");

    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_eq!(
        pairs,
        vec![
            ("format".to_string(), "xml".to_string()),
            ("api_key".to_string(), "abc".to_string()),
            ("username".to_string(), "tom".to_string()),
        ]
    );
}

#[test]
fn unset_credentials_are_omitted_from_query() {
    let request = LookupRequest::new("14158586273");
    let url = Url::parse(&request.url()).expect("built URL should parse");

    let keys: Vec<String> = url.query_pairs().map(|(k, _)| k.into_owned()).collect();
    assert_eq!(keys, vec!["format".to_string()]);
}

#[test]
fn invalid_format_token_leaves_url_unchanged() {
    let mut request = LookupRequest::new("14158586273");
    request.set_format("xml").expect("xml is a valid format");
    let before = request.url();

    assert!(request.set_format("protobuf").is_err());
    assert_eq!(request.url(), before);
}
