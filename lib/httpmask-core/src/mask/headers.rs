use http::{HeaderMap, HeaderValue};
use indexmap::IndexSet;

use super::mask_full;

/// Returns a copy of `headers` where every value of a listed header is masked.
///
/// Header names are compared case-insensitively: `names` are expected to be
/// lowercase, which is how [`http::HeaderName`] stores them. Each masked value keeps
/// its length, and multi-valued headers keep the number and order of their values.
///
/// # Example
///
/// ```rust
/// use http::{HeaderMap, HeaderValue};
/// use httpmask_core::mask::mask_headers;
/// use indexmap::IndexSet;
///
/// let mut headers = HeaderMap::new();
/// headers.insert("authorization", HeaderValue::from_static("Bearer abc"));
/// headers.insert("accept", HeaderValue::from_static("application/json"));
///
/// let names = IndexSet::from(["authorization".to_string()]);
/// let masked = mask_headers(&headers, &names);
///
/// assert_eq!(masked["authorization"], "**********");
/// assert_eq!(masked["accept"], "application/json");
/// ```
#[must_use]
pub fn mask_headers(headers: &HeaderMap, names: &IndexSet<String>) -> HeaderMap {
    let mut result = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let value = if names.contains(name.as_str()) {
            mask_header_value(value)
        } else {
            value.clone()
        };
        result.append(name.clone(), value);
    }
    result
}

fn mask_header_value(value: &HeaderValue) -> HeaderValue {
    let masked = mask_full(&String::from_utf8_lossy(value.as_bytes()));
    // only '*' characters, always a valid header value
    HeaderValue::try_from(masked).unwrap_or_else(|_| HeaderValue::from_static(""))
}
