//! Transport records: the requests and responses flowing through obfuscators.

use std::fmt;

use http::HeaderMap;

mod body;
mod request;
mod response;

pub use self::body::ResponseBody;
pub use self::request::{HttpRequest, HttpRequestBuilder};
pub use self::response::{HttpResponse, HttpResponseBuilder};

/// Writes one `name: value` line per header value.
fn display_headers(f: &mut fmt::Formatter<'_>, headers: &HeaderMap) -> fmt::Result {
    for (name, value) in headers {
        writeln!(f, "{name}: {}", String::from_utf8_lossy(value.as_bytes()))?;
    }
    Ok(())
}
