//! Stateless masking primitives.
//!
//! These functions redact a single string, a JSON tree, a header map, or the path
//! segments of a URL. They are pure: inputs are never modified and the same input
//! always yields the same output.

mod headers;
mod json;
mod text;
mod url;

pub use self::headers::mask_headers;
pub use self::json::{mask_field, mask_fields, mask_value};
pub use self::text::{MASK_CHAR, mask_full, mask_partial};
pub use self::url::mask_url_segments;

pub(crate) use self::url::path_segments;
