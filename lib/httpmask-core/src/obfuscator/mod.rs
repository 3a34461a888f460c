//! Obfuscators: the capability turning HTTP records into loggable copies.
//!
//! An [`HttpObfuscator`] is obtained once, when the HTTP client is set up, then shared
//! by every call. Per call, the request goes through
//! [`HttpObfuscator::obfuscate_request`] before being logged, and the response through
//! [`HttpObfuscator::obfuscate_response`] right after being received. The response
//! wrapper hands the original copy to the decoder and the masked copy to the log.
//!
//! Two implementations ship with the crate:
//!
//! - [`ConfigurableObfuscator`] masks what a [`RedactionConfig`] lists
//! - [`NoopObfuscator`] masks nothing

use std::fmt::Debug;

use crate::{HttpMaskError, HttpRequest, HttpResponse};

mod config;
mod configurable;
mod noop;
mod wrapper;

pub use self::config::{RedactionConfig, RedactionConfigBuilder};
pub use self::configurable::ConfigurableObfuscator;
pub use self::noop::NoopObfuscator;
pub use self::wrapper::{ObfuscatedRequest, ObfuscatedResponse};

/// Produces redacted copies of HTTP requests and responses.
///
/// Implementations are immutable once built and can be shared across threads, usually
/// behind an `Arc<dyn HttpObfuscator>`.
pub trait HttpObfuscator: Debug + Send + Sync {
    /// Returns a masked copy of a request, for logging only.
    ///
    /// The request itself is left untouched. Masking problems never fail the call:
    /// they are logged and the affected part is degraded.
    fn obfuscate_request(&self, request: &HttpRequest) -> ObfuscatedRequest;

    /// Buffers the response body and returns both a masked copy and an untouched copy.
    ///
    /// The body stream is read to the end and closed exactly once, whatever the
    /// outcome.
    ///
    /// # Errors
    ///
    /// Returns [`HttpMaskError::Io`] if the body stream cannot be read.
    fn obfuscate_response(&self, response: HttpResponse)
    -> Result<ObfuscatedResponse, HttpMaskError>;
}
