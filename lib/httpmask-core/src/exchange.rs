//! Logging of whole HTTP exchanges.
//!
//! [`ExchangeLogger`] sits between the transport and the decoder: it logs the masked
//! request and response in a single record, then hands the untouched response on.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::codec::{JsonCodec, SerdeJsonCodec};
use crate::{
    ConfigurableObfuscator, HttpMaskError, HttpObfuscator, HttpResponse, NoopObfuscator,
    RedactionConfig,
};

/// Logs HTTP exchanges through an obfuscator.
///
/// Bodies are decoded with [`SerdeJsonCodec`] unless another codec is set with
/// [`with_codec`](Self::with_codec) or taken from the configuration by
/// [`configured`](Self::configured).
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use http::{Method, StatusCode};
/// use httpmask_core::{ConfigurableObfuscator, ExchangeLogger, HttpRequest, HttpResponse, RedactionConfig};
///
/// let config = RedactionConfig::builder()
///     .with_masked_json_fields(["token"])
///     .build()?;
/// let logger = ExchangeLogger::new("billing", Arc::new(ConfigurableObfuscator::new(config)));
///
/// let request = HttpRequest::builder(Method::POST, "https://billing.example.com/v1/sessions").build();
/// let response = HttpResponse::builder(StatusCode::CREATED)
///     .body(r#"{"token":"s3cr3t"}"#)
///     .request(request)
///     .build();
///
/// let response = logger.log_exchange(response)?;
///
/// assert_eq!(response.to_string(), "HTTP/1.1 201\n\n{\"token\":\"s3cr3t\"}");
/// # Ok::<(), httpmask_core::HttpMaskError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ExchangeLogger {
    module: String,
    obfuscator: Arc<dyn HttpObfuscator>,
    codec: Arc<dyn JsonCodec>,
}

impl ExchangeLogger {
    /// Creates a logger tagging its records with a module name.
    pub fn new(module: impl Into<String>, obfuscator: Arc<dyn HttpObfuscator>) -> Self {
        Self {
            module: module.into(),
            obfuscator,
            codec: Arc::new(SerdeJsonCodec::new()),
        }
    }

    /// Creates a logger masking with a [`ConfigurableObfuscator`].
    ///
    /// Bodies are decoded with the codec of the configuration.
    pub fn configured(module: impl Into<String>, config: RedactionConfig) -> Self {
        let codec = config.shared_codec();
        let logger = Self::new(module, Arc::new(ConfigurableObfuscator::new(config)));
        Self { codec, ..logger }
    }

    /// Creates a logger masking nothing.
    pub fn unmasked(module: impl Into<String>) -> Self {
        Self::new(module, Arc::new(NoopObfuscator))
    }

    /// Sets the codec used by [`log_and_decode`](Self::log_and_decode).
    #[must_use]
    pub fn with_codec(mut self, codec: impl JsonCodec + 'static) -> Self {
        self.codec = Arc::new(codec);
        self
    }

    /// The module name.
    #[must_use]
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Logs the masked exchange and returns the untouched response.
    ///
    /// The request logged is the one the response refers to, if any.
    ///
    /// # Errors
    ///
    /// Returns [`HttpMaskError::Io`] if the response body cannot be read.
    pub fn log_exchange(&self, response: HttpResponse) -> Result<HttpResponse, HttpMaskError> {
        let request = response
            .request()
            .map(|request| self.obfuscator.obfuscate_request(request));
        let wrapper = self.obfuscator.obfuscate_response(response)?;

        info!(
            module = %self.module,
            status = %wrapper.original().status(),
            "{} Module - Request was [{}]. Response was [{wrapper}]",
            self.module,
            DisplayOption(request.as_ref()),
        );

        Ok(wrapper.into_original())
    }

    /// Logs the masked exchange, then decodes the untouched JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be read, is not JSON, or does not fit `T`.
    pub fn log_and_decode<T>(&self, response: HttpResponse) -> Result<T, HttpMaskError>
    where
        T: DeserializeOwned,
    {
        let response = self.log_exchange(response)?;
        let body = response.into_body().into_bytes()?;

        self.codec.decode(&body)
    }
}

struct DisplayOption<'a, T>(Option<&'a T>);

impl<T: fmt::Display> fmt::Display for DisplayOption<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => fmt::Display::fmt(value, f),
            None => write!(f, "unknown"),
        }
    }
}
