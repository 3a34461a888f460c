use bytes::Bytes;
use http::HeaderMap;
use tracing::{debug, warn};
use url::Url;

use super::{HttpObfuscator, ObfuscatedRequest, ObfuscatedResponse, RedactionConfig};
use crate::mask::{mask_fields, mask_headers, mask_url_segments};
use crate::{HttpMaskError, HttpRequest, HttpResponse};

/// Obfuscator masking what a [`RedactionConfig`] lists.
///
/// For each record it masks:
///
/// - the values of the listed headers
/// - the listed JSON body fields, the body being re-serialized with the configured codec
/// - the URL path segments selected by the first matching path rule (requests only)
///
/// A concern with nothing configured is left as is, so an empty configuration behaves
/// like [`NoopObfuscator`](super::NoopObfuscator).
///
/// A URL selected by a path rule is rebuilt from its parsed form, which is normalized:
/// the scheme and host are lowercased, a default port is dropped and the path is
/// percent-encoded. So `HTTP://API.example.com:80/v1/customer/a b` is logged as
/// `http://api.example.com//v1/customer/*****`. A URL no rule selects is kept verbatim.
///
/// # Example
///
/// ```rust
/// use http::header::AUTHORIZATION;
/// use http::{HeaderValue, Method};
/// use httpmask_core::{ConfigurableObfuscator, HttpObfuscator, HttpRequest, RedactionConfig};
///
/// let config = RedactionConfig::builder()
///     .with_masked_headers(["authorization"])
///     .with_masked_path_segments(["/v1/customer/${obfuscate}"])
///     .build()?;
/// let obfuscator = ConfigurableObfuscator::new(config);
///
/// let request = HttpRequest::builder(Method::GET, "https://api.example.com/v1/customer/3232323")
///     .header(AUTHORIZATION, HeaderValue::from_static("Bearer abc"))
///     .build();
/// let masked = obfuscator.obfuscate_request(&request);
///
/// assert_eq!(masked.obfuscated().url(), "https://api.example.com//v1/customer/*******");
/// assert_eq!(masked.obfuscated().headers()[AUTHORIZATION], "**********");
/// # Ok::<(), httpmask_core::HttpMaskError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigurableObfuscator {
    config: RedactionConfig,
}

impl ConfigurableObfuscator {
    /// Creates an obfuscator from a configuration.
    #[must_use]
    pub fn new(config: RedactionConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &RedactionConfig {
        &self.config
    }

    fn mask_headers(&self, headers: &HeaderMap) -> HeaderMap {
        let names = self.config.masked_headers();
        if names.is_empty() {
            return headers.clone();
        }
        mask_headers(headers, names)
    }

    fn mask_url(&self, raw: &str) -> String {
        if self.config.path_rules().is_empty() {
            return raw.to_string();
        }

        match self.try_mask_url(raw) {
            Ok(Some(masked)) => masked,
            Ok(None) => raw.to_string(),
            Err(error) => {
                warn!(%error, url = raw, "unable to obfuscate URL, keeping it as is");
                raw.to_string()
            }
        }
    }

    /// `None` when no rule selects a segment.
    fn try_mask_url(&self, raw: &str) -> Result<Option<String>, HttpMaskError> {
        let url = Url::parse(raw)?;
        let segments = self.config.path_rules().segments_for(url.path());
        if segments.is_empty() {
            return Ok(None);
        }
        Ok(Some(mask_url_segments(&url, segments)))
    }

    /// Masks a body, an empty body is returned on failure.
    fn mask_body(&self, body: &Bytes) -> Bytes {
        if self.config.masked_json_fields().is_empty() {
            return body.clone();
        }
        if body.is_empty() {
            return Bytes::new();
        }

        match self.try_mask_body(body) {
            Ok(masked) => masked,
            Err(error) => {
                warn!(
                    %error,
                    body_len = body.len(),
                    "unable to obfuscate body as JSON, logging an empty body"
                );
                Bytes::new()
            }
        }
    }

    fn try_mask_body(&self, body: &Bytes) -> Result<Bytes, HttpMaskError> {
        let codec = self.config.codec();
        let value = codec.parse(body)?;
        let masked = mask_fields(&value, self.config.masked_json_fields());
        let bytes = codec.serialize(&masked)?;
        Ok(Bytes::from(bytes))
    }
}

impl From<RedactionConfig> for ConfigurableObfuscator {
    fn from(value: RedactionConfig) -> Self {
        Self::new(value)
    }
}

impl HttpObfuscator for ConfigurableObfuscator {
    fn obfuscate_request(&self, request: &HttpRequest) -> ObfuscatedRequest {
        let mut builder = request
            .to_builder()
            .url(self.mask_url(request.url()))
            .headers(self.mask_headers(request.headers()));
        if let Some(body) = request.body() {
            builder = builder.body(self.mask_body(body));
        }

        ObfuscatedRequest::new(builder.build())
    }

    fn obfuscate_response(
        &self,
        response: HttpResponse,
    ) -> Result<ObfuscatedResponse, HttpMaskError> {
        let (body, mut parts) = response.buffered()?;
        debug!(body_len = body.len(), status = %parts.status, "response body buffered");

        let original = parts.clone().into_response(body.clone());

        parts.headers = self.mask_headers(&parts.headers);
        let obfuscated = parts.into_response(self.mask_body(&body));

        Ok(ObfuscatedResponse::new(obfuscated, original))
    }
}
