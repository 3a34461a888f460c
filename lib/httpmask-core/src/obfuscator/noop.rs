use super::{HttpObfuscator, ObfuscatedRequest, ObfuscatedResponse};
use crate::{HttpMaskError, HttpRequest, HttpResponse};

/// Obfuscator masking nothing.
///
/// Requests are copied as is. Responses are still buffered once, so the original copy
/// can be decoded after the obfuscated one has been logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObfuscator;

impl HttpObfuscator for NoopObfuscator {
    fn obfuscate_request(&self, request: &HttpRequest) -> ObfuscatedRequest {
        ObfuscatedRequest::new(request.clone())
    }

    fn obfuscate_response(
        &self,
        response: HttpResponse,
    ) -> Result<ObfuscatedResponse, HttpMaskError> {
        let (body, parts) = response.buffered()?;
        let original = parts.clone().into_response(body.clone());
        let obfuscated = parts.into_response(body);
        Ok(ObfuscatedResponse::new(obfuscated, original))
    }
}
