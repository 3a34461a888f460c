use std::fmt;

use crate::{HttpRequest, HttpResponse};

/// The masked copy of a request.
///
/// Displays as the masked request, ready to be logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObfuscatedRequest {
    obfuscated: HttpRequest,
}

impl ObfuscatedRequest {
    pub(crate) fn new(obfuscated: HttpRequest) -> Self {
        Self { obfuscated }
    }

    /// The masked request.
    #[must_use]
    pub fn obfuscated(&self) -> &HttpRequest {
        &self.obfuscated
    }

    /// Consumes the wrapper and returns the masked request.
    #[must_use]
    pub fn into_obfuscated(self) -> HttpRequest {
        self.obfuscated
    }
}

impl fmt::Display for ObfuscatedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.obfuscated, f)
    }
}

/// The two copies of a buffered response.
///
/// The original copy carries the body bytes exactly as received and goes to the
/// decoder. The obfuscated copy goes to the log, and is what this wrapper displays.
#[derive(Debug)]
pub struct ObfuscatedResponse {
    obfuscated: HttpResponse,
    original: HttpResponse,
}

impl ObfuscatedResponse {
    pub(crate) fn new(obfuscated: HttpResponse, original: HttpResponse) -> Self {
        Self {
            obfuscated,
            original,
        }
    }

    /// The masked copy.
    #[must_use]
    pub fn obfuscated(&self) -> &HttpResponse {
        &self.obfuscated
    }

    /// The untouched copy.
    #[must_use]
    pub fn original(&self) -> &HttpResponse {
        &self.original
    }

    /// Consumes the wrapper and returns the untouched copy.
    #[must_use]
    pub fn into_original(self) -> HttpResponse {
        self.original
    }

    /// Consumes the wrapper and returns `(obfuscated, original)`.
    #[must_use]
    pub fn into_parts(self) -> (HttpResponse, HttpResponse) {
        (self.obfuscated, self.original)
    }
}

impl fmt::Display for ObfuscatedResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.obfuscated, f)
    }
}
