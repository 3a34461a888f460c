/// Errors that can occur while building or running an obfuscator.
///
/// Only [`HttpMaskError::Io`] can escape an obfuscation call: every other failure
/// happening while masking a copy is recovered locally and logged.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum HttpMaskError {
    /// I/O error while buffering a response body stream.
    ///
    /// The exchange cannot proceed without the body, so this one is propagated.
    #[display("Failed to read the response body: {_0}")]
    Io(std::io::Error),

    /// JSON parsing or serialization error.
    ///
    /// Occurs when a body is not valid JSON or a tree cannot be written back.
    JsonValueError(serde_json::Error),

    /// URL parsing error.
    ///
    /// Occurs when a request URL cannot be parsed before masking its path segments.
    /// The obfuscator then logs the URL as is.
    #[display("Failed to parse URL: {_0}")]
    UrlError(url::ParseError),

    /// JSON tree conversion failure.
    ///
    /// Occurs when a JSON tree cannot be converted into the requested type.
    #[display("Failed to convert JSON at '{path}': {error}")]
    #[from(skip)]
    JsonError {
        /// The path of the field that failed to convert.
        path: String,
        /// The underlying JSON error.
        error: serde_json::Error,
    },

    /// A path-segment template cannot be compiled into a matcher.
    #[display("Invalid path template '{template}': {error}")]
    #[from(skip)]
    InvalidPathTemplate {
        /// The offending template.
        template: String,
        /// The underlying regex error.
        error: regex::Error,
    },

    /// Redaction settings cannot be read.
    #[display("Invalid redaction settings: {message}")]
    #[from(skip)]
    InvalidSettings {
        /// Description of the problem.
        message: String,
    },
}
