use std::fmt;
use std::io::Read;
use std::sync::Arc;

use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};

use super::body::{DisplayBody, ResponseBody};
use super::display_headers;
use super::request::HttpRequest;

/// An inbound HTTP response, as received from the transport.
///
/// The body may be a single-read stream, so a response is neither `Clone` nor
/// re-readable; obfuscators buffer it once and hand out copies.
#[derive(Debug)]
pub struct HttpResponse {
    status: StatusCode,
    reason: Option<String>,
    headers: HeaderMap,
    body: ResponseBody,
    request: Option<Arc<HttpRequest>>,
}

impl HttpResponse {
    /// Starts building a response.
    ///
    /// # Example
    ///
    /// ```rust
    /// use http::StatusCode;
    /// use httpmask_core::HttpResponse;
    ///
    /// let response = HttpResponse::builder(StatusCode::OK)
    ///     .reason("OK")
    ///     .body(r#"{"id": 42}"#)
    ///     .build();
    ///
    /// assert_eq!(response.status(), StatusCode::OK);
    /// ```
    pub fn builder(status: StatusCode) -> HttpResponseBuilder {
        HttpResponseBuilder {
            status,
            reason: None,
            headers: HeaderMap::new(),
            body: ResponseBody::Empty,
            request: None,
        }
    }

    /// Returns a builder initialized with this response.
    ///
    /// The body moves into the builder as is, a stream stays unread.
    #[must_use]
    pub fn into_builder(self) -> HttpResponseBuilder {
        let Self {
            status,
            reason,
            headers,
            body,
            request,
        } = self;

        HttpResponseBuilder {
            status,
            reason,
            headers,
            body,
            request,
        }
    }

    /// The status code.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The reason phrase, if any.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// The response headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The response body.
    #[must_use]
    pub fn body(&self) -> &ResponseBody {
        &self.body
    }

    /// Consumes the response and returns its body.
    #[must_use]
    pub fn into_body(self) -> ResponseBody {
        self.body
    }

    /// The request this response answers, if known.
    #[must_use]
    pub fn request(&self) -> Option<&HttpRequest> {
        self.request.as_deref()
    }

    /// Reads the whole body, splitting the response into its bytes and its other parts.
    ///
    /// # Errors
    ///
    /// Returns the I/O error raised while reading a body stream.
    pub(crate) fn buffered(self) -> std::io::Result<(Bytes, BufferedParts)> {
        let Self {
            status,
            reason,
            headers,
            body,
            request,
        } = self;
        let bytes = body.into_bytes()?;
        let parts = BufferedParts {
            status,
            reason,
            headers,
            request,
        };
        Ok((bytes, parts))
    }
}

/// Everything but the body of a buffered response.
#[derive(Debug, Clone)]
pub(crate) struct BufferedParts {
    pub(crate) status: StatusCode,
    pub(crate) reason: Option<String>,
    pub(crate) headers: HeaderMap,
    pub(crate) request: Option<Arc<HttpRequest>>,
}

impl BufferedParts {
    /// Rebuilds a response from these parts with a buffered body.
    pub(crate) fn into_response(self, body: Bytes) -> HttpResponse {
        let Self {
            status,
            reason,
            headers,
            request,
        } = self;

        HttpResponse {
            status,
            reason,
            headers,
            body: ResponseBody::Buffered(body),
            request,
        }
    }
}

impl fmt::Display for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP/1.1 {}", self.status.as_u16())?;
        if let Some(reason) = &self.reason {
            write!(f, " {reason}")?;
        }
        writeln!(f)?;
        display_headers(f, &self.headers)?;
        let body: Option<&[u8]> = match &self.body {
            ResponseBody::Empty => Some(&[]),
            ResponseBody::Buffered(bytes) => Some(bytes.as_ref()),
            ResponseBody::Stream(_) => None,
        };
        write!(f, "\n{}", DisplayBody(body))
    }
}

impl<R> From<http::Response<R>> for HttpResponse
where
    R: Read + Send + 'static,
{
    fn from(value: http::Response<R>) -> Self {
        let (parts, body) = value.into_parts();
        Self {
            status: parts.status,
            reason: parts.status.canonical_reason().map(ToString::to_string),
            headers: parts.headers,
            body: ResponseBody::from_reader(body),
            request: None,
        }
    }
}

/// Builder for [`HttpResponse`].
#[derive(Debug)]
pub struct HttpResponseBuilder {
    status: StatusCode,
    reason: Option<String>,
    headers: HeaderMap,
    body: ResponseBody,
    request: Option<Arc<HttpRequest>>,
}

impl HttpResponseBuilder {
    /// Replaces the status code.
    #[must_use]
    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Sets the reason phrase.
    #[must_use]
    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Appends a header value, keeping the values already set for that name.
    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Replaces all headers.
    #[must_use]
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Sets an in-memory body.
    #[must_use]
    pub fn body(mut self, body: impl Into<ResponseBody>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets a single-read body stream.
    #[must_use]
    pub fn body_reader(mut self, reader: impl Read + Send + 'static) -> Self {
        self.body = ResponseBody::from_reader(reader);
        self
    }

    /// Sets the request this response answers.
    #[must_use]
    pub fn request(mut self, request: impl Into<Arc<HttpRequest>>) -> Self {
        self.request = Some(request.into());
        self
    }

    /// Builds the response.
    #[must_use]
    pub fn build(self) -> HttpResponse {
        let Self {
            status,
            reason,
            headers,
            body,
            request,
        } = self;

        HttpResponse {
            status,
            reason,
            headers,
            body,
            request,
        }
    }
}
