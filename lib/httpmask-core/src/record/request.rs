use std::fmt;

use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, Method};

use super::body::DisplayBody;
use super::display_headers;

/// An outbound HTTP request, as handed to the transport.
///
/// Requests are immutable: use [`HttpRequest::to_builder`] to derive a modified copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    method: Method,
    url: String,
    headers: HeaderMap,
    body: Option<Bytes>,
    charset: Option<String>,
}

impl HttpRequest {
    /// Starts building a request.
    ///
    /// # Example
    ///
    /// ```rust
    /// use http::header::AUTHORIZATION;
    /// use http::{HeaderValue, Method};
    /// use httpmask_core::HttpRequest;
    ///
    /// let request = HttpRequest::builder(Method::POST, "https://api.example.com/v1/users")
    ///     .header(AUTHORIZATION, HeaderValue::from_static("Bearer abc"))
    ///     .body(r#"{"name": "Alice"}"#)
    ///     .build();
    ///
    /// assert_eq!(request.url(), "https://api.example.com/v1/users");
    /// ```
    pub fn builder(method: Method, url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            body: None,
            charset: None,
        }
    }

    /// Returns a builder initialized with this request.
    #[must_use]
    pub fn to_builder(&self) -> HttpRequestBuilder {
        HttpRequestBuilder {
            method: self.method.clone(),
            url: self.url.clone(),
            headers: self.headers.clone(),
            body: self.body.clone(),
            charset: self.charset.clone(),
        }
    }

    /// The HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The full request URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The request headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The request body, if any.
    #[must_use]
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// The charset label of the body, if any.
    #[must_use]
    pub fn charset(&self) -> Option<&str> {
        self.charset.as_deref()
    }
}

impl fmt::Display for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {} HTTP/1.1", self.method, self.url)?;
        display_headers(f, &self.headers)?;
        write!(f, "\n{}", DisplayBody(Some(self.body.as_deref().unwrap_or_default())))
    }
}

impl From<http::Request<Bytes>> for HttpRequest {
    fn from(value: http::Request<Bytes>) -> Self {
        let (parts, body) = value.into_parts();
        Self {
            method: parts.method,
            url: parts.uri.to_string(),
            headers: parts.headers,
            body: (!body.is_empty()).then_some(body),
            charset: None,
        }
    }
}

/// Builder for [`HttpRequest`].
#[derive(Debug, Clone)]
pub struct HttpRequestBuilder {
    method: Method,
    url: String,
    headers: HeaderMap,
    body: Option<Bytes>,
    charset: Option<String>,
}

impl HttpRequestBuilder {
    /// Replaces the URL.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
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

    /// Sets the body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Removes the body.
    #[must_use]
    pub fn without_body(mut self) -> Self {
        self.body = None;
        self
    }

    /// Sets the charset label of the body.
    #[must_use]
    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    /// Builds the request.
    #[must_use]
    pub fn build(self) -> HttpRequest {
        let Self {
            method,
            url,
            headers,
            body,
            charset,
        } = self;

        HttpRequest {
            method,
            url,
            headers,
            body,
            charset,
        }
    }
}

#[cfg(test)]
mod tests {
    use http::header::{ACCEPT, AUTHORIZATION};

    use super::*;

    fn sample_request() -> HttpRequest {
        HttpRequest::builder(Method::POST, "http://localhost:8080/v1/users")
            .header(AUTHORIZATION, HeaderValue::from_static("Bearer abc"))
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .body(r#"{"name":"Alice"}"#)
            .charset("UTF-8")
            .build()
    }

    #[test]
    fn should_build_request() {
        let request = sample_request();

        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.url(), "http://localhost:8080/v1/users");
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer abc");
        assert_eq!(
            request.body().map(|body| &body[..]),
            Some(&br#"{"name":"Alice"}"#[..])
        );
        assert_eq!(request.charset(), Some("UTF-8"));
    }

    #[test]
    fn should_derive_a_modified_copy() {
        let request = sample_request();

        let copy = request
            .to_builder()
            .url("http://localhost:8080/v2")
            .without_body()
            .build();

        assert_eq!(copy.url(), "http://localhost:8080/v2");
        assert_eq!(copy.body(), None);
        assert_eq!(copy.headers(), request.headers());
        assert_eq!(request.url(), "http://localhost:8080/v1/users");
    }

    #[test]
    fn should_display_request() {
        let request = sample_request();

        insta::assert_snapshot!(request.to_string(), @r#"
        POST http://localhost:8080/v1/users HTTP/1.1
        authorization: Bearer abc
        accept: application/json

        {"name":"Alice"}
        "#);
    }

    #[test]
    fn should_convert_from_http_request() -> anyhow::Result<()> {
        let request = http::Request::builder()
            .method(Method::GET)
            .uri("https://example.com/items?page=2")
            .header(ACCEPT, "application/json")
            .body(Bytes::new())?;

        let request = HttpRequest::from(request);

        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.url(), "https://example.com/items?page=2");
        assert_eq!(request.headers()[ACCEPT], "application/json");
        assert_eq!(request.body(), None);
        Ok(())
    }
}
