//! # httpmask core
//!
//! Selective redaction of HTTP traffic before it reaches the logs.
//!
//! An HTTP client routes each outbound request and each inbound response through an
//! [`HttpObfuscator`] before logging them. The obfuscator returns a masked copy for the
//! log and, for responses, an untouched copy for the code decoding the body.
//!
//! What gets masked is described by a [`RedactionConfig`]:
//!
//! - **headers**: every value of a listed header is replaced by asterisks
//! - **JSON body fields**: dotted paths like `customer.address.street`, masked
//!   according to the type of the value
//! - **URL path segments**: templates like `/v1/customer/${obfuscate}/orders`
//!
//! ## Quick Start
//!
//! ```rust
//! use http::header::AUTHORIZATION;
//! use http::{HeaderValue, Method, StatusCode};
//! use httpmask_core::{
//!     ConfigurableObfuscator, HttpObfuscator, HttpRequest, HttpResponse, RedactionConfig,
//! };
//!
//! let config = RedactionConfig::builder()
//!     .with_masked_headers(["authorization"])
//!     .with_masked_json_fields(["card.number"])
//!     .with_masked_path_segments(["/v1/customer/${obfuscate}/payments"])
//!     .build()?;
//! let obfuscator = ConfigurableObfuscator::new(config);
//!
//! let request = HttpRequest::builder(Method::POST, "https://pay.example.com/v1/customer/3232323/payments")
//!     .header(AUTHORIZATION, HeaderValue::from_static("Bearer abc"))
//!     .body(r#"{"card":{"number":"4111111111111111","holder":"Alice"}}"#)
//!     .build();
//! println!("{}", obfuscator.obfuscate_request(&request));
//!
//! let response = HttpResponse::builder(StatusCode::CREATED)
//!     .body(r#"{"card":{"number":"4111111111111111"},"status":"accepted"}"#)
//!     .request(request)
//!     .build();
//! let wrapper = obfuscator.obfuscate_response(response)?;
//! println!("{wrapper}");
//!
//! let response = wrapper.into_original();
//! assert_eq!(
//!     response.body().as_bytes().map(|bytes| bytes.as_ref()),
//!     Some(br#"{"card":{"number":"4111111111111111"},"status":"accepted"}"#.as_slice())
//! );
//! # Ok::<(), httpmask_core::HttpMaskError>(())
//! ```
//!
//! ## Logging whole exchanges
//!
//! [`ExchangeLogger`] wraps an obfuscator and logs a request and its response as one
//! `tracing` record, then returns the untouched response.
//!
//! ## Declarative settings
//!
//! [`RedactionSettings`] reads the same configuration from JSON, or from YAML with the
//! `yaml` feature.
//!
//! ## Masking primitives
//!
//! The [`mask`] module exposes the stateless functions used by the obfuscators.

mod codec;
mod error;
mod exchange;
pub mod mask;
mod obfuscator;
mod path_rule;
mod record;
mod settings;

pub use self::codec::{JsonCodec, SerdeJsonCodec};
pub use self::error::HttpMaskError;
pub use self::exchange::ExchangeLogger;
pub use self::obfuscator::{
    ConfigurableObfuscator, HttpObfuscator, NoopObfuscator, ObfuscatedRequest,
    ObfuscatedResponse, RedactionConfig, RedactionConfigBuilder,
};
pub use self::path_rule::{OBFUSCATE_TOKEN, PathRule, PathRules, VALUE_TOKEN};
pub use self::record::{
    HttpRequest, HttpRequestBuilder, HttpResponse, HttpResponseBuilder, ResponseBody,
};
pub use self::settings::RedactionSettings;
