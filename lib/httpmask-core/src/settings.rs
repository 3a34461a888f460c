//! Declarative redaction settings.
//!
//! Settings describe a [`RedactionConfig`](crate::RedactionConfig) as data, so it can
//! live next to the rest of an application configuration:
//!
//! ```json
//! {
//!   "masked-headers": ["authorization"],
//!   "masked-json-fields": ["password", "card.number"],
//!   "masked-path-segments": ["/v1/customer/${obfuscate}/orders"]
//! }
//! ```
//!
//! Every key is optional. Settings are only read, never written back.

use serde::Deserialize;

use crate::{HttpMaskError, RedactionConfigBuilder};

/// Declarative counterpart of [`RedactionConfigBuilder`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RedactionSettings {
    /// Names of the headers to mask.
    #[serde(default)]
    pub masked_headers: Vec<String>,

    /// Dotted paths of the JSON body fields to mask.
    #[serde(default)]
    pub masked_json_fields: Vec<String>,

    /// URL path templates.
    #[serde(default)]
    pub masked_path_segments: Vec<String>,
}

impl RedactionSettings {
    /// Reads settings from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`HttpMaskError::InvalidSettings`] naming the offending key.
    pub fn from_json_str(json: &str) -> Result<Self, HttpMaskError> {
        let deserializer = &mut serde_json::Deserializer::from_str(json);
        serde_path_to_error::deserialize(deserializer).map_err(|err| {
            HttpMaskError::InvalidSettings {
                message: format!("at '{}': {}", err.path(), err.inner()),
            }
        })
    }

    /// Reads settings from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`HttpMaskError::InvalidSettings`] if the document cannot be read.
    #[cfg(feature = "yaml")]
    #[cfg_attr(docsrs, doc(cfg(feature = "yaml")))]
    pub fn from_yaml_str(yaml: &str) -> Result<Self, HttpMaskError> {
        serde_saphyr::from_str(yaml).map_err(|error| HttpMaskError::InvalidSettings {
            message: error.to_string(),
        })
    }

    /// Turns these settings into a configuration builder.
    ///
    /// The builder can still be extended, with a custom codec for instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use httpmask_core::{RedactionSettings, SerdeJsonCodec};
    ///
    /// let settings = RedactionSettings::from_json_str(r#"{ "masked-headers": ["Authorization"] }"#)?;
    /// let config = settings
    ///     .into_builder()
    ///     .with_codec(SerdeJsonCodec::pretty())
    ///     .build()?;
    ///
    /// assert!(config.masked_headers().contains("authorization"));
    /// # Ok::<(), httpmask_core::HttpMaskError>(())
    /// ```
    #[must_use]
    pub fn into_builder(self) -> RedactionConfigBuilder {
        let Self {
            masked_headers,
            masked_json_fields,
            masked_path_segments,
        } = self;

        RedactionConfigBuilder::default()
            .with_masked_headers(masked_headers)
            .with_masked_json_fields(masked_json_fields)
            .with_masked_path_segments(masked_path_segments)
    }
}
