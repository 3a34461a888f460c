use std::sync::Arc;

use indexmap::IndexSet;

use crate::HttpMaskError;
use crate::codec::{JsonCodec, SerdeJsonCodec};
use crate::path_rule::PathRules;

/// What to mask in HTTP records.
///
/// Built once with [`RedactionConfig::builder`], then shared read-only: nothing can
/// change it afterwards.
#[derive(Debug, Clone)]
pub struct RedactionConfig {
    headers: IndexSet<String>,
    json_fields: Vec<String>,
    path_rules: PathRules,
    codec: Arc<dyn JsonCodec>,
}

impl RedactionConfig {
    /// Starts building a configuration that masks nothing.
    #[must_use]
    pub fn builder() -> RedactionConfigBuilder {
        RedactionConfigBuilder::default()
    }

    /// Lowercase names of the headers to mask.
    #[must_use]
    pub fn masked_headers(&self) -> &IndexSet<String> {
        &self.headers
    }

    /// Dotted paths of the JSON fields to mask, in application order.
    #[must_use]
    pub fn masked_json_fields(&self) -> &[String] {
        &self.json_fields
    }

    /// Compiled URL path rules.
    #[must_use]
    pub fn path_rules(&self) -> &PathRules {
        &self.path_rules
    }

    /// The JSON codec used for bodies.
    #[must_use]
    pub fn codec(&self) -> &dyn JsonCodec {
        self.codec.as_ref()
    }

    pub(crate) fn shared_codec(&self) -> Arc<dyn JsonCodec> {
        Arc::clone(&self.codec)
    }
}

/// Builder for [`RedactionConfig`].
///
/// Every `with_*` call adds to what previous calls registered.
///
/// # Example
///
/// ```rust
/// use httpmask_core::RedactionConfig;
///
/// let config = RedactionConfig::builder()
///     .with_masked_headers(["Authorization", "X-Api-Key"])
///     .with_masked_json_fields(["password", "card.number"])
///     .with_masked_path_segments(["/v1/customer/${obfuscate}/orders"])
///     .build()?;
///
/// assert!(config.masked_headers().contains("authorization"));
/// assert_eq!(config.path_rules().len(), 1);
/// # Ok::<(), httpmask_core::HttpMaskError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RedactionConfigBuilder {
    headers: IndexSet<String>,
    json_fields: Vec<String>,
    path_templates: Vec<String>,
    codec: Option<Arc<dyn JsonCodec>>,
}

impl RedactionConfigBuilder {
    /// Adds headers whose values must be masked.
    ///
    /// Names are case-insensitive.
    #[must_use]
    pub fn with_masked_headers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.headers.extend(
            names
                .into_iter()
                .map(|name| name.as_ref().to_ascii_lowercase()),
        );
        self
    }

    /// Adds dotted paths of JSON body fields to mask, like `customer.address.street`.
    #[must_use]
    pub fn with_masked_json_fields<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.json_fields.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Adds URL path templates, see [`PathRule`](crate::PathRule) for the syntax.
    ///
    /// Templates are compiled by [`Self::build`].
    #[must_use]
    pub fn with_masked_path_segments<I, S>(mut self, templates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.path_templates
            .extend(templates.into_iter().map(Into::into));
        self
    }

    /// Sets the JSON codec used to read and write bodies.
    ///
    /// Defaults to a compact [`SerdeJsonCodec`].
    #[must_use]
    pub fn with_codec(mut self, codec: impl JsonCodec + 'static) -> Self {
        self.codec = Some(Arc::new(codec));
        self
    }

    /// Compiles the path templates and builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpMaskError::InvalidPathTemplate`] if a template cannot be compiled.
    pub fn build(self) -> Result<RedactionConfig, HttpMaskError> {
        let Self {
            headers,
            json_fields,
            path_templates,
            codec,
        } = self;

        let path_rules = PathRules::compile(&path_templates)?;
        let codec = codec.unwrap_or_else(|| Arc::new(SerdeJsonCodec::default()));

        Ok(RedactionConfig {
            headers,
            json_fields,
            path_rules,
            codec,
        })
    }
}
