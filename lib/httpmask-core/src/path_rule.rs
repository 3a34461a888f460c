//! Compilation of URL path templates into segment matchers.
//!
//! A template describes a family of URL paths with two placeholders:
//!
//! - `${obfuscate}` matches any value and marks the segment for masking
//! - `${value}` matches any value and keeps it visible
//!
//! ```rust
//! use httpmask_core::PathRule;
//!
//! let rule = PathRule::compile("/v1/secret-code/${obfuscate}/public-code/${value}/")?;
//!
//! assert!(rule.is_match("/v1/secret-code/230329324/public-code/243143DadeE/"));
//! assert_eq!(rule.segments(), &[3]);
//! # Ok::<(), httpmask_core::HttpMaskError>(())
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::HttpMaskError;
use crate::mask::path_segments;

/// Placeholder marking a segment to mask.
pub const OBFUSCATE_TOKEN: &str = "${obfuscate}";

/// Placeholder marking a segment that can take any value and stays visible.
pub const VALUE_TOKEN: &str = "${value}";

/// Pattern standing for a placeholder in the compiled matcher.
const WILDCARD: &str = ".*";

/// Regular expression for matching both placeholders in a template.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = [OBFUSCATE_TOKEN, VALUE_TOKEN].map(regex::escape).join("|");
    Regex::new(&pattern).expect("a valid regex")
});

/// A compiled path template.
///
/// Holds a matcher anchored on the whole URL path, and the zero-based indices of the
/// segments to mask when it matches. Indices count the empty segment before the
/// leading `/`.
#[derive(Debug, Clone)]
pub struct PathRule {
    template: String,
    matcher: Regex,
    segments: Vec<usize>,
}

impl PathRule {
    /// Compiles a path template.
    ///
    /// Literal parts of the template are matched verbatim, placeholders match anything.
    ///
    /// # Errors
    ///
    /// Returns [`HttpMaskError::InvalidPathTemplate`] if the matcher cannot be built.
    pub fn compile(template: &str) -> Result<Self, HttpMaskError> {
        let segments = path_segments(template)
            .into_iter()
            .enumerate()
            .filter_map(|(index, segment)| (segment == OBFUSCATE_TOKEN).then_some(index))
            .collect();

        let pattern = TOKEN_RE
            .split(template)
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(WILDCARD);
        let matcher = Regex::new(&format!("^{pattern}$")).map_err(|error| {
            HttpMaskError::InvalidPathTemplate {
                template: template.to_string(),
                error,
            }
        })?;

        Ok(Self {
            template: template.to_string(),
            matcher,
            segments,
        })
    }

    /// The template this rule was compiled from.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The indices of the segments to mask.
    #[must_use]
    pub fn segments(&self) -> &[usize] {
        &self.segments
    }

    /// Checks whether this rule applies to a URL path.
    #[must_use]
    pub fn is_match(&self, path: &str) -> bool {
        self.matcher.is_match(path)
    }
}

/// An ordered set of path rules.
///
/// When several rules match the same path, the first registered one wins and the
/// others are ignored: indices from different rules are never merged.
#[derive(Debug, Clone, Default)]
pub struct PathRules {
    rules: Vec<PathRule>,
}

impl PathRules {
    /// Compiles every template, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns the error of the first template that cannot be compiled.
    pub fn compile<I, S>(templates: I) -> Result<Self, HttpMaskError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rules = templates
            .into_iter()
            .map(|template| PathRule::compile(template.as_ref()))
            .collect::<Result<_, _>>()?;
        Ok(Self { rules })
    }

    /// Returns the segments to mask for a URL path.
    ///
    /// Empty when no rule matches.
    #[must_use]
    pub fn segments_for(&self, path: &str) -> &[usize] {
        self.rules
            .iter()
            .find(|rule| rule.is_match(path))
            .map(PathRule::segments)
            .unwrap_or_default()
    }

    /// Checks if there are no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Iterates over the rules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &PathRule> {
        self.rules.iter()
    }
}
