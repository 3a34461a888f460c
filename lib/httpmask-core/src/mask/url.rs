use url::Url;

use super::mask_full;

/// Splits a URL path into `/`-delimited segments.
///
/// The leading `/` yields an empty first segment, trailing empty segments are dropped:
/// `/v1/users/` gives `["", "v1", "users"]`.
pub(crate) fn path_segments(path: &str) -> Vec<&str> {
    let mut segments = path.split('/').collect::<Vec<_>>();
    while segments.last().is_some_and(|segment| segment.is_empty()) {
        segments.pop();
    }
    segments
}

/// Rebuilds `url` with the path segments at `indices` masked.
///
/// The result is `scheme://authority` followed by `/` and each path segment. Indices are
/// zero-based and count the empty segment before the leading `/`, so the rebuilt path
/// starts with a doubled slash. The query string and fragment are not kept.
///
/// # Example
///
/// ```rust
/// use httpmask_core::mask::mask_url_segments;
/// use url::Url;
///
/// let url = Url::parse("https://api.example.com/v1/customer/3232323/orders")?;
///
/// assert_eq!(
///     mask_url_segments(&url, &[3]),
///     "https://api.example.com//v1/customer/*******/orders"
/// );
/// # Ok::<(), url::ParseError>(())
/// ```
#[must_use]
pub fn mask_url_segments(url: &Url, indices: &[usize]) -> String {
    let mut result = format!("{}://{}", url.scheme(), url.authority());
    for (index, segment) in path_segments(url.path()).into_iter().enumerate() {
        result.push('/');
        if indices.contains(&index) {
            result.push_str(&mask_full(segment));
        } else {
            result.push_str(segment);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::root("/", &[])]
    #[case::empty("", &[])]
    #[case::simple("/v1/users", &["", "v1", "users"])]
    #[case::trailing_slash("/v1/users/", &["", "v1", "users"])]
    #[case::inner_empty("/v1//users", &["", "v1", "", "users"])]
    fn should_split_path(#[case] path: &str, #[case] expected: &[&str]) {
        assert_eq!(path_segments(path), expected);
    }

    #[test]
    fn should_mask_url_segments() -> anyhow::Result<()> {
        let url = Url::parse(
            "http://wwww.mysecrets.com:900/v1/store/store1/customer/3232323/token/1223daeDEAed/",
        )?;

        let masked = mask_url_segments(&url, &[5, 7]);

        assert_eq!(
            masked,
            "http://wwww.mysecrets.com:900//v1/store/store1/customer/*******/token/************"
        );
        Ok(())
    }

    #[test]
    fn should_keep_url_without_indices() -> anyhow::Result<()> {
        let url = Url::parse("http://www.com.br:8999/v1/secret-code/230329324")?;

        let masked = mask_url_segments(&url, &[]);

        assert_eq!(masked, "http://www.com.br:8999//v1/secret-code/230329324");
        Ok(())
    }

    #[test]
    fn should_ignore_out_of_range_indices() -> anyhow::Result<()> {
        let url = Url::parse("https://example.com/a/b")?;

        let masked = mask_url_segments(&url, &[42]);

        assert_eq!(masked, "https://example.com//a/b");
        Ok(())
    }
}
