use std::borrow::Cow;

/// Symbol used for every masked character.
pub const MASK_CHAR: char = '*';

/// Number of leading characters kept visible by [`mask_partial`].
const VISIBLE_PREFIX: usize = 2;

/// Number of trailing characters kept visible by [`mask_partial`] on long values.
const VISIBLE_SUFFIX: usize = 2;

/// Values longer than this keep their suffix visible with [`mask_partial`].
const LONG_VALUE_THRESHOLD: usize = 7;

/// Masks every character of a value.
///
/// The result has the same number of characters as the input and contains only `*`,
/// so masking an already masked value is a no-op.
///
/// # Example
///
/// ```rust
/// use httpmask_core::mask::mask_full;
///
/// assert_eq!(mask_full("Bearer abc"), "**********");
/// assert_eq!(mask_full(""), "");
/// ```
#[must_use]
pub fn mask_full(value: &str) -> String {
    MASK_CHAR.to_string().repeat(value.chars().count())
}

/// Masks a value while keeping a few characters visible for log readability.
///
/// - up to 2 characters: unchanged
/// - 3 to 7 characters: the first 2 characters are kept
/// - more than 7 characters: the first 2 and the last 2 characters are kept
///
/// # Example
///
/// ```rust
/// use httpmask_core::mask::mask_partial;
///
/// assert_eq!(mask_partial("12"), "12");
/// assert_eq!(mask_partial("12-hide"), "12*****");
/// assert_eq!(mask_partial("4111111111111111"), "41************11");
/// ```
#[must_use]
pub fn mask_partial(value: &str) -> Cow<'_, str> {
    let len = value.chars().count();
    if len <= VISIBLE_PREFIX {
        return Cow::Borrowed(value);
    }

    let suffix_len = if len > LONG_VALUE_THRESHOLD {
        VISIBLE_SUFFIX
    } else {
        0
    };
    let masked_len = len - VISIBLE_PREFIX - suffix_len;

    let mut result = String::with_capacity(value.len());
    result.extend(value.chars().take(VISIBLE_PREFIX));
    result.extend(std::iter::repeat_n(MASK_CHAR, masked_len));
    result.extend(value.chars().skip(VISIBLE_PREFIX + masked_len));

    Cow::Owned(result)
}
