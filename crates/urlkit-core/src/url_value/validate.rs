//! Absolute-URL syntax check.

use crate::error::Rejection;

/// Checks that `input` is a well-formed absolute URL.
///
/// The grammar is delegated to [`url::Url::parse`] with no base, so relative
/// references are refused. Input the `url` crate would quietly repair
/// (surrounding or embedded whitespace, control characters, backslashes) is
/// refused before it gets there, since the splitter works on the raw text.
/// For the same reason a URL whose scheme implies a host must spell out the
/// `//` authority: `http:example.com` is refused rather than read as
/// `http://example.com/`.
pub fn validate_url(input: &str) -> Result<(), Rejection> {
    if input.is_empty() {
        return Err(Rejection::Empty);
    }
    if let Some(c) = input
        .chars()
        .find(|c| c.is_whitespace() || c.is_control() || *c == '\\')
    {
        return Err(Rejection::DisallowedChar(c));
    }
    let parsed = url::Url::parse(input)?;
    let scheme_end = parsed.scheme().len() + 1;
    let has_authority = |s: &str| s.get(scheme_end..).is_some_and(|r| r.starts_with("//"));
    if has_authority(parsed.as_str()) && !has_authority(input) {
        return Err(Rejection::MissingAuthority);
    }
    Ok(())
}

/// Convenience wrapper over [`validate_url`].
pub fn is_valid_url(input: &str) -> bool {
    validate_url(input).is_ok()
}
