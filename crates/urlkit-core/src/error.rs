//! Error types for parsing and rebuilding URLs.

use thiserror::Error;

/// Failure of the full-string parse entry point. No state is committed when
/// either variant is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input is not a syntactically valid absolute URL.
    #[error("unable to set the URL, it is not a valid URL: {input:?}")]
    Invalid {
        input: String,
        #[source]
        reason: Rejection,
    },
    /// Input passed validation but the splitter found no components at all.
    /// Every URL the validator accepts carries a scheme, so this signals a
    /// disagreement between the two rather than bad input.
    #[error("unable to parse the supplied URL: {input:?}")]
    Structural { input: String },
}

/// Why the validator rejected an input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("empty input")]
    Empty,
    /// Whitespace, control characters and backslashes would be silently
    /// repaired by the URL grammar, so they are refused up front.
    #[error("contains disallowed character {0:?}")]
    DisallowedChar(char),
    /// The scheme requires a host but the input has no `//` authority.
    #[error("scheme requires a `//` authority")]
    MissingAuthority,
    #[error(transparent)]
    Syntax(#[from] url::ParseError),
}

/// Failure of [`crate::UrlValue::build_url`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Every component is absent or empty.
    #[error("unable to build URL: no components set")]
    Empty,
}
