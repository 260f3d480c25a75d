//! Component splitting over the raw URL text.
//!
//! Values are exact substrings of the input: nothing is decoded, lowercased
//! or otherwise normalized.

/// The components found in one URL string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: Option<String>,
    pub user: Option<String>,
    pub pass: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub path: Option<String>,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl UrlParts {
    /// True when the splitter found nothing at all.
    pub fn is_empty(&self) -> bool {
        *self == UrlParts::default()
    }
}

/// Splits `input` into its components.
///
/// - fragment: everything after the first `#`
/// - query: after the first `?` preceding the fragment
/// - scheme: leading `ALPHA *(ALPHA / DIGIT / "+" / "-" / ".")` before `:`
/// - authority: after `//`, up to the next `/`
/// - path: the rest; when an authority is present, the one `/` that
///   separates it from the path is not stored
///
/// Query and fragment are `Some("")` when their delimiter is present with
/// nothing after it.
pub fn split_url(input: &str) -> UrlParts {
    let mut parts = UrlParts::default();

    let rest = match input.split_once('#') {
        Some((rest, fragment)) => {
            parts.fragment = Some(fragment.to_string());
            rest
        }
        None => input,
    };

    let rest = match rest.split_once('?') {
        Some((rest, query)) => {
            parts.query = Some(query.to_string());
            rest
        }
        None => rest,
    };

    let rest = match scheme_len(rest) {
        Some(len) => {
            parts.scheme = Some(rest[..len].to_string());
            &rest[len + 1..]
        }
        None => rest,
    };

    let path = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after.find('/').unwrap_or(after.len());
            split_authority(&after[..end], &mut parts);
            after[end..].strip_prefix('/')
        }
        None => Some(rest).filter(|p| !p.is_empty()),
    };
    parts.path = path.map(str::to_string);

    parts
}

/// Length of the scheme at the start of `s`, if `s` starts with one.
fn scheme_len(s: &str) -> Option<usize> {
    let colon = s.find(':')?;
    let mut chars = s[..colon].chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    chars
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        .then_some(colon)
}

/// Fills user, pass, host and port from `user:pass@host:port`.
fn split_authority(authority: &str, parts: &mut UrlParts) {
    let host_port = match authority.rsplit_once('@') {
        Some((userinfo, host_port)) => {
            match userinfo.split_once(':') {
                Some((user, pass)) => {
                    parts.user = Some(user.to_string());
                    parts.pass = Some(pass.to_string());
                }
                None => parts.user = Some(userinfo.to_string()),
            }
            host_port
        }
        None => authority,
    };

    let (host, port) = split_host_port(host_port);
    parts.host = Some(host).filter(|h| !h.is_empty()).map(str::to_string);
    parts.port = port;
}

/// Splits a trailing `:digits` port off the host. A bracketed IPv6 literal
/// keeps its inner colons.
fn split_host_port(s: &str) -> (&str, Option<u16>) {
    let search_from = if s.starts_with('[') {
        match s.find(']') {
            Some(close) => close + 1,
            None => return (s, None),
        }
    } else {
        0
    };

    match s[search_from..].rfind(':') {
        Some(rel) => {
            let colon = search_from + rel;
            let digits = &s[colon + 1..];
            if digits.chars().all(|c| c.is_ascii_digit()) {
                (&s[..colon], digits.parse().ok())
            } else {
                (s, None)
            }
        }
        None => (s, None),
    }
}
