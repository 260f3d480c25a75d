//! URL value object.
//!
//! [`UrlValue`] holds the components of one URL. It is filled either all at
//! once from a URL string ([`UrlValue::set_url`]) or piecewise through the
//! component setters, and turned back into a string with
//! [`UrlValue::build_url`]. Setters may be called after a parse to override
//! one piece of a template URL.
//!
//! # Examples
//!
//! ```
//! use urlkit_core::UrlValue;
//!
//! let mut url = UrlValue::parse("https://example.com").unwrap();
//! url.set_path("report.html");
//! assert_eq!(url.build_url().unwrap(), "https://example.com/report.html");
//! ```

mod build;
mod split;
mod validate;

pub use split::{split_url, UrlParts};
pub use validate::{is_valid_url, validate_url};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BuildError, ParseError};

/// One URL and its decomposition. Every field is optional; absence is kept
/// through parse, accessors and build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlValue {
    /// The string last accepted by [`UrlValue::set_url`].
    #[serde(rename = "url")]
    raw: Option<String>,
    scheme: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    user: Option<String>,
    pass: Option<String>,
    path: Option<String>,
    query: Option<String>,
    fragment: Option<String>,
}

impl UrlValue {
    /// An empty value with every component absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `input` into a new value.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut value = Self::new();
        value.set_url(input)?;
        Ok(value)
    }

    /// Replaces every component with those of `input`.
    ///
    /// `input` must be a valid absolute URL, e.g.
    /// `http://www.domain.com/path/file.html`. On error nothing is modified.
    pub fn set_url(&mut self, input: &str) -> Result<&mut Self, ParseError> {
        if let Err(reason) = validate_url(input) {
            tracing::debug!("rejected URL {:?}: {}", input, reason);
            return Err(ParseError::Invalid {
                input: input.to_string(),
                reason,
            });
        }

        self.commit(input, split_url(input))?;
        tracing::trace!("parsed URL {:?} into {:?}", input, self);
        Ok(self)
    }

    /// Installs a split result for a validated `input`. Refuses an empty
    /// split without touching `self`.
    fn commit(&mut self, input: &str, parts: UrlParts) -> Result<(), ParseError> {
        if parts.is_empty() {
            tracing::debug!("URL {:?} validated but split into nothing", input);
            return Err(ParseError::Structural {
                input: input.to_string(),
            });
        }

        self.clear();
        self.raw = Some(input.to_string());
        self.assign(parts);
        Ok(())
    }

    fn assign(&mut self, parts: UrlParts) {
        let UrlParts {
            scheme,
            user,
            pass,
            host,
            port,
            path,
            query,
            fragment,
        } = parts;
        self.scheme = scheme;
        self.user = user;
        self.pass = pass;
        self.host = host;
        self.port = port;
        self.path = path;
        self.query = query;
        self.fragment = fragment;
    }

    /// The raw string from the last successful [`UrlValue::set_url`].
    pub fn url(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    pub fn set_scheme(&mut self, scheme: impl Into<String>) -> &mut Self {
        self.scheme = Some(scheme.into());
        self
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn set_host(&mut self, host: impl Into<String>) -> &mut Self {
        self.host = Some(host.into());
        self
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn set_port(&mut self, port: u16) -> &mut Self {
        self.port = Some(port);
        self
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn set_user(&mut self, user: impl Into<String>) -> &mut Self {
        self.user = Some(user.into());
        self
    }

    pub fn pass(&self) -> Option<&str> {
        self.pass.as_deref()
    }

    /// Stored as given; only emitted by [`UrlValue::build_url`] when a user
    /// is also set.
    pub fn set_pass(&mut self, pass: impl Into<String>) -> &mut Self {
        self.pass = Some(pass.into());
        self
    }

    /// Path without the `/` that separates it from the authority.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn set_path(&mut self, path: impl Into<String>) -> &mut Self {
        self.path = Some(path.into());
        self
    }

    /// Raw query string, without the leading `?`.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn set_query(&mut self, query: impl Into<String>) -> &mut Self {
        self.query = Some(query.into());
        self
    }

    /// Fragment, without the leading `#`.
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    pub fn set_fragment(&mut self, fragment: impl Into<String>) -> &mut Self {
        self.fragment = Some(fragment.into());
        self
    }

    /// Resets the raw string and every component to absent.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Rebuilds a URL string from the current components.
    ///
    /// Order: `scheme://`, `user[:pass]@`, host, `:port`, `/path`, `?query`,
    /// `#fragment`. Empty strings, the string `"0"` and port 0 count as
    /// absent. Leading `/` and `.` characters are stripped from the path
    /// before a single `/` is prefixed, so `../x` becomes `/x`.
    pub fn build_url(&self) -> Result<String, BuildError> {
        let url = build::assemble(self);
        if url.is_empty() {
            return Err(BuildError::Empty);
        }
        tracing::trace!("built URL {:?}", url);
        Ok(url)
    }
}

impl FromStr for UrlValue {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&UrlValue> for String {
    type Error = BuildError;

    fn try_from(value: &UrlValue) -> Result<Self, Self::Error> {
        value.build_url()
    }
}
