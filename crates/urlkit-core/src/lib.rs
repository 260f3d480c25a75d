pub mod config;
pub mod error;
pub mod logging;

pub mod url_value;

pub use error::{BuildError, ParseError, Rejection};
pub use url_value::{UrlParts, UrlValue};
