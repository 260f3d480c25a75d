//! `urlkit rewrite <url> --path ...` – override components of a template URL.

use anyhow::{Context, Result};
use urlkit_core::UrlValue;

use crate::cli::ComponentArgs;

pub fn run_rewrite(url: &str, components: &ComponentArgs) -> Result<()> {
    println!("{}", rewrite(url, components)?);
    Ok(())
}

/// Parses `url`, applies `components` on top, and rebuilds.
pub fn rewrite(url: &str, components: &ComponentArgs) -> Result<String> {
    let mut value = UrlValue::parse(url).with_context(|| format!("parse template {}", url))?;
    components.apply(&mut value);
    let rebuilt = value.build_url().context("rebuild URL")?;
    tracing::debug!("rewrote {} to {}", url, rebuilt);
    Ok(rebuilt)
}
