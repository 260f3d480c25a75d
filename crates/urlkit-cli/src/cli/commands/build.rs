//! `urlkit build --host ... --path ...` – assemble a URL from components.

use anyhow::{Context, Result};
use urlkit_core::UrlValue;

use crate::cli::ComponentArgs;

pub fn run_build(components: &ComponentArgs) -> Result<()> {
    println!("{}", build_from(components)?);
    Ok(())
}

/// Builds a URL from `components` alone.
pub fn build_from(components: &ComponentArgs) -> Result<String> {
    let mut value = UrlValue::new();
    components.apply(&mut value);
    let url = value.build_url().context("build URL from components")?;
    tracing::debug!("built {} from {:?}", url, components);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_from_components() {
        let components = ComponentArgs {
            scheme: Some("https".into()),
            host: Some("example.com".into()),
            path: Some("/files/a.iso".into()),
            ..Default::default()
        };
        assert_eq!(
            build_from(&components).unwrap(),
            "https://example.com/files/a.iso"
        );
    }

    #[test]
    fn build_from_nothing_fails() {
        let err = build_from(&ComponentArgs::default()).unwrap_err();
        assert!(format!("{:#}", err).contains("no components set"));
    }
}
