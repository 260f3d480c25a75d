//! `urlkit parse <url>` – print the components of a URL.

use anyhow::{Context, Result};
use std::fmt::Write;
use urlkit_core::config::OutputFormat;
use urlkit_core::UrlValue;

pub fn run_parse(url: &str, format: OutputFormat, show_absent: bool) -> Result<()> {
    let value = UrlValue::parse(url).context("parse URL")?;
    print!("{}", render_components(&value, format, show_absent)?);
    Ok(())
}

/// Renders `value` as aligned `name value` lines or as pretty JSON.
pub fn render_components(
    value: &UrlValue,
    format: OutputFormat,
    show_absent: bool,
) -> Result<String> {
    if format == OutputFormat::Json {
        let mut json = serde_json::to_string_pretty(value).context("serialize components")?;
        json.push('\n');
        return Ok(json);
    }

    let port = value.port().map(|p| p.to_string());
    let rows = [
        ("scheme", value.scheme()),
        ("user", value.user()),
        ("pass", value.pass()),
        ("host", value.host()),
        ("port", port.as_deref()),
        ("path", value.path()),
        ("query", value.query()),
        ("fragment", value.fragment()),
    ];

    let mut out = String::new();
    for (name, component) in rows {
        match component {
            Some(v) => writeln!(out, "{:<9}{}", name, v)?,
            None if show_absent => writeln!(out, "{:<9}-", name)?,
            None => {}
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_lists_absent_components() {
        let v = UrlValue::parse("https://example.com/a?").unwrap();
        let out = render_components(&v, OutputFormat::Text, true).unwrap();
        assert_eq!(
            out,
            "scheme   https\n\
             user     -\n\
             pass     -\n\
             host     example.com\n\
             port     -\n\
             path     a\n\
             query    \n\
             fragment -\n"
        );
    }

    #[test]
    fn text_can_omit_absent_components() {
        let v = UrlValue::parse("https://example.com:8080").unwrap();
        let out = render_components(&v, OutputFormat::Text, false).unwrap();
        assert_eq!(out, "scheme   https\nhost     example.com\nport     8080\n");
    }

    #[test]
    fn json_output() {
        let v = UrlValue::parse("https://example.com/x").unwrap();
        let out = render_components(&v, OutputFormat::Json, true).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["url"], "https://example.com/x");
        assert_eq!(json["path"], "x");
        assert!(json["fragment"].is_null());
    }
}
