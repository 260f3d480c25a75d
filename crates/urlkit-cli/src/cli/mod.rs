//! CLI for the urlkit URL value object.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use urlkit_core::config::{self, OutputFormat};
use urlkit_core::UrlValue;

use commands::{run_build, run_parse, run_rewrite};

/// Top-level CLI for urlkit.
#[derive(Debug, Parser)]
#[command(name = "urlkit")]
#[command(about = "urlkit: parse, rewrite and rebuild URLs", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/urlkit/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Split a URL into its components.
    Parse {
        /// Absolute URL, e.g. https://example.com/path?q=1.
        url: String,
        /// Output format (defaults to the `output` config setting).
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Build a URL from individual components.
    Build {
        #[command(flatten)]
        components: ComponentArgs,
    },

    /// Parse a template URL, override some components, and print the result.
    Rewrite {
        /// Template URL.
        url: String,
        #[command(flatten)]
        components: ComponentArgs,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Component overrides shared by `build` and `rewrite`.
#[derive(Debug, Clone, Default, Args)]
pub struct ComponentArgs {
    #[arg(long)]
    pub scheme: Option<String>,
    #[arg(long)]
    pub user: Option<String>,
    #[arg(long)]
    pub pass: Option<String>,
    #[arg(long)]
    pub host: Option<String>,
    #[arg(long)]
    pub port: Option<u16>,
    /// Path; leading `/` and `.` characters are dropped on output.
    #[arg(long)]
    pub path: Option<String>,
    /// Query string without the leading `?`.
    #[arg(long)]
    pub query: Option<String>,
    /// Fragment without the leading `#`.
    #[arg(long)]
    pub fragment: Option<String>,
}

impl ComponentArgs {
    /// Applies every given component to `value`, leaving the rest alone.
    pub fn apply(&self, value: &mut UrlValue) {
        if let Some(scheme) = &self.scheme {
            value.set_scheme(scheme.as_str());
        }
        if let Some(user) = &self.user {
            value.set_user(user.as_str());
        }
        if let Some(pass) = &self.pass {
            value.set_pass(pass.as_str());
        }
        if let Some(host) = &self.host {
            value.set_host(host.as_str());
        }
        if let Some(port) = self.port {
            value.set_port(port);
        }
        if let Some(path) = &self.path {
            value.set_path(path.as_str());
        }
        if let Some(query) = &self.query {
            value.set_query(query.as_str());
        }
        if let Some(fragment) = &self.fragment {
            value.set_fragment(fragment.as_str());
        }
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Parse { url, format } => {
                let format = format.map(OutputFormat::from).unwrap_or(cfg.output);
                run_parse(&url, format, cfg.show_absent)?;
            }
            CliCommand::Build { components } => run_build(&components)?,
            CliCommand::Rewrite { url, components } => run_rewrite(&url, &components)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
