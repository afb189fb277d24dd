//! # CLI Argument Definitions

use abet::detector::CheckRequest;
use anyhow::Context;
use clap::{ArgAction, ArgGroup, Args, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "abet-scan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Flags gambling advertorials and checks operators against the authorized list")]
pub struct Cli {
    /// Config file (TOML/JSON/YAML). Defaults to `antibet.*` in the working directory
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Authorized-domain list, overrides `registry.path` from the config
    #[arg(long, global = true)]
    pub registry: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log level implied by `-v` flags, if any.
    #[must_use]
    pub const fn verbosity(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("debug"),
            _ => Some("trace"),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score a page, verify its operators and pick the education card
    Check(CheckArgs),
    /// Verify a single URL or host against the authorized list
    Verify {
        /// URL or bare host
        url: String,
    },
    /// Print the authorized list
    Registry,
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("input").required(true).args(["url", "request"])))]
pub struct CheckArgs {
    /// Page URL
    #[arg(long, conflicts_with = "request")]
    pub url: Option<String>,

    /// Extracted page text
    #[arg(long, requires = "url", conflicts_with = "text_file")]
    pub text: Option<String>,

    /// File holding the extracted page text
    #[arg(long, requires = "url")]
    pub text_file: Option<PathBuf>,

    /// JSON file of the form `{"url": ..., "text_content": ...}`
    #[arg(long)]
    pub request: Option<PathBuf>,
}

impl CheckArgs {
    /// Builds the pipeline request from whichever input form was given.
    ///
    /// # Errors
    /// Fails if an input file cannot be read or the request JSON is invalid.
    pub fn into_request(self) -> anyhow::Result<CheckRequest> {
        if let Some(path) = self.request {
            let json = fs::read_to_string(&path)
                .with_context(|| format!("Reading request {}", path.display()))?;
            return Ok(CheckRequest::from_json(&json)?);
        }

        let text = match (self.text, self.text_file) {
            (Some(text), _) => text,
            (None, Some(path)) => fs::read_to_string(&path)
                .with_context(|| format!("Reading page text {}", path.display()))?,
            (None, None) => String::new(),
        };

        Ok(CheckRequest::new(self.url.unwrap_or_default(), text))
    }
}
