//! Common CLI types shared across commands

use clap::Args;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Plain,
    /// Pretty-printed JSON
    Json,
    /// YAML document
    Yaml,
}

/// `--json` / `--yml` switches; at most one may be given
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct FormatArgs {
    /// Output in json format
    #[arg(short = 'j', long, conflicts_with = "yml")]
    pub json: bool,

    /// Output in yaml format
    #[arg(short = 'y', long, visible_alias = "yaml")]
    pub yml: bool,
}

impl FormatArgs {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.yml {
            OutputFormat::Yaml
        } else {
            OutputFormat::Plain
        }
    }
}
