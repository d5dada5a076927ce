//! CLI argument parsing

mod common;
mod org;
mod project;
mod workspace;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{defaults, store};
use crate::selection::Level;

pub use common::{FormatArgs, OutputFormat};
pub use org::OrgAction;
pub use project::ProjectAction;
pub use workspace::WorkspaceAction;

/// Console selection CLI
#[derive(Parser, Debug)]
#[command(name = "consolectl")]
#[command(version)]
#[command(
    about = "Select and inspect Organizations, Projects and Workspaces on the developer console",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file holding the current selection [default: ~/.consolectl/config.json]
    #[arg(long, global = true, env = store::ENV_VAR)]
    pub config: Option<PathBuf>,

    /// Console host, or a full http(s):// base URL
    #[arg(short = 'H', long, global = true, env = "CONSOLE_HOST", default_value = defaults::HOST)]
    pub host: String,

    /// Access token (overrides env vars and credentials file)
    #[arg(short = 't', long, global = true)]
    pub token: Option<String>,

    /// Client API key sent with every request
    #[arg(long, global = true, env = "CONSOLE_API_KEY", default_value = defaults::API_KEY)]
    pub api_key: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinners, no interactive prompts
    #[arg(long, global = true, default_value_t = false)]
    pub batch: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the currently selected Org, Project and Workspace
    Where(FormatArgs),

    /// Manage Organizations
    Org {
        #[command(subcommand)]
        action: OrgAction,
    },

    /// Manage Projects of the selected Organization
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Manage Workspaces of the selected Project
    #[command(visible_alias = "ws")]
    Workspace {
        #[command(subcommand)]
        action: WorkspaceAction,
    },

    /// Clear the selection, or one level and everything below it
    #[command(after_help = "EXAMPLES:\n  \
        consolectl clear            # clear org, project and workspace\n  \
        consolectl clear project    # keep the org, clear project and workspace")]
    Clear {
        /// Level to clear
        #[arg(value_enum)]
        level: Option<Level>,
    },
}
