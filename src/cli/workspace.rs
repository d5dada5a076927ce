//! Workspace subcommands

use clap::Subcommand;
use std::path::PathBuf;

use super::common::FormatArgs;

#[derive(Subcommand, Debug)]
pub enum WorkspaceAction {
    /// List Workspaces of the selected Project
    #[command(visible_alias = "ls")]
    List(FormatArgs),

    /// Select a Workspace by id or name (prompts when none is given)
    Select {
        /// Workspace id or name
        workspace: Option<String>,
    },

    /// Download the configuration for the selected Workspace
    #[command(
        visible_alias = "dl",
        after_help = "The file is named {orgId}-{projectName}-{workspaceName}.json and is\n\
            written to DESTINATION (a directory), or to the current directory."
    )]
    Download {
        /// Directory to write the configuration file to
        destination: Option<PathBuf>,
    },
}
