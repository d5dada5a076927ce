//! Project subcommands

use clap::Subcommand;

use super::common::FormatArgs;

#[derive(Subcommand, Debug)]
pub enum ProjectAction {
    /// List Projects of the selected Organization
    #[command(visible_alias = "ls")]
    List(FormatArgs),

    /// Select a Project by id or name (prompts when none is given)
    Select {
        /// Project id or name
        project: Option<String>,
    },
}
