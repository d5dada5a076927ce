//! Organization subcommands

use clap::Subcommand;

use super::common::FormatArgs;

#[derive(Subcommand, Debug)]
pub enum OrgAction {
    /// List enterprise Organizations
    #[command(visible_alias = "ls")]
    List(FormatArgs),

    /// Select an Organization (prompts when no code is given)
    Select {
        /// Organization code (or id)
        org_code: Option<String>,
    },
}
