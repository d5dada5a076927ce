//! consolectl - Select and inspect developer console resources
//!
//! Keeps a persisted "current position" in the Org → Project → Workspace
//! hierarchy of the developer console and offers commands to list, select and
//! clear each level, and to download the configuration of the selected
//! workspace.
//!
//! # Example
//!
//! ```bash
//! # Pick an organization by its code
//! consolectl org select ABC@Org
//!
//! # List projects of the selected organization
//! consolectl project list --json
//!
//! # Select a workspace and download its configuration
//! consolectl ws select Stage
//! consolectl ws download ./out
//!
//! # Show where you are
//! consolectl where
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod console;
pub mod download;
pub mod error;
pub mod output;
pub mod selection;
pub mod store;
pub mod ui;

#[cfg(test)]
mod testing;

pub use cli::{Cli, Command, FormatArgs, OutputFormat};
pub use console::{
    ConsoleClient, ConsoleResource, OrgSummary, Organization, Project, RemoteDirectory,
    TokenResolver, Workspace,
};
pub use download::download_workspace_config;
pub use error::{ConsoleError, Result};
pub use selection::{Level, Selection, SelectionMachine};
pub use store::{ConfigStore, FileConfigStore, MemoryConfigStore};
