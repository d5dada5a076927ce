//! Command handlers
//!
//! Each handler is generic over the remote directory and the config store, and
//! writes its result to the given writer. `run` wires the real implementations.

mod org;
mod project;
mod selection;
mod workspace;

use log::debug;
use std::io::Write;

use crate::cli::{Cli, Command};
use crate::console::{ConsoleClient, ConsoleResource, RemoteDirectory, TokenResolver};
use crate::error::{ConsoleError, Result};
use crate::selection::SelectionMachine;
use crate::store::{ConfigStore, FileConfigStore};
use crate::ui::select_one;

pub use org::run_org_command;
pub use project::run_project_command;
pub use selection::{run_clear_command, run_where_command};
pub use workspace::run_workspace_command;

/// Everything a remote command needs
pub struct Session<D, S> {
    pub directory: D,
    pub selection: SelectionMachine<S>,
    /// No spinners, no prompts
    pub batch: bool,
}

impl<D: RemoteDirectory, S: ConfigStore> Session<D, S> {
    pub fn new(directory: D, selection: SelectionMachine<S>, batch: bool) -> Self {
        Self {
            directory,
            selection,
            batch,
        }
    }
}

/// Execute the parsed command against the config file and the console API
pub async fn run(cli: &Cli) -> Result<()> {
    let store = match &cli.config {
        Some(path) => FileConfigStore::open(path.clone())?,
        None => FileConfigStore::open_default()?,
    };
    debug!("Using config file {}", store.path().display());
    let mut machine = SelectionMachine::new(store);
    let mut out = std::io::stdout();

    match &cli.command {
        Command::Where(args) => run_where_command(&machine, args.format(), &mut out),
        Command::Clear { level } => run_clear_command(&mut machine, *level, &mut out),
        Command::Org { action } => {
            let mut session = connect(cli, machine)?;
            run_org_command(&mut session, action, &mut out).await
        }
        Command::Project { action } => {
            let mut session = connect(cli, machine)?;
            run_project_command(&mut session, action, &mut out).await
        }
        Command::Workspace { action } => {
            let mut session = connect(cli, machine)?;
            run_workspace_command(&mut session, action, &mut out).await
        }
    }
}

/// Resolve the token and build the API client
fn connect<S: ConfigStore>(
    cli: &Cli,
    machine: SelectionMachine<S>,
) -> Result<Session<ConsoleClient, S>> {
    let token = TokenResolver::new(&cli.host).resolve(cli.token.as_deref())?;
    let client = ConsoleClient::new(token, cli.api_key.clone(), cli.host.clone());
    Ok(Session::new(client, machine, cli.batch))
}

/// Fail early when a prompt would be needed in batch mode
pub(crate) fn ensure_interactive(what: &str, batch: bool) -> Result<()> {
    if batch {
        return Err(ConsoleError::Config(format!(
            "No {} given; pass it as an argument or run without --batch to choose interactively",
            what
        )));
    }
    Ok(())
}

/// Ask the user to pick one of `items`
pub(crate) fn pick<T: ConsoleResource + Clone>(items: &[T], what: &str) -> Result<T> {
    let labels: Vec<String> = items
        .iter()
        .map(|item| format!("{} ({})", item.name(), item.id()))
        .collect();
    let index = select_one(&format!("Choose the {}", what), &labels)?;
    Ok(items[index].clone())
}

/// Render `text` as one or more lines of command output
pub(crate) fn emit(out: &mut impl Write, text: &str) -> Result<()> {
    writeln!(out, "{}", text)?;
    Ok(())
}
