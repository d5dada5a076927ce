//! `project list` and `project select`

use log::debug;
use std::io::Write;

use crate::cli::ProjectAction;
use crate::console::{ConsoleResource, OrgSummary, Project, RemoteDirectory};
use crate::error::{ConsoleError, Result};
use crate::output::render_list;
use crate::selection::Level;
use crate::store::ConfigStore;
use crate::ui::{create_spinner, finish_spinner};

use super::{emit, ensure_interactive, pick, Session};

pub async fn run_project_command<D: RemoteDirectory, S: ConfigStore>(
    session: &mut Session<D, S>,
    action: &ProjectAction,
    out: &mut impl Write,
) -> Result<()> {
    let current = session.selection.current()?;
    let org = current.require_org()?;

    match action {
        ProjectAction::List(args) => {
            let projects = fetch_projects(session, org).await?;
            emit(out, &render_list(&projects, args.format())?)
        }
        ProjectAction::Select { project } => {
            let project = match project {
                Some(input) => find_project(session, org, input).await?,
                None => {
                    ensure_interactive("Project", session.batch)?;
                    let projects = fetch_projects(session, org).await?;
                    pick(&projects, "Project")?
                }
            };

            session.selection.clear(Level::Project)?;
            session.selection.select_project(&project)?;
            emit(out, &format!("Project selected {}", project.name))
        }
    }
}

async fn fetch_projects<D: RemoteDirectory, S: ConfigStore>(
    session: &Session<D, S>,
    org: &OrgSummary,
) -> Result<Vec<Project>> {
    let spinner = create_spinner(
        &format!("Retrieving Projects of '{}'...", org.name),
        session.batch,
    );
    let result = session
        .selection
        .list_projects(&session.directory, org.id.as_str())
        .await;
    finish_spinner(spinner);
    result
}

/// Resolve a project of `org` by id, then by name
async fn find_project<D: RemoteDirectory, S: ConfigStore>(
    session: &Session<D, S>,
    org: &OrgSummary,
    input: &str,
) -> Result<Project> {
    if let Some(project) = session
        .selection
        .get_project(&session.directory, org.id.as_str(), input)
        .await?
    {
        return Ok(project);
    }

    debug!("No project with id '{}', searching by name", input);
    fetch_projects(session, org)
        .await?
        .into_iter()
        .find(|project| project.matches(input))
        .ok_or_else(|| {
            ConsoleError::NotFound(format!(
                "Project '{}' not found in Organization '{}'",
                input, org.name
            ))
        })
}
