//! `workspace list`, `workspace select` and `workspace download`

use log::debug;
use std::io::Write;
use std::path::PathBuf;

use crate::cli::WorkspaceAction;
use crate::console::{ConsoleResource, OrgSummary, Project, RemoteDirectory, Workspace};
use crate::download::download_workspace_config;
use crate::error::{ConsoleError, Result};
use crate::output::render_list;
use crate::store::ConfigStore;
use crate::ui::{create_spinner, finish_spinner};

use super::{emit, ensure_interactive, pick, Session};

pub async fn run_workspace_command<D: RemoteDirectory, S: ConfigStore>(
    session: &mut Session<D, S>,
    action: &WorkspaceAction,
    out: &mut impl Write,
) -> Result<()> {
    let current = session.selection.current()?;

    match action {
        WorkspaceAction::List(args) => {
            let (org, project) = current.require_project()?;
            let workspaces = fetch_workspaces(session, org, project).await?;
            emit(out, &render_list(&workspaces, args.format())?)
        }
        WorkspaceAction::Select { workspace } => {
            let (org, project) = current.require_project()?;
            let workspace = match workspace {
                Some(input) => find_workspace(session, org, project, input).await?,
                None => {
                    ensure_interactive("Workspace", session.batch)?;
                    let workspaces = fetch_workspaces(session, org, project).await?;
                    pick(&workspaces, "Workspace")?
                }
            };

            session.selection.select_workspace(&workspace)?;
            emit(out, &format!("Workspace selected {}", workspace.name))
        }
        WorkspaceAction::Download { destination } => {
            let spinner = create_spinner("Downloading Workspace configuration...", session.batch);
            let result =
                download_workspace_config(&session.directory, &current, destination.as_deref())
                    .await;
            finish_spinner(spinner);
            let path: PathBuf = result?;
            emit(
                out,
                &format!("Downloaded Workspace configuration to {}", path.display()),
            )
        }
    }
}

async fn fetch_workspaces<D: RemoteDirectory, S: ConfigStore>(
    session: &Session<D, S>,
    org: &OrgSummary,
    project: &Project,
) -> Result<Vec<Workspace>> {
    let spinner = create_spinner(
        &format!("Retrieving Workspaces of '{}'...", project.name),
        session.batch,
    );
    let result = session
        .selection
        .list_workspaces(&session.directory, org.id.as_str(), project.id.as_str())
        .await;
    finish_spinner(spinner);
    result
}

/// Resolve a workspace of `project` by id, then by name
async fn find_workspace<D: RemoteDirectory, S: ConfigStore>(
    session: &Session<D, S>,
    org: &OrgSummary,
    project: &Project,
    input: &str,
) -> Result<Workspace> {
    if let Some(workspace) = session
        .selection
        .get_workspace(&session.directory, org.id.as_str(), project.id.as_str(), input)
        .await?
    {
        return Ok(workspace);
    }

    debug!("No workspace with id '{}', searching by name", input);
    fetch_workspaces(session, org, project)
        .await?
        .into_iter()
        .find(|workspace| workspace.matches(input))
        .ok_or_else(|| {
            ConsoleError::NotFound(format!(
                "Workspace '{}' not found in Project '{}'",
                input, project.name
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::FormatArgs;
    use crate::selection::SelectionMachine;
    use crate::store::MemoryConfigStore;
    use crate::testing::{org_summary, project, workspace, FakeDirectory};
    use serde_json::json;
    use tempfile::TempDir;

    fn session() -> Session<FakeDirectory, MemoryConfigStore> {
        let directory = FakeDirectory {
            workspaces: Some(vec![workspace("1", "WRKSPC1"), workspace("2", "WRKSPC2")]),
            bundle: Some(json!({"workspace": "WRKSPC2"})),
            ..Default::default()
        };
        let mut machine = SelectionMachine::new(MemoryConfigStore::new());
        machine
            .select_org(&org_summary("53444", "ABC@Org", "My Org"))
            .unwrap();
        machine.select_project(&project("p1", "myproject")).unwrap();
        Session::new(directory, machine, true)
    }

    #[tokio::test]
    async fn test_list_one_line_per_workspace() {
        let mut session = session();
        let mut out = Vec::new();
        let action = WorkspaceAction::List(FormatArgs::default());
        run_workspace_command(&mut session, &action, &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().filter(|l| l.contains("WRKSPC1")).count(), 1);
        assert_eq!(text.lines().filter(|l| l.contains("WRKSPC2")).count(), 1);
    }

    #[tokio::test]
    async fn test_list_requires_org_and_project() {
        let mut session = session();
        session.selection.clear_all().unwrap();
        let action = WorkspaceAction::List(FormatArgs::default());
        let err = run_workspace_command(&mut session, &action, &mut Vec::<u8>::new())
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "No Organization selected, No Project selected"
        );
    }

    #[tokio::test]
    async fn test_select_by_name() {
        let mut session = session();
        let mut out = Vec::new();
        let action = WorkspaceAction::Select {
            workspace: Some("WRKSPC2".to_string()),
        };
        run_workspace_command(&mut session, &action, &mut out)
            .await
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Workspace selected WRKSPC2\n");
        let current = session.selection.current().unwrap();
        assert_eq!(current.workspace.unwrap().id, "2");
    }

    #[tokio::test]
    async fn test_select_unknown_workspace() {
        let mut session = session();
        let action = WorkspaceAction::Select {
            workspace: Some("nope".to_string()),
        };
        let err = run_workspace_command(&mut session, &action, &mut Vec::<u8>::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ConsoleError::NotFound(_)));
        assert!(session.selection.current().unwrap().workspace.is_none());
    }

    #[tokio::test]
    async fn test_download_selected_workspace() {
        let mut session = session();
        session
            .selection
            .select_workspace(&workspace("2", "WRKSPC2"))
            .unwrap();
        let dir = TempDir::new().unwrap();

        let mut out = Vec::new();
        let action = WorkspaceAction::Download {
            destination: Some(dir.path().to_path_buf()),
        };
        run_workspace_command(&mut session, &action, &mut out)
            .await
            .unwrap();

        let expected = dir.path().join("53444-myproject-WRKSPC2.json");
        assert!(expected.exists());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("Downloaded Workspace configuration to {}\n", expected.display())
        );
    }

    #[tokio::test]
    async fn test_download_without_workspace() {
        let mut session = session();
        let action = WorkspaceAction::Download { destination: None };
        let err = run_workspace_command(&mut session, &action, &mut Vec::<u8>::new())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "No Workspace selected");
    }
}
