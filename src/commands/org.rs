//! `org list` and `org select`

use log::debug;
use std::io::Write;

use crate::cli::OrgAction;
use crate::console::{ConsoleResource, OrgSummary, RemoteDirectory};
use crate::error::{ConsoleError, Result};
use crate::output::render_list;
use crate::selection::Level;
use crate::store::ConfigStore;
use crate::ui::{create_spinner, finish_spinner};

use super::{emit, ensure_interactive, pick, Session};

pub async fn run_org_command<D: RemoteDirectory, S: ConfigStore>(
    session: &mut Session<D, S>,
    action: &OrgAction,
    out: &mut impl Write,
) -> Result<()> {
    match action {
        OrgAction::List(args) => {
            let orgs = fetch_orgs(session).await?;
            emit(out, &render_list(&orgs, args.format())?)
        }
        OrgAction::Select { org_code } => {
            let org = match org_code {
                Some(code) => find_org(session, code).await?,
                None => {
                    ensure_interactive("Organization code", session.batch)?;
                    let orgs = fetch_orgs(session).await?;
                    pick(&orgs, "Organization")?
                }
            };

            session.selection.clear(Level::Org)?;
            session.selection.select_org(&org)?;
            emit(out, &format!("Org selected {}", org.name))
        }
    }
}

async fn fetch_orgs<D: RemoteDirectory, S: ConfigStore>(
    session: &Session<D, S>,
) -> Result<Vec<OrgSummary>> {
    let spinner = create_spinner("Retrieving Organizations...", session.batch);
    let result = session
        .selection
        .list_orgs(&session.directory, None)
        .await;
    finish_spinner(spinner);
    result
}

/// Look the org up by code; fall back to matching by id
async fn find_org<D: RemoteDirectory, S: ConfigStore>(
    session: &Session<D, S>,
    input: &str,
) -> Result<OrgSummary> {
    let orgs = fetch_orgs(session).await?;
    orgs.iter()
        .find(|org| org.code == input)
        .or_else(|| {
            debug!("No org with code '{}', trying by id", input);
            orgs.iter().find(|org| org.matches(input))
        })
        .cloned()
        .ok_or_else(|| ConsoleError::NotFound(format!("Organization '{}' not found", input)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::FormatArgs;
    use crate::console::OrgType;
    use crate::selection::SelectionMachine;
    use crate::store::MemoryConfigStore;
    use crate::testing::{org_summary, organization, project, FakeDirectory};

    fn session() -> Session<FakeDirectory, MemoryConfigStore> {
        let directory = FakeDirectory {
            orgs: Some(vec![
                organization("53444", "ABC@Org", "My Org", OrgType::Enterprise),
                organization("12345", "DEF@Org", "Other Org", OrgType::Enterprise),
                organization("777", "dev@Org", "Dev Org", OrgType::Developer),
            ]),
            ..Default::default()
        };
        Session::new(directory, SelectionMachine::new(MemoryConfigStore::new()), true)
    }

    #[tokio::test]
    async fn test_list_only_enterprise() {
        let mut session = session();
        let mut out = Vec::new();
        run_org_command(&mut session, &OrgAction::List(FormatArgs::default()), &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("ABC@Org"));
        assert!(text.contains("DEF@Org"));
        assert!(!text.contains("dev@Org"));
    }

    #[tokio::test]
    async fn test_select_by_code_clears_children() {
        let mut session = session();
        session
            .selection
            .select_org(&org_summary("12345", "DEF@Org", "Other Org"))
            .unwrap();
        session.selection.select_project(&project("p1", "old")).unwrap();

        let mut out = Vec::new();
        let action = OrgAction::Select {
            org_code: Some("ABC@Org".to_string()),
        };
        run_org_command(&mut session, &action, &mut out).await.unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Org selected My Org\n");
        let current = session.selection.current().unwrap();
        assert_eq!(current.org.unwrap().id, "53444");
        assert!(current.project.is_none());
    }

    #[tokio::test]
    async fn test_select_by_id() {
        let mut session = session();
        let action = OrgAction::Select {
            org_code: Some("12345".to_string()),
        };
        run_org_command(&mut session, &action, &mut Vec::<u8>::new())
            .await
            .unwrap();
        let current = session.selection.current().unwrap();
        assert_eq!(current.org.unwrap().code, "DEF@Org");
        assert_eq!(session.directory.org_requests.get(), 1);
    }

    #[tokio::test]
    async fn test_select_unknown_org_fetches_once() {
        let mut session = session();
        let action = OrgAction::Select {
            org_code: Some("99999".to_string()),
        };
        let err = run_org_command(&mut session, &action, &mut Vec::<u8>::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ConsoleError::NotFound(_)));
        assert_eq!(session.directory.org_requests.get(), 1);
    }

    #[tokio::test]
    async fn test_select_developer_org_not_found() {
        let mut session = session();
        let action = OrgAction::Select {
            org_code: Some("dev@Org".to_string()),
        };
        let err = run_org_command(&mut session, &action, &mut Vec::<u8>::new())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Organization 'dev@Org' not found");
        assert!(session.selection.current().unwrap().org.is_none());
    }

    #[tokio::test]
    async fn test_select_without_code_in_batch_mode() {
        let mut session = session();
        let action = OrgAction::Select { org_code: None };
        let err = run_org_command(&mut session, &action, &mut Vec::<u8>::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ConsoleError::Config(_)));
    }

    #[tokio::test]
    async fn test_list_failure() {
        let mut session = session();
        session.directory.orgs = None;
        let action = OrgAction::List(FormatArgs::default());
        let err = run_org_command(&mut session, &action, &mut Vec::<u8>::new())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Error retrieving Orgs");
    }
}
