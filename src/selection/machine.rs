//! Reads, narrows and writes the Org → Project → Workspace selection

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::selection::ROOT;
use crate::console::{OrgSummary, Organization, Project, RemoteDirectory, Workspace};
use crate::error::{ConsoleError, Result};
use crate::store::ConfigStore;

use super::models::{Level, Selection};

/// Turn any directory failure into the user-facing "Error retrieving X"
fn fetch_error(entity: &str, err: ConsoleError) -> ConsoleError {
    debug!("Failed to retrieve {}: {}", entity, err);
    ConsoleError::RemoteFetch {
        entity: entity.to_string(),
    }
}

/// Selection state over an injected config store
///
/// Select operations require the parent levels to be present but do not
/// check that a project belongs to the selected organization (or a workspace
/// to the selected project); callers resolve children from the parent's
/// listing before selecting.
pub struct SelectionMachine<S> {
    store: S,
}

impl<S: ConfigStore> SelectionMachine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Enterprise organizations, optionally narrowed to one org code
    pub async fn list_orgs<D: RemoteDirectory>(
        &self,
        directory: &D,
        filter_code: Option<&str>,
    ) -> Result<Vec<OrgSummary>> {
        let orgs = directory
            .list_organizations()
            .await
            .map_err(|e| fetch_error("Orgs", e))?;

        let orgs: Vec<OrgSummary> = orgs
            .into_iter()
            .filter(Organization::is_enterprise)
            .filter(|org| filter_code.map_or(true, |code| org.code == code))
            .map(OrgSummary::from)
            .collect();

        debug!(
            "Found {} enterprise organizations (filter: {:?})",
            orgs.len(),
            filter_code
        );
        Ok(orgs)
    }

    pub async fn list_projects<D: RemoteDirectory>(
        &self,
        directory: &D,
        org_id: &str,
    ) -> Result<Vec<Project>> {
        directory
            .list_projects(org_id)
            .await
            .map_err(|e| fetch_error("Projects", e))
    }

    /// One project of an organization; `None` if the console does not know it
    pub async fn get_project<D: RemoteDirectory>(
        &self,
        directory: &D,
        org_id: &str,
        project_id: &str,
    ) -> Result<Option<Project>> {
        directory
            .get_project(org_id, project_id)
            .await
            .map_err(|e| fetch_error("Project", e))
    }

    pub async fn list_workspaces<D: RemoteDirectory>(
        &self,
        directory: &D,
        org_id: &str,
        project_id: &str,
    ) -> Result<Vec<Workspace>> {
        directory
            .list_workspaces(org_id, project_id)
            .await
            .map_err(|e| fetch_error("Workspaces", e))
    }

    /// One workspace of a project; `None` if the console does not know it
    pub async fn get_workspace<D: RemoteDirectory>(
        &self,
        directory: &D,
        org_id: &str,
        project_id: &str,
        workspace_id: &str,
    ) -> Result<Option<Workspace>> {
        directory
            .get_workspace(org_id, project_id, workspace_id)
            .await
            .map_err(|e| fetch_error("Workspace", e))
    }

    /// Read the three levels independently; any of them may be unset
    pub fn current(&self) -> Result<Selection> {
        Ok(Selection {
            org: self.read(Level::Org)?,
            project: self.read(Level::Project)?,
            workspace: self.read(Level::Workspace)?,
        })
    }

    pub fn select_org(&mut self, org: &OrgSummary) -> Result<()> {
        self.write(Level::Org, org)
    }

    pub fn select_project(&mut self, project: &Project) -> Result<()> {
        self.write(Level::Project, project)
    }

    pub fn select_workspace(&mut self, workspace: &Workspace) -> Result<()> {
        self.write(Level::Workspace, workspace)
    }

    /// Clear `level` and every level below it, deepest first so an
    /// interrupted clear never leaves a child without its parent
    pub fn clear(&mut self, level: Level) -> Result<()> {
        for cleared in level.and_deeper().iter().rev() {
            self.store.delete(&cleared.config_key())?;
        }
        debug!("Cleared selection from level '{}' down", level);
        Ok(())
    }

    /// Drop the whole selection root
    pub fn clear_all(&mut self) -> Result<()> {
        self.store.delete(ROOT)?;
        debug!("Cleared selection root '{}'", ROOT);
        Ok(())
    }

    fn read<T: DeserializeOwned>(&self, level: Level) -> Result<Option<T>> {
        match self.store.get(&level.config_key()) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value).map(Some).map_err(|e| {
                ConsoleError::Config(format!(
                    "Stored {} selection is invalid ({}); run 'consolectl clear' to reset it",
                    level.label(),
                    e
                ))
            }),
        }
    }

    fn write<T: Serialize>(&mut self, level: Level, value: &T) -> Result<()> {
        let missing: Vec<Level> = level
            .parents()
            .iter()
            .copied()
            .filter(|parent| {
                matches!(
                    self.store.get(&parent.config_key()),
                    None | Some(Value::Null)
                )
            })
            .collect();
        if !missing.is_empty() {
            return Err(ConsoleError::IncompleteSelection(missing));
        }

        let value = serde_json::to_value(value)?;
        self.store.set(&level.config_key(), value)?;
        debug!("Selected {}", level.label());
        Ok(())
    }
}
