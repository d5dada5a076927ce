//! Common traits for console resources

use serde_json::Value;

use crate::error::Result;

use super::models::{OrgSummary, Organization, Project, Workspace};

/// Common trait for console resources (organizations, projects, workspaces)
pub trait ConsoleResource {
    /// Get the resource ID
    fn id(&self) -> &str;

    /// Get the human-readable name
    fn name(&self) -> &str;

    /// Check if the resource matches by name or ID
    ///
    /// Default implementation checks for exact match on either field.
    fn matches(&self, input: &str) -> bool {
        self.id() == input || self.name() == input
    }
}

impl ConsoleResource for OrgSummary {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn name(&self) -> &str {
        &self.name
    }

    /// Organizations are addressed by code first
    fn matches(&self, input: &str) -> bool {
        self.code == input || self.id == input
    }
}

impl ConsoleResource for Project {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl ConsoleResource for Workspace {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Read-only access to the console's organization/project/workspace directory
///
/// Every call is a single attempt. `get_*` lookups return `Ok(None)` when the
/// console reports the entity as missing.
#[allow(async_fn_in_trait)]
pub trait RemoteDirectory {
    /// All organizations visible to the caller, of any type
    async fn list_organizations(&self) -> Result<Vec<Organization>>;

    /// Projects of one organization
    async fn list_projects(&self, org_id: &str) -> Result<Vec<Project>>;

    /// One project by id
    async fn get_project(&self, org_id: &str, project_id: &str) -> Result<Option<Project>>;

    /// Workspaces of one project
    async fn list_workspaces(&self, org_id: &str, project_id: &str) -> Result<Vec<Workspace>>;

    /// One workspace by id
    async fn get_workspace(
        &self,
        org_id: &str,
        project_id: &str,
        workspace_id: &str,
    ) -> Result<Option<Workspace>>;

    /// The exported configuration bundle of a workspace
    async fn download_workspace_bundle(
        &self,
        org_id: &str,
        project_id: &str,
        workspace_id: &str,
    ) -> Result<Value>;
}
