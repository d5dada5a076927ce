//! Console API operations

use serde_json::Value;
use urlencoding::encode;

use crate::config::api;
use crate::error::Result;

use super::client::ConsoleClient;
use super::models::{Organization, Project, Workspace};
use super::traits::RemoteDirectory;

fn org_path(org_id: &str) -> String {
    format!("/{}/{}", api::ORGANIZATIONS, encode(org_id))
}

fn project_path(org_id: &str, project_id: &str) -> String {
    format!(
        "{}/{}/{}",
        org_path(org_id),
        api::PROJECTS,
        encode(project_id)
    )
}

fn workspace_path(org_id: &str, project_id: &str, workspace_id: &str) -> String {
    format!(
        "{}/{}/{}",
        project_path(org_id, project_id),
        api::WORKSPACES,
        encode(workspace_id)
    )
}

impl RemoteDirectory for ConsoleClient {
    async fn list_organizations(&self) -> Result<Vec<Organization>> {
        self.fetch(&format!("/{}", api::ORGANIZATIONS), "organizations")
            .await
    }

    async fn list_projects(&self, org_id: &str) -> Result<Vec<Project>> {
        let path = format!("{}/{}", org_path(org_id), api::PROJECTS);
        self.fetch(&path, &format!("projects for organization '{}'", org_id))
            .await
    }

    async fn get_project(&self, org_id: &str, project_id: &str) -> Result<Option<Project>> {
        self.fetch_optional(
            &project_path(org_id, project_id),
            &format!("project '{}'", project_id),
        )
        .await
    }

    async fn list_workspaces(&self, org_id: &str, project_id: &str) -> Result<Vec<Workspace>> {
        let path = format!("{}/{}", project_path(org_id, project_id), api::WORKSPACES);
        self.fetch(&path, &format!("workspaces for project '{}'", project_id))
            .await
    }

    async fn get_workspace(
        &self,
        org_id: &str,
        project_id: &str,
        workspace_id: &str,
    ) -> Result<Option<Workspace>> {
        self.fetch_optional(
            &workspace_path(org_id, project_id, workspace_id),
            &format!("workspace '{}'", workspace_id),
        )
        .await
    }

    async fn download_workspace_bundle(
        &self,
        org_id: &str,
        project_id: &str,
        workspace_id: &str,
    ) -> Result<Value> {
        let path = format!(
            "{}/{}",
            workspace_path(org_id, project_id, workspace_id),
            api::DOWNLOAD
        );
        self.fetch(
            &path,
            &format!("configuration for workspace '{}'", workspace_id),
        )
        .await
    }
}
