//! Shared fixtures for unit tests

use serde_json::{Map, Value};
use std::cell::Cell;

use crate::console::{EntityId, OrgSummary, OrgType, Organization, Project, RemoteDirectory, Workspace};
use crate::error::{ConsoleError, Result};

pub fn organization(id: &str, code: &str, name: &str, org_type: OrgType) -> Organization {
    Organization {
        id: EntityId::from(id),
        code: code.to_string(),
        name: name.to_string(),
        org_type,
    }
}

pub fn org_summary(id: &str, code: &str, name: &str) -> OrgSummary {
    OrgSummary {
        id: EntityId::from(id),
        code: code.to_string(),
        name: name.to_string(),
    }
}

pub fn project(id: &str, name: &str) -> Project {
    Project {
        id: EntityId::from(id),
        name: name.to_string(),
        title: None,
        description: None,
        extra: Map::new(),
    }
}

pub fn workspace(id: &str, name: &str) -> Workspace {
    Workspace {
        id: EntityId::from(id),
        name: name.to_string(),
        enabled: Some(Value::Bool(true)),
        title: None,
        extra: Map::new(),
    }
}

/// In-process directory; a `None` collection makes the matching calls fail
#[derive(Default)]
pub struct FakeDirectory {
    pub orgs: Option<Vec<Organization>>,
    pub projects: Option<Vec<Project>>,
    pub workspaces: Option<Vec<Workspace>>,
    pub bundle: Option<Value>,
    /// Number of `list_organizations` calls served
    pub org_requests: Cell<usize>,
}

fn unavailable<T>() -> Result<T> {
    Err(ConsoleError::Api {
        status: 500,
        message: "unavailable".to_string(),
    })
}

impl RemoteDirectory for FakeDirectory {
    async fn list_organizations(&self) -> Result<Vec<Organization>> {
        self.org_requests.set(self.org_requests.get() + 1);
        self.orgs.clone().map_or_else(unavailable, Ok)
    }

    async fn list_projects(&self, _org_id: &str) -> Result<Vec<Project>> {
        self.projects.clone().map_or_else(unavailable, Ok)
    }

    async fn get_project(&self, _org_id: &str, project_id: &str) -> Result<Option<Project>> {
        match &self.projects {
            Some(projects) => Ok(projects.iter().find(|p| p.id == project_id).cloned()),
            None => unavailable(),
        }
    }

    async fn list_workspaces(&self, _org_id: &str, _project_id: &str) -> Result<Vec<Workspace>> {
        self.workspaces.clone().map_or_else(unavailable, Ok)
    }

    async fn get_workspace(
        &self,
        _org_id: &str,
        _project_id: &str,
        workspace_id: &str,
    ) -> Result<Option<Workspace>> {
        match &self.workspaces {
            Some(workspaces) => Ok(workspaces.iter().find(|w| w.id == workspace_id).cloned()),
            None => unavailable(),
        }
    }

    async fn download_workspace_bundle(
        &self,
        _org_id: &str,
        _project_id: &str,
        _workspace_id: &str,
    ) -> Result<Value> {
        self.bundle.clone().map_or_else(unavailable, Ok)
    }
}
