//! Selection data models

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::config::selection::ROOT;
use crate::console::{OrgSummary, Project, Workspace};
use crate::error::{ConsoleError, Result};

/// One level of the Org → Project → Workspace hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Level {
    /// Organization
    Org,
    /// Project
    Project,
    /// Workspace
    Workspace,
}

impl Level {
    /// All levels, outermost first
    pub const ALL: [Level; 3] = [Level::Org, Level::Project, Level::Workspace];

    /// Key of this level below the selection root
    pub fn key(self) -> &'static str {
        match self {
            Level::Org => "org",
            Level::Project => "project",
            Level::Workspace => "workspace",
        }
    }

    /// Human-readable name used in messages
    pub fn label(self) -> &'static str {
        match self {
            Level::Org => "Organization",
            Level::Project => "Project",
            Level::Workspace => "Workspace",
        }
    }

    /// Full config store key (`console.org`)
    pub fn config_key(self) -> String {
        format!("{}.{}", ROOT, self.key())
    }

    /// Levels that must be selected before this one
    pub fn parents(self) -> &'static [Level] {
        match self {
            Level::Org => &[],
            Level::Project => &[Level::Org],
            Level::Workspace => &[Level::Org, Level::Project],
        }
    }

    /// This level and every level that depends on it
    pub fn and_deeper(self) -> &'static [Level] {
        match self {
            Level::Org => &[Level::Org, Level::Project, Level::Workspace],
            Level::Project => &[Level::Project, Level::Workspace],
            Level::Workspace => &[Level::Workspace],
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// The persisted Org/Project/Workspace triple
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub org: Option<OrgSummary>,
    pub project: Option<Project>,
    pub workspace: Option<Workspace>,
}

impl Selection {
    pub fn is_set(&self, level: Level) -> bool {
        match level {
            Level::Org => self.org.is_some(),
            Level::Project => self.project.is_some(),
            Level::Workspace => self.workspace.is_some(),
        }
    }

    /// Every level in `levels` that is unset, in hierarchy order
    pub fn missing(&self, levels: &[Level]) -> Vec<Level> {
        levels
            .iter()
            .copied()
            .filter(|level| !self.is_set(*level))
            .collect()
    }

    /// The selected organization
    pub fn require_org(&self) -> Result<&OrgSummary> {
        self.org
            .as_ref()
            .ok_or_else(|| ConsoleError::IncompleteSelection(vec![Level::Org]))
    }

    /// The selected organization and project; reports every missing level
    pub fn require_project(&self) -> Result<(&OrgSummary, &Project)> {
        match (&self.org, &self.project) {
            (Some(org), Some(project)) => Ok((org, project)),
            _ => Err(ConsoleError::IncompleteSelection(
                self.missing(&[Level::Org, Level::Project]),
            )),
        }
    }

    /// All three levels; reports every missing level
    pub fn require_complete(&self) -> Result<(&OrgSummary, &Project, &Workspace)> {
        match (&self.org, &self.project, &self.workspace) {
            (Some(org), Some(project), Some(workspace)) => Ok((org, project, workspace)),
            _ => Err(ConsoleError::IncompleteSelection(self.missing(&Level::ALL))),
        }
    }

    /// Name-only view used for structured output
    pub fn view(&self) -> SelectionView {
        SelectionView {
            org: self.org.as_ref().map(|o| o.name.clone()),
            project: self.project.as_ref().map(|p| p.name.clone()),
            workspace: self.workspace.as_ref().map(|w| w.name.clone()),
        }
    }
}

/// Selected names per level; unset levels are left out when serialized
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{org_summary, project, workspace};

    #[test]
    fn test_config_keys() {
        assert_eq!(Level::Org.config_key(), "console.org");
        assert_eq!(Level::Project.config_key(), "console.project");
        assert_eq!(Level::Workspace.config_key(), "console.workspace");
    }

    #[test]
    fn test_parents() {
        assert!(Level::Org.parents().is_empty());
        assert_eq!(Level::Project.parents(), &[Level::Org]);
        assert_eq!(Level::Workspace.parents(), &[Level::Org, Level::Project]);
    }

    #[test]
    fn test_and_deeper() {
        assert_eq!(Level::Org.and_deeper(), &Level::ALL);
        assert_eq!(Level::Project.and_deeper(), &[Level::Project, Level::Workspace]);
        assert_eq!(Level::Workspace.and_deeper(), &[Level::Workspace]);
    }

    #[test]
    fn test_level_display() {
        assert_eq!(Level::Org.to_string(), "org");
        assert_eq!(Level::Workspace.to_string(), "workspace");
    }

    #[test]
    fn test_missing_preserves_order() {
        let selection = Selection {
            project: Some(project("p1", "proj")),
            ..Default::default()
        };
        assert_eq!(
            selection.missing(&Level::ALL),
            vec![Level::Org, Level::Workspace]
        );
    }

    #[test]
    fn test_require_complete_lists_all_missing() {
        let err = Selection::default().require_complete().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("No Organization selected"));
        assert!(msg.contains("No Project selected"));
        assert!(msg.contains("No Workspace selected"));
    }

    #[test]
    fn test_require_complete_only_org_missing() {
        let selection = Selection {
            org: None,
            project: Some(project("p1", "proj")),
            workspace: Some(workspace("w1", "ws")),
        };
        let msg = selection.require_complete().unwrap_err().to_string();
        assert_eq!(msg, "No Organization selected");
    }

    #[test]
    fn test_require_project() {
        let selection = Selection {
            org: Some(org_summary("1", "C1", "Org")),
            ..Default::default()
        };
        let msg = selection.require_project().unwrap_err().to_string();
        assert_eq!(msg, "No Project selected");
        assert_eq!(selection.require_org().unwrap().id, "1");
    }

    #[test]
    fn test_view_skips_unset_levels() {
        let selection = Selection {
            org: Some(org_summary("1", "C1", "THE_ORG")),
            ..Default::default()
        };
        let view = selection.view();
        assert_eq!(view.org.as_deref(), Some("THE_ORG"));
        let json = serde_json::to_string(&view).unwrap();
        assert_eq!(json, r#"{"org":"THE_ORG"}"#);
    }
}
