//! Console entity models

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

use crate::config::selection::ORG_TYPE_ENTERPRISE;

/// An id exactly as the console sent it (a JSON string or number).
///
/// Serializes back to the original value; `as_str` gives the textual form
/// used for matching and URL paths.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityId {
    raw: Value,
    key: String,
}

impl EntityId {
    pub fn as_str(&self) -> &str {
        &self.key
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self {
            raw: Value::String(id.to_string()),
            key: id.to_string(),
        }
    }
}

impl From<u64> for EntityId {
    fn from(id: u64) -> Self {
        Self {
            raw: Value::from(id),
            key: id.to_string(),
        }
    }
}

impl PartialEq<str> for EntityId {
    fn eq(&self, other: &str) -> bool {
        self.key == other
    }
}

impl PartialEq<&str> for EntityId {
    fn eq(&self, other: &&str) -> bool {
        self.key == *other
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        let key = match &raw {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            other => {
                return Err(D::Error::custom(format!(
                    "expected a string or numeric id, got {}",
                    other
                )))
            }
        };
        Ok(Self { raw, key })
    }
}

/// Keep a flag sent as a bool or as 0/1 verbatim
fn flag_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        flag @ (Value::Bool(_) | Value::Number(_) | Value::Null) => Ok(Some(flag)),
        other => Err(D::Error::custom(format!(
            "expected a boolean flag, got {}",
            other
        ))),
    }
}

/// Organization type tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrgType {
    Enterprise,
    Developer,
    Other(String),
}

impl Default for OrgType {
    fn default() -> Self {
        OrgType::Other(String::new())
    }
}

impl From<String> for OrgType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            ORG_TYPE_ENTERPRISE => OrgType::Enterprise,
            "developer" => OrgType::Developer,
            _ => OrgType::Other(tag),
        }
    }
}

impl<'de> Deserialize<'de> for OrgType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(OrgType::from)
    }
}

/// Organization record from the console API
#[derive(Deserialize, Debug, Clone)]
pub struct Organization {
    pub id: EntityId,
    #[serde(default)]
    pub code: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub org_type: OrgType,
}

impl Organization {
    pub fn is_enterprise(&self) -> bool {
        self.org_type == OrgType::Enterprise
    }
}

/// The persisted and printed projection of an organization
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OrgSummary {
    pub id: EntityId,
    pub code: String,
    pub name: String,
}

impl From<Organization> for OrgSummary {
    fn from(org: Organization) -> Self {
        Self {
            id: org.id,
            code: org.code,
            name: org.name,
        }
    }
}

/// Project record, scoped to one organization.
/// Fields the model does not name are kept in `extra` and written back verbatim.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Project {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}

/// Workspace record, scoped to one project
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Workspace {
    pub id: EntityId,
    pub name: String,
    #[serde(
        default,
        deserialize_with = "flag_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub enabled: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Workspace {
    /// `true`, or any non-zero number; a missing flag counts as disabled
    pub fn is_enabled(&self) -> bool {
        match &self.enabled {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_org_type_tags() {
        assert_eq!(OrgType::from("entp".to_string()), OrgType::Enterprise);
        assert_eq!(OrgType::from("developer".to_string()), OrgType::Developer);
        assert_eq!(
            OrgType::from("partner".to_string()),
            OrgType::Other("partner".to_string())
        );
    }

    #[test]
    fn test_organization_deserialize() {
        let org: Organization = serde_json::from_value(json!({
            "id": "53444",
            "code": "ABC@AdobeOrg",
            "name": "My Org",
            "type": "entp",
            "role": "ADMIN"
        }))
        .unwrap();
        assert_eq!(org.id, "53444");
        assert!(org.is_enterprise());
    }

    #[test]
    fn test_organization_missing_type_is_not_enterprise() {
        let org: Organization =
            serde_json::from_value(json!({"id": 7, "name": "No Type"})).unwrap();
        assert_eq!(org.id, "7");
        assert_eq!(org.code, "");
        assert!(!org.is_enterprise());
    }

    #[test]
    fn test_org_summary_projection() {
        let org = Organization {
            id: EntityId::from("1"),
            code: "C1".to_string(),
            name: "Org One".to_string(),
            org_type: OrgType::Enterprise,
        };
        let summary = OrgSummary::from(org);
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value, json!({"id": "1", "code": "C1", "name": "Org One"}));
    }

    #[test]
    fn test_workspace_numeric_fields() {
        let ws: Workspace =
            serde_json::from_value(json!({"id": 1, "name": "WRKSPC1", "enabled": 1})).unwrap();
        assert_eq!(ws.id, "1");
        assert!(ws.is_enabled());
        assert!(ws.extra.is_empty());
    }

    #[test]
    fn test_workspace_disabled_and_missing_flag() {
        let ws: Workspace =
            serde_json::from_value(json!({"id": "2", "name": "W", "enabled": 0})).unwrap();
        assert!(!ws.is_enabled());
        let ws: Workspace = serde_json::from_value(json!({"id": "3", "name": "W"})).unwrap();
        assert!(!ws.is_enabled());
        assert!(ws.enabled.is_none());
    }

    #[test]
    fn test_project_keeps_unknown_fields() {
        let input = json!({
            "id": "p1",
            "name": "proj",
            "title": "Project One",
            "org_id": 53444,
            "type": "default"
        });
        let project: Project = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(project.title(), "Project One");
        assert_eq!(project.extra.get("org_id"), Some(&json!(53444)));
        assert_eq!(serde_json::to_value(&project).unwrap(), input);
    }

    #[test]
    fn test_project_without_title_omits_it() {
        let project: Project = serde_json::from_value(json!({"id": "p", "name": "n"})).unwrap();
        assert_eq!(project.title(), "");
        let value = serde_json::to_value(&project).unwrap();
        assert!(value.get("title").is_none());
    }

    #[test]
    fn test_invalid_id_rejected() {
        let result: Result<Workspace, _> =
            serde_json::from_value(json!({"id": [1], "name": "bad"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_workspace_serializes_wire_values() {
        let input = json!({"id": 1, "name": "WRKSPC1", "enabled": 1});
        let ws: Workspace = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(ws.id.as_str(), "1");
        assert_eq!(serde_json::to_value(&ws).unwrap(), input);
    }

    #[test]
    fn test_missing_flag_stays_missing() {
        let input = json!({"id": "w", "name": "W"});
        let ws: Workspace = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(serde_json::to_value(&ws).unwrap(), input);
    }

    #[test]
    fn test_numeric_org_id_round_trips() {
        let org: Organization =
            serde_json::from_value(json!({"id": 53444, "code": "C", "name": "N"})).unwrap();
        let summary = OrgSummary::from(org);
        assert_eq!(summary.id, "53444");
        assert_eq!(serde_json::to_value(&summary).unwrap()["id"], json!(53444));
    }

    #[test]
    fn test_invalid_flag_rejected() {
        let result: Result<Workspace, _> =
            serde_json::from_value(json!({"id": 1, "name": "bad", "enabled": "yes"}));
        assert!(result.is_err());
    }
}
