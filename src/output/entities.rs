//! List output for organizations, projects and workspaces

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::console::{OrgSummary, Project, Workspace};
use crate::error::Result;

use super::common::{to_json, to_yaml};

/// A record that can be shown as one row of a plain-text listing
pub trait ListRow {
    /// Column headers
    const HEADERS: &'static [&'static str];
    /// Plural noun for the empty-list message
    const PLURAL: &'static str;

    fn cells(&self) -> Vec<String>;
}

impl ListRow for OrgSummary {
    const HEADERS: &'static [&'static str] = &["ID", "Code", "Name"];
    const PLURAL: &'static str = "organizations";

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.code.clone(), self.name.clone()]
    }
}

impl ListRow for Project {
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Title"];
    const PLURAL: &'static str = "projects";

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone(), self.title().to_string()]
    }
}

impl ListRow for Workspace {
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Enabled"];
    const PLURAL: &'static str = "workspaces";

    fn cells(&self) -> Vec<String> {
        let enabled = if self.is_enabled() { "Yes" } else { "No" };
        vec![self.id.to_string(), self.name.clone(), enabled.to_string()]
    }
}

/// Render a list of records in the requested format
pub fn render_list<T: ListRow + Serialize>(items: &[T], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(render_table(items)),
        OutputFormat::Json => to_json(items),
        OutputFormat::Yaml => to_yaml(items),
    }
}

fn render_table<T: ListRow>(items: &[T]) -> String {
    if items.is_empty() {
        return format!("No {} found.", T::PLURAL);
    }

    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(T::HEADERS.to_vec());
    for item in items {
        table.add_row(item.cells());
    }
    table.to_string()
}
