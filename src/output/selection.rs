//! Current selection output

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::selection::Selection;

use super::common::{to_json, to_yaml};

/// Render the selection; structured formats carry the selected names only
pub fn render_selection(selection: &Selection, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(&selection.view()),
        OutputFormat::Yaml => to_yaml(&selection.view()),
        OutputFormat::Plain => {
            let view = selection.view();
            Ok(format!(
                "You are currently in:\n\
                 1. Org: {}\n\
                 2. Project: {}\n\
                 3. Workspace: {}",
                view.org.as_deref().unwrap_or("<no org selected>"),
                view.project.as_deref().unwrap_or("<no project selected>"),
                view.workspace.as_deref().unwrap_or("<no workspace selected>"),
            ))
        }
    }
}
