//! Workspace configuration download

use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::console::{OrgSummary, Project, RemoteDirectory, Workspace};
use crate::error::{ConsoleError, Result};
use crate::selection::Selection;

/// `{orgId}-{projectName}-{workspaceName}.json`, always a single path component
pub fn default_file_name(org: &OrgSummary, project: &Project, workspace: &Workspace) -> String {
    format!(
        "{}-{}-{}.json",
        file_segment(org.id.as_str()),
        file_segment(&project.name),
        file_segment(&workspace.name)
    )
}

fn file_segment(part: &str) -> String {
    part.replace(['/', '\\'], "_")
}

/// Fetch the configuration bundle of the selected workspace and write it to disk.
///
/// `destination` is a directory; the file name is always derived from the
/// selection. Without a destination the file lands in the working directory.
/// An existing file is overwritten. Nothing is written if the fetch fails.
pub async fn download_workspace_config<D: RemoteDirectory>(
    directory: &D,
    selection: &Selection,
    destination: Option<&Path>,
) -> Result<PathBuf> {
    let (org, project, workspace) = selection.require_complete()?;

    let bundle = directory
        .download_workspace_bundle(org.id.as_str(), project.id.as_str(), workspace.id.as_str())
        .await
        .map_err(|e| {
            debug!("Failed to download workspace bundle: {}", e);
            ConsoleError::RemoteFetch {
                entity: "Workspace configuration".to_string(),
            }
        })?;

    let file_name = default_file_name(org, project, workspace);
    let path = match destination {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    };

    let body = serde_json::to_string_pretty(&bundle)?;
    tokio::fs::write(&path, body)
        .await
        .map_err(|e| ConsoleError::Filesystem(e.to_string()))?;

    info!("Wrote workspace configuration to {}", path.display());
    Ok(path)
}
