//! Offline fetcher over a directory of `<project_id>.json` aggregate files.

use std::path::{Path, PathBuf};

use char_core::entities::{ProjectAggregate, ProjectListing};

use crate::error::StoreError;

pub struct FixtureFetcher {
    dir: PathBuf,
}

impl FixtureFetcher {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read `<dir>/<project_id>.json`. `Ok(None)` when the file does not exist.
    ///
    /// A file whose `project_id` is blank takes its id from the file name.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidProjectId`] for ids that are blank or
    /// contain path separators, [`StoreError::Io`] on read failures, and
    /// [`StoreError::Parse`] when the file is not an aggregate.
    pub async fn fetch_project(
        &self,
        project_id: &str,
    ) -> Result<Option<ProjectAggregate>, StoreError> {
        let path = self.path_for(project_id)?;
        tracing::debug!(project_id, path = %path.display(), "reading fixture");

        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let mut aggregate: ProjectAggregate = parse_file(&path, &text)?;
        if aggregate.project_id.trim().is_empty() {
            aggregate.project_id = project_id.trim().to_string();
        }
        Ok(Some(aggregate))
    }

    /// Listing rows for every `*.json` file in the directory, in file-name order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory cannot be read and
    /// [`StoreError::Parse`] for a file that does not decode.
    pub async fn list_projects(&self) -> Result<Vec<ProjectListing>, StoreError> {
        let mut paths = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut listings = Vec::with_capacity(paths.len());
        for path in paths {
            let text = tokio::fs::read_to_string(&path).await?;
            let mut listing: ProjectListing = parse_file(&path, &text)?;
            if listing.project_id.trim().is_empty()
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                listing.project_id = stem.to_string();
            }
            listings.push(listing);
        }
        tracing::debug!(dir = %self.dir.display(), count = listings.len(), "listed fixtures");
        Ok(listings)
    }

    fn path_for(&self, project_id: &str) -> Result<PathBuf, StoreError> {
        let id = project_id.trim();
        if id.is_empty() || id.contains(['/', '\\']) || id.starts_with('.') {
            return Err(StoreError::InvalidProjectId(project_id.to_string()));
        }
        Ok(self.dir.join(format!("{id}.json")))
    }
}

fn parse_file<T: serde::de::DeserializeOwned>(path: &Path, text: &str) -> Result<T, StoreError> {
    serde_json::from_str(text).map_err(|e| StoreError::Parse(format!("{}: {e}", path.display())))
}
