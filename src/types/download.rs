use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Status of a file download the user agreed to save.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DownloadStatus {
    InProgress,
    Completed,
    Failed(String),
}

/// Represents a file download with its destination and outcome.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DownloadItem {
    pub url: String,
    pub filename: String,
    pub filepath: PathBuf,
    pub status: DownloadStatus,
    pub started_at: i64,
    pub completed_at: Option<i64>,
}

/// A download the web engine wants to start.
///
/// The engine hands over a suggested target; whoever handles the request
/// may replace the path and must call [`DownloadRequest::accept`] for the
/// engine to go ahead. A request that is never accepted is left to the
/// engine's default handling.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadRequest {
    url: String,
    suggested_path: PathBuf,
    path: Option<PathBuf>,
    accepted: bool,
}

impl DownloadRequest {
    pub fn new(url: &str, suggested_path: impl Into<PathBuf>) -> Self {
        Self {
            url: url.to_string(),
            suggested_path: suggested_path.into(),
            path: None,
            accepted: false,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn suggested_path(&self) -> &Path {
        &self.suggested_path
    }

    /// File name component of the suggested target, falling back to the
    /// last segment of the source URL.
    pub fn suggested_filename(&self) -> String {
        if let Some(name) = self.suggested_path.file_name() {
            return name.to_string_lossy().to_string();
        }
        self.url
            .split(['?', '#'])
            .next()
            .and_then(|u| u.rsplit('/').find(|s| !s.is_empty()))
            .unwrap_or("download")
            .to_string()
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn accept(&mut self) {
        self.accepted = true;
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }
}
