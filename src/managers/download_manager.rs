//! Download Manager for Ripe Browser.
//!
//! Asks the user where to save each download the web engine reports and
//! keeps an in-memory log of accepted downloads for the running session.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::download::{DownloadItem, DownloadRequest, DownloadStatus};
use crate::types::errors::DownloadError;

/// A modal "save file" prompt.
pub trait SaveDialog {
    /// Returns the chosen absolute path, or `None` when the user cancels.
    fn pick_save_path(&self, suggested_filename: &str) -> Option<PathBuf>;
}

/// Trait defining download management operations.
pub trait DownloadManagerTrait {
    fn handle_request(&mut self, request: &mut DownloadRequest, dialog: &dyn SaveDialog) -> bool;
    fn record_accepted(&mut self, request: &DownloadRequest) -> bool;
    fn complete_download(
        &mut self,
        url: &str,
        path: Option<&Path>,
        success: bool,
    ) -> Result<(), DownloadError>;
    fn list_downloads(&self) -> Vec<&DownloadItem>;
    fn active_count(&self) -> usize;
}

/// Session-only download log, newest first.
pub struct DownloadManager {
    downloads: Vec<DownloadItem>,
}

impl DownloadManager {
    pub fn new() -> Self {
        Self {
            downloads: Vec::new(),
        }
    }

    fn now_ts() -> i64 {
        SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_secs() as i64
    }
}

impl Default for DownloadManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Asks `dialog` where to save `request`. A chosen path is set on the request
/// and the request is accepted; a cancelled prompt leaves it untouched.
///
/// Takes no manager so callers can run the modal prompt without holding a
/// lock on the download log. Record the outcome with
/// [`DownloadManagerTrait::record_accepted`].
pub fn prompt_save_path(request: &mut DownloadRequest, dialog: &dyn SaveDialog) -> bool {
    let Some(path) = dialog.pick_save_path(&request.suggested_filename()) else {
        log::info!("Download of {} not saved: dialog cancelled", request.url());
        return false;
    };
    request.set_path(path);
    request.accept();
    true
}

impl DownloadManagerTrait for DownloadManager {
    fn handle_request(&mut self, request: &mut DownloadRequest, dialog: &dyn SaveDialog) -> bool {
        prompt_save_path(request, dialog) && self.record_accepted(request)
    }

    /// Logs an accepted request as in progress. Returns `false` for
    /// requests that were never accepted.
    fn record_accepted(&mut self, request: &DownloadRequest) -> bool {
        let Some(path) = request.path().filter(|_| request.is_accepted()) else {
            return false;
        };
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| request.suggested_filename());
        log::info!("Saving {} to {}", request.url(), path.display());

        self.downloads.insert(0, DownloadItem {
            url: request.url().to_string(),
            filename,
            filepath: path.to_path_buf(),
            status: DownloadStatus::InProgress,
            started_at: Self::now_ts(),
            completed_at: None,
        });
        true
    }

    /// Marks the newest in-progress download of `url` as finished.
    ///
    /// A reported path picks between downloads of the same URL. The engine
    /// may report the path in another form than the one chosen (symlinks,
    /// `file://` URIs), so an unmatched path falls back to the URL alone.
    fn complete_download(
        &mut self,
        url: &str,
        path: Option<&Path>,
        success: bool,
    ) -> Result<(), DownloadError> {
        let pending = |d: &DownloadItem| d.url == url && d.status == DownloadStatus::InProgress;
        let index = path
            .and_then(|p| {
                self.downloads
                    .iter()
                    .position(|d| pending(d) && d.filepath.as_path() == p)
            })
            .or_else(|| self.downloads.iter().position(pending))
            .ok_or_else(|| DownloadError::NotFound(url.to_string()))?;

        let item = &mut self.downloads[index];
        item.status = if success {
            DownloadStatus::Completed
        } else {
            DownloadStatus::Failed("Download failed".to_string())
        };
        item.completed_at = Some(Self::now_ts());
        Ok(())
    }

    fn list_downloads(&self) -> Vec<&DownloadItem> {
        self.downloads.iter().collect()
    }

    fn active_count(&self) -> usize {
        self.downloads
            .iter()
            .filter(|d| d.status == DownloadStatus::InProgress)
            .count()
    }
}
