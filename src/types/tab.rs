use serde::{Deserialize, Serialize};

/// Title shown for a tab until its page reports a document title.
pub const DEFAULT_TAB_TITLE: &str = "New Tab";

/// Represents a browser tab with its current state.
///
/// Navigation history is kept by the web engine behind the tab's view,
/// so it does not appear here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tab {
    pub id: String,
    pub url: String,
    pub title: String,
    pub created_at: i64,
}
