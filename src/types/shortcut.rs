use serde::{Deserialize, Serialize};

/// A named website offered by the toolbar's site selector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebsiteShortcut {
    pub label: String,
    pub url: String,
}

impl WebsiteShortcut {
    pub fn new(label: &str, url: &str) -> Self {
        Self {
            label: label.to_string(),
            url: url.to_string(),
        }
    }
}
