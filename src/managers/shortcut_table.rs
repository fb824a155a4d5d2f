//! Website shortcut table for Ripe Browser.
//!
//! The fixed, ordered list of sites offered by the toolbar's selector.
//! Built once from settings and never modified afterwards.

use crate::types::errors::ShortcutError;
use crate::types::shortcut::WebsiteShortcut;

/// Trait defining lookups into the website shortcut table.
pub trait ShortcutTableTrait {
    fn get_by_index(&self, index: usize) -> Result<&WebsiteShortcut, ShortcutError>;
    fn get_by_label(&self, label: &str) -> Result<&WebsiteShortcut, ShortcutError>;
    fn labels(&self) -> Vec<&str>;
    fn list_shortcuts(&self) -> &[WebsiteShortcut];
}

/// Immutable ordered mapping from site label to URL.
#[derive(Debug, Clone)]
pub struct ShortcutTable {
    shortcuts: Vec<WebsiteShortcut>,
}

impl ShortcutTable {
    /// Builds the table, dropping later entries whose label repeats an
    /// earlier one so that label lookups stay unambiguous.
    pub fn new(shortcuts: Vec<WebsiteShortcut>) -> Self {
        let mut unique: Vec<WebsiteShortcut> = Vec::with_capacity(shortcuts.len());
        for shortcut in shortcuts {
            if unique.iter().any(|s| s.label == shortcut.label) {
                log::warn!("Ignoring duplicate website shortcut '{}'", shortcut.label);
                continue;
            }
            unique.push(shortcut);
        }
        Self { shortcuts: unique }
    }
}

impl ShortcutTableTrait for ShortcutTable {
    fn get_by_index(&self, index: usize) -> Result<&WebsiteShortcut, ShortcutError> {
        self.shortcuts
            .get(index)
            .ok_or(ShortcutError::InvalidIndex(index))
    }

    fn get_by_label(&self, label: &str) -> Result<&WebsiteShortcut, ShortcutError> {
        self.shortcuts
            .iter()
            .find(|s| s.label == label)
            .ok_or_else(|| ShortcutError::NotFound(label.to_string()))
    }

    fn labels(&self) -> Vec<&str> {
        self.shortcuts.iter().map(|s| s.label.as_str()).collect()
    }

    fn list_shortcuts(&self) -> &[WebsiteShortcut] {
        &self.shortcuts
    }
}
