use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::types::errors::TabError;
use crate::types::tab::{Tab, DEFAULT_TAB_TITLE};

/// Trait defining the tab management interface.
///
/// Tabs are addressed by strip position for user actions and by ID for
/// notifications coming back from a tab's view.
pub trait TabManagerTrait {
    type View;

    fn create_tab(&mut self, id: &str, view: Self::View, url: &str, active: bool) -> usize;
    fn remove_tab(&mut self, index: usize) -> Result<(Tab, Self::View), TabError>;
    fn switch_tab(&mut self, index: usize) -> Result<Option<usize>, TabError>;
    fn get_tab(&self, index: usize) -> Option<&Tab>;
    fn find_index(&self, tab_id: &str) -> Option<usize>;
    fn get_all_tabs(&self) -> Vec<&Tab>;
    fn active_index(&self) -> Option<usize>;
    fn get_active_tab(&self) -> Option<&Tab>;
    fn view_mut(&mut self, index: usize) -> Option<&mut Self::View>;
    fn tab_count(&self) -> usize;
    fn update_tab_url(&mut self, tab_id: &str, url: &str) -> Result<(), TabError>;
    fn update_tab_title(&mut self, tab_id: &str, title: &str) -> Result<(), TabError>;
}

/// Generates an ID for a tab about to be created. Views are built before
/// their tab exists and need the ID to label their notifications.
pub fn new_tab_id() -> String {
    Uuid::new_v4().to_string()
}

struct TabEntry<V> {
    tab: Tab,
    view: V,
}

/// In-memory tab strip. Each tab exclusively owns its engine view.
pub struct TabManager<V> {
    tabs: Vec<TabEntry<V>>,
    active: Option<usize>,
}

impl<V> TabManager<V> {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active: None,
        }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    /// Every tab's view, in strip order.
    pub fn views_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.tabs.iter_mut().map(|e| &mut e.view)
    }

    fn find_tab_mut(&mut self, tab_id: &str) -> Result<&mut Tab, TabError> {
        self.tabs
            .iter_mut()
            .map(|e| &mut e.tab)
            .find(|t| t.id == tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))
    }
}

impl<V> Default for TabManager<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> TabManagerTrait for TabManager<V> {
    type View = V;

    /// Append a tab at the end of the strip. Returns its index.
    /// The first tab always becomes active.
    fn create_tab(&mut self, id: &str, view: V, url: &str, active: bool) -> usize {
        let tab = Tab {
            id: id.to_string(),
            url: url.to_string(),
            title: DEFAULT_TAB_TITLE.to_string(),
            created_at: Self::now(),
        };
        self.tabs.push(TabEntry { tab, view });
        let index = self.tabs.len() - 1;
        if active || self.active.is_none() {
            self.active = Some(index);
        }
        index
    }

    /// Remove the tab at `index` and hand back its view for teardown.
    ///
    /// The active tab keeps its identity when a tab to its left goes away.
    /// Removing the active tab activates the tab sliding into its slot, or
    /// the new last tab.
    fn remove_tab(&mut self, index: usize) -> Result<(Tab, V), TabError> {
        if index >= self.tabs.len() {
            return Err(TabError::InvalidIndex(index));
        }
        let TabEntry { tab, view } = self.tabs.remove(index);

        self.active = match self.active {
            _ if self.tabs.is_empty() => None,
            Some(active) if index < active => Some(active - 1),
            Some(active) if index == active => Some(index.min(self.tabs.len() - 1)),
            other => other,
        };

        Ok((tab, view))
    }

    /// Make the tab at `index` active. Returns the previously active index.
    fn switch_tab(&mut self, index: usize) -> Result<Option<usize>, TabError> {
        if index >= self.tabs.len() {
            return Err(TabError::InvalidIndex(index));
        }
        Ok(self.active.replace(index))
    }

    fn get_tab(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index).map(|e| &e.tab)
    }

    fn find_index(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|e| e.tab.id == tab_id)
    }

    fn get_all_tabs(&self) -> Vec<&Tab> {
        self.tabs.iter().map(|e| &e.tab).collect()
    }

    fn active_index(&self) -> Option<usize> {
        self.active
    }

    fn get_active_tab(&self) -> Option<&Tab> {
        self.active.and_then(|i| self.get_tab(i))
    }

    fn view_mut(&mut self, index: usize) -> Option<&mut V> {
        self.tabs.get_mut(index).map(|e| &mut e.view)
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    fn update_tab_url(&mut self, tab_id: &str, url: &str) -> Result<(), TabError> {
        self.find_tab_mut(tab_id)?.url = url.to_string();
        Ok(())
    }

    /// Blank titles (pages without a `<title>`) fall back to the default.
    fn update_tab_title(&mut self, tab_id: &str, title: &str) -> Result<(), TabError> {
        let trimmed = title.trim();
        self.find_tab_mut(tab_id)?.title = if trimmed.is_empty() {
            DEFAULT_TAB_TITLE.to_string()
        } else {
            trimmed.to_string()
        };
        Ok(())
    }
}
