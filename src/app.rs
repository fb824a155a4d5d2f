//! App Core for Ripe Browser.
//!
//! `Browser` is the window controller: it owns the tab strip, the address bar
//! text and the website shortcut table, and routes every toolbar action to
//! whichever tab is active when the action runs.

use crate::managers::shortcut_table::{ShortcutTable, ShortcutTableTrait};
use crate::managers::tab_manager::{new_tab_id, TabManager, TabManagerTrait};
use crate::services::address_bar;
use crate::types::errors::{ShortcutError, TabError, ViewError};
use crate::types::settings::BrowserSettings;
use crate::types::tab::Tab;
use crate::types::view::PageView;

/// Lifecycle of the browser window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    Running,
    Terminated,
}

/// What a close-tab request ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The tab was removed and the window keeps running.
    Closed,
    /// It was the only tab; the application terminates instead.
    Terminated,
}

/// Window controller holding the tabs and their engine views.
pub struct Browser<V: PageView> {
    settings: BrowserSettings,
    tab_manager: TabManager<V>,
    shortcuts: ShortcutTable,
    address_bar: String,
    state: WindowState,
}

impl<V: PageView> Browser<V> {
    pub fn new(settings: BrowserSettings) -> Self {
        let shortcuts = ShortcutTable::new(settings.websites.clone());
        Self {
            settings,
            tab_manager: TabManager::new(),
            shortcuts,
            address_bar: String::new(),
            state: WindowState::Running,
        }
    }

    pub fn settings(&self) -> &BrowserSettings {
        &self.settings
    }

    pub fn shortcuts(&self) -> &ShortcutTable {
        &self.shortcuts
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == WindowState::Running
    }

    pub fn tab_count(&self) -> usize {
        self.tab_manager.tab_count()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.tab_manager.active_index()
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.tab_manager.get_active_tab()
    }

    pub fn tabs(&self) -> Vec<&Tab> {
        self.tab_manager.get_all_tabs()
    }

    pub fn address_text(&self) -> &str {
        &self.address_bar
    }

    /// Replaces the address bar contents, as typing would.
    pub fn set_address_text(&mut self, text: &str) {
        self.address_bar = text.to_string();
    }

    // ─── Tabs ───

    /// Adds a tab around an already-built view, loads the home page into it
    /// and makes it active. Returns the new tab's index.
    pub fn add_tab(&mut self, view: V) -> usize {
        let id = new_tab_id();
        self.insert_tab(&id, view)
    }

    /// Like [`Browser::add_tab`], for views that need their tab's ID at
    /// construction time to label the notifications they send back.
    pub fn add_tab_with<F>(&mut self, make_view: F) -> Result<usize, ViewError>
    where
        F: FnOnce(&str) -> Result<V, ViewError>,
    {
        let id = new_tab_id();
        let view = make_view(&id)?;
        Ok(self.insert_tab(&id, view))
    }

    fn insert_tab(&mut self, id: &str, mut view: V) -> usize {
        let home = self.settings.navigation.home_url.clone();
        if let Err(e) = view.load_url(&home) {
            log::warn!("New tab failed to load {}: {}", home, e);
        }

        if let Some(previous) = self.tab_manager.active_index() {
            self.set_view_visible(previous, false);
        }
        let index = self.tab_manager.create_tab(id, view, &home, true);
        self.set_view_visible(index, true);
        self.address_bar = home;

        log::info!("Opened tab {} ({} open)", index, self.tab_manager.tab_count());
        index
    }

    /// Closes the tab at `index`. Closing the only tab terminates the
    /// application and leaves the tab in place.
    pub fn close_tab(&mut self, index: usize) -> Result<CloseOutcome, TabError> {
        let count = self.tab_manager.tab_count();
        if index >= count {
            return Err(TabError::InvalidIndex(index));
        }
        if count == 1 {
            log::info!("Last tab closed, terminating");
            self.terminate();
            return Ok(CloseOutcome::Terminated);
        }

        let was_active = self.tab_manager.active_index() == Some(index);
        // The view goes away before its entry leaves the strip.
        self.set_view_visible(index, false);
        let (_, view) = self.tab_manager.remove_tab(index)?;
        drop(view);

        if was_active {
            if let Some(active) = self.tab_manager.active_index() {
                self.set_view_visible(active, true);
            }
            self.sync_address_bar();
        }

        log::info!("Closed tab {} ({} open)", index, self.tab_manager.tab_count());
        Ok(CloseOutcome::Closed)
    }

    /// Makes the tab at `index` the active one.
    pub fn select_tab(&mut self, index: usize) -> Result<(), TabError> {
        let previous = self.tab_manager.switch_tab(index)?;
        if previous == Some(index) {
            return Ok(());
        }
        if let Some(previous) = previous {
            self.set_view_visible(previous, false);
        }
        self.set_view_visible(index, true);
        self.sync_address_bar();
        Ok(())
    }

    /// Applies `f` to every tab's view, e.g. after the window is resized.
    pub fn for_each_view<F: FnMut(&mut V)>(&mut self, f: F) {
        self.tab_manager.views_mut().for_each(f);
    }

    /// Ends the session, as closing the window does.
    pub fn terminate(&mut self) {
        self.state = WindowState::Terminated;
    }

    // ─── Navigation ───

    /// Loads the address bar text into the active tab: text with a URL scheme
    /// as is, anything else as a search. Returns the URL loaded, or `None`
    /// when the address bar is blank or there is no tab.
    pub fn navigate(&mut self) -> Option<String> {
        let resolved = address_bar::resolve_input(
            &self.address_bar,
            &self.settings.navigation.search_url,
        )?;
        let url = resolved.into_url();
        self.load_in_active(&url).then_some(url)
    }

    /// Sets the address bar text and navigates, as pressing Enter does.
    pub fn submit_address(&mut self, text: &str) -> Option<String> {
        self.set_address_text(text);
        self.navigate()
    }

    /// Loads the website at `index` of the shortcut selector. Returns the URL
    /// loaded, or `None` when there is no tab to load it into.
    pub fn navigate_to_selected_website(
        &mut self,
        index: usize,
    ) -> Result<Option<String>, ShortcutError> {
        let url = self.shortcuts.get_by_index(index)?.url.clone();
        Ok(self.load_in_active(&url).then_some(url))
    }

    /// Loads the website registered under `label`.
    pub fn navigate_to_website(&mut self, label: &str) -> Result<Option<String>, ShortcutError> {
        let url = self.shortcuts.get_by_label(label)?.url.clone();
        Ok(self.load_in_active(&url).then_some(url))
    }

    pub fn go_home(&mut self) {
        let home = self.settings.navigation.home_url.clone();
        self.load_in_active(&home);
    }

    pub fn go_back(&mut self) {
        self.with_active_view("go back", |v| v.go_back());
    }

    pub fn go_forward(&mut self) {
        self.with_active_view("go forward", |v| v.go_forward());
    }

    pub fn reload(&mut self) {
        self.with_active_view("reload", |v| v.reload());
    }

    // ─── Engine notifications ───

    /// Records a URL the engine reports for a tab (redirects, link clicks,
    /// history steps). The address bar follows the active tab.
    pub fn on_url_changed(&mut self, tab_id: &str, url: &str) -> Result<(), TabError> {
        self.tab_manager.update_tab_url(tab_id, url)?;
        if self.active_tab().map(|t| t.id.as_str()) == Some(tab_id) {
            self.address_bar = url.to_string();
        }
        Ok(())
    }

    pub fn on_title_changed(&mut self, tab_id: &str, title: &str) -> Result<(), TabError> {
        self.tab_manager.update_tab_title(tab_id, title)
    }

    // ─── Helpers ───

    fn load_in_active(&mut self, url: &str) -> bool {
        let Some(index) = self.tab_manager.active_index() else {
            log::warn!("No active tab to load {}", url);
            return false;
        };
        log::debug!("[LOAD] tab {} -> {}", index, url);
        if let Some(view) = self.tab_manager.view_mut(index) {
            if let Err(e) = view.load_url(url) {
                log::warn!("Failed to load {}: {}", url, e);
            }
        }
        if let Some(id) = self.tab_manager.get_tab(index).map(|t| t.id.clone()) {
            let _ = self.tab_manager.update_tab_url(&id, url);
        }
        self.address_bar = url.to_string();
        true
    }

    fn with_active_view<F>(&mut self, action: &str, f: F)
    where
        F: FnOnce(&mut V) -> Result<(), ViewError>,
    {
        let Some(index) = self.tab_manager.active_index() else {
            return;
        };
        if let Some(view) = self.tab_manager.view_mut(index) {
            if let Err(e) = f(view) {
                log::warn!("Tab {} failed to {}: {}", index, action, e);
            }
        }
    }

    fn set_view_visible(&mut self, index: usize, visible: bool) {
        if let Some(view) = self.tab_manager.view_mut(index) {
            if let Err(e) = view.set_visible(visible) {
                log::warn!("Failed to change visibility of tab {}: {}", index, e);
            }
        }
    }

    fn sync_address_bar(&mut self) {
        self.address_bar = self
            .tab_manager
            .get_active_tab()
            .map(|t| t.url.clone())
            .unwrap_or_default();
    }
}
