// Ripe Browser state managers
// Managers handle stateful operations: tabs, website shortcuts, downloads.

pub mod download_manager;
pub mod shortcut_table;
pub mod tab_manager;
