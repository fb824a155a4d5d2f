// Ripe Browser config path for Linux
// Config: ~/.config/ripe-browser

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for Ripe Browser on Linux.
/// Uses `$XDG_CONFIG_HOME/ripe-browser` if set, otherwise `~/.config/ripe-browser`.
pub fn get_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("ripe-browser"),
        _ => {
            let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
            PathBuf::from(home).join(".config").join("ripe-browser")
        }
    }
}
