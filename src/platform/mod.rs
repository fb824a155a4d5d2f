// Ripe Browser platform abstraction
// Locates the per-user configuration directory on Windows, macOS, and Linux.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory for Ripe Browser.
///
/// - **Linux**: `~/.config/ripe-browser` (or `$XDG_CONFIG_HOME/ripe-browser`)
/// - **macOS**: `~/Library/Application Support/RipeBrowser`
/// - **Windows**: `%APPDATA%/RipeBrowser`
/// - elsewhere: `./ripe-browser`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        PathBuf::from("ripe-browser")
    }
}
