use std::fmt;

// === TabError ===

/// Errors related to tab management operations.
#[derive(Debug, PartialEq)]
pub enum TabError {
    /// Tab with the given ID was not found.
    NotFound(String),
    /// The provided tab index is out of bounds.
    InvalidIndex(usize),
}

impl fmt::Display for TabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabError::NotFound(id) => write!(f, "Tab not found: {}", id),
            TabError::InvalidIndex(index) => write!(f, "Invalid tab index: {}", index),
        }
    }
}

impl std::error::Error for TabError {}

// === ShortcutError ===

/// Errors related to the website shortcut table.
#[derive(Debug, PartialEq)]
pub enum ShortcutError {
    /// No website with the given label.
    NotFound(String),
    /// The provided selector index is out of bounds.
    InvalidIndex(usize),
}

impl fmt::Display for ShortcutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortcutError::NotFound(label) => {
                write!(f, "Website shortcut not found: {}", label)
            }
            ShortcutError::InvalidIndex(index) => {
                write!(f, "Invalid website shortcut index: {}", index)
            }
        }
    }
}

impl std::error::Error for ShortcutError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading settings.
    IoError(String),
    /// Failed to deserialize settings.
    SerializationError(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === ViewError ===

/// Errors reported by an embedded web-engine view.
#[derive(Debug)]
pub enum ViewError {
    /// The engine rejected or failed an operation.
    Engine(String),
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewError::Engine(msg) => write!(f, "Web engine error: {}", msg),
        }
    }
}

impl std::error::Error for ViewError {}

// === DownloadError ===

/// Errors related to download tracking.
#[derive(Debug, PartialEq)]
pub enum DownloadError {
    /// No in-progress download matches the given URL.
    NotFound(String),
}

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadError::NotFound(url) => write!(f, "Download not found: {}", url),
        }
    }
}

impl std::error::Error for DownloadError {}
