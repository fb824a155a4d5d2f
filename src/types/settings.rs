use serde::{Deserialize, Serialize};

use super::shortcut::WebsiteShortcut;

/// Top-level browser settings container.
///
/// Built once at startup; nothing here changes while the window runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BrowserSettings {
    pub window: WindowSettings,
    pub navigation: NavigationSettings,
    pub websites: Vec<WebsiteShortcut>,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            navigation: NavigationSettings::default(),
            websites: Self::default_websites(),
        }
    }
}

impl BrowserSettings {
    /// Returns the sites offered by the toolbar's website selector.
    pub fn default_websites() -> Vec<WebsiteShortcut> {
        vec![
            WebsiteShortcut::new("Google", "https://www.google.com"),
            WebsiteShortcut::new("Discord", "https://discord.com"),
            WebsiteShortcut::new("Spotify", "https://www.spotify.com"),
            WebsiteShortcut::new("Amazon", "https://www.amazon.com"),
            WebsiteShortcut::new("YouTube", "https://www.youtube.com"),
        ]
    }
}

/// Window title and initial geometry, in logical pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Ripe Browser".to_string(),
            x: 100,
            y: 100,
            width: 1000,
            height: 700,
        }
    }
}

/// Where new tabs start and where address-bar searches go.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavigationSettings {
    pub home_url: String,
    /// Prefix the encoded query is appended to.
    pub search_url: String,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            home_url: "https://www.google.com".to_string(),
            search_url: "https://www.google.com/search?q=".to_string(),
        }
    }
}
