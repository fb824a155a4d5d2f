//! Address bar input handling for Ripe Browser.
//!
//! Turns whatever the user typed into the URL the active tab should load:
//! text that already carries a URL scheme is used as is, anything else
//! becomes a web search.

use url::form_urlencoded;
use url::Url;

/// What a piece of address-bar text resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressInput {
    /// Text parsed as an absolute URL; loaded unchanged.
    Url(String),
    /// Text treated as a search query; holds the full search URL.
    Search(String),
}

impl AddressInput {
    pub fn url(&self) -> &str {
        match self {
            AddressInput::Url(u) | AddressInput::Search(u) => u,
        }
    }

    pub fn into_url(self) -> String {
        match self {
            AddressInput::Url(u) | AddressInput::Search(u) => u,
        }
    }
}

/// Resolves raw address-bar text against the search URL prefix.
///
/// Returns `None` for blank input.
pub fn resolve_input(text: &str, search_url: &str) -> Option<AddressInput> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if has_scheme(trimmed) {
        return Some(AddressInput::Url(trimmed.to_string()));
    }
    Some(AddressInput::Search(format!("{}{}", search_url, encode_query(trimmed))))
}

/// True when `text` parses as an absolute URL, which always has a scheme.
pub fn has_scheme(text: &str) -> bool {
    match Url::parse(text) {
        Ok(url) => !url.scheme().is_empty(),
        Err(_) => false,
    }
}

/// Words are form-encoded one by one and joined with `+`, so runs of
/// whitespace collapse into a single separator.
pub fn encode_query(query: &str) -> String {
    query
        .split_whitespace()
        .map(|word| form_urlencoded::byte_serialize(word.as_bytes()).collect::<String>())
        .collect::<Vec<_>>()
        .join("+")
}
