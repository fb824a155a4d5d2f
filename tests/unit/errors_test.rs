use ripe_browser::types::errors::*;

// === TabError Tests ===

#[test]
fn tab_error_not_found_display() {
    let err = TabError::NotFound("tab-123".to_string());
    assert_eq!(err.to_string(), "Tab not found: tab-123");
}

#[test]
fn tab_error_invalid_index_display() {
    let err = TabError::InvalidIndex(99);
    assert_eq!(err.to_string(), "Invalid tab index: 99");
}

#[test]
fn tab_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(TabError::NotFound("id".to_string()));
    assert!(err.source().is_none());
}

// === ShortcutError Tests ===

#[test]
fn shortcut_error_display_variants() {
    assert_eq!(
        ShortcutError::NotFound("MySpace".to_string()).to_string(),
        "Website shortcut not found: MySpace"
    );
    assert_eq!(
        ShortcutError::InvalidIndex(7).to_string(),
        "Invalid website shortcut index: 7"
    );
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("permission denied".to_string()).to_string(),
        "Settings I/O error: permission denied"
    );
    assert_eq!(
        SettingsError::SerializationError("malformed json".to_string()).to_string(),
        "Settings serialization error: malformed json"
    );
    assert_eq!(
        SettingsError::InvalidValue("bad url".to_string()).to_string(),
        "Invalid settings value: bad url"
    );
}

// === ViewError / DownloadError Tests ===

#[test]
fn view_error_display() {
    assert_eq!(
        ViewError::Engine("webview gone".to_string()).to_string(),
        "Web engine error: webview gone"
    );
}

#[test]
fn download_error_display() {
    assert_eq!(
        DownloadError::NotFound("https://example.com/a.zip".to_string()).to_string(),
        "Download not found: https://example.com/a.zip"
    );
}
