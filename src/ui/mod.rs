//! Ripe Browser UI layer.
//!
//! Uses `wry` for cross-platform WebView rendering:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The toolbar is itself an HTML page in its own webview; each tab gets a
//! child webview below it. Communication between the toolbar and the Rust
//! side uses wry IPC.

pub mod webview_app;
