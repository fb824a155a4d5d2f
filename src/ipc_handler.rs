//! IPC handler for the Ripe Browser toolbar page.
//!
//! The toolbar (tab strip, navigation buttons, address bar, website selector)
//! is an HTML page that posts JSON messages shaped like `{"cmd": "...", ...}`.
//! `handle_message` turns them into `Browser` calls; `state_snapshot` builds
//! the JSON the page renders from.

use serde_json::{json, Value};

use crate::app::Browser;
use crate::managers::shortcut_table::ShortcutTableTrait;
use crate::types::errors::ViewError;
use crate::types::view::PageView;

/// Dispatch one toolbar message.
///
/// `new_view` builds the engine view for a new tab from the tab's ID.
/// Returns `Err(String)` for malformed messages and failed actions.
pub fn handle_message<V, F>(
    browser: &mut Browser<V>,
    message: &str,
    new_view: F,
) -> Result<(), String>
where
    V: PageView,
    F: FnOnce(&str) -> Result<V, ViewError>,
{
    let msg: Value = serde_json::from_str(message).map_err(|e| format!("invalid message: {}", e))?;
    let cmd = msg.get("cmd").and_then(|v| v.as_str()).ok_or("missing cmd")?;

    match cmd {
        "ui_ready" => Ok(()),

        // ─── Tabs ───
        "new_tab" => {
            browser.add_tab_with(new_view).map_err(|e| e.to_string())?;
            Ok(())
        }
        "close_tab" => {
            let index = index_param(&msg)?;
            browser.close_tab(index).map_err(|e| e.to_string())?;
            Ok(())
        }
        "select_tab" => {
            let index = index_param(&msg)?;
            browser.select_tab(index).map_err(|e| e.to_string())
        }

        // ─── Navigation ───
        "navigate" => {
            let text = msg.get("text").and_then(|v| v.as_str()).ok_or("missing text")?;
            browser.submit_address(text);
            Ok(())
        }
        "select_website" => {
            let index = index_param(&msg)?;
            browser
                .navigate_to_selected_website(index)
                .map(|_| ())
                .map_err(|e| e.to_string())
        }
        "back" => {
            browser.go_back();
            Ok(())
        }
        "forward" => {
            browser.go_forward();
            Ok(())
        }
        "reload" => {
            browser.reload();
            Ok(())
        }
        "home" => {
            browser.go_home();
            Ok(())
        }

        other => Err(format!("unknown command: {}", other)),
    }
}

fn index_param(msg: &Value) -> Result<usize, String> {
    msg.get("index")
        .and_then(|v| v.as_u64())
        .map(|i| i as usize)
        .ok_or_else(|| "missing index".to_string())
}

/// Everything the toolbar page needs to redraw itself.
pub fn state_snapshot<V: PageView>(browser: &Browser<V>) -> Value {
    let tabs: Vec<Value> = browser
        .tabs()
        .iter()
        .map(|t| json!({"id": t.id, "title": t.title, "url": t.url}))
        .collect();
    json!({
        "tabs": tabs,
        "active": browser.active_index(),
        "address": browser.address_text(),
        "websites": browser.shortcuts().labels(),
    })
}

/// Script that hands a snapshot to the toolbar page's renderer.
pub fn render_script(snapshot: &Value) -> String {
    format!("if(window.__ripe_render)window.__ripe_render({})", snapshot)
}
