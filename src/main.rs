//! Ripe Browser: a small tabbed web browser shell around the system webview.
//!
//! Entry point: loads settings and opens the browser window.
//! When built without the `gui` feature, runs a console demo that drives the
//! browser controller with views that only log what they are asked to do.

use ripe_browser::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use ripe_browser::types::settings::BrowserSettings;

fn load_settings() -> BrowserSettings {
    let mut engine = SettingsEngine::new(None);
    match engine.load() {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!(
                "Ignoring settings file {}: {}",
                engine.get_config_path(),
                e
            );
            BrowserSettings::default()
        }
    }
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

#[cfg(feature = "gui")]
fn main() {
    init_logging();
    let settings = load_settings();
    if let Err(e) = ripe_browser::ui::webview_app::run(settings) {
        log::error!("Failed to start Ripe Browser: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn main() {
    init_logging();
    println!();
    println!("  Ripe Browser v{} (console demo)", env!("CARGO_PKG_VERSION"));
    println!();
    demo::run(load_settings());
}

#[cfg(not(feature = "gui"))]
mod demo {
    use ripe_browser::app::{Browser, CloseOutcome};
    use ripe_browser::types::errors::ViewError;
    use ripe_browser::types::settings::BrowserSettings;
    use ripe_browser::types::view::PageView;

    /// A view that prints every request instead of rendering.
    struct ConsoleView {
        name: usize,
    }

    impl PageView for ConsoleView {
        fn load_url(&mut self, url: &str) -> Result<(), ViewError> {
            println!("    [view {}] load {}", self.name, url);
            Ok(())
        }

        fn go_back(&mut self) -> Result<(), ViewError> {
            println!("    [view {}] back", self.name);
            Ok(())
        }

        fn go_forward(&mut self) -> Result<(), ViewError> {
            println!("    [view {}] forward", self.name);
            Ok(())
        }

        fn reload(&mut self) -> Result<(), ViewError> {
            println!("    [view {}] reload", self.name);
            Ok(())
        }

        fn set_visible(&mut self, visible: bool) -> Result<(), ViewError> {
            println!("    [view {}] visible = {}", self.name, visible);
            Ok(())
        }
    }

    pub fn run(settings: BrowserSettings) {
        let mut browser: Browser<ConsoleView> = Browser::new(settings);

        println!("  Open the first tab");
        browser.add_tab(ConsoleView { name: 0 });

        println!("  Search from the address bar");
        let url = browser.submit_address("open source rewrite");
        println!("  -> {:?}", url);

        println!("  Pick YouTube from the website selector");
        let _ = browser.navigate_to_website("YouTube");

        println!("  Open a second tab, go back in it, then switch to the first");
        browser.add_tab(ConsoleView { name: 1 });
        browser.go_back();
        let _ = browser.select_tab(0);
        println!("  Address bar shows: {}", browser.address_text());

        println!("  Close the second tab");
        let _ = browser.close_tab(1);
        println!("  Tabs open: {}", browser.tab_count());

        println!("  Close the last tab");
        if let Ok(CloseOutcome::Terminated) = browser.close_tab(0) {
            println!("  Window terminated: running = {}", browser.is_running());
        }
        println!();
    }
}
