//! WebView-based browser window using `wry` + `tao`.
//!
//! Architecture:
//! - One toolbar webview across the top of the window renders the tab strip,
//!   navigation buttons, address bar and website selector from
//!   `resources/ui/toolbar.html`.
//! - Every tab owns a child content webview below the toolbar; only the
//!   active tab's webview is visible.
//! - IPC from the toolbar (JS → Rust) goes through `window.ipc.postMessage()`.
//!   Webview callbacks never touch the `Browser` directly: they forward a
//!   `UserEvent` to the event loop, which owns it.
//! - Downloads are decided inside the engine callback with a modal `rfd`
//!   save dialog, opened before the shared download log is locked.

use std::error::Error;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopProxy};
use tao::window::{Window, WindowBuilder};
use wry::dpi::{LogicalPosition, LogicalSize};
use wry::{PageLoadEvent, Rect, WebView, WebViewBuilder};

use crate::app::Browser;
use crate::ipc_handler;
use crate::managers::download_manager::{
    prompt_save_path, DownloadManager, DownloadManagerTrait, SaveDialog,
};
use crate::types::download::DownloadRequest;
use crate::types::errors::ViewError;
use crate::types::settings::BrowserSettings;
use crate::types::view::PageView;

const TOOLBAR_HTML: &str = include_str!("../../resources/ui/toolbar.html");

/// Height of the tab strip plus the toolbar row, in logical pixels.
const TOOLBAR_HEIGHT: f64 = 84.0;

#[derive(Debug)]
enum UserEvent {
    /// Raw JSON message from the toolbar page.
    Toolbar(String),
    UrlChanged { tab_id: String, url: String },
    TitleChanged { tab_id: String, title: String },
    /// A page asked for a new window; it is loaded in the active tab instead.
    OpenInActiveTab(String),
}

// ─── Engine views ───

/// A tab's content webview.
pub struct WryTabView {
    webview: WebView,
}

impl WryTabView {
    fn set_bounds(&self, bounds: Rect) -> Result<(), ViewError> {
        self.webview.set_bounds(bounds).map_err(engine_error)
    }
}

fn engine_error(e: wry::Error) -> ViewError {
    ViewError::Engine(e.to_string())
}

impl PageView for WryTabView {
    fn load_url(&mut self, url: &str) -> Result<(), ViewError> {
        self.webview.load_url(url).map_err(engine_error)
    }

    fn go_back(&mut self) -> Result<(), ViewError> {
        self.webview.evaluate_script("history.back()").map_err(engine_error)
    }

    fn go_forward(&mut self) -> Result<(), ViewError> {
        self.webview.evaluate_script("history.forward()").map_err(engine_error)
    }

    fn reload(&mut self) -> Result<(), ViewError> {
        self.webview.evaluate_script("location.reload()").map_err(engine_error)
    }

    fn set_visible(&mut self, visible: bool) -> Result<(), ViewError> {
        self.webview.set_visible(visible).map_err(engine_error)
    }
}

/// Native "Save File" prompt.
pub struct RfdSaveDialog;

impl SaveDialog for RfdSaveDialog {
    fn pick_save_path(&self, suggested_filename: &str) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Save File")
            .set_file_name(suggested_filename)
            .save_file()
    }
}

// ─── Layout ───

fn toolbar_rect(window: &Window) -> Rect {
    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    Rect {
        position: LogicalPosition::new(0.0, 0.0).into(),
        size: LogicalSize::new(size.width, TOOLBAR_HEIGHT).into(),
    }
}

fn content_rect(window: &Window) -> Rect {
    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    Rect {
        position: LogicalPosition::new(0.0, TOOLBAR_HEIGHT).into(),
        size: LogicalSize::new(size.width, (size.height - TOOLBAR_HEIGHT).max(0.0)).into(),
    }
}

fn layout(window: &Window, toolbar: &WebView, browser: &mut Browser<WryTabView>) {
    if let Err(e) = toolbar.set_bounds(toolbar_rect(window)) {
        log::warn!("Failed to resize toolbar: {}", e);
    }
    browser.for_each_view(|view| {
        if let Err(e) = view.set_bounds(content_rect(window)) {
            log::warn!("Failed to resize tab view: {}", e);
        }
    });
}

fn render(toolbar: &WebView, browser: &Browser<WryTabView>) {
    let script = ipc_handler::render_script(&ipc_handler::state_snapshot(browser));
    if let Err(e) = toolbar.evaluate_script(&script) {
        log::warn!("Failed to update toolbar: {}", e);
    }
}

// ─── Tab view construction ───

fn build_tab_view(
    window: &Window,
    tab_id: &str,
    proxy: &EventLoopProxy<UserEvent>,
    downloads: &Arc<Mutex<DownloadManager>>,
) -> Result<WryTabView, ViewError> {
    let load_proxy = proxy.clone();
    let title_proxy = proxy.clone();
    let nw_proxy = proxy.clone();
    let load_id = tab_id.to_string();
    let title_id = tab_id.to_string();
    let start_downloads = downloads.clone();
    let done_downloads = downloads.clone();

    let webview = WebViewBuilder::new()
        .with_bounds(content_rect(window))
        .with_visible(false)
        .with_devtools(cfg!(debug_assertions))
        .with_on_page_load_handler(move |event, url| {
            if let PageLoadEvent::Finished = event {
                let _ = load_proxy.send_event(UserEvent::UrlChanged {
                    tab_id: load_id.clone(),
                    url,
                });
            }
        })
        .with_document_title_changed_handler(move |title| {
            let _ = title_proxy.send_event(UserEvent::TitleChanged {
                tab_id: title_id.clone(),
                title,
            });
        })
        .with_new_window_req_handler(move |url, _features| {
            log::debug!("[NW] {}", url);
            let _ = nw_proxy.send_event(UserEvent::OpenInActiveTab(url));
            wry::NewWindowResponse::Deny
        })
        .with_download_started_handler(move |url, path| {
            let mut request = DownloadRequest::new(&url, path.clone());
            // The modal prompt spins a nested run loop that can re-enter the
            // download callbacks, so the log must not be locked while it is open.
            if !prompt_save_path(&mut request, &RfdSaveDialog) {
                return false;
            }
            match start_downloads.lock() {
                Ok(mut mgr) => {
                    mgr.record_accepted(&request);
                }
                Err(e) => log::error!("Download log unavailable: {}", e),
            }
            if let Some(chosen) = request.path() {
                *path = chosen.to_path_buf();
            }
            true
        })
        .with_download_completed_handler(move |url, path, success| {
            if let Ok(mut mgr) = done_downloads.lock() {
                match mgr.complete_download(&url, path.as_deref(), success) {
                    Ok(()) if success => log::info!("Download finished: {}", url),
                    Ok(()) => log::warn!("Download failed: {}", url),
                    Err(e) => log::debug!("Untracked download completion: {}", e),
                }
            }
        })
        .build_as_child(window)
        .map_err(engine_error)?;

    Ok(WryTabView { webview })
}

// ─── Main entry point ───

pub fn run(settings: BrowserSettings) -> Result<(), Box<dyn Error>> {
    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title(settings.window.title.as_str())
        .with_position(tao::dpi::LogicalPosition::new(settings.window.x, settings.window.y))
        .with_inner_size(tao::dpi::LogicalSize::new(
            settings.window.width,
            settings.window.height,
        ))
        .build(&event_loop)?;

    let ipc_proxy = proxy.clone();
    let toolbar = WebViewBuilder::new()
        .with_html(TOOLBAR_HTML)
        .with_bounds(toolbar_rect(&window))
        .with_devtools(cfg!(debug_assertions))
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body();
            log::debug!("[IPC] {}", body.chars().take(200).collect::<String>());
            let _ = ipc_proxy.send_event(UserEvent::Toolbar(body.clone()));
        })
        .build_as_child(&window)?;

    let downloads = Arc::new(Mutex::new(DownloadManager::new()));
    let mut browser: Browser<WryTabView> = Browser::new(settings);
    browser.add_tab_with(|id| build_tab_view(&window, id, &proxy, &downloads))?;

    log::info!("Ripe Browser window ready");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                browser.terminate();
            }

            Event::WindowEvent {
                event: WindowEvent::Resized(_),
                ..
            } => {
                layout(&window, &toolbar, &mut browser);
            }

            Event::UserEvent(user_event) => {
                match user_event {
                    UserEvent::Toolbar(message) => {
                        let result = ipc_handler::handle_message(&mut browser, &message, |id| {
                            build_tab_view(&window, id, &proxy, &downloads)
                        });
                        if let Err(e) = result {
                            log::warn!("Toolbar command failed: {}", e);
                        }
                    }
                    UserEvent::UrlChanged { tab_id, url } => {
                        log::debug!("[NAV] {} {}", tab_id, url);
                        let _ = browser.on_url_changed(&tab_id, &url);
                    }
                    UserEvent::TitleChanged { tab_id, title } => {
                        let _ = browser.on_title_changed(&tab_id, &title);
                    }
                    UserEvent::OpenInActiveTab(url) => {
                        browser.submit_address(&url);
                    }
                }
                render(&toolbar, &browser);
            }

            _ => {}
        }

        if !browser.is_running() {
            log::info!("Shutting down");
            *control_flow = ControlFlow::Exit;
        }
    });
}
