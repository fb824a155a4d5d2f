use super::errors::ViewError;

/// The slice of an embedded web-engine view the browser drives.
///
/// Each tab owns exactly one view. Rendering, networking and the
/// back/forward history all live behind this trait.
pub trait PageView {
    fn load_url(&mut self, url: &str) -> Result<(), ViewError>;
    fn go_back(&mut self) -> Result<(), ViewError>;
    fn go_forward(&mut self) -> Result<(), ViewError>;
    fn reload(&mut self) -> Result<(), ViewError>;
    /// Only the active tab's view is shown.
    fn set_visible(&mut self, visible: bool) -> Result<(), ViewError>;
}
