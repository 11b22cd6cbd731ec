use std::path::PathBuf;

use gtk4::glib;

use crate::api::GenerateError;
use crate::config::Config;
use crate::control::ControlState;
use crate::ui::window::WindowWidgets;

/// Events sent from background tasks (and widget callbacks) to the GTK main
/// thread.
#[derive(Debug)]
pub enum BackendEvent {
    /// The trigger button was activated. What happens depends on the
    /// current `ControlState`.
    TriggerPressed,
    GenerationFinished { filename: String },
    GenerationFailed(GenerateError),
    DownloadFinished(PathBuf),
    DownloadFailed(String),
}

/// Central application state. Lives on the GTK main thread inside Rc<RefCell<>>.
pub struct AppState {
    pub control: ControlState,
    pub config: Config,
    pub tokio_rt: tokio::runtime::Runtime,
    pub backend_sender: async_channel::Sender<BackendEvent>,

    /// Pending delayed-reset timer scheduled when a download starts.
    pub reset_source: Option<glib::SourceId>,

    // UI handles
    pub window: Option<WindowWidgets>,
}

impl AppState {
    pub fn new(sender: async_channel::Sender<BackendEvent>) -> Self {
        let config = Config::load();
        let tokio_rt = tokio::runtime::Runtime::new()
            .expect("Failed to create tokio runtime");

        Self {
            control: ControlState::Idle,
            config,
            tokio_rt,
            backend_sender: sender,
            reset_source: None,
            window: None,
        }
    }
}

/// Helper to update the status label.
pub fn update_status(
    state: &std::rc::Rc<std::cell::RefCell<AppState>>,
    label_text: &str,
) {
    let s = state.borrow();
    if let Some(ref win) = s.window {
        win.status_label.set_text(label_text);
    }
}
