use std::cell::RefCell;
use std::rc::Rc;

use gtk4::prelude::*;

use super::generation::{reset_control, start_download, start_generation};
use super::state::{update_status, AppState, BackendEvent};
use crate::api::GenerateError;
use crate::control::{format_elapsed, ControlState};
use crate::ui::alert::show_error;
use crate::ui::window::DOWNLOAD_LABEL;

/// Handle a backend event. This is the core state machine.
pub fn handle_backend_event(state: &Rc<RefCell<AppState>>, event: BackendEvent) {
    match event {
        BackendEvent::TriggerPressed => {
            let control = state.borrow().control.clone();
            match control {
                ControlState::Idle => start_generation(state),
                ControlState::Busy { .. } => {
                    // Unreachable through the UI, the button is disabled.
                    log::warn!("Trigger pressed while busy, ignoring");
                }
                ControlState::ReadyToDownload { .. } => start_download(state),
            }
        }
        BackendEvent::GenerationFinished { filename } => {
            log::info!("Generation finished: {filename}");
            let elapsed = state.borrow_mut().control.finish(filename);
            let elapsed = match elapsed {
                Some(elapsed) => elapsed,
                None => {
                    log::warn!("Response arrived with no request outstanding");
                    return;
                }
            };

            {
                let s = state.borrow();
                if let Some(ref win) = s.window {
                    win.spinner.stop();
                    win.spinner.set_visible(false);
                    win.button_label.set_text(DOWNLOAD_LABEL);
                    win.button_label.set_visible(true);
                    win.trigger_button.add_css_class("download-ready");
                    win.trigger_button.set_sensitive(true);
                    win.elapsed_label
                        .set_text(&format!("Generation took: {}", format_elapsed(elapsed)));
                }
            }
            update_status(state, "Ready - press the button to download");
        }
        BackendEvent::GenerationFailed(err) => {
            log::error!("Generation failed: {err}");
            let message = match err {
                GenerateError::Server(msg) => format!("Error: {msg}"),
                GenerateError::Transport(_) => {
                    "Connection error! Check that the server is running.".into()
                }
            };
            if let Some(ref win) = state.borrow().window {
                show_error(&win.window, &message);
            }
            reset_control(state);
        }
        BackendEvent::DownloadFinished(path) => {
            log::info!("Download finished: {}", path.display());
            update_status(state, &format!("Saved to {}", path.display()));
        }
        BackendEvent::DownloadFailed(msg) => {
            log::error!("Download failed: {msg}");
            if let Some(ref win) = state.borrow().window {
                show_error(&win.window, &format!("Download failed: {msg}"));
            }
            reset_control(state);
        }
    }
}
