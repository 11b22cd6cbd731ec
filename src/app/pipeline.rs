use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use super::state::{AppState, BackendEvent};
use crate::api::GenerateRequest;

/// Dispatch the generation request on the tokio runtime.
pub fn dispatch_generation(state: &Rc<RefCell<AppState>>, request: GenerateRequest) {
    let s = state.borrow();
    let server_url = s.config.server_url.clone();
    let sender = s.backend_sender.clone();

    s.tokio_rt.spawn(async move {
        match crate::api::generate(&server_url, &request).await {
            Ok(filename) => {
                let _ = sender
                    .send(BackendEvent::GenerationFinished { filename })
                    .await;
            }
            Err(e) => {
                let _ = sender.send(BackendEvent::GenerationFailed(e)).await;
            }
        }
    });
}

/// Dispatch the artifact download on the tokio runtime.
pub fn dispatch_download(state: &Rc<RefCell<AppState>>, filename: String) {
    let s = state.borrow();
    let server_url = s.config.server_url.clone();
    let sender = s.backend_sender.clone();
    let dest_dir = download_dir();

    s.tokio_rt.spawn(async move {
        match crate::api::download(&server_url, &filename, &dest_dir).await {
            Ok(path) => {
                let _ = sender.send(BackendEvent::DownloadFinished(path)).await;
            }
            Err(e) => {
                let _ = sender
                    .send(BackendEvent::DownloadFailed(e.to_string()))
                    .await;
            }
        }
    });
}

/// Where downloaded artifacts land: ~/Downloads, or the working directory
/// if the platform has no download folder.
fn download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}
