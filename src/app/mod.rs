mod event_handler;
mod generation;
mod pipeline;
mod state;

pub use event_handler::handle_backend_event;
pub use state::{AppState, BackendEvent};
