mod api;
mod app;
mod config;
mod control;
mod ui;

use std::cell::RefCell;
use std::rc::Rc;

use gtk4::prelude::*;
use libadwaita::prelude::*;

use app::{AppState, BackendEvent};

fn main() {
    env_logger::init();
    log::info!("Story Audio starting");

    let application = libadwaita::Application::builder()
        .application_id("com.github.story-audio")
        .build();

    application.connect_activate(on_activate);
    application.run();
}

fn on_activate(app: &libadwaita::Application) {
    // Async channel for backend → UI communication
    let (backend_tx, backend_rx) = async_channel::unbounded::<BackendEvent>();

    // Build app state
    let state = Rc::new(RefCell::new(AppState::new(backend_tx)));

    // Build UI
    let window = ui::window::build_window(app, &state.borrow().config.server_url);

    // Live character counter: mirror the story length on every edit
    {
        let counter = window.char_counter.clone();
        window.story_view.buffer().connect_changed(move |buffer| {
            let text = buffer.text(&buffer.start_iter(), &buffer.end_iter(), true);
            counter.set_text(&control::char_count(&text).to_string());
        });
    }

    // The trigger button goes through the event channel; what the press
    // does is decided by the current control state, not by rebinding.
    {
        let sender = state.borrow().backend_sender.clone();
        window.trigger_button.connect_clicked(move |_| {
            let _ = sender.try_send(BackendEvent::TriggerPressed);
        });
    }

    // Persist server URL edits
    {
        let state_clone = state.clone();
        window
            .server_row
            .connect_changed(move |row: &libadwaita::EntryRow| {
                let url = row.text().to_string();
                let mut s = state_clone.borrow_mut();
                s.config.server_url = url;
                if let Err(e) = s.config.save() {
                    log::warn!("Failed to save config: {e}");
                }
            });
    }

    // Store UI handles in state
    state.borrow_mut().window = Some(window);

    // Show the window
    state.borrow().window.as_ref().unwrap().window.present();

    // Attach backend event handler
    {
        let state_clone = state.clone();
        gtk4::glib::spawn_future_local(async move {
            while let Ok(event) = backend_rx.recv().await {
                app::handle_backend_event(&state_clone, event);
            }
        });
    }
}
