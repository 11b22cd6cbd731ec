use gtk4::prelude::*;
use libadwaita::prelude::*;

/// Show a blocking error dialog with a single OK response.
pub fn show_error(parent: &libadwaita::ApplicationWindow, body: &str) {
    let dialog = libadwaita::AlertDialog::builder()
        .heading("Story Audio")
        .body(body)
        .build();
    dialog.add_response("ok", "OK");
    dialog.set_default_response(Some("ok"));

    let parent_widget: Option<&gtk4::Widget> = Some(parent.upcast_ref());
    dialog.choose(parent_widget, None::<&gtk4::gio::Cancellable>, |_response_id| {});
}
