use gtk4::prelude::*;
use libadwaita::prelude::*;

use crate::api::{MODELS, VOICES};

pub const GENERATE_LABEL: &str = "Generate Audio";
pub const DOWNLOAD_LABEL: &str = "Download MP3";

/// Handles returned from building the main window.
pub struct WindowWidgets {
    pub window: libadwaita::ApplicationWindow,
    pub story_view: gtk4::TextView,
    pub char_counter: gtk4::Label,
    pub voice_drop: gtk4::DropDown,
    pub model_drop: gtk4::DropDown,
    pub instruction_row: libadwaita::EntryRow,
    pub server_row: libadwaita::EntryRow,
    pub trigger_button: gtk4::Button,
    pub button_label: gtk4::Label,
    pub spinner: gtk4::Spinner,
    pub elapsed_label: gtk4::Label,
    pub status_label: gtk4::Label,
}

/// Build the main window.
pub fn build_window(
    app: &libadwaita::Application,
    initial_server_url: &str,
) -> WindowWidgets {
    let window = libadwaita::ApplicationWindow::builder()
        .application(app)
        .title("Story Audio")
        .default_width(520)
        .default_height(640)
        .build();

    let css_provider = gtk4::CssProvider::new();
    css_provider.load_from_string(
        r#"
        button.download-ready {
            background-color: #2e8b57;
            color: white;
        }
        .char-counter {
            font-family: monospace;
        }
        "#,
    );
    gtk4::style_context_add_provider_for_display(
        &gtk4::gdk::Display::default().unwrap(),
        &css_provider,
        gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );

    let toolbar_view = libadwaita::ToolbarView::new();
    toolbar_view.add_top_bar(&libadwaita::HeaderBar::new());

    let content = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    content.set_margin_start(16);
    content.set_margin_end(16);
    content.set_margin_top(12);
    content.set_margin_bottom(12);

    // --- Story group ---
    let story_group = libadwaita::PreferencesGroup::new();
    story_group.set_title("Story");

    let story_view = gtk4::TextView::new();
    story_view.set_wrap_mode(gtk4::WrapMode::WordChar);
    story_view.set_top_margin(8);
    story_view.set_bottom_margin(8);
    story_view.set_left_margin(8);
    story_view.set_right_margin(8);

    let story_scroll = gtk4::ScrolledWindow::builder()
        .hscrollbar_policy(gtk4::PolicyType::Never)
        .min_content_height(180)
        .child(&story_view)
        .build();
    story_scroll.add_css_class("card");
    story_group.add(&story_scroll);

    let counter_box = gtk4::Box::new(gtk4::Orientation::Horizontal, 4);
    counter_box.set_halign(gtk4::Align::End);
    counter_box.set_margin_top(4);
    let char_counter = gtk4::Label::new(Some("0"));
    char_counter.add_css_class("char-counter");
    char_counter.add_css_class("dim-label");
    let counter_suffix = gtk4::Label::new(Some("characters"));
    counter_suffix.add_css_class("dim-label");
    counter_box.append(&char_counter);
    counter_box.append(&counter_suffix);
    story_group.add(&counter_box);

    content.append(&story_group);
    content.append(&gtk4::Separator::new(gtk4::Orientation::Horizontal));

    // --- Options group ---
    let options_group = libadwaita::PreferencesGroup::new();
    options_group.set_title("Options");
    options_group.set_margin_top(12);

    let voice_row = libadwaita::ActionRow::builder().title("Voice").build();
    let voice_drop = gtk4::DropDown::from_strings(VOICES);
    voice_drop.set_valign(gtk4::Align::Center);
    voice_row.add_suffix(&voice_drop);
    options_group.add(&voice_row);

    let model_row = libadwaita::ActionRow::builder().title("Model").build();
    let model_drop = gtk4::DropDown::from_strings(MODELS);
    model_drop.set_valign(gtk4::Align::Center);
    model_row.add_suffix(&model_drop);
    options_group.add(&model_row);

    let instruction_row = libadwaita::EntryRow::builder()
        .title("Custom instruction (optional)")
        .build();
    options_group.add(&instruction_row);

    content.append(&options_group);
    content.append(&gtk4::Separator::new(gtk4::Orientation::Horizontal));

    // --- Server group ---
    let server_group = libadwaita::PreferencesGroup::new();
    server_group.set_title("Server");
    server_group.set_margin_top(12);

    let server_row = libadwaita::EntryRow::builder()
        .title("Server URL")
        .text(initial_server_url)
        .build();
    server_group.add(&server_row);

    content.append(&server_group);

    // --- Trigger button: label and spinner are mutually exclusive ---
    let button_box = gtk4::Box::new(gtk4::Orientation::Horizontal, 8);
    button_box.set_halign(gtk4::Align::Center);
    let button_label = gtk4::Label::new(Some(GENERATE_LABEL));
    let spinner = gtk4::Spinner::new();
    spinner.set_visible(false);
    button_box.append(&button_label);
    button_box.append(&spinner);

    let trigger_button = gtk4::Button::builder()
        .child(&button_box)
        .margin_top(16)
        .build();
    trigger_button.add_css_class("pill");
    trigger_button.add_css_class("suggested-action");
    content.append(&trigger_button);

    let elapsed_label = gtk4::Label::new(None);
    elapsed_label.add_css_class("dim-label");
    elapsed_label.set_margin_top(8);
    content.append(&elapsed_label);

    let status_label = gtk4::Label::new(Some("Idle"));
    status_label.add_css_class("dim-label");
    status_label.set_margin_top(4);
    status_label.set_ellipsize(gtk4::pango::EllipsizeMode::Middle);
    content.append(&status_label);

    let scrolled = gtk4::ScrolledWindow::builder()
        .hscrollbar_policy(gtk4::PolicyType::Never)
        .child(&content)
        .build();
    toolbar_view.set_content(Some(&scrolled));
    window.set_content(Some(&toolbar_view));

    WindowWidgets {
        window,
        story_view,
        char_counter,
        voice_drop,
        model_drop,
        instruction_row,
        server_row,
        trigger_button,
        button_label,
        spinner,
        elapsed_label,
        status_label,
    }
}
