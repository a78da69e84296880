use dioxus::prelude::*;
use dropwell_io::{FileSelectZone, analytics};
use dropwell_widget::SelectedFile;

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Mounts the file-selection zone and keeps the last adopted file in a
/// signal for the footer line.
fn app() -> Element {
    let mut selection = use_signal(|| Option::<SelectedFile>::None);

    let on_select = move |file: SelectedFile| {
        analytics::track_selection();
        selection.set(Some(file));
    };

    rsx! {
        style { dangerous_inner_html: include_str!("../assets/page.css") }

        div { class: "page",
            h1 { "dropwell" }
            p { class: "tagline", "Choose a file or drag one onto the zone below." }

            FileSelectZone { on_select }

            if let Some(ref file) = selection() {
                p { class: "footer-note", "Ready to go: {file.name}" }
            }
        }
    }
}
