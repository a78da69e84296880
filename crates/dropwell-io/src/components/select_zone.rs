//! File-selection drop zone component with a file picker.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;

use dropwell_widget::{FileSelectionWidget, SelectedFile, WidgetEvent};

/// Props for the [`FileSelectZone`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileSelectZoneProps {
    /// `accept` attribute forwarded verbatim to the file input
    /// (e.g. `".pdf"`).  Presentational only -- the widget displays
    /// whatever file it is handed.
    #[props(default)]
    pub accept: Option<String>,

    /// Called with the adopted file after a picker selection or drop.
    pub on_select: EventHandler<SelectedFile>,
}

/// A drag-and-drop zone with a file picker label.
///
/// Owns a [`FileSelectionWidget`] and translates every DOM event into
/// a [`WidgetEvent`] before rendering. The status line and the zone's
/// border/background are read back out of the widget, so the display
/// always matches the state machine.
#[component]
pub fn FileSelectZone(props: FileSelectZoneProps) -> Element {
    let mut widget = use_signal(FileSelectionWidget::new);
    let on_select = props.on_select;

    // Snapshot a Dioxus file handle into the widget's owned record.
    let snapshot =
        |file: &FileData| -> SelectedFile { SelectedFile::new(file.name(), file.size()) };

    let handle_change = move |evt: FormEvent| {
        let selected = evt.files().first().map(snapshot);
        widget.write().apply(WidgetEvent::Select(selected.clone()));
        if let Some(file) = selected {
            on_select.call(file);
        }
    };

    let handle_drag_enter = move |evt: DragEvent| {
        evt.prevent_default();
        evt.stop_propagation();
        widget.write().apply(WidgetEvent::DragEnter);
    };

    let handle_drag_over = move |evt: DragEvent| {
        evt.prevent_default();
        evt.stop_propagation();
        widget.write().apply(WidgetEvent::DragOver);
    };

    let handle_drag_leave = move |evt: DragEvent| {
        evt.prevent_default();
        evt.stop_propagation();
        widget.write().apply(WidgetEvent::DragLeave);
    };

    let handle_drop = move |evt: DragEvent| {
        evt.prevent_default();
        evt.stop_propagation();
        let files: Vec<SelectedFile> = evt.files().iter().map(snapshot).collect();
        let adopted = files.first().cloned();
        widget.write().apply(WidgetEvent::Drop(files));
        if let Some(file) = adopted {
            on_select.call(file);
        }
    };

    let zone = widget.read().zone_style();
    let info = widget.read().info_text();

    rsx! {
        div {
            class: "file-upload",
            ondragenter: handle_drag_enter,
            ondragover: handle_drag_over,
            ondragleave: handle_drag_leave,
            ondrop: handle_drop,

            label {
                class: "file-label",
                border_color: "{zone.border_color()}",
                background_color: "{zone.background()}",

                input {
                    r#type: "file",
                    class: "hidden",
                    accept: props.accept,
                    onchange: handle_change,
                }
                "Choose a file or drag it here"
            }

            p { class: "file-info", "{info}" }
        }
    }
}
