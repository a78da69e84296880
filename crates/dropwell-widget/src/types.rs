//! Shared types for the dropwell widget core.

use serde::{Deserialize, Serialize};

/// The attributes the widget consumes from a platform file object.
///
/// The platform's file-picker subsystem owns the file itself; the widget
/// only reads the name and byte count to render text. `size` is a `u64`,
/// so negative byte counts are unrepresentable rather than checked at
/// runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    /// File name as reported by the picker or drop payload.
    pub name: String,
    /// File size in bytes.
    pub size: u64,
}

impl SelectedFile {
    /// Create a new selected-file record.
    #[must_use]
    pub const fn new(name: String, size: u64) -> Self {
        Self { name, size }
    }
}

/// An input event for the widget, with its payload attached.
///
/// Replaces dispatch on DOM event names with an explicit tagged enum so
/// the selection and drag-highlight state machines stay auditable.
/// Payload-carrying variants ([`WidgetEvent::Select`],
/// [`WidgetEvent::Drop`]) snapshot the platform state at dispatch time
/// instead of reading it back out of the DOM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidgetEvent {
    /// The file-picker control's value changed. `None` means the control
    /// no longer holds a file (e.g., the picker was cancelled).
    Select(Option<SelectedFile>),
    /// A drag entered the drop zone.
    DragEnter,
    /// A drag is moving over the drop zone.
    DragOver,
    /// A drag left the drop zone without dropping.
    DragLeave,
    /// A drop landed on the drop zone with zero or more files.
    Drop(Vec<SelectedFile>),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn selected_file_new() {
        let file = SelectedFile::new("report.pdf".to_owned(), 2_500_000);
        assert_eq!(file.name, "report.pdf");
        assert_eq!(file.size, 2_500_000);
    }

    #[test]
    fn selected_file_equality() {
        let a = SelectedFile::new("a.txt".to_owned(), 10);
        let b = SelectedFile::new("a.txt".to_owned(), 10);
        let c = SelectedFile::new("a.txt".to_owned(), 11);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn selected_file_serde_round_trip() {
        let file = SelectedFile::new("photo.png".to_owned(), 0);
        let json = serde_json::to_string(&file).unwrap();
        let deserialized: SelectedFile = serde_json::from_str(&json).unwrap();
        assert_eq!(file, deserialized);
    }

    #[test]
    fn widget_event_serde_round_trip() {
        let events = vec![
            WidgetEvent::Select(Some(SelectedFile::new("a.txt".to_owned(), 1))),
            WidgetEvent::Select(None),
            WidgetEvent::DragEnter,
            WidgetEvent::DragOver,
            WidgetEvent::DragLeave,
            WidgetEvent::Drop(vec![SelectedFile::new("b.txt".to_owned(), 2)]),
            WidgetEvent::Drop(vec![]),
        ];
        for event in events {
            let json = serde_json::to_string(&event).unwrap();
            let deserialized: WidgetEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(event, deserialized);
        }
    }
}
