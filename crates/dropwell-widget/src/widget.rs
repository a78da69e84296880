//! The file-selection widget state machine.

use crate::format::format_file_size;
use crate::style::ZoneStyle;
use crate::types::{SelectedFile, WidgetEvent};

/// Status line shown while the picker holds no file.
const NO_FILE_TEXT: &str = "No file selected";

/// State of one file-selection drop zone.
///
/// Constructed once per widget and driven entirely through
/// [`FileSelectionWidget::apply`]. Two independent machines live here:
///
/// - **Selection display**: `Select` and `Drop` events replace the
///   current selection; the status text is derived from it on demand,
///   so re-rendering the same selection is idempotent.
/// - **Drag highlight**: two states only. `DragEnter`/`DragOver` move
///   the zone to [`ZoneStyle::HIGHLIGHTED`]; `DragLeave`/`Drop` move it
///   back to [`ZoneStyle::DEFAULT`]. Picker selection bypasses this
///   machine and sets the border preset directly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileSelectionWidget {
    selection: Option<SelectedFile>,
    zone: ZoneStyle,
}

impl FileSelectionWidget {
    /// Create a widget with no selection and default styling.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selection: None,
            zone: ZoneStyle::DEFAULT,
        }
    }

    /// Dispatch one event through the widget.
    pub fn apply(&mut self, event: WidgetEvent) {
        match event {
            WidgetEvent::Select(Some(file)) => {
                self.selection = Some(file);
                self.zone = ZoneStyle::SELECTED;
            }
            WidgetEvent::Select(None) => {
                self.selection = None;
                self.zone = ZoneStyle::DEFAULT;
            }
            WidgetEvent::DragEnter | WidgetEvent::DragOver => {
                self.zone = ZoneStyle::HIGHLIGHTED;
            }
            WidgetEvent::DragLeave => {
                self.zone = ZoneStyle::DEFAULT;
            }
            WidgetEvent::Drop(files) => {
                // Unhighlight is shared with DragLeave; adopting the
                // first dropped file updates the text without a second
                // style transition.
                self.zone = ZoneStyle::DEFAULT;
                if let Some(file) = files.into_iter().next() {
                    self.selection = Some(file);
                }
            }
        }
    }

    /// The currently selected file, if any.
    #[must_use]
    pub const fn selection(&self) -> Option<&SelectedFile> {
        self.selection.as_ref()
    }

    /// Status text for the info element, derived from the selection.
    #[must_use]
    pub fn info_text(&self) -> String {
        self.selection.as_ref().map_or_else(
            || NO_FILE_TEXT.to_owned(),
            |file| {
                format!(
                    "Selected file: {} ({})",
                    file.name,
                    format_file_size(file.size)
                )
            },
        )
    }

    /// Current visual preset for the drop zone.
    #[must_use]
    pub const fn zone_style(&self) -> ZoneStyle {
        self.zone
    }
}
