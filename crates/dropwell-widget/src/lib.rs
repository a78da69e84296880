//! dropwell-widget: Pure file-selection widget core (sans-IO).
//!
//! Models the state of a browser drop-zone widget: which file is
//! currently selected, what the status line should read, and which
//! visual preset the drop zone should wear.
//!
//! This crate has **no browser dependencies** -- events arrive as
//! [`WidgetEvent`] values carrying their own payloads, and rendering is
//! exposed as plain data ([`FileSelectionWidget::info_text`] and
//! [`FileSelectionWidget::zone_style`]). All DOM interaction lives in
//! `dropwell-io`.

pub mod format;
pub mod style;
pub mod types;
pub mod widget;

pub use format::format_file_size;
pub use style::{ACCENT_COLOR, ACCENT_TINT, ZoneStyle};
pub use types::{SelectedFile, WidgetEvent};
pub use widget::FileSelectionWidget;
