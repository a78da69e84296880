//! Visual presets for the drop zone.
//!
//! The drop zone's entire visual output is two CSS attributes: a border
//! color and a background tint. [`ZoneStyle`] captures a snapshot of
//! both as a value type so the widget core can be tested without a DOM.

use serde::{Deserialize, Serialize};

/// Accent border color shown while dragging over the zone or after a
/// file is selected.
pub const ACCENT_COLOR: &str = "#4285f4";

/// Low-opacity tint of the accent color, shown only while dragging.
pub const ACCENT_TINT: &str = "rgba(66, 133, 244, 0.05)";

/// The drop zone's two style attributes as a named preset.
///
/// An empty string from [`ZoneStyle::border_color`] or
/// [`ZoneStyle::background`] means the attribute is cleared (the host
/// page's default styling shows through).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ZoneStyle {
    border_accented: bool,
    tinted: bool,
}

impl ZoneStyle {
    /// Initial preset: both attributes unset.
    pub const DEFAULT: Self = Self {
        border_accented: false,
        tinted: false,
    };

    /// Drag-over preset: accent border plus tinted background.
    pub const HIGHLIGHTED: Self = Self {
        border_accented: true,
        tinted: true,
    };

    /// Post-selection preset: accent border, no tint.
    pub const SELECTED: Self = Self {
        border_accented: true,
        tinted: false,
    };

    /// CSS border color for this preset, or `""` when cleared.
    #[must_use]
    pub const fn border_color(self) -> &'static str {
        if self.border_accented { ACCENT_COLOR } else { "" }
    }

    /// CSS background color for this preset, or `""` when cleared.
    #[must_use]
    pub const fn background(self) -> &'static str {
        if self.tinted { ACCENT_TINT } else { "" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_preset_clears_both_attributes() {
        assert_eq!(ZoneStyle::DEFAULT.border_color(), "");
        assert_eq!(ZoneStyle::DEFAULT.background(), "");
        assert_eq!(ZoneStyle::default(), ZoneStyle::DEFAULT);
    }

    #[test]
    fn highlighted_preset_sets_border_and_tint() {
        assert_eq!(ZoneStyle::HIGHLIGHTED.border_color(), "#4285f4");
        assert_eq!(
            ZoneStyle::HIGHLIGHTED.background(),
            "rgba(66, 133, 244, 0.05)"
        );
    }

    #[test]
    fn selected_preset_sets_border_only() {
        assert_eq!(ZoneStyle::SELECTED.border_color(), ACCENT_COLOR);
        assert_eq!(ZoneStyle::SELECTED.background(), "");
    }

    #[test]
    fn presets_are_distinct() {
        assert_ne!(ZoneStyle::DEFAULT, ZoneStyle::HIGHLIGHTED);
        assert_ne!(ZoneStyle::DEFAULT, ZoneStyle::SELECTED);
        assert_ne!(ZoneStyle::HIGHLIGHTED, ZoneStyle::SELECTED);
    }
}
