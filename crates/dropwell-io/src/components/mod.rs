//! Dioxus UI components for dropwell.

mod select_zone;

pub use select_zone::FileSelectZone;
