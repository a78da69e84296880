//! dropwell-io: Browser I/O and Dioxus components for dropwell.
//!
//! Two ways to put the widget on a page:
//!
//! - [`FileSelectZone`], a Dioxus component for Dioxus-rendered pages.
//! - [`bind::install`], a raw web-sys binding that wires the widget to
//!   four existing DOM elements on server-rendered pages.
//!
//! Plus a lightweight analytics hook ([`analytics`]).

pub mod analytics;
pub mod bind;
pub mod components;

pub use bind::{BindError, WidgetElements};
pub use components::FileSelectZone;
