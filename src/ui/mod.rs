//! UI layer: host App, the `AcidWindow` widget, content children and colours.

pub mod acid_window;
pub mod app;
pub mod child;
pub mod children;
pub mod colors;
