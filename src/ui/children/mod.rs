//! Content children bundled with the crate, each implementing `PanelChild`.

pub mod content_label;
