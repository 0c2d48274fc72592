//! The `PanelChild` trait for content placed inside a panel's content region.
//!
//! To add new content to a panel:
//! 1. Create a new file in `ui/children/`.
//! 2. Implement `PanelChild` for your struct.
//! 3. Pass `Box::new(MyChild::new(..))` to `AcidWindow::add_child`.

use eframe::egui;

/// Any drawable hosted by a panel's content region.
///
/// The panel calls `show` every frame with a `Ui` whose `max_rect` is the
/// content region, in the order the children were added.
pub trait PanelChild {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Draw the child inside the content region.
    fn show(&mut self, ui: &mut egui::Ui);
}
