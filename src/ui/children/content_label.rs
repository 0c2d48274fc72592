//! Centered, wrapped text placed in the middle of the content region.

use eframe::egui::{self, Align, Color32, FontId, text::LayoutJob};

use crate::ui::child::PanelChild;
use crate::ui::colors::CONTENT_TEXT;

pub struct ContentLabel {
    text: String,
    font_size: f32,
    color: Color32,
    /// Wrap width as a fraction of the content region's width.
    wrap_fraction: f32,
}

impl ContentLabel {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: 14.0,
            color: CONTENT_TEXT,
            wrap_fraction: 0.9,
        }
    }

    /// Build the centered layout job for a region `region_width` wide.
    fn layout_job(&self, region_width: f32) -> LayoutJob {
        let mut job = LayoutJob::simple(
            self.text.clone(),
            FontId::proportional(self.font_size),
            self.color,
            region_width * self.wrap_fraction,
        );
        job.halign = Align::Center;
        job
    }
}

impl PanelChild for ContentLabel {
    fn name(&self) -> &str {
        "content label"
    }

    fn show(&mut self, ui: &mut egui::Ui) {
        let region = ui.max_rect();
        if region.width() <= 0.0 || region.height() <= 0.0 {
            return;
        }
        let galley = ui.painter().layout_job(self.layout_job(region.width()));
        let pos = region.center() - galley.rect.center().to_vec2();
        ui.painter().galley(pos, galley, self.color);
    }
}
