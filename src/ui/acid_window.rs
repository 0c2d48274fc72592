//! egui widget wrapping an [`AnimatedPanel`].
//!
//! egui is immediate-mode, so the widget plays the part of a retained scene:
//! it keeps the panel's drawable state between frames, notices when the
//! resolved placement or title size changed, and only then asks the panel to
//! recompute its geometry. Every frame it paints the background, the border
//! loop, the title and finally the content children.

use eframe::egui::{self, FontId, Rect, Shape, Stroke, UiBuilder, Vec2};
use rand::Rng;

use crate::config::PanelConfig;
use crate::engine::layout::{PosHint, SizeHint, place};
use crate::engine::panel::{AnimatedPanel, Child};
use crate::ui::child::PanelChild;
use crate::ui::colors::{TITLE_TEXT, to_color32};

pub struct AcidWindow<R: Rng> {
    panel: AnimatedPanel<R>,
    size_hint: SizeHint,
    pos_hint: PosHint,
    children: Vec<Box<dyn PanelChild>>,
    /// Placement and title extent used for the last geometry update.
    last_layout: Option<(Rect, Vec2)>,
}

impl<R: Rng> AcidWindow<R> {
    pub fn new(
        title: impl Into<String>,
        size_hint: SizeHint,
        pos_hint: PosHint,
        config: PanelConfig,
        rng: R,
    ) -> Self {
        Self {
            panel: AnimatedPanel::new(title, config, rng),
            size_hint,
            pos_hint,
            children: Vec::new(),
            last_layout: None,
        }
    }

    pub fn add_child(&mut self, child: Box<dyn PanelChild>) {
        log::debug!("panel {:?}: adding child {}", self.panel.title(), child.name());
        self.children.push(child);
    }

    /// Forward one timer tick to the panel.
    pub fn tick(&mut self, dt: f32) {
        self.panel.tick(dt);
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.panel.set_title(title);
        self.last_layout = None;
    }

    pub fn panel(&self) -> &AnimatedPanel<R> {
        &self.panel
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        let rect = place(ui.max_rect(), self.size_hint, self.pos_hint);

        let font = FontId::proportional(self.panel.config().title_font_size);
        let title_galley =
            ui.painter()
                .layout_no_wrap(self.panel.title().to_owned(), font, TITLE_TEXT);
        let extent = title_galley.size();

        if self.last_layout != Some((rect, extent)) {
            self.panel.on_resize_or_move(rect, extent);
            self.last_layout = Some((rect, extent));
        }

        let painter = ui.painter().clone();
        painter.rect_filled(
            self.panel.rect(),
            0.0,
            to_color32(self.panel.background_color()),
        );
        painter.add(Shape::line(
            self.panel.border_points().to_vec(),
            Stroke::new(
                self.panel.config().border_width,
                to_color32(self.panel.border_color()),
            ),
        ));

        for child in self.panel.children() {
            match child {
                Child::TitleLabel => {
                    painter.galley(self.panel.title_rect().min, title_galley.clone(), TITLE_TEXT);
                }
                Child::ContentRegion => {
                    let region = self.panel.content_region();
                    let children = &mut self.children;
                    ui.scope_builder(UiBuilder::new().max_rect(region), |ui| {
                        ui.set_clip_rect(region);
                        for c in children.iter_mut() {
                            c.show(ui);
                        }
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{Pos2, RawInput, vec2};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Probe {
        shown: Rc<Cell<u32>>,
        last_rect: Rc<Cell<Rect>>,
    }

    impl PanelChild for Probe {
        fn name(&self) -> &str {
            "probe"
        }
        fn show(&mut self, ui: &mut egui::Ui) {
            self.shown.set(self.shown.get() + 1);
            self.last_rect.set(ui.max_rect());
        }
    }

    fn input() -> RawInput {
        RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(1000.0, 500.0))),
            ..Default::default()
        }
    }

    fn frame(ctx: &egui::Context, window: &mut AcidWindow<StdRng>) -> Rect {
        let mut max_rect = Rect::NOTHING;
        let _ = ctx.run(input(), |ctx| {
            egui::CentralPanel::default()
                .frame(egui::Frame::NONE)
                .show(ctx, |ui| {
                    max_rect = ui.max_rect();
                    window.show(ui);
                });
        });
        max_rect
    }

    fn window() -> AcidWindow<StdRng> {
        AcidWindow::new(
            "Acid",
            SizeHint::new(0.7, 0.6),
            PosHint::CENTER,
            PanelConfig::default(),
            StdRng::seed_from_u64(17),
        )
    }

    #[test]
    fn places_panel_and_shows_children_each_frame() {
        let ctx = egui::Context::default();
        let shown = Rc::new(Cell::new(0));
        let last_rect = Rc::new(Cell::new(Rect::NOTHING));
        let mut w = window();
        w.add_child(Box::new(Probe {
            shown: shown.clone(),
            last_rect: last_rect.clone(),
        }));

        let parent = frame(&ctx, &mut w);
        let _ = frame(&ctx, &mut w);

        let expected = place(parent, SizeHint::new(0.7, 0.6), PosHint::CENTER);
        assert_eq!(w.panel().rect(), expected);
        assert!(shown.get() >= 2);
        assert_eq!(w.panel().children().len(), 2);
        assert!(expected.contains_rect(last_rect.get()));
    }

    #[test]
    fn unchanged_layout_keeps_ticked_outline() {
        let ctx = egui::Context::default();
        let mut w = window();
        frame(&ctx, &mut w);
        w.tick(1.0 / 30.0);
        let after_tick = w.panel().border_points().to_vec();
        frame(&ctx, &mut w);
        // Same placement: no geometry refresh, so the wobble survives.
        assert_eq!(w.panel().border_points(), after_tick.as_slice());
    }

    #[test]
    fn retitle_remeasures_label() {
        let ctx = egui::Context::default();
        let mut w = window();
        frame(&ctx, &mut w);
        let short = w.panel().title_rect().width();
        w.set_title("A considerably longer title");
        frame(&ctx, &mut w);
        assert!(w.panel().title_rect().width() > short);
        assert_eq!(w.panel().title(), "A considerably longer title");
    }
}
