//! Host application: owns the animation timer and the single panel.

use std::time::Duration;

use eframe::egui;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::PanelConfig;
use crate::engine::clock::FixedRateTimer;
use crate::engine::layout::{PosHint, SizeHint};
use crate::ui::acid_window::AcidWindow;
use crate::ui::children::content_label::ContentLabel;
use crate::ui::colors::CLEAR_COLOR;

const TITLE: &str = "My First Acid Window";
const CONTENT: &str = "This is the content area!\n\nIt should respect the window's padding.";

// ── App struct ─────────────────────────────────────────────────────────────────

/// The top-level application, implementing [`eframe::App`].
///
/// Each frame `App`:
/// 1. Feeds the frame time to the timer and ticks the panel when it fires.
/// 2. Paints the clear colour and shows the panel.
/// 3. Schedules the next repaint one timer period ahead.
pub struct App {
    window: AcidWindow<StdRng>,
    timer: FixedRateTimer,
}

impl App {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: PanelConfig) -> Self {
        let timer = FixedRateTimer::new(config.ticks_per_second);
        log::info!("animation timer at {:.1} Hz", 1.0 / timer.period());

        let mut window = AcidWindow::new(
            TITLE,
            SizeHint::new(0.7, 0.6),
            PosHint::CENTER,
            config,
            StdRng::from_os_rng(),
        );
        window.add_child(Box::new(ContentLabel::new(CONTENT)));

        Self { window, timer }
    }
}

// ── eframe::App ────────────────────────────────────────────────────────────────

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let frame_dt = ctx.input(|i| i.unstable_dt);
        if let Some(dt) = self.timer.advance(frame_dt) {
            self.window.tick(dt);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(CLEAR_COLOR))
            .show(ctx, |ui| self.window.show(ui));

        ctx.request_repaint_after(Duration::from_secs_f32(self.timer.period()));
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        CLEAR_COLOR.to_normalized_gamma_f32()
    }
}
