//! Drawable state of the animated panel, independent of any toolkit.
//!
//! Coordinates are screen space: `y` grows downward, so the panel's bottom
//! edge is `rect.max.y`.
//!
//! The panel reacts to two events:
//!
//! * [`AnimatedPanel::on_resize_or_move`]: the host noticed a new placement.
//!   Background, border outline, title and content region are recomputed.
//! * [`AnimatedPanel::tick`]: the host's fixed-rate timer fired. The border
//!   colour random-walks and every border point wobbles a little.

use egui::{Pos2, Rect, Vec2, pos2};
use rand::Rng;

use crate::config::PanelConfig;
use crate::engine::color::Rgba;

/// Entries of the panel's visible tree, in attach order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Child {
    TitleLabel,
    ContentRegion,
}

pub struct AnimatedPanel<R: Rng> {
    rng: R,
    config: PanelConfig,

    rect: Rect,
    background_color: Rgba,
    border_color: Rgba,
    border_points: Vec<Pos2>,

    title: String,
    title_rect: Rect,
    content_region: Rect,

    // ── Visible tree ───────────────────────────────────────────────────────
    children: Vec<Child>,
    title_attached: bool,
    content_attached: bool,

    tick_count: u64,
}

impl<R: Rng> AnimatedPanel<R> {
    /// Build a panel and lay it out once at a zero-size rectangle, so the
    /// border loop and visible tree exist before the host's first placement.
    pub fn new(title: impl Into<String>, config: PanelConfig, mut rng: R) -> Self {
        let border_color = Rgba::random_opaque(&mut rng);
        let mut panel = Self {
            rng,
            background_color: config.background,
            config,
            rect: Rect::ZERO,
            border_color,
            border_points: Vec::with_capacity(5),
            title: title.into(),
            title_rect: Rect::ZERO,
            content_region: Rect::ZERO,
            children: Vec::with_capacity(2),
            title_attached: false,
            content_attached: false,
            tick_count: 0,
        };
        panel.on_resize_or_move(Rect::ZERO, Vec2::ZERO);
        log::info!("panel {:?} created, border {:?}", panel.title, border_color);
        panel
    }

    /// Recompute geometry for a new placement. `title_extent` is the rendered
    /// size of the title text; the label shrinks to exactly that size.
    pub fn on_resize_or_move(&mut self, rect: Rect, title_extent: Vec2) {
        log::debug!("panel {:?} placed at {rect:?}", self.title);
        self.rect = rect;

        let amount = self.config.corner_jitter;
        let corners = [
            rect.left_bottom(),
            rect.right_bottom(),
            rect.right_top(),
            rect.left_top(),
        ];
        self.border_points.clear();
        for corner in corners {
            let p = pos2(
                corner.x + jitter(&mut self.rng, amount),
                corner.y + jitter(&mut self.rng, amount),
            );
            self.border_points.push(p);
        }
        self.border_points.push(self.border_points[0]);

        let title_min = pos2(
            rect.min.x + (rect.width() - title_extent.x) / 2.0,
            rect.max.y - self.config.title_margin - title_extent.y,
        );
        self.title_rect = Rect::from_min_size(title_min, title_extent);

        self.content_region = if self.config.content.apply_padding {
            self.config.content.padding.shrink(rect)
        } else {
            rect
        };

        if !self.title_attached {
            self.title_attached = true;
            self.children.push(Child::TitleLabel);
        }
        if !self.content_attached {
            self.content_attached = true;
            self.children.push(Child::ContentRegion);
        }
    }

    /// One animation step. `dt` is the time since the previous tick; the
    /// step size does not depend on it.
    pub fn tick(&mut self, dt: f32) {
        self.tick_count += 1;
        log::trace!("panel tick {} dt={dt:.4}", self.tick_count);

        self.border_color.walk(&mut self.rng, self.config.color_step);

        let amount = self.config.point_jitter;
        for p in &mut self.border_points {
            p.x += jitter(&mut self.rng, amount);
            p.y += jitter(&mut self.rng, amount);
        }
        if self.border_points.len() > 1 {
            let first = self.border_points[0];
            if let Some(last) = self.border_points.last_mut() {
                *last = first;
            }
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn background_color(&self) -> Rgba {
        self.background_color
    }

    pub fn border_color(&self) -> Rgba {
        self.border_color
    }

    pub fn border_points(&self) -> &[Pos2] {
        &self.border_points
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Takes effect on the next [`on_resize_or_move`](Self::on_resize_or_move).
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn title_rect(&self) -> Rect {
        self.title_rect
    }

    pub fn content_region(&self) -> Rect {
        self.content_region
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }
}

/// Uniform offset in `[-amount, amount]`; zero for a non-positive amount.
fn jitter<R: Rng>(rng: &mut R, amount: f32) -> f32 {
    if amount > 0.0 && amount.is_finite() {
        rng.random_range(-amount..=amount)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn panel(seed: u64) -> AnimatedPanel<StdRng> {
        AnimatedPanel::new(
            "Test",
            PanelConfig::default(),
            StdRng::seed_from_u64(seed),
        )
    }

    fn rect_100x50() -> Rect {
        Rect::from_min_size(Pos2::ZERO, vec2(100.0, 50.0))
    }

    fn assert_closed(points: &[Pos2]) {
        assert!(points.len() >= 2);
        assert_eq!(points.first(), points.last());
    }

    #[test]
    fn resize_builds_closed_jittered_outline() {
        let mut p = panel(42);
        p.on_resize_or_move(rect_100x50(), vec2(40.0, 18.0));

        let pts = p.border_points();
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[4], pts[0]);

        let corners = [
            pos2(0.0, 50.0),
            pos2(100.0, 50.0),
            pos2(100.0, 0.0),
            pos2(0.0, 0.0),
        ];
        for (pt, corner) in pts.iter().zip(corners) {
            assert!((pt.x - corner.x).abs() <= 2.0 + 1e-4, "{pt:?} vs {corner:?}");
            assert!((pt.y - corner.y).abs() <= 2.0 + 1e-4, "{pt:?} vs {corner:?}");
        }
    }

    #[test]
    fn background_tracks_rect_exactly() {
        let mut p = panel(1);
        p.on_resize_or_move(rect_100x50(), Vec2::ZERO);
        let moved = Rect::from_min_size(pos2(10.0, 20.0), vec2(300.0, 120.0));
        p.on_resize_or_move(moved, Vec2::ZERO);
        assert_eq!(p.rect(), moved);
    }

    #[test]
    fn outline_stays_closed_across_ticks() {
        let mut p = panel(9);
        p.on_resize_or_move(rect_100x50(), Vec2::ZERO);
        for _ in 0..500 {
            p.tick(1.0 / 30.0);
            assert_closed(p.border_points());
            assert!(p.border_color().in_unit_range());
        }
        assert_eq!(p.tick_count(), 500);
        assert_eq!(p.border_color().a, 1.0);
    }

    #[test]
    fn tick_moves_points_by_at_most_half_a_unit() {
        let mut p = panel(5);
        p.on_resize_or_move(rect_100x50(), Vec2::ZERO);
        let before = p.border_points().to_vec();
        p.tick(0.033);
        for (a, b) in before.iter().zip(p.border_points()).take(4) {
            assert!((a.x - b.x).abs() <= 0.5 + 1e-4);
            assert!((a.y - b.y).abs() <= 0.5 + 1e-4);
        }
    }

    #[test]
    fn repeated_resize_attaches_children_once() {
        let mut p = panel(3);
        p.on_resize_or_move(rect_100x50(), Vec2::ZERO);
        p.on_resize_or_move(rect_100x50(), Vec2::ZERO);
        assert_eq!(p.children(), &[Child::TitleLabel, Child::ContentRegion]);
    }

    #[test]
    fn same_seed_is_reproducible() {
        let run = || {
            let mut p = panel(1234);
            p.on_resize_or_move(rect_100x50(), vec2(30.0, 12.0));
            p.tick(1.0 / 30.0);
            (p.border_points().to_vec(), p.border_color())
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn title_sits_bottom_center_above_margin() {
        let mut p = panel(2);
        let rect = Rect::from_min_size(pos2(10.0, 10.0), vec2(200.0, 100.0));
        p.on_resize_or_move(rect, vec2(60.0, 20.0));
        let t = p.title_rect();
        assert_eq!(t.size(), vec2(60.0, 20.0));
        assert_eq!(t.center().x, rect.center().x);
        assert_eq!(t.max.y, rect.max.y - 5.0);
    }

    #[test]
    fn content_region_follows_padding_choice() {
        let mut padded = panel(4);
        padded.on_resize_or_move(rect_100x50(), Vec2::ZERO);
        assert_eq!(padded.content_region().min, pos2(40.0, 20.0));
        assert_eq!(padded.content_region().size(), vec2(40.0, 10.0));

        let mut cfg = PanelConfig::default();
        cfg.content.apply_padding = false;
        let mut full = AnimatedPanel::new("Full", cfg, StdRng::seed_from_u64(4));
        full.on_resize_or_move(rect_100x50(), Vec2::ZERO);
        assert_eq!(full.content_region(), rect_100x50());
    }

    #[test]
    fn zero_size_panel_is_tolerated() {
        let mut p = panel(8);
        p.on_resize_or_move(Rect::ZERO, Vec2::ZERO);
        p.tick(0.033);
        assert_closed(p.border_points());
        assert_eq!(p.content_region().size(), Vec2::ZERO);
    }

    #[test]
    fn initial_border_color_is_opaque() {
        let p = panel(11);
        assert!(p.border_color().in_unit_range());
        assert_eq!(p.border_color().a, 1.0);
        assert_eq!(p.children().len(), 2);
    }
}
