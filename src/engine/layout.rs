//! Placement of the panel inside its parent and the padding box.
//!
//! Hints are proportional, in the spirit of a float layout: the size is a
//! fraction of the parent's size and the position says where the panel's
//! center lands as a fraction of the parent's span.

use egui::{Pos2, Rect, Vec2, pos2, vec2};
use serde::Deserialize;

/// Panel size as a fraction of the parent size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeHint {
    pub width: f32,
    pub height: f32,
}

impl SizeHint {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Where the panel's center lands, as a fraction of the parent span.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PosHint {
    pub center_x: f32,
    pub center_y: f32,
}

impl PosHint {
    pub const CENTER: Self = Self {
        center_x: 0.5,
        center_y: 0.5,
    };
}

/// Resolve hints against `parent`. Negative fractions are treated as zero.
pub fn place(parent: Rect, size_hint: SizeHint, pos_hint: PosHint) -> Rect {
    let size = vec2(
        parent.width() * size_hint.width.max(0.0),
        parent.height() * size_hint.height.max(0.0),
    );
    let center = pos2(
        parent.min.x + parent.width() * pos_hint.center_x,
        parent.min.y + parent.height() * pos_hint.center_y,
    );
    Rect::from_center_size(center, size)
}

/// Insets in screen units, ordered top, right, bottom, left.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 20.0,
            left: 40.0,
        }
    }
}

impl Padding {
    /// The padding box of `rect`. Collapses to zero size instead of inverting
    /// when the insets exceed the rectangle.
    pub fn shrink(&self, rect: Rect) -> Rect {
        let min = Pos2::new(rect.min.x + self.left, rect.min.y + self.top);
        let size = Vec2::new(
            (rect.width() - self.left - self.right).max(0.0),
            (rect.height() - self.top - self.bottom).max(0.0),
        );
        Rect::from_min_size(min, size)
    }
}
