//! Straight-alpha RGBA colour with `f32` channels in `[0, 1]`.

use rand::Rng;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque colour with uniformly random R, G, B.
    pub fn random_opaque<R: Rng>(rng: &mut R) -> Self {
        Self::new(rng.random(), rng.random(), rng.random(), 1.0)
    }

    /// Random walk on R, G, B by up to `step` each; alpha is left untouched.
    ///
    /// Each channel wraps with Euclidean modulo 1.0 and is then clamped, since
    /// `rem_euclid` can round up to exactly 1.0 for tiny negative inputs.
    pub fn walk<R: Rng>(&mut self, rng: &mut R, step: f32) {
        for channel in [&mut self.r, &mut self.g, &mut self.b] {
            let delta = if step > 0.0 && step.is_finite() {
                rng.random_range(-step..=step)
            } else {
                0.0
            };
            *channel = (*channel + delta).rem_euclid(1.0).clamp(0.0, 1.0);
        }
    }

    #[cfg(test)]
    pub fn in_unit_range(&self) -> bool {
        [self.r, self.g, self.b, self.a]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }
}
