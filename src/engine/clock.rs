//! Fixed-rate timer driven by per-frame elapsed time.

/// Fires at most once per call to [`advance`](Self::advance) once a full
/// period has accumulated. The fraction of a period left over after a tick
/// carries into the next one, so frames landing slightly early or late still
/// average out to the configured rate. Whole missed periods are dropped, not
/// replayed.
#[derive(Clone, Debug)]
pub struct FixedRateTimer {
    period: f32,
    accumulated: f32,
}

impl FixedRateTimer {
    /// `ticks_per_second` below or at zero falls back to one tick per second.
    pub fn new(ticks_per_second: f32) -> Self {
        let rate = if ticks_per_second > 0.0 && ticks_per_second.is_finite() {
            ticks_per_second
        } else {
            log::warn!("invalid tick rate {ticks_per_second}, using 1 Hz");
            1.0
        };
        Self {
            period: 1.0 / rate,
            accumulated: 0.0,
        }
    }

    /// Seconds between ticks.
    pub fn period(&self) -> f32 {
        self.period
    }

    /// Feed one frame's elapsed seconds. Returns `Some(dt)` with the time
    /// since the previous tick when a tick is due.
    pub fn advance(&mut self, frame_dt: f32) -> Option<f32> {
        if !frame_dt.is_finite() || frame_dt < 0.0 {
            return None;
        }
        self.accumulated += frame_dt;
        if self.accumulated < self.period {
            return None;
        }
        let dt = self.accumulated;
        self.accumulated = (self.accumulated - self.period).rem_euclid(self.period);
        Some(dt)
    }
}
