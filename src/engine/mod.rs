//! Toolkit-free panel logic: colour walk, placement, border geometry, timer.

pub mod clock;
pub mod color;
pub mod layout;
pub mod panel;
