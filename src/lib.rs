//! An animated, jittering-border panel widget for egui.
//!
//! [`engine`] holds the toolkit-free state (colour walk, border geometry,
//! placement, fixed-rate timer); [`ui`] wraps it in an egui widget and a small
//! eframe host.

pub mod config;
pub mod engine;
pub mod error;
pub mod ui;
