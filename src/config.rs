//! Panel tunables.
//!
//! Every field has a default, so a config file only needs to name the values
//! it overrides:
//!
//! ```json
//! { "ticks_per_second": 60, "content": { "apply_padding": false } }
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::engine::color::Rgba;
use crate::engine::layout::Padding;
use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Animation timer rate in Hz.
    pub ticks_per_second: f32,
    pub background: Rgba,
    /// Border stroke width in screen units.
    pub border_width: f32,
    /// Max per-axis offset applied to each corner on resize.
    pub corner_jitter: f32,
    /// Max per-axis offset applied to each border point on every tick.
    pub point_jitter: f32,
    /// Max per-channel colour change on every tick.
    pub color_step: f32,
    /// Gap between the title's bottom edge and the panel's bottom edge.
    pub title_margin: f32,
    pub title_font_size: f32,
    pub content: ContentConfig,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: 30.0,
            background: Rgba::new(0.1, 0.1, 0.15, 1.0),
            border_width: 2.0,
            corner_jitter: 2.0,
            point_jitter: 0.5,
            color_step: 0.05,
            title_margin: 5.0,
            title_font_size: 15.0,
            content: ContentConfig::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub padding: Padding,
    /// Inset the content region by `padding`; otherwise it fills the panel.
    pub apply_padding: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            padding: Padding::default(),
            apply_padding: true,
        }
    }
}

impl PanelConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
