use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::display::{BoardOrientation, Highlight, SquareStyle};


// Board look and feel. Every field has a default, so a config file only needs to mention
// what it changes.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub orientation: BoardOrientation,
    pub allow_drag: bool,
    #[serde(with = "humantime_serde")]
    pub animation_duration: Duration,
    pub board_width: BoardWidthPolicy,
    pub palette: HighlightPalette,
}

// Board width is a fraction of the smaller viewport dimension, clamped to [min, max] pixels.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardWidthPolicy {
    pub viewport_fraction: f64,
    pub min_px: u32,
    pub max_px: u32,
}

// CSS backgrounds for each highlight kind.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightPalette {
    pub selection: String,
    pub option_plain: String,
    pub option_capture: String,
    pub annotation: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            orientation: BoardOrientation::Normal,
            allow_drag: true,
            animation_duration: Duration::from_millis(300),
            board_width: BoardWidthPolicy::default(),
            palette: HighlightPalette::default(),
        }
    }
}

impl Default for BoardWidthPolicy {
    fn default() -> Self { BoardWidthPolicy { viewport_fraction: 0.8, min_px: 240, max_px: 560 } }
}

impl Default for HighlightPalette {
    fn default() -> Self {
        HighlightPalette {
            selection: "rgba(255, 255, 0, 0.4)".to_owned(),
            option_plain: "radial-gradient(circle, rgba(0,0,0,.1) 25%, transparent 25%)".to_owned(),
            option_capture: "radial-gradient(circle, rgba(0,0,0,.1) 85%, transparent 85%)"
                .to_owned(),
            annotation: "rgba(0, 0, 255, 0.4)".to_owned(),
        }
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> { serde_json::from_str(json) }
}

impl BoardWidthPolicy {
    pub fn board_width(&self, viewport_width: f64, viewport_height: f64) -> u32 {
        let available = viewport_width.min(viewport_height).max(0.0) * self.viewport_fraction;
        // Float-to-int `as` saturates, so huge viewports can't overflow.
        (available.floor() as u32).clamp(self.min_px, self.max_px.max(self.min_px))
    }
}

impl HighlightPalette {
    pub fn style(&self, highlight: Highlight) -> SquareStyle {
        match highlight {
            Highlight::Selection => SquareStyle::filled(&self.selection),
            Highlight::OptionPlain => SquareStyle::rounded(&self.option_plain),
            Highlight::OptionCapture => SquareStyle::rounded(&self.option_capture),
            Highlight::Annotation => SquareStyle::filled(&self.annotation),
        }
    }
}
