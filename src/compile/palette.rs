use std::str::FromStr;

use crate::foundation::core::Rgba8;
use crate::foundation::error::InkscribeError;

/// UI theme. Affects colors only, never geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light UI.
    #[default]
    Light,
    /// Dark UI.
    Dark,
}

/// Board surface color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardColor {
    /// Whiteboard (follows the theme).
    #[default]
    White,
    /// Blackboard.
    Black,
    /// Green chalkboard.
    Green,
    /// Blue board.
    Blue,
}

impl FromStr for Theme {
    type Err = InkscribeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(InkscribeError::validation(format!(
                "unknown theme \"{other}\" (expected light|dark)"
            ))),
        }
    }
}

impl FromStr for BoardColor {
    type Err = InkscribeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "white" => Ok(Self::White),
            "black" => Ok(Self::Black),
            "green" => Ok(Self::Green),
            "blue" => Ok(Self::Blue),
            other => Err(InkscribeError::validation(format!(
                "unknown board color \"{other}\" (expected white|black|green|blue)"
            ))),
        }
    }
}

/// Resolved colors for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Board fill.
    pub background: Rgba8,
    /// Default ink for handwriting.
    pub ink: Rgba8,
    /// Grid line color; `None` disables the grid.
    pub grid: Option<Rgba8>,
    /// Ruled guide line color.
    pub guide: Rgba8,
    /// Pen tip, cursor, current badge and arrow.
    pub pen: Rgba8,
    /// Badge of a completed stroke.
    pub badge_done: Rgba8,
    /// Outline of a stroke not yet started.
    pub badge_future: Rgba8,
    /// Stroke numbers inside badges.
    pub badge_label: Rgba8,
}

const PEN: Rgba8 = Rgba8::rgb(0xFF, 0x6B, 0x6B);
const BADGE_DONE: Rgba8 = Rgba8::rgb(0x4A, 0xDE, 0x80);
const BADGE_FUTURE: Rgba8 = Rgba8::rgb(0x6B, 0x72, 0x80);

impl Palette {
    /// Palette for `theme` on a `board`, grid enabled.
    pub fn resolve(theme: Theme, board: BoardColor) -> Self {
        let dark = theme == Theme::Dark;
        let (background, ink, grid) = match board {
            BoardColor::White if dark => (
                Rgba8::rgb(0x37, 0x41, 0x51),
                Rgba8::WHITE,
                Rgba8::rgb(0x4B, 0x55, 0x63),
            ),
            BoardColor::White => (
                Rgba8::WHITE,
                Rgba8::BLACK,
                Rgba8::rgb(0xE5, 0xE7, 0xEB),
            ),
            BoardColor::Black => (Rgba8::rgb(0x1a, 0x1a, 0x1a), Rgba8::WHITE, chalk_grid()),
            BoardColor::Green => (Rgba8::rgb(0x0f, 0x4f, 0x3c), Rgba8::WHITE, chalk_grid()),
            BoardColor::Blue => (Rgba8::rgb(0x1e, 0x3a, 0x8a), Rgba8::WHITE, chalk_grid()),
        };
        let guide = if dark {
            Rgba8::rgb(0x4B, 0x55, 0x63)
        } else {
            Rgba8::rgb(0xE5, 0xE7, 0xEB)
        };
        Self {
            background,
            ink,
            grid: Some(grid),
            guide,
            pen: PEN,
            badge_done: BADGE_DONE,
            badge_future: BADGE_FUTURE,
            badge_label: Rgba8::WHITE,
        }
    }

    /// Builder-style grid toggle.
    pub fn with_grid(mut self, enabled: bool) -> Self {
        if !enabled {
            self.grid = None;
        } else if self.grid.is_none() {
            self.grid = Some(self.guide);
        }
        self
    }

    /// Builder-style ink override.
    pub fn with_ink(mut self, ink: Rgba8) -> Self {
        self.ink = ink;
        self
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::resolve(Theme::default(), BoardColor::default())
    }
}

fn chalk_grid() -> Rgba8 {
    // white at 5%
    Rgba8::rgba(255, 255, 255, 13)
}

#[cfg(test)]
#[path = "../../tests/unit/compile/palette.rs"]
mod tests;
