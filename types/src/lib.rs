//! Shared configuration types for the debug HUD
//!
//! This crate contains serializable value and configuration types that are
//! shared between the message store (debug-hud-core) and the renderer
//! (debug-hud-overlay).

use serde::{Deserialize, Serialize};

/// RGBA color, one byte per channel
pub type Color = [u8; 4];

pub mod hud_colors {
    use super::Color;

    pub const WHITE: Color = [255, 255, 255, 255];
    pub const BLACK: Color = [0, 0, 0, 255];
    pub const RED: Color = [255, 0, 0, 255];
    pub const GREEN: Color = [0, 255, 0, 255];
    pub const YELLOW: Color = [255, 235, 4, 255];
    pub const GRAY: Color = [127, 127, 127, 255];
}

// ─────────────────────────────────────────────────────────────────────────────
// Areas
// ─────────────────────────────────────────────────────────────────────────────

/// Screen quadrant a message is laid out in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageArea {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl MessageArea {
    /// All areas in draw order
    pub const ALL: [MessageArea; 4] = [
        MessageArea::TopLeft,
        MessageArea::TopRight,
        MessageArea::BottomLeft,
        MessageArea::BottomRight,
    ];

    /// Stable index into per-area storage
    pub fn index(self) -> usize {
        match self {
            MessageArea::TopLeft => 0,
            MessageArea::TopRight => 1,
            MessageArea::BottomLeft => 2,
            MessageArea::BottomRight => 3,
        }
    }

    /// The screen half this area belongs to
    pub fn side(self) -> LogSide {
        match self {
            MessageArea::TopLeft | MessageArea::BottomLeft => LogSide::Left,
            MessageArea::TopRight | MessageArea::BottomRight => LogSide::Right,
        }
    }

    pub fn is_top(self) -> bool {
        matches!(self, MessageArea::TopLeft | MessageArea::TopRight)
    }
}

/// Screen half. Each side owns one rolling log.
///
/// Also serves as the two-region area model: a side maps onto its top quadrant
/// for transient messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogSide {
    #[default]
    Left,
    Right,
}

impl LogSide {
    pub const ALL: [LogSide; 2] = [LogSide::Left, LogSide::Right];

    pub fn index(self) -> usize {
        match self {
            LogSide::Left => 0,
            LogSide::Right => 1,
        }
    }
}

impl From<LogSide> for MessageArea {
    fn from(side: LogSide) -> Self {
        match side {
            LogSide::Left => MessageArea::TopLeft,
            LogSide::Right => MessageArea::TopRight,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Text Style
// ─────────────────────────────────────────────────────────────────────────────

/// Where text sits inside its label rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    #[default]
    UpperLeft,
    UpperCenter,
    UpperRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    LowerLeft,
    LowerCenter,
    LowerRight,
}

/// Horizontal component of a [`TextAnchor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

/// Vertical component of a [`TextAnchor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Upper,
    Middle,
    Lower,
}

impl TextAnchor {
    pub fn horizontal(self) -> HorizontalAlign {
        match self {
            TextAnchor::UpperLeft | TextAnchor::MiddleLeft | TextAnchor::LowerLeft => {
                HorizontalAlign::Left
            }
            TextAnchor::UpperCenter | TextAnchor::MiddleCenter | TextAnchor::LowerCenter => {
                HorizontalAlign::Center
            }
            TextAnchor::UpperRight | TextAnchor::MiddleRight | TextAnchor::LowerRight => {
                HorizontalAlign::Right
            }
        }
    }

    pub fn vertical(self) -> VerticalAlign {
        match self {
            TextAnchor::UpperLeft | TextAnchor::UpperCenter | TextAnchor::UpperRight => {
                VerticalAlign::Upper
            }
            TextAnchor::MiddleLeft | TextAnchor::MiddleCenter | TextAnchor::MiddleRight => {
                VerticalAlign::Middle
            }
            TextAnchor::LowerLeft | TextAnchor::LowerCenter | TextAnchor::LowerRight => {
                VerticalAlign::Lower
            }
        }
    }
}

/// Resolved rendering style of a single message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    pub color: Color,
    pub alignment: TextAnchor,
    pub font_size: u16,
}

// ─────────────────────────────────────────────────────────────────────────────
// HUD Configuration
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_LOG_LINES: i32 = 8;
pub const DEFAULT_LINE_LENGTH: i32 = 250;
pub const DEFAULT_LINE_HEIGHT: i32 = 22;
pub const DEFAULT_LINE_SPACING: i32 = 14;
pub const DEFAULT_FONT_SIZE: i32 = 12;

/// User-facing HUD configuration.
///
/// Numeric fields are signed so that out-of-range values survive
/// deserialization; they are clamped when the store resolves its settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudConfig {
    /// Maximum number of lines in the left side log
    #[serde(default = "default_log_lines")]
    pub max_log_lines_left: i32,
    /// Maximum number of lines in the right side log
    #[serde(default = "default_log_lines")]
    pub max_log_lines_right: i32,
    /// Width of every label rectangle
    #[serde(default = "default_line_length")]
    pub line_length: i32,
    /// Height of every label rectangle
    #[serde(default = "default_line_height")]
    pub line_height: i32,
    /// Vertical distance between consecutive lines
    #[serde(default = "default_line_spacing")]
    pub line_spacing: i32,
    #[serde(default = "default_color")]
    pub default_color: Color,
    /// Overrides the side-aware alignment for every message when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_alignment: Option<TextAnchor>,
    #[serde(default = "default_left_alignment")]
    pub left_alignment: TextAnchor,
    #[serde(default = "default_right_alignment")]
    pub right_alignment: TextAnchor,
    #[serde(default = "default_font_size")]
    pub default_font_size: i32,
}

fn default_log_lines() -> i32 {
    DEFAULT_LOG_LINES
}
fn default_line_length() -> i32 {
    DEFAULT_LINE_LENGTH
}
fn default_line_height() -> i32 {
    DEFAULT_LINE_HEIGHT
}
fn default_line_spacing() -> i32 {
    DEFAULT_LINE_SPACING
}
fn default_color() -> Color {
    hud_colors::WHITE
}
fn default_left_alignment() -> TextAnchor {
    TextAnchor::UpperLeft
}
fn default_right_alignment() -> TextAnchor {
    TextAnchor::UpperRight
}
fn default_font_size() -> i32 {
    DEFAULT_FONT_SIZE
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            max_log_lines_left: DEFAULT_LOG_LINES,
            max_log_lines_right: DEFAULT_LOG_LINES,
            line_length: DEFAULT_LINE_LENGTH,
            line_height: DEFAULT_LINE_HEIGHT,
            line_spacing: DEFAULT_LINE_SPACING,
            default_color: hud_colors::WHITE,
            default_alignment: None,
            left_alignment: TextAnchor::UpperLeft,
            right_alignment: TextAnchor::UpperRight,
            default_font_size: DEFAULT_FONT_SIZE,
        }
    }
}
