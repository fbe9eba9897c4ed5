//! Resolved HUD settings
//!
//! `HudConfig` mirrors what the user wrote; `HudSettings` is what the store
//! actually runs with. Non-positive numeric values are replaced with their
//! defaults here instead of being reported as errors.

use debug_hud_types::{
    Color, DEFAULT_FONT_SIZE, DEFAULT_LINE_HEIGHT, DEFAULT_LINE_LENGTH, DEFAULT_LINE_SPACING,
    DEFAULT_LOG_LINES, HudConfig, LogSide, MessageArea, TextAnchor, TextStyle,
};

/// Clamped, typed view of a [`HudConfig`]
#[derive(Debug, Clone, PartialEq)]
pub struct HudSettings {
    pub log_capacity_left: usize,
    pub log_capacity_right: usize,
    pub line_length: f32,
    pub line_height: f32,
    pub line_spacing: f32,
    pub default_color: Color,
    pub default_alignment: Option<TextAnchor>,
    pub left_alignment: TextAnchor,
    pub right_alignment: TextAnchor,
    pub default_font_size: u16,
}

impl HudSettings {
    pub fn from_config(config: &HudConfig) -> Self {
        Self {
            log_capacity_left: positive_or_default(
                "max_log_lines_left",
                config.max_log_lines_left,
                DEFAULT_LOG_LINES,
            ) as usize,
            log_capacity_right: positive_or_default(
                "max_log_lines_right",
                config.max_log_lines_right,
                DEFAULT_LOG_LINES,
            ) as usize,
            line_length: positive_or_default("line_length", config.line_length, DEFAULT_LINE_LENGTH)
                as f32,
            line_height: positive_or_default("line_height", config.line_height, DEFAULT_LINE_HEIGHT)
                as f32,
            line_spacing: positive_or_default(
                "line_spacing",
                config.line_spacing,
                DEFAULT_LINE_SPACING,
            ) as f32,
            default_color: config.default_color,
            default_alignment: config.default_alignment,
            left_alignment: config.left_alignment,
            right_alignment: config.right_alignment,
            default_font_size: positive_or_default(
                "default_font_size",
                config.default_font_size,
                DEFAULT_FONT_SIZE,
            )
            .min(u16::MAX as i32) as u16,
        }
    }

    /// Rolling log capacity for a side
    pub fn log_capacity(&self, side: LogSide) -> usize {
        match side {
            LogSide::Left => self.log_capacity_left,
            LogSide::Right => self.log_capacity_right,
        }
    }

    /// Alignment used when a message does not specify one
    pub fn default_alignment_for(&self, area: MessageArea) -> TextAnchor {
        if let Some(alignment) = self.default_alignment {
            return alignment;
        }
        match area.side() {
            LogSide::Left => self.left_alignment,
            LogSide::Right => self.right_alignment,
        }
    }

    /// Shared default style for an area
    pub fn default_style(&self, area: MessageArea) -> TextStyle {
        TextStyle {
            color: self.default_color,
            alignment: self.default_alignment_for(area),
            font_size: self.default_font_size,
        }
    }
}

impl Default for HudSettings {
    fn default() -> Self {
        Self::from_config(&HudConfig::default())
    }
}

fn positive_or_default(field: &'static str, value: i32, default: i32) -> i32 {
    if value > 0 {
        value
    } else {
        tracing::debug!(field, value, default, "Non-positive HUD setting replaced with default");
        default
    }
}
