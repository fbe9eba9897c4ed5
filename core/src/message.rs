//! Message values and per-call style options

use debug_hud_types::{Color, MessageArea, TextAnchor, TextStyle};

/// A single display entry. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledMessage {
    pub area: MessageArea,
    pub text: String,
    pub style: TextStyle,
}

impl StyledMessage {
    pub fn new(area: MessageArea, text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            area,
            text: text.into(),
            style,
        }
    }
}

/// Optional per-message style overrides.
/// Unset fields fall back to the store's shared default style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageOptions {
    pub color: Option<Color>,
    pub alignment: Option<TextAnchor>,
    pub font_size: Option<u16>,
}

impl MessageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn alignment(mut self, alignment: TextAnchor) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn font_size(mut self, font_size: u16) -> Self {
        self.font_size = Some(font_size);
        self
    }

    /// Fill unset fields from `defaults`
    pub fn resolve(&self, defaults: TextStyle) -> TextStyle {
        TextStyle {
            color: self.color.unwrap_or(defaults.color),
            alignment: self.alignment.unwrap_or(defaults.alignment),
            font_size: self.font_size.unwrap_or(defaults.font_size),
        }
    }
}

impl From<Color> for MessageOptions {
    fn from(color: Color) -> Self {
        Self::new().color(color)
    }
}
