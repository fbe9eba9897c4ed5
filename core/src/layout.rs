//! Quadrant layout
//!
//! Pure placement of stored messages onto the screen. Every label is
//! `line_length x line_height`; consecutive lines are `line_spacing` apart.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ top-left msgs ↓            top-right ↓   │  y = i * spacing
//! │                                          │
//! │ bottom-left msgs ↑      bottom-right ↑   │  above the log band
//! ├ ─ ─ ─ ─ ─ ─ ─ ─ ─ ─ ─ ─ ─ ─ ─ ─ ─ ─ ─ ─ ┤  band = height - capacity * spacing
//! │ left log (oldest first)    right log     │
//! └──────────────────────────────────────────┘
//! ```

use debug_hud_types::{LogSide, MessageArea, TextStyle};

use crate::settings::HudSettings;
use crate::store::MessageStore;

/// Size of the drawable surface in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl ScreenSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Screen rectangle of one label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Which buffer a placed label came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSource {
    Message(MessageArea),
    Log(LogSide),
}

/// A message with its computed rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLabel<'a> {
    pub rect: LabelRect,
    pub text: &'a str,
    pub style: TextStyle,
    pub source: LabelSource,
}

fn column_x(settings: &HudSettings, screen: ScreenSize, side: LogSide) -> f32 {
    match side {
        LogSide::Left => 0.0,
        LogSide::Right => screen.width - settings.line_length,
    }
}

/// Top edge of a side's reserved log band
pub fn log_band_top(settings: &HudSettings, screen: ScreenSize, side: LogSide) -> f32 {
    screen.height - settings.log_capacity(side) as f32 * settings.line_spacing
}

/// Rectangle of the `index`-th transient message in `area`
pub fn message_rect(
    settings: &HudSettings,
    screen: ScreenSize,
    area: MessageArea,
    index: usize,
) -> LabelRect {
    let side = area.side();
    let y = if area.is_top() {
        index as f32 * settings.line_spacing
    } else {
        log_band_top(settings, screen, side) - (index + 1) as f32 * settings.line_spacing
    };
    LabelRect {
        x: column_x(settings, screen, side),
        y,
        width: settings.line_length,
        height: settings.line_height,
    }
}

/// Rectangle of the `index`-th (oldest first) entry in a side's log
pub fn log_rect(settings: &HudSettings, screen: ScreenSize, side: LogSide, index: usize) -> LabelRect {
    LabelRect {
        x: column_x(settings, screen, side),
        y: log_band_top(settings, screen, side) + index as f32 * settings.line_spacing,
        width: settings.line_length,
        height: settings.line_height,
    }
}

impl MessageStore {
    /// Place every stored message, in draw order, without consuming anything
    pub fn layout(&self, screen: ScreenSize) -> Vec<PlacedLabel<'_>> {
        let settings = self.settings();
        let log_total: usize = LogSide::ALL.iter().map(|s| self.log_for(*s).len()).sum();
        let mut placed = Vec::with_capacity(self.message_count() + log_total);

        for area in MessageArea::ALL {
            for (i, msg) in self.messages(area).iter().enumerate() {
                placed.push(PlacedLabel {
                    rect: message_rect(settings, screen, area, i),
                    text: &msg.text,
                    style: msg.style,
                    source: LabelSource::Message(area),
                });
            }
        }

        for side in LogSide::ALL {
            for (i, msg) in self.log_entries(side).enumerate() {
                placed.push(PlacedLabel {
                    rect: log_rect(settings, screen, side, i),
                    text: &msg.text,
                    style: msg.style,
                    source: LabelSource::Log(side),
                });
            }
        }

        placed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageOptions;
    use debug_hud_types::HudConfig;

    const SCREEN: ScreenSize = ScreenSize {
        width: 1280.0,
        height: 720.0,
    };

    fn rect(x: f32, y: f32) -> LabelRect {
        LabelRect {
            x,
            y,
            width: 250.0,
            height: 22.0,
        }
    }

    #[test]
    fn top_messages_stack_downward() {
        let mut store = MessageStore::default();
        store.message(MessageArea::TopLeft, "a", MessageOptions::new());
        store.message(MessageArea::TopLeft, "b", MessageOptions::new());
        store.message(MessageArea::TopRight, "c", MessageOptions::new());

        let placed = store.layout(SCREEN);
        assert_eq!(placed[0].rect, rect(0.0, 0.0));
        assert_eq!(placed[1].rect, rect(0.0, 14.0));
        assert_eq!(placed[2].rect, rect(1030.0, 0.0));
        assert_eq!(placed[2].source, LabelSource::Message(MessageArea::TopRight));
    }

    #[test]
    fn logs_fill_reserved_band_oldest_first() {
        let mut store = MessageStore::default();
        store.log(MessageArea::TopLeft, "old", MessageOptions::new());
        store.log(MessageArea::TopLeft, "new", MessageOptions::new());

        let placed = store.layout(SCREEN);
        // 720 - 8 * 14
        assert_eq!(placed[0].text, "old");
        assert_eq!(placed[0].rect, rect(0.0, 608.0));
        assert_eq!(placed[1].rect, rect(0.0, 622.0));
    }

    #[test]
    fn right_log_band_uses_right_capacity() {
        let store_config = HudConfig {
            max_log_lines_left: 2,
            max_log_lines_right: 4,
            ..Default::default()
        };
        let mut store = MessageStore::from_config(&store_config);
        store.log(MessageArea::BottomRight, "r", MessageOptions::new());

        let placed = store.layout(SCREEN);
        assert_eq!(placed[0].rect, rect(1030.0, 720.0 - 4.0 * 14.0));
        assert_eq!(placed[0].source, LabelSource::Log(LogSide::Right));
    }

    #[test]
    fn bottom_messages_stack_upward_above_band() {
        let mut store = MessageStore::default();
        store.message(MessageArea::BottomLeft, "first", MessageOptions::new());
        store.message(MessageArea::BottomLeft, "second", MessageOptions::new());

        let placed = store.layout(SCREEN);
        assert_eq!(placed[0].rect, rect(0.0, 608.0 - 14.0));
        assert_eq!(placed[1].rect, rect(0.0, 608.0 - 28.0));
    }

    #[test]
    fn draw_order_is_messages_then_logs() {
        let mut store = MessageStore::default();
        store.log(MessageArea::TopRight, "log", MessageOptions::new());
        store.message(MessageArea::BottomRight, "br", MessageOptions::new());
        store.message(MessageArea::TopLeft, "tl", MessageOptions::new());

        let texts: Vec<_> = store.layout(SCREEN).iter().map(|p| p.text).collect();
        assert_eq!(texts, vec!["tl", "br", "log"]);
    }

    #[test]
    fn layout_does_not_consume() {
        let mut store = MessageStore::default();
        store.message(MessageArea::TopLeft, "x", MessageOptions::new());
        let _ = store.layout(SCREEN);
        assert_eq!(store.message_count(), 1);
    }
}
