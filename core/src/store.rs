//! Overlay message store
//!
//! Owns one transient message list per screen area and one rolling log per
//! screen side. Application code posts into it during a frame; the frame pass
//! (see [`crate::frame`]) reads it back in display order and clears the
//! transient lists.

use debug_hud_types::{HudConfig, LogSide, MessageArea};

use crate::message::{MessageOptions, StyledMessage};
use crate::rolling_log::RollingLog;
use crate::settings::HudSettings;

pub struct MessageStore {
    settings: HudSettings,
    /// Transient messages, indexed by `MessageArea::index`
    messages: [Vec<StyledMessage>; 4],
    /// Rolling logs, indexed by `LogSide::index`
    logs: [RollingLog; 2],
}

impl MessageStore {
    pub fn new(settings: HudSettings) -> Self {
        let logs = [
            RollingLog::new(settings.log_capacity(LogSide::Left)),
            RollingLog::new(settings.log_capacity(LogSide::Right)),
        ];
        Self {
            settings,
            messages: Default::default(),
            logs,
        }
    }

    pub fn from_config(config: &HudConfig) -> Self {
        Self::new(HudSettings::from_config(config))
    }

    pub fn settings(&self) -> &HudSettings {
        &self.settings
    }

    /// Replace the settings, trimming rolling logs that are now over capacity
    pub fn apply_config(&mut self, config: &HudConfig) {
        self.settings = HudSettings::from_config(config);
        for side in LogSide::ALL {
            let capacity = self.settings.log_capacity(side);
            let evicted = self.logs[side.index()].set_capacity(capacity);
            if evicted > 0 {
                tracing::debug!(?side, capacity, evicted, "Rolling log trimmed to new capacity");
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Producers
    // ─────────────────────────────────────────────────────────────────────────

    /// Show `text` in `area` for the current frame only
    pub fn message(&mut self, area: MessageArea, text: impl Into<String>, options: MessageOptions) {
        let style = options.resolve(self.settings.default_style(area));
        self.messages[area.index()].push(StyledMessage::new(area, text, style));
    }

    /// Append `text` to the rolling log of `area`'s side
    pub fn log(&mut self, area: MessageArea, text: impl Into<String>, options: MessageOptions) {
        let style = options.resolve(self.settings.default_style(area));
        let side = area.side();
        let evicted = self.logs[side.index()].push(StyledMessage::new(area, text, style));
        if evicted > 0 {
            tracing::trace!(?side, evicted, "Rolling log evicted oldest entries");
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Readers
    // ─────────────────────────────────────────────────────────────────────────

    /// Transient messages of an area, in insertion order
    pub fn messages(&self, area: MessageArea) -> &[StyledMessage] {
        &self.messages[area.index()]
    }

    /// Number of transient messages across all areas
    pub fn message_count(&self) -> usize {
        self.messages.iter().map(Vec::len).sum()
    }

    pub fn log_for(&self, side: LogSide) -> &RollingLog {
        &self.logs[side.index()]
    }

    /// Log entries of a side, oldest first
    pub fn log_entries(&self, side: LogSide) -> impl ExactSizeIterator<Item = &StyledMessage> {
        self.logs[side.index()].iter()
    }

    pub fn clear_logs(&mut self) {
        for log in &mut self.logs {
            log.clear();
        }
    }

    /// Frame boundary: drop every transient message
    pub fn end_frame(&mut self) {
        for messages in &mut self.messages {
            messages.clear();
        }
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new(HudSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use debug_hud_types::{TextAnchor, hud_colors};

    fn log_texts(store: &MessageStore, side: LogSide) -> Vec<String> {
        store.log_entries(side).map(|m| m.text.clone()).collect()
    }

    #[test]
    fn message_uses_shared_defaults() {
        let mut store = MessageStore::default();
        store.message(MessageArea::TopRight, "OK", MessageOptions::new());

        let msg = &store.messages(MessageArea::TopRight)[0];
        assert_eq!(msg.text, "OK");
        assert_eq!(msg.style.color, hud_colors::WHITE);
        assert_eq!(msg.style.alignment, TextAnchor::UpperRight);
        assert_eq!(msg.style.font_size, 12);
    }

    #[test]
    fn messages_keep_insertion_order_per_area() {
        let mut store = MessageStore::default();
        store.message(MessageArea::TopLeft, "STOP", hud_colors::RED.into());
        store.message(MessageArea::TopRight, "Hello", MessageOptions::new());
        store.message(MessageArea::TopLeft, "GO", hud_colors::GREEN.into());

        let left: Vec<_> = store
            .messages(MessageArea::TopLeft)
            .iter()
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(left, vec!["STOP", "GO"]);
        assert_eq!(store.message_count(), 3);
    }

    #[test]
    fn empty_text_is_accepted() {
        let mut store = MessageStore::default();
        store.message(MessageArea::BottomLeft, "", MessageOptions::new());
        store.log(MessageArea::BottomLeft, "", MessageOptions::new());
        assert_eq!(store.message_count(), 1);
        assert_eq!(store.log_for(LogSide::Left).len(), 1);
    }

    #[test]
    fn end_frame_clears_transient_messages_only() {
        let mut store = MessageStore::default();
        for i in 0..50 {
            store.message(MessageArea::ALL[i % 4], format!("m{i}"), MessageOptions::new());
        }
        store.log(MessageArea::TopLeft, "kept", MessageOptions::new());

        store.end_frame();

        assert_eq!(store.message_count(), 0);
        assert_eq!(log_texts(&store, LogSide::Left), vec!["kept"]);
    }

    #[test]
    fn logs_route_by_side() {
        let mut store = MessageStore::default();
        store.log(MessageArea::TopLeft, "Logged", hud_colors::GREEN.into());
        store.log(MessageArea::BottomLeft, "Logged2", hud_colors::GRAY.into());
        store.log(MessageArea::TopRight, "LoggedR", MessageOptions::new());

        assert_eq!(log_texts(&store, LogSide::Left), vec!["Logged", "Logged2"]);
        assert_eq!(log_texts(&store, LogSide::Right), vec!["LoggedR"]);
    }

    #[test]
    fn right_log_keeps_last_eight_of_ten() {
        let mut store = MessageStore::default();
        for i in 1..=10 {
            store.log(MessageArea::BottomRight, format!("entry {i}"), MessageOptions::new());
        }
        let expected: Vec<String> = (3..=10).map(|i| format!("entry {i}")).collect();
        assert_eq!(log_texts(&store, LogSide::Right), expected);
    }

    #[test]
    fn zero_capacity_config_resolves_to_eight() {
        let store = MessageStore::from_config(&HudConfig {
            max_log_lines_left: 0,
            ..Default::default()
        });
        assert_eq!(store.log_for(LogSide::Left).capacity(), 8);
    }

    #[test]
    fn apply_config_trims_logs() {
        let mut store = MessageStore::default();
        for text in ["A", "B", "C", "D"] {
            store.log(MessageArea::TopRight, text, MessageOptions::new());
        }
        store.apply_config(&HudConfig {
            max_log_lines_right: 2,
            ..Default::default()
        });
        assert_eq!(log_texts(&store, LogSide::Right), vec!["C", "D"]);
        assert_eq!(store.log_for(LogSide::Right).capacity(), 2);
    }

    #[test]
    fn max_int_config_values_are_accepted() {
        let mut store = MessageStore::from_config(&HudConfig {
            max_log_lines_left: i32::MAX,
            max_log_lines_right: i32::MAX,
            line_length: i32::MAX,
            line_height: i32::MAX,
            line_spacing: i32::MAX,
            default_font_size: i32::MAX,
            ..Default::default()
        });
        for i in 0..5 {
            store.log(MessageArea::TopLeft, format!("l{i}"), MessageOptions::new());
            store.log(MessageArea::BottomRight, format!("r{i}"), MessageOptions::new());
        }
        assert_eq!(store.log_for(LogSide::Left).capacity(), i32::MAX as usize);
        assert_eq!(store.log_for(LogSide::Left).len(), 5);
        assert_eq!(log_texts(&store, LogSide::Right).first().map(String::as_str), Some("r0"));
        assert_eq!(store.settings().default_font_size, u16::MAX);
    }

    #[test]
    fn clear_logs_empties_both_sides() {
        let mut store = MessageStore::default();
        store.log(MessageArea::TopLeft, "l", MessageOptions::new());
        store.log(MessageArea::TopRight, "r", MessageOptions::new());
        store.clear_logs();
        assert!(store.log_for(LogSide::Left).is_empty());
        assert!(store.log_for(LogSide::Right).is_empty());
    }
}
