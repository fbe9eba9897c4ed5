//! Per-frame draw pass
//!
//! The store never produces pixels itself. A [`DrawBackend`] receives one call
//! per placed label; after the pass the transient messages are discarded.

use debug_hud_types::TextStyle;

use crate::layout::{LabelRect, ScreenSize};
use crate::store::MessageStore;

/// Renders a single text label. Implemented by the host's drawing layer.
pub trait DrawBackend {
    fn draw_label(&mut self, rect: LabelRect, text: &str, style: &TextStyle);
}

impl MessageStore {
    /// Draw every stored message through `backend`, then end the frame.
    ///
    /// Returns the number of labels drawn.
    pub fn draw_frame<B: DrawBackend + ?Sized>(&mut self, backend: &mut B, screen: ScreenSize) -> usize {
        let drawn = {
            let placed = self.layout(screen);
            for label in &placed {
                backend.draw_label(label.rect, label.text, &label.style);
            }
            placed.len()
        };
        self.end_frame();
        drawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageOptions;
    use debug_hud_types::{LogSide, MessageArea, TextAnchor, hud_colors};

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(LabelRect, String, TextStyle)>,
    }

    impl DrawBackend for Recorder {
        fn draw_label(&mut self, rect: LabelRect, text: &str, style: &TextStyle) {
            self.calls.push((rect, text.to_string(), *style));
        }
    }

    const SCREEN: ScreenSize = ScreenSize {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn single_message_draws_one_label_then_clears() {
        let mut store = MessageStore::default();
        store.message(MessageArea::TopLeft, "STOP", hud_colors::RED.into());

        let mut recorder = Recorder::default();
        let drawn = store.draw_frame(&mut recorder, SCREEN);

        assert_eq!(drawn, 1);
        assert_eq!(recorder.calls.len(), 1);
        let (rect, text, style) = &recorder.calls[0];
        assert_eq!(
            *rect,
            LabelRect {
                x: 0.0,
                y: 0.0,
                width: 250.0,
                height: 22.0
            }
        );
        assert_eq!(text, "STOP");
        assert_eq!(style.color, hud_colors::RED);
        assert_eq!(store.message_count(), 0);
    }

    #[test]
    fn logs_survive_the_frame() {
        let mut store = MessageStore::default();
        store.log(MessageArea::TopRight, "LoggedR", MessageOptions::new());

        let mut recorder = Recorder::default();
        store.draw_frame(&mut recorder, SCREEN);
        store.draw_frame(&mut recorder, SCREEN);

        assert_eq!(recorder.calls.len(), 2);
        assert_eq!(store.log_for(LogSide::Right).len(), 1);
    }

    #[test]
    fn empty_frame_draws_nothing() {
        let mut store = MessageStore::default();
        let mut recorder = Recorder::default();
        assert_eq!(store.draw_frame(&mut recorder, SCREEN), 0);
        assert!(recorder.calls.is_empty());
    }

    #[test]
    fn per_message_style_reaches_backend() {
        let mut store = MessageStore::default();
        store.message(
            MessageArea::TopRight,
            "Hello2",
            MessageOptions::new()
                .color(hud_colors::YELLOW)
                .alignment(TextAnchor::MiddleCenter)
                .font_size(20),
        );

        let mut recorder = Recorder::default();
        store.draw_frame(&mut recorder, SCREEN);

        let (rect, _, style) = &recorder.calls[0];
        assert_eq!(rect.x, 550.0);
        assert_eq!(style.alignment, TextAnchor::MiddleCenter);
        assert_eq!(style.font_size, 20);
    }
}
