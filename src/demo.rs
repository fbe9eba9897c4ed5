//! Scripted producer that exercises every area the way a game loop would

use debug_hud_core::{MessageArea, MessageOptions, MessageStore, TextAnchor, hud_colors};

/// Post one frame's worth of output.
///
/// Transient messages are posted every frame; every `log_every` frames three
/// log lines are appended (two left, one right).
pub fn post_frame(store: &mut MessageStore, frame: u64, log_every: u64) {
    store.message(
        MessageArea::TopRight,
        "Hello",
        MessageOptions::new()
            .color(hud_colors::YELLOW)
            .alignment(TextAnchor::UpperLeft)
            .font_size(20),
    );
    store.message(
        MessageArea::TopRight,
        "Test",
        MessageOptions::new()
            .color(hud_colors::BLACK)
            .alignment(TextAnchor::UpperLeft)
            .font_size(12),
    );
    store.message(MessageArea::TopRight, "OK", MessageOptions::new());
    store.message(MessageArea::TopLeft, "STOP", hud_colors::RED.into());
    store.message(MessageArea::TopLeft, "GO", hud_colors::GREEN.into());
    store.message(
        MessageArea::TopRight,
        "Hello2",
        MessageOptions::new()
            .color(hud_colors::YELLOW)
            .alignment(TextAnchor::MiddleCenter)
            .font_size(20),
    );
    store.message(
        MessageArea::BottomLeft,
        format!("frame {frame}"),
        MessageOptions::new(),
    );

    if log_every > 0 && frame % log_every == 0 {
        store.log(
            MessageArea::TopLeft,
            format!("Logged @{frame}"),
            hud_colors::GREEN.into(),
        );
        store.log(
            MessageArea::TopLeft,
            format!("Logged2 @{frame}"),
            hud_colors::GRAY.into(),
        );
        store.log(
            MessageArea::TopRight,
            format!("LoggedR @{frame}"),
            MessageOptions::new(),
        );
    }
}
