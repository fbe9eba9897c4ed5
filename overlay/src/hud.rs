//! Debug HUD facade
//!
//! `DebugOverlay` owns the message store and a canvas and runs the frame pass:
//! clear, draw every placed label, drop the transient messages.
//!
//! Construct one at startup and pass `&mut DebugOverlay` (or `store_mut()`) to
//! whatever code wants to post output.

use debug_hud_core::{Color, HudConfig, MessageArea, MessageOptions, MessageStore};

use crate::canvas::{CanvasError, HudCanvas};
use crate::utils::color_from_rgba;

pub struct DebugOverlay {
    store: MessageStore,
    canvas: HudCanvas,
    background: Color,
}

impl DebugOverlay {
    pub fn new(config: &HudConfig, width: u32, height: u32) -> Result<Self, CanvasError> {
        let canvas = HudCanvas::new(width, height)?;
        Ok(Self::with_canvas(MessageStore::from_config(config), canvas))
    }

    pub fn with_canvas(store: MessageStore, canvas: HudCanvas) -> Self {
        Self {
            store,
            canvas,
            background: [0, 0, 0, 0],
        }
    }

    /// Color the canvas is cleared to at the start of each frame
    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    pub fn apply_config(&mut self, config: &HudConfig) {
        self.store.apply_config(config);
    }

    pub fn message(&mut self, area: MessageArea, text: impl Into<String>, options: MessageOptions) {
        self.store.message(area, text, options);
    }

    pub fn log(&mut self, area: MessageArea, text: impl Into<String>, options: MessageOptions) {
        self.store.log(area, text, options);
    }

    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut MessageStore {
        &mut self.store
    }

    pub fn canvas(&self) -> &HudCanvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut HudCanvas {
        &mut self.canvas
    }

    /// Render one frame into the canvas. Returns the number of labels drawn.
    pub fn render_frame(&mut self) -> usize {
        self.canvas.clear(color_from_rgba(self.background));
        let screen = self.canvas.screen_size();
        let drawn = self.store.draw_frame(&mut self.canvas, screen);
        tracing::trace!(drawn, "HUD frame rendered");
        drawn
    }
}
