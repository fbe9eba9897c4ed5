//! Off-screen HUD canvas
//!
//! An RGBA pixel buffer paired with a [`Renderer`]. It is the draw backend the
//! message store renders into; the host copies `pixels()` to its own surface
//! or writes a PNG snapshot.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use debug_hud_core::{DrawBackend, LabelRect, ScreenSize, TextStyle};
use tiny_skia::Color;

use crate::renderer::{ClipBounds, MAX_BUFFER_DIMENSION, Renderer};
use crate::utils::{color_from_rgba, text_origin};

/// Errors raised while allocating or exporting the canvas
#[derive(Debug)]
pub enum CanvasError {
    /// Requested dimensions cannot be backed by a pixel buffer
    TooLarge { width: u32, height: u32 },
    /// Could not create or write the output file
    Io(std::io::Error),
    /// PNG encoding failed
    Encode(png::EncodingError),
}

impl std::fmt::Display for CanvasError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CanvasError::TooLarge { width, height } => write!(
                f,
                "canvas {}x{} exceeds the {} pixel edge limit",
                width, height, MAX_BUFFER_DIMENSION
            ),
            CanvasError::Io(e) => write!(f, "I/O error: {}", e),
            CanvasError::Encode(e) => write!(f, "PNG encoding failed: {}", e),
        }
    }
}

impl std::error::Error for CanvasError {}

impl From<std::io::Error> for CanvasError {
    fn from(e: std::io::Error) -> Self {
        CanvasError::Io(e)
    }
}

impl From<png::EncodingError> for CanvasError {
    fn from(e: png::EncodingError) -> Self {
        CanvasError::Encode(e)
    }
}

pub struct HudCanvas {
    renderer: Renderer,
    buffer: Vec<u8>,
    width: u32,
    height: u32,
}

impl HudCanvas {
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        Self::with_renderer(Renderer::new(), width, height)
    }

    pub fn with_renderer(
        renderer: Renderer,
        width: u32,
        height: u32,
    ) -> Result<Self, CanvasError> {
        Ok(Self {
            renderer,
            buffer: allocate(width, height)?,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn screen_size(&self) -> ScreenSize {
        ScreenSize::new(self.width as f32, self.height as f32)
    }

    /// Raw RGBA pixels, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.buffer
    }

    /// Resize the canvas. Contents are discarded; on error the old size is kept.
    pub fn set_size(&mut self, width: u32, height: u32) -> Result<(), CanvasError> {
        if width == self.width && height == self.height {
            return Ok(());
        }
        self.buffer = allocate(width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    pub fn clear(&mut self, color: Color) {
        self.renderer
            .clear(&mut self.buffer, self.width, self.height, color);
    }

    pub fn measure_text(&mut self, text: &str, font_size: f32) -> (f32, f32) {
        self.renderer.measure_text(text, font_size)
    }

    /// Write the current pixels as an RGBA PNG
    pub fn write_png(&self, path: &Path) -> Result<(), CanvasError> {
        let file = File::create(path)?;
        let mut encoder = png::Encoder::new(BufWriter::new(file), self.width, self.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.buffer)?;
        writer.finish()?;
        tracing::debug!(path = %path.display(), width = self.width, height = self.height, "HUD snapshot written");
        Ok(())
    }
}

fn allocate(width: u32, height: u32) -> Result<Vec<u8>, CanvasError> {
    Renderer::create_buffer(width, height).ok_or(CanvasError::TooLarge { width, height })
}

impl DrawBackend for HudCanvas {
    fn draw_label(&mut self, rect: LabelRect, text: &str, style: &TextStyle) {
        // Zero-size text has no glyphs to shape
        if text.is_empty() || style.font_size == 0 {
            return;
        }
        let font_size = style.font_size as f32;
        let (text_width, text_height) = self.renderer.measure_text(text, font_size);
        let (x, y) = text_origin(rect, text_width, text_height, font_size, style.alignment);
        let clip = ClipBounds::from_xywh(rect.x, rect.y, rect.width, rect.height);

        self.renderer.draw_text(
            &mut self.buffer,
            self.width,
            self.height,
            text,
            x,
            y,
            font_size,
            color_from_rgba(style.color),
            clip,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_canvas_is_rejected() {
        let err = HudCanvas::new(70_000, 70_000).err();
        assert!(matches!(
            err,
            Some(CanvasError::TooLarge {
                width: 70_000,
                height: 70_000
            })
        ));
    }

    #[test]
    fn failed_resize_keeps_previous_buffer() {
        let mut canvas = HudCanvas::new(4, 4).expect("small canvas");
        assert!(canvas.set_size(u32::MAX, 2).is_err());
        assert_eq!((canvas.width(), canvas.height()), (4, 4));
        assert_eq!(canvas.pixels().len(), 64);

        canvas.set_size(2, 3).expect("small resize");
        assert_eq!(canvas.pixels().len(), 24);
    }
}
