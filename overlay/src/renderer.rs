//! Software text renderer using tiny-skia and cosmic-text
//!
//! All rendering is done on the CPU into an RGBA pixel buffer. Debug text is
//! mostly the same strings frame after frame, so shaped glyph runs are cached.
#![allow(clippy::too_many_arguments)]
use std::collections::HashMap;

use cosmic_text::{
    Attrs, Buffer, Color as CosmicColor, Family, FontSystem, LayoutGlyph, Metrics, Shaping,
    SwashCache,
};
use tiny_skia::{Color, PixmapMut};

/// Maximum entries in the text shaping cache (LRU eviction when exceeded)
const TEXT_CACHE_MAX_ENTRIES: usize = 256;

/// Largest accepted buffer edge in pixels
pub const MAX_BUFFER_DIMENSION: u32 = 16_384;

/// Cached result of text shaping
struct CachedText {
    glyphs: Vec<LayoutGlyph>,
    width: f32,
    height: f32,
    /// LRU tracking: incremented on each access
    last_used: u64,
}

/// Key for text cache: (text content, font size rounded to tenths)
type TextCacheKey = (String, u32);

/// Integer pixel bounds that glyph output is clipped to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl ClipBounds {
    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            left: x.floor() as i32,
            top: y.floor() as i32,
            right: (x + w).ceil() as i32,
            bottom: (y + h).ceil() as i32,
        }
    }

    fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.left && px < self.right && py >= self.top && py < self.bottom
    }
}

pub struct Renderer {
    font_system: FontSystem,
    swash_cache: SwashCache,
    text_cache: HashMap<TextCacheKey, CachedText>,
    cache_access_counter: u64,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
            text_cache: HashMap::with_capacity(64),
            cache_access_counter: 0,
        }
    }

    fn evict_lru_if_needed(&mut self) {
        if self.text_cache.len() <= TEXT_CACHE_MAX_ENTRIES {
            return;
        }

        // Drop down to three quarters of the limit, oldest first
        let target_size = TEXT_CACHE_MAX_ENTRIES * 3 / 4;
        let mut entries: Vec<_> = self
            .text_cache
            .iter()
            .map(|(k, v)| (k.clone(), v.last_used))
            .collect();
        entries.sort_by_key(|(_, last_used)| *last_used);

        let evict = self.text_cache.len() - target_size;
        for (key, _) in entries.into_iter().take(evict) {
            self.text_cache.remove(&key);
        }
        tracing::trace!(evict, "Text cache trimmed");
    }

    fn find_cached(&mut self, text: &str, font_size_key: u32) -> Option<&mut CachedText> {
        self.text_cache
            .iter_mut()
            .find(|(k, _)| k.0 == text && k.1 == font_size_key)
            .map(|(_, v)| v)
    }

    /// Ensure text is cached, shaping if needed. Returns (width, height).
    /// Sizes that cannot be shaped (zero, negative, NaN) measure as empty.
    fn ensure_cached(&mut self, text: &str, font_size: f32) -> (f32, f32) {
        if !is_drawable_size(font_size) {
            return (0.0, 0.0);
        }
        let font_size_key = (font_size * 10.0).round() as u32;

        self.cache_access_counter += 1;
        let current_access = self.cache_access_counter;

        if let Some(cached) = self.find_cached(text, font_size_key) {
            cached.last_used = current_access;
            return (cached.width, cached.height);
        }

        let metrics = Metrics::new(font_size, font_size * 1.2);
        let mut text_buffer = Buffer::new(&mut self.font_system, metrics);

        let attrs = Attrs::new().family(Family::SansSerif);
        text_buffer.set_text(&mut self.font_system, text, &attrs, Shaping::Advanced, None);
        text_buffer.shape_until_scroll(&mut self.font_system, false);

        let mut glyphs = Vec::new();
        let mut width = 0.0f32;
        let mut height = 0.0f32;

        for run in text_buffer.layout_runs() {
            width = width.max(run.line_w);
            height += run.line_height;
            glyphs.extend(run.glyphs.iter().cloned());
        }

        self.text_cache.insert(
            (text.to_string(), font_size_key),
            CachedText {
                glyphs,
                width,
                height,
                last_used: current_access,
            },
        );
        self.evict_lru_if_needed();

        (width, height)
    }

    /// Glyphs for `text`, shaping only on a cache miss
    fn shaped_glyphs(&mut self, text: &str, font_size: f32) -> Vec<LayoutGlyph> {
        let font_size_key = (font_size * 10.0).round() as u32;
        if let Some(cached) = self.find_cached(text, font_size_key) {
            return cached.glyphs.clone();
        }
        self.ensure_cached(text, font_size);
        self.find_cached(text, font_size_key)
            .map(|c| c.glyphs.clone())
            .unwrap_or_default()
    }

    /// Create a zeroed RGBA pixel buffer.
    ///
    /// Returns `None` when either edge exceeds [`MAX_BUFFER_DIMENSION`] or the
    /// byte size does not fit in memory addressing.
    pub fn create_buffer(width: u32, height: u32) -> Option<Vec<u8>> {
        if width > MAX_BUFFER_DIMENSION || height > MAX_BUFFER_DIMENSION {
            return None;
        }
        let len = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4)?;
        Some(vec![0u8; len])
    }

    pub fn clear(&self, buffer: &mut [u8], width: u32, height: u32, color: Color) {
        if let Some(mut pixmap) = PixmapMut::from_bytes(buffer, width, height) {
            pixmap.fill(color);
        }
    }

    /// Draw text with its baseline at `y`, clipped to `clip`
    pub fn draw_text(
        &mut self,
        buffer: &mut [u8],
        buf_width: u32,
        buf_height: u32,
        text: &str,
        x: f32,
        y: f32,
        font_size: f32,
        color: Color,
        clip: ClipBounds,
    ) {
        if !is_drawable_size(font_size) {
            return;
        }
        let Some(mut pixmap) = PixmapMut::from_bytes(buffer, buf_width, buf_height) else {
            return;
        };

        let glyphs = self.shaped_glyphs(text, font_size);

        let text_color = CosmicColor::rgba(
            (color.red() * 255.0) as u8,
            (color.green() * 255.0) as u8,
            (color.blue() * 255.0) as u8,
            (color.alpha() * 255.0) as u8,
        );

        for glyph in &glyphs {
            let physical_glyph = glyph.physical((x, y), 1.0);

            if let Some(image) = self
                .swash_cache
                .get_image(&mut self.font_system, physical_glyph.cache_key)
            {
                let glyph_x = physical_glyph.x + image.placement.left;
                let glyph_y = physical_glyph.y - image.placement.top;

                draw_glyph_to_pixmap(
                    &mut pixmap,
                    &image.data,
                    image.placement.width,
                    image.placement.height,
                    glyph_x,
                    glyph_y,
                    text_color,
                    clip,
                );
            }
        }
    }

    /// Measure text dimensions (uses shaping cache)
    pub fn measure_text(&mut self, text: &str, font_size: f32) -> (f32, f32) {
        self.ensure_cached(text, font_size)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn is_drawable_size(font_size: f32) -> bool {
    font_size.is_finite() && font_size > 0.0
}

/// Alpha-blend a glyph coverage mask onto a pixmap, skipping pixels outside `clip`
fn draw_glyph_to_pixmap(
    pixmap: &mut PixmapMut,
    glyph_data: &[u8],
    glyph_width: u32,
    glyph_height: u32,
    dest_x: i32,
    dest_y: i32,
    color: CosmicColor,
    clip: ClipBounds,
) {
    let pixmap_width = pixmap.width() as i32;
    let pixmap_height = pixmap.height() as i32;
    let data = pixmap.data_mut();

    for gy in 0..glyph_height as i32 {
        let py = dest_y + gy;
        if py < 0 || py >= pixmap_height {
            continue;
        }

        for gx in 0..glyph_width as i32 {
            let px = dest_x + gx;
            if px < 0 || px >= pixmap_width || !clip.contains(px, py) {
                continue;
            }

            let glyph_idx = (gy as u32 * glyph_width + gx as u32) as usize;
            let Some(&alpha) = glyph_data.get(glyph_idx) else {
                continue;
            };
            if alpha == 0 {
                continue;
            }

            let pixel_idx = ((py as u32 * pixmap_width as u32 + px as u32) * 4) as usize;
            if pixel_idx + 3 >= data.len() {
                continue;
            }

            let src_a = (alpha as u32 * color.a() as u32) / 255;
            let inv_a = 255 - src_a;

            data[pixel_idx] =
                ((color.r() as u32 * src_a + data[pixel_idx] as u32 * inv_a) / 255) as u8;
            data[pixel_idx + 1] =
                ((color.g() as u32 * src_a + data[pixel_idx + 1] as u32 * inv_a) / 255) as u8;
            data[pixel_idx + 2] =
                ((color.b() as u32 * src_a + data[pixel_idx + 2] as u32 * inv_a) / 255) as u8;
            data[pixel_idx + 3] = (src_a + (data[pixel_idx + 3] as u32 * inv_a) / 255) as u8;
        }
    }
}
