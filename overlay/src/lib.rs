//! Debug HUD Overlay Library
//!
//! CPU rendering of the debug HUD message store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                       hud                           │
//! │                  DebugOverlay                       │
//! │        (message store + canvas + frame pass)        │
//! ├─────────────────────────────────────────────────────┤
//! │                      canvas                         │
//! │                    HudCanvas                        │
//! │      (pixel buffer, DrawBackend, PNG snapshot)      │
//! ├─────────────────────────────────────────────────────┤
//! │                     renderer                        │
//! │             tiny-skia + cosmic-text                 │
//! │          (text shaping, glyph blending)             │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod canvas;
pub mod hud;
pub mod renderer;
pub mod utils;

pub use canvas::{CanvasError, HudCanvas};
pub use hud::DebugOverlay;
pub use renderer::Renderer;
