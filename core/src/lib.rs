//! Debug HUD core
//!
//! In-memory store for on-screen debug output: transient per-frame messages
//! and capped rolling logs, plus the quadrant layout and frame pass that hand
//! them to a [`DrawBackend`].

pub mod config;
pub mod error;
pub mod frame;
pub mod layout;
pub mod message;
pub mod rolling_log;
pub mod settings;
pub mod store;

pub use config::{HudConfig, HudConfigExt};
pub use error::ConfigError;
pub use frame::DrawBackend;
pub use layout::{LabelRect, LabelSource, PlacedLabel, ScreenSize};
pub use message::{MessageOptions, StyledMessage};
pub use rolling_log::RollingLog;
pub use settings::HudSettings;
pub use store::MessageStore;

pub use debug_hud_types::{
    Color, HorizontalAlign, LogSide, MessageArea, TextAnchor, TextStyle, VerticalAlign, hud_colors,
};
