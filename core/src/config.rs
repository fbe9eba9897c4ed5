//! HUD configuration persistence
//!
//! Re-exports the shared config type from debug-hud-types and adds
//! load/save on top of confy (TOML backend).

use std::path::Path;

pub use debug_hud_types::HudConfig;

use crate::error::ConfigError;

const APP_NAME: &str = "debug-hud";
const CONFIG_NAME: &str = "config";

/// Extension trait for HudConfig persistence
pub trait HudConfigExt: Sized {
    /// Load from the platform config directory, falling back to defaults
    fn load() -> Self;
    fn try_load() -> Result<Self, ConfigError>;
    fn load_path(path: &Path) -> Result<Self, ConfigError>;
    fn save(&self) -> Result<(), ConfigError>;
    fn save_path(&self, path: &Path) -> Result<(), ConfigError>;
}

impl HudConfigExt for HudConfig {
    fn load() -> Self {
        Self::try_load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Using default HUD configuration");
            Self::default()
        })
    }

    fn try_load() -> Result<Self, ConfigError> {
        Ok(confy::load(APP_NAME, CONFIG_NAME)?)
    }

    fn load_path(path: &Path) -> Result<Self, ConfigError> {
        confy::load_path(path).map_err(|source| ConfigError::LoadPath {
            path: path.to_path_buf(),
            source,
        })
    }

    fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }

    fn save_path(&self, path: &Path) -> Result<(), ConfigError> {
        confy::store_path(path, self).map_err(|source| ConfigError::SavePath {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use debug_hud_types::{TextAnchor, hud_colors};

    #[test]
    fn partial_toml_fills_defaults() {
        let config: HudConfig = toml::from_str("max_log_lines_left = 3\nline_spacing = 16\n")
            .expect("valid toml");
        assert_eq!(config.max_log_lines_left, 3);
        assert_eq!(config.max_log_lines_right, 8);
        assert_eq!(config.line_spacing, 16);
        assert_eq!(config.line_length, 250);
        assert_eq!(config.default_color, hud_colors::WHITE);
        assert_eq!(config.default_alignment, None);
        assert_eq!(config.right_alignment, TextAnchor::UpperRight);
    }

    #[test]
    fn styles_deserialize_from_snake_case() {
        let config: HudConfig = toml::from_str(
            "default_alignment = \"middle_center\"\ndefault_color = [255, 0, 0, 255]\n",
        )
        .expect("valid toml");
        assert_eq!(config.default_alignment, Some(TextAnchor::MiddleCenter));
        assert_eq!(config.default_color, hud_colors::RED);
    }

    #[test]
    fn out_of_range_values_survive_deserialization() {
        let config: HudConfig =
            toml::from_str("max_log_lines_right = -4\n").expect("valid toml");
        assert_eq!(config.max_log_lines_right, -4);
    }

    #[test]
    fn empty_toml_is_default_config() {
        let config: HudConfig = toml::from_str("").expect("valid toml");
        assert_eq!(config, HudConfig::default());
    }
}
