//! Configuration schema types for `gbs.toml`
//!
//! ```toml
//! [palette]
//! colors = ["#0f380f", "#306230", "#8bac0f", "#9bbc0f"]
//!
//! [encode]
//! separator = "none"   # "none" | "space" | "newline"
//!
//! [render]
//! scale = 4
//! ```

use serde::{Deserialize, Serialize};

use crate::codec::Separator;
use crate::registry::{Palette, PaletteError, DEFAULT_COLORS};

/// Largest PNG scale factor accepted from config or CLI.
pub const MAX_SCALE: u32 = 32;

/// Palette section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Four CSS colors for indices 0..=3
    #[serde(default = "default_colors")]
    pub colors: Vec<String>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self { colors: default_colors() }
    }
}

fn default_colors() -> Vec<String> {
    DEFAULT_COLORS.iter().map(|c| c.to_hex()).collect()
}

/// Hex output settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EncodeConfig {
    /// Separator written between bytes
    #[serde(default)]
    pub separator: Separator,
}

/// PNG output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Default scale factor
    #[serde(default = "default_scale")]
    pub scale: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { scale: default_scale() }
    }
}

fn default_scale() -> u32 {
    1
}

/// Root configuration structure for `gbs.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GbsConfig {
    #[serde(default)]
    pub palette: PaletteConfig,
    #[serde(default)]
    pub encode: EncodeConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

/// A single configuration problem
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "palette.colors")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "gbs.toml: '{}' {}", self.field, self.message)
    }
}

impl GbsConfig {
    /// Validate the configuration and return every problem found
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        match self.palette() {
            Ok(_) => {}
            Err(PaletteError::Color { index, value, source }) => {
                errors.push(ConfigValidationError {
                    field: format!("palette.colors[{}]", index),
                    message: format!("'{}' is not a color: {}", value, source),
                });
            }
            Err(e) => {
                errors.push(ConfigValidationError {
                    field: "palette.colors".to_string(),
                    message: e.to_string(),
                });
            }
        }

        if self.render.scale == 0 || self.render.scale > MAX_SCALE {
            errors.push(ConfigValidationError {
                field: "render.scale".to_string(),
                message: format!("must be between 1 and {}", MAX_SCALE),
            });
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Build the configured palette.
    pub fn palette(&self) -> Result<Palette, PaletteError> {
        Palette::parse(self.palette.colors.as_slice())
    }
}
