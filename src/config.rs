//! Configuration - Screen, input and text metric settings
//!
//! Loaded from TOML. Every key is optional; unknown keys are rejected.
//!
//! ```toml
//! screen_width = 1024
//! screen_height = 768
//! scroll_step = 40.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Application settings consumed by [`crate::App`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Initial root width.
    pub screen_width: u32,
    /// Initial root height.
    pub screen_height: u32,
    /// Gate for move, down and up dispatch.
    pub pointer_enabled: bool,
    /// Gate for wheel dispatch.
    pub scroll_enabled: bool,
    /// Scroll distance per wheel notch.
    pub scroll_step: f32,
    /// Cell advance as a fraction of font size, for [`crate::CellMeasure`].
    pub cell_advance: f32,
    /// Line height as a fraction of font size, for [`crate::CellMeasure`].
    pub line_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 600,
            pointer_enabled: true,
            scroll_enabled: true,
            scroll_step: 25.0,
            cell_advance: 0.6,
            line_height: 1.2,
        }
    }
}

impl Config {
    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

// =============================================================================
// TESTS
// =============================================================================
