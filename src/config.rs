use std::{fs::read_to_string, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::TabstripError;

/// Engine tuning knobs. Every field has a default, so a partial TOML table
/// (or none at all) is fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    /// Macro identifier handled by the render trigger; other macros are
    /// ignored.
    pub macro_name: String,
    /// Fallback content width when no ancestor reports a measured width.
    pub content_width: f32,
    /// Horizontal space reserved for the navigation arrows.
    pub arrow_reserve: f32,
    /// Fixed offset applied per scroll-arrow click.
    pub scroll_step: f32,
}

impl Default for TabsConfig {
    fn default() -> Self {
        TabsConfig {
            macro_name: "tabs".to_string(),
            content_width: crate::properties::DEFAULT_STRIP_WIDTH,
            arrow_reserve: 64.0,
            scroll_step: 180.0,
        }
    }
}

impl TabsConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TabstripError> {
        tracing::debug!("Reading engine config from {:?}", path.as_ref());
        let content = read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}
