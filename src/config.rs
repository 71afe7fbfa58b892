//! Container configuration.
//!
//! Built in code or loaded from JSON shaped like the container's props:
//!
//! ```json
//! { "mode": "list", "direction": "row" }
//! { "mode": "canvas", "width": 800, "height": 500 }
//! ```
//!
//! In code, canvas dimensions are mandatory by construction. A JSON canvas
//! config without them is rejected with `ConfigurationMissing`.

use crate::error::{SelectorError, SelectorResult};
use crate::types::{FlowDirection, SelectorMode};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Mode names accepted in config files
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeKind {
    #[default]
    List,
    Canvas,
}

/// On-disk shape of the configuration. Every field is optional.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfigFile {
    pub mode: ModeKind,
    pub direction: Option<FlowDirection>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// Validated container configuration
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SelectorConfig {
    pub mode: SelectorMode,
}

impl SelectorConfig {
    pub fn list(direction: FlowDirection) -> Self {
        Self {
            mode: SelectorMode::List { direction },
        }
    }

    pub fn canvas(width: f64, height: f64) -> Self {
        Self {
            mode: SelectorMode::Canvas { width, height },
        }
    }

    pub fn from_json(json: &str) -> SelectorResult<Self> {
        let file: SelectorConfigFile = serde_json::from_str(json)?;
        Self::try_from(file)
    }

    pub fn load(path: impl AsRef<Path>) -> SelectorResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        tracing::debug!(path = %path.display(), mode = config.mode.label(), "Loaded selector config");
        Ok(config)
    }

    /// List flow direction, if this is a list config
    pub fn direction(&self) -> Option<FlowDirection> {
        match self.mode {
            SelectorMode::List { direction } => Some(direction),
            SelectorMode::Canvas { .. } => None,
        }
    }

    /// Canvas dimensions, if this is a canvas config
    pub fn dimensions(&self) -> Option<(f64, f64)> {
        match self.mode {
            SelectorMode::Canvas { width, height } => Some((width, height)),
            SelectorMode::List { .. } => None,
        }
    }
}

impl TryFrom<SelectorConfigFile> for SelectorConfig {
    type Error = SelectorError;

    fn try_from(file: SelectorConfigFile) -> Result<Self, Self::Error> {
        match file.mode {
            ModeKind::List => {
                if file.width.is_some() || file.height.is_some() {
                    tracing::debug!("Ignoring width/height on a list config");
                }
                Ok(Self::list(file.direction.unwrap_or_default()))
            }
            ModeKind::Canvas => {
                let width = file
                    .width
                    .ok_or(SelectorError::ConfigurationMissing("canvas width"))?;
                let height = file
                    .height
                    .ok_or(SelectorError::ConfigurationMissing("canvas height"))?;
                Ok(Self::canvas(width, height))
            }
        }
    }
}

impl From<SelectorConfig> for SelectorConfigFile {
    fn from(config: SelectorConfig) -> Self {
        match config.mode {
            SelectorMode::List { direction } => Self {
                mode: ModeKind::List,
                direction: Some(direction),
                ..Self::default()
            },
            SelectorMode::Canvas { width, height } => Self {
                mode: ModeKind::Canvas,
                width: Some(width),
                height: Some(height),
                ..Self::default()
            },
        }
    }
}
