//! Shareable configuration snapshot: the parameter record plus the seed.
//!
//! The JSON form is a flat object whose keys are the parameter wire names
//! followed by `seed`, pretty-printed with two-space indentation.

use crate::error::ConfigError;
use crate::params::PileParams;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    #[serde(flatten)]
    pub params: PileParams,
    #[serde(default)]
    pub seed: i64,
}

impl ConfigSnapshot {
    pub fn new(params: PileParams, seed: i64) -> Self {
        Self { params, seed }
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let snapshot: ConfigSnapshot = serde_json::from_str(text)?;
        log::debug!("[config] parsed snapshot seed={}", snapshot.seed);
        Ok(snapshot)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let mut text = self.to_json()?;
        text.push('\n');
        std::fs::write(path, text)?;
        Ok(())
    }
}
