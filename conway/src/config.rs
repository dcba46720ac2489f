//! Run configuration, loadable from TOML.
//!
//! ```toml
//! [grid]
//! height = 40
//! width = 120
//! seed = 7
//!
//! [engine]
//! strategy = "tiled"
//! tile_size = 32
//! workers = 4
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::engine::{
    DEFAULT_TILE_SIZE, SequentialStrategy, StrategyKind, TiledStrategy, UpdateStrategy,
};
use crate::error::{LifeError, Result};

/// Grid shape and seed. Unset dimensions are filled in by the host (e.g.
/// from the terminal size).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    pub height: Option<usize>,
    pub width: Option<usize>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub strategy: StrategyKind,
    pub tile_size: usize,
    /// Worker threads for the tiled strategy; `None` means one per core.
    pub workers: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            tile_size: DEFAULT_TILE_SIZE,
            workers: None,
        }
    }
}

impl EngineConfig {
    pub fn with_strategy(strategy: StrategyKind) -> Self {
        Self { strategy, ..Self::default() }
    }

    /// Builds the configured strategy.
    pub fn build(&self) -> Result<Box<dyn UpdateStrategy>> {
        match self.strategy {
            StrategyKind::Sequential => Ok(Box::new(SequentialStrategy)),
            StrategyKind::Tiled => Ok(Box::new(TiledStrategy::new(self.tile_size, self.workers)?)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LifeConfig {
    pub grid: GridConfig,
    pub engine: EngineConfig,
}

impl LifeConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| LifeError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }
}
