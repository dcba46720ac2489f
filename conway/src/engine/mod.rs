//! Generation update strategies.
//!
//! Every strategy computes the whole of `next` from `current` with
//! [`crate::rule::evolve_cell`], so they can only differ in how the work is
//! scheduled, never in the result.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{LifeError, Result};
use crate::grid::CellBuffer;

pub mod sequential;
pub mod tiled;

pub use sequential::SequentialStrategy;
pub use tiled::{DEFAULT_TILE_SIZE, Tile, TiledStrategy, Tiling};

/// One way of computing a generation.
pub trait UpdateStrategy: Send {
    fn name(&self) -> &'static str;

    /// Overwrites every cell of `next` with the rule applied to `current`.
    ///
    /// `current` is shared read-only; `next` is exclusively owned and must be a
    /// different buffer of the same shape.
    fn compute(&self, current: &Arc<CellBuffer>, next: &mut CellBuffer) -> Result<()>;
}

pub(crate) fn check_shapes(current: &CellBuffer, next: &CellBuffer) -> Result<()> {
    if current.dims() != next.dims() {
        return Err(LifeError::DimensionMismatch {
            current: current.dims(),
            next: next.dims(),
        });
    }
    Ok(())
}

/// Which strategy to build, picked from config or the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Sequential,
    #[default]
    Tiled,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 2] = [StrategyKind::Sequential, StrategyKind::Tiled];

    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Sequential => "sequential",
            StrategyKind::Tiled => "tiled",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" | "cpu" => Ok(StrategyKind::Sequential),
            "tiled" | "parallel" | "gpu" => Ok(StrategyKind::Tiled),
            other => Err(LifeError::Config(format!(
                "unknown strategy '{other}', expected 'sequential' or 'tiled'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_kind_parses_aliases() {
        assert_eq!("sequential".parse::<StrategyKind>().unwrap(), StrategyKind::Sequential);
        assert_eq!("CPU".parse::<StrategyKind>().unwrap(), StrategyKind::Sequential);
        assert_eq!(" tiled ".parse::<StrategyKind>().unwrap(), StrategyKind::Tiled);
        assert_eq!("gpu".parse::<StrategyKind>().unwrap(), StrategyKind::Tiled);
        assert!("hashlife".parse::<StrategyKind>().is_err());
    }

    #[test]
    fn strategy_kind_round_trips_display() {
        for kind in StrategyKind::ALL {
            assert_eq!(kind.to_string().parse::<StrategyKind>().unwrap(), kind);
        }
    }

    #[test]
    fn mismatched_shapes_rejected() {
        let a = CellBuffer::zeroed(4, 4).unwrap();
        let b = CellBuffer::zeroed(4, 5).unwrap();
        assert!(matches!(
            check_shapes(&a, &b),
            Err(LifeError::DimensionMismatch { current: (4, 4), next: (4, 5) })
        ));
        assert!(check_shapes(&a, &a.clone()).is_ok());
    }
}
