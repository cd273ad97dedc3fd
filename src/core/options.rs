//! World-generation options consumed by the engine.
//!
//! The host owns option parsing and storage; the engine only sees the
//! handful of settings that change pool contents or rule thresholds.

use serde::{Deserialize, Serialize};

/// How the repeatable Gems/Exp currency pools are generated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GemExpPool {
    /// Vanilla constant values.
    #[default]
    Vanilla,
    /// Vanilla values scaled up (gems x2, exp x10).
    Improved,
    /// Uniform random values (gems 1..=999, exp 1..=9999).
    RandomRange,
}

/// Keys for options read through the state at evaluation time.
///
/// Rule evaluators must not cache these values; a threshold read happens
/// on every evaluation so the host can re-evaluate under changed settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionKey {
    /// How many stones are required to open the endgame.
    StonesCount,
}

/// Per-world generation settings the engine depends on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldOptions {
    /// Currency-pool generation mode.
    pub gem_exp_pool: GemExpPool,
    /// Stones required by the `HasStones` rule flag.
    pub stones_count: u8,
}

impl Default for WorldOptions {
    fn default() -> Self {
        Self {
            gem_exp_pool: GemExpPool::Vanilla,
            stones_count: 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = WorldOptions::default();
        assert_eq!(options.gem_exp_pool, GemExpPool::Vanilla);
        assert_eq!(options.stones_count, 6);
    }

    #[test]
    fn test_options_serde() {
        let options = WorldOptions {
            gem_exp_pool: GemExpPool::RandomRange,
            stones_count: 3,
        };

        let json = serde_json::to_string(&options).unwrap();
        let deserialized: WorldOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(options, deserialized);
    }
}
