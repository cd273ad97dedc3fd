//! # blazer-logic
//!
//! An access-rule composition and evaluation engine for game
//! randomization: given a player's collected state, it answers whether the
//! access requirements of a location, region, or transition are satisfied.
//!
//! ## Design Principles
//!
//! 1. **Explicit chains over captured closures**: access rules are tagged
//!    rule-node chains with a `next` link, evaluated by pattern dispatch
//!    with left-to-right short-circuit.
//!
//! 2. **Registries over globals**: the reward catalog, the flag-evaluator
//!    table, and the dependency table are immutable values built once
//!    during world setup and shared by reference into every query.
//!
//! 3. **Stateless evaluation**: the engine never owns or mutates player
//!    state; the surrounding fixed-point search supplies it through the
//!    [`LogicState`] trait and owns iteration and convergence.
//!
//! ## Modules
//!
//! - `core`: player ids, deterministic RNG, world options
//! - `names`: reward/location/region name constants
//! - `catalog`: reward identity records, the merged registry, pool
//!   construction
//! - `rules`: capability flags, rule chains, the dependency table, and
//!   compiled access rules
//! - `state`: the state interface and the reference collection state
//! - `error`: the configuration-error taxonomy

pub mod catalog;
pub mod core;
pub mod error;
pub mod names;
pub mod rules;
pub mod state;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, GemExpPool, OptionKey, PlayerId, PlayerMap, WorldOptions};

pub use crate::catalog::{
    build_item_pool, Catalog, Classification, RewardInstance, RewardKind, RewardRecord,
};

pub use crate::rules::{
    build_dependency_table, AccessRule, RuleEngine, RuleFlag, RuleKind, RuleNode,
};

pub use crate::state::{CollectionState, LogicState};

pub use crate::error::LogicError;
