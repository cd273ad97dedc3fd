//! Core engine types: players, RNG, world options.
//!
//! This module contains the fundamental building blocks that are
//! game-data-agnostic. The catalog and rule tables build on top of these.

pub mod options;
pub mod player;
pub mod rng;

pub use options::{GemExpPool, OptionKey, WorldOptions};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
