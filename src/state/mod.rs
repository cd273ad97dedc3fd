//! State interface consumed during rule evaluation.
//!
//! The engine never owns player state; the surrounding search/fill
//! algorithm supplies an object implementing [`LogicState`] and calls rule
//! predicates against it repeatedly while the collected set grows. All
//! trait methods are read-only: evaluating a rule must never mutate the
//! state it is given.
//!
//! [`CollectionState`] is the in-crate reference implementation, used by
//! the test suite and available to hosts that do not bring their own.

mod collection;

pub use collection::CollectionState;

use crate::core::{OptionKey, PlayerId};

/// Read-only view of one player's collected items, reachability, and
/// options.
///
/// `has_any`/`has_all` have default implementations delegating to `has`;
/// implementors with a faster bulk path can override them.
pub trait LogicState {
    /// Whether the player holds at least one copy of the named item.
    fn has(&self, item: &str, player: PlayerId) -> bool;

    /// Whether the player holds at least one of the named items.
    ///
    /// False for an empty list.
    fn has_any(&self, items: &[&str], player: PlayerId) -> bool {
        items.iter().any(|item| self.has(item, player))
    }

    /// Whether the player holds every named item at least once.
    fn has_all(&self, items: &[&str], player: PlayerId) -> bool {
        items.iter().all(|item| self.has(item, player))
    }

    /// Whether the player holds at least `threshold` items from the named
    /// group, counting copies.
    fn has_group_count(&self, group: &str, player: PlayerId, threshold: u32) -> bool;

    /// Whether the named location is currently reachable for the player.
    fn can_reach_location(&self, location: &str, player: PlayerId) -> bool;

    /// Whether the named region is currently reachable for the player.
    fn can_reach_region(&self, region: &str, player: PlayerId) -> bool;

    /// Read a world option for the player.
    ///
    /// Rule evaluators call this on every evaluation rather than caching
    /// the value.
    fn option_value(&self, player: PlayerId, key: OptionKey) -> i64;
}
