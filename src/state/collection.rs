//! Reference collection state.
//!
//! Tracks, per player: an item multiset, the reachable location/region
//! sets, and world options. Backed by `im` persistent collections so the
//! fixed-point search can snapshot a state in O(1) and compare sweeps
//! without deep copies.

use im::{HashMap as ImHashMap, HashSet as ImHashSet};
use rustc_hash::FxHashMap;

use crate::catalog::{Catalog, RewardInstance};
use crate::core::{OptionKey, PlayerId, PlayerMap, WorldOptions};

use super::LogicState;

/// One player's collected items and reachability.
#[derive(Clone, Debug, Default)]
struct PlayerCollection {
    /// Item name to copy count.
    items: ImHashMap<String, u32>,
    reachable_locations: ImHashSet<String>,
    reachable_regions: ImHashSet<String>,
}

/// Mutable multiworld collection state.
///
/// The search harness grows this monotonically between evaluation sweeps;
/// rule evaluation itself only reads it through [`LogicState`].
#[derive(Clone, Debug)]
pub struct CollectionState {
    players: PlayerMap<PlayerCollection>,
    options: PlayerMap<WorldOptions>,
    /// Group membership copied from the catalog at construction.
    groups: FxHashMap<&'static str, Vec<&'static str>>,
}

impl CollectionState {
    /// Create a state for `options.len()` players with empty collections.
    #[must_use]
    pub fn new(catalog: &Catalog, options: &[WorldOptions]) -> Self {
        let groups = catalog
            .groups()
            .map(|(name, members)| (name, members.to_vec()))
            .collect();

        Self {
            players: PlayerMap::with_default(options.len()),
            options: PlayerMap::new(options.len(), |player| options[player.index()]),
            groups,
        }
    }

    /// Add one copy of an item to a player's collection.
    pub fn collect(&mut self, item: &str, player: PlayerId) {
        let collection = self.players.get_mut(player);
        let count = collection.items.get(item).copied().unwrap_or(0);
        collection.items.insert(item.to_string(), count + 1);
    }

    /// Add a placed reward instance to a player's collection.
    pub fn collect_instance(&mut self, instance: &RewardInstance, player: PlayerId) {
        self.collect(instance.name, player);
    }

    /// How many copies of an item the player holds.
    #[must_use]
    pub fn count(&self, item: &str, player: PlayerId) -> u32 {
        self.players
            .get(player)
            .items
            .get(item)
            .copied()
            .unwrap_or(0)
    }

    /// Mark a location as reachable for the player.
    pub fn mark_location_reachable(&mut self, location: &str, player: PlayerId) {
        self.players
            .get_mut(player)
            .reachable_locations
            .insert(location.to_string());
    }

    /// Mark a region as reachable for the player.
    pub fn mark_region_reachable(&mut self, region: &str, player: PlayerId) {
        self.players
            .get_mut(player)
            .reachable_regions
            .insert(region.to_string());
    }
}

impl LogicState for CollectionState {
    fn has(&self, item: &str, player: PlayerId) -> bool {
        self.count(item, player) > 0
    }

    fn has_group_count(&self, group: &str, player: PlayerId, threshold: u32) -> bool {
        let held: u32 = match self.groups.get(group) {
            Some(members) => members.iter().map(|item| self.count(item, player)).sum(),
            None => 0,
        };
        held >= threshold
    }

    fn can_reach_location(&self, location: &str, player: PlayerId) -> bool {
        self.players
            .get(player)
            .reachable_locations
            .contains(location)
    }

    fn can_reach_region(&self, region: &str, player: PlayerId) -> bool {
        self.players.get(player).reachable_regions.contains(region)
    }

    fn option_value(&self, player: PlayerId, key: OptionKey) -> i64 {
        match key {
            OptionKey::StonesCount => i64::from(self.options[player].stones_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::{group, item, region};

    fn two_player_state() -> CollectionState {
        let catalog = Catalog::new();
        CollectionState::new(&catalog, &[WorldOptions::default(); 2])
    }

    #[test]
    fn test_collect_and_has() {
        let mut state = two_player_state();
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert!(!state.has(item::LIFE_SWORD, p0));

        state.collect(item::LIFE_SWORD, p0);
        assert!(state.has(item::LIFE_SWORD, p0));
        assert!(!state.has(item::LIFE_SWORD, p1));
    }

    #[test]
    fn test_collect_counts_copies() {
        let mut state = two_player_state();
        let p0 = PlayerId::new(0);

        state.collect(item::MEDICAL_HERB, p0);
        state.collect(item::MEDICAL_HERB, p0);
        state.collect(item::MEDICAL_HERB, p0);

        assert_eq!(state.count(item::MEDICAL_HERB, p0), 3);
    }

    #[test]
    fn test_group_count_threshold() {
        let mut state = two_player_state();
        let p0 = PlayerId::new(0);

        assert!(state.has_group_count(group::STONES, p0, 0));
        assert!(!state.has_group_count(group::STONES, p0, 1));

        state.collect(item::BROWN_STONE, p0);
        state.collect(item::GREEN_STONE, p0);
        assert!(state.has_group_count(group::STONES, p0, 2));
        assert!(!state.has_group_count(group::STONES, p0, 3));

        assert!(!state.has_group_count("weapons", p0, 1));
    }

    #[test]
    fn test_reachability_marks() {
        let mut state = two_player_state();
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert!(!state.can_reach_region(region::GREENWOOD, p0));

        state.mark_region_reachable(region::GREENWOOD, p0);
        assert!(state.can_reach_region(region::GREENWOOD, p0));
        assert!(!state.can_reach_region(region::GREENWOOD, p1));

        state.mark_location_reachable("Teddy", p1);
        assert!(state.can_reach_location("Teddy", p1));
        assert!(!state.can_reach_location("Teddy", p0));
    }

    #[test]
    fn test_option_value_reads_per_player() {
        let catalog = Catalog::new();
        let options = [
            WorldOptions {
                stones_count: 1,
                ..WorldOptions::default()
            },
            WorldOptions {
                stones_count: 6,
                ..WorldOptions::default()
            },
        ];
        let state = CollectionState::new(&catalog, &options);

        assert_eq!(state.option_value(PlayerId::new(0), OptionKey::StonesCount), 1);
        assert_eq!(state.option_value(PlayerId::new(1), OptionKey::StonesCount), 6);
    }

    #[test]
    fn test_clone_is_independent_snapshot() {
        let mut state = two_player_state();
        let p0 = PlayerId::new(0);

        state.collect(item::DREAM_ROD, p0);
        let snapshot = state.clone();

        state.collect(item::PASS, p0);

        assert!(state.has(item::PASS, p0));
        assert!(!snapshot.has(item::PASS, p0));
        assert!(snapshot.has(item::DREAM_ROD, p0));
    }
}
