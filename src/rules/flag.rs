//! Primitive capability flags and their evaluators.
//!
//! Each flag maps to exactly one evaluator of shape `(state, player) ->
//! bool`. The set is closed: adding a capability means adding a flag
//! variant, an evaluator, and a registration below, and the engine verifies
//! the pairing at construction time.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{OptionKey, PlayerId};
use crate::names::{group, item, location};
use crate::state::LogicState;

/// Evaluator function for one rule flag.
pub type FlagEvaluator = fn(&dyn LogicState, PlayerId) -> bool;

/// Primitive capability requirement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleFlag {
    /// No special requirement preventing access.
    None,
    /// A way to damage metal enemies (Zantetsu Sword | Soul Blade).
    CanCutMetal,
    /// A way to damage spirit enemies (Spirit Sword | Soul Blade).
    CanCutSpirit,
    /// A way to damage metal enemies in the presence of thunder pyramids
    /// (Thunder Ring | Zantetsu Sword | Soul Blade).
    HasThunder,
    /// A way to damage enemies outside of sword range: the Soul of
    /// Magician and at least one castable spell. Both are required.
    HasMagic,
    /// Any sword. Only used as a sanity check at the start of the game
    /// since the first chest is prefilled with a sword.
    HasSword,
    /// At least the configured number of stones.
    HasStones,
    /// The Mountain King reward has been reached, which plays the cutscene
    /// granting the Phoenix spell its effect.
    PhoenixCutscene,
}

impl RuleFlag {
    /// Every flag variant; the engine checks evaluator coverage against
    /// this list.
    pub const ALL: [RuleFlag; 8] = [
        RuleFlag::None,
        RuleFlag::CanCutMetal,
        RuleFlag::CanCutSpirit,
        RuleFlag::HasThunder,
        RuleFlag::HasMagic,
        RuleFlag::HasSword,
        RuleFlag::HasStones,
        RuleFlag::PhoenixCutscene,
    ];
}

/// Items that can damage metal enemies.
pub const METAL_ITEMS: [&str; 2] = [item::ZANTETSU_SWORD, item::SOUL_BLADE];

/// Items that can damage spirit enemies.
pub const SPIRIT_ITEMS: [&str; 2] = [item::SPIRIT_SWORD, item::SOUL_BLADE];

/// Items that answer thunder pyramids.
pub const THUNDER_ITEMS: [&str; 3] = [item::THUNDER_RING, item::ZANTETSU_SWORD, item::SOUL_BLADE];

/// Castable offensive spells.
pub const MAGIC_ITEMS: [&str; 7] = [
    item::FLAME_BALL,
    item::LIGHT_ARROW,
    item::MAGIC_FLARE,
    item::ROTATOR,
    item::SPARK_BOMB,
    item::FLAME_PILLAR,
    item::TORNADO,
];

/// The full sword set.
pub const SWORD_ITEMS: [&str; 8] = [
    item::LIFE_SWORD,
    item::PSYCHO_SWORD,
    item::CRITICAL_SWORD,
    item::LUCKY_BLADE,
    item::ZANTETSU_SWORD,
    item::SPIRIT_SWORD,
    item::RECOVERY_SWORD,
    item::SOUL_BLADE,
];

fn no_requirement(_state: &dyn LogicState, _player: PlayerId) -> bool {
    true
}

fn can_cut_metal(state: &dyn LogicState, player: PlayerId) -> bool {
    state.has_any(&METAL_ITEMS, player)
}

fn can_cut_spirit(state: &dyn LogicState, player: PlayerId) -> bool {
    state.has_any(&SPIRIT_ITEMS, player)
}

fn has_thunder(state: &dyn LogicState, player: PlayerId) -> bool {
    state.has_any(&THUNDER_ITEMS, player)
}

fn has_magic(state: &dyn LogicState, player: PlayerId) -> bool {
    state.has(item::SOUL_OF_MAGICIAN, player) && state.has_any(&MAGIC_ITEMS, player)
}

fn has_sword(state: &dyn LogicState, player: PlayerId) -> bool {
    state.has_any(&SWORD_ITEMS, player)
}

fn has_stones(state: &dyn LogicState, player: PlayerId) -> bool {
    // The threshold is an option read on every evaluation, not cached.
    let needed = state.option_value(player, OptionKey::StonesCount).max(0) as u32;
    state.has_group_count(group::STONES, player, needed)
}

fn phoenix_cutscene(state: &dyn LogicState, player: PlayerId) -> bool {
    state.can_reach_location(location::MOUNTAIN_KING, player)
}

/// Build the flag-to-evaluator registry.
pub(crate) fn evaluator_table() -> FxHashMap<RuleFlag, FlagEvaluator> {
    let mut table: FxHashMap<RuleFlag, FlagEvaluator> = FxHashMap::default();
    table.insert(RuleFlag::None, no_requirement);
    table.insert(RuleFlag::CanCutMetal, can_cut_metal);
    table.insert(RuleFlag::CanCutSpirit, can_cut_spirit);
    table.insert(RuleFlag::HasThunder, has_thunder);
    table.insert(RuleFlag::HasMagic, has_magic);
    table.insert(RuleFlag::HasSword, has_sword);
    table.insert(RuleFlag::HasStones, has_stones);
    table.insert(RuleFlag::PhoenixCutscene, phoenix_cutscene);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::core::WorldOptions;
    use crate::state::CollectionState;

    fn state_with(items: &[&str]) -> CollectionState {
        let catalog = Catalog::new();
        let mut state = CollectionState::new(&catalog, &[WorldOptions::default()]);
        for item in items {
            state.collect(item, PlayerId::new(0));
        }
        state
    }

    const P0: PlayerId = PlayerId::new(0);

    #[test]
    fn test_can_cut_metal() {
        assert!(!can_cut_metal(&state_with(&[]), P0));
        assert!(!can_cut_metal(&state_with(&[item::LIFE_SWORD]), P0));
        assert!(can_cut_metal(&state_with(&[item::ZANTETSU_SWORD]), P0));
        assert!(can_cut_metal(&state_with(&[item::SOUL_BLADE]), P0));
    }

    #[test]
    fn test_can_cut_spirit() {
        assert!(!can_cut_spirit(&state_with(&[item::ZANTETSU_SWORD]), P0));
        assert!(can_cut_spirit(&state_with(&[item::SPIRIT_SWORD]), P0));
        assert!(can_cut_spirit(&state_with(&[item::SOUL_BLADE]), P0));
    }

    #[test]
    fn test_has_thunder() {
        assert!(!has_thunder(&state_with(&[item::SPIRIT_SWORD]), P0));
        assert!(has_thunder(&state_with(&[item::THUNDER_RING]), P0));
        assert!(has_thunder(&state_with(&[item::ZANTETSU_SWORD]), P0));
        assert!(has_thunder(&state_with(&[item::SOUL_BLADE]), P0));
    }

    #[test]
    fn test_has_magic_requires_soul_and_spell() {
        // Soul alone is not enough.
        assert!(!has_magic(&state_with(&[item::SOUL_OF_MAGICIAN]), P0));
        // A spell alone is not enough.
        assert!(!has_magic(&state_with(&[item::FLAME_BALL]), P0));
        assert!(!has_magic(&state_with(&[item::TORNADO]), P0));
        // Phoenix is not castable and does not satisfy the spell half.
        assert!(!has_magic(
            &state_with(&[item::SOUL_OF_MAGICIAN, item::PHOENIX]),
            P0
        ));

        assert!(has_magic(
            &state_with(&[item::SOUL_OF_MAGICIAN, item::FLAME_BALL]),
            P0
        ));
        assert!(has_magic(
            &state_with(&[item::SOUL_OF_MAGICIAN, item::TORNADO]),
            P0
        ));
    }

    #[test]
    fn test_has_sword_accepts_any_sword() {
        assert!(!has_sword(&state_with(&[item::IRON_ARMOR]), P0));
        for sword in SWORD_ITEMS {
            assert!(has_sword(&state_with(&[sword]), P0), "{} is a sword", sword);
        }
    }

    #[test]
    fn test_has_stones_reads_threshold_from_options() {
        let catalog = Catalog::new();
        let options = WorldOptions {
            stones_count: 2,
            ..WorldOptions::default()
        };
        let mut state = CollectionState::new(&catalog, &[options]);

        assert!(!has_stones(&state, P0));

        state.collect(item::BROWN_STONE, P0);
        assert!(!has_stones(&state, P0));

        state.collect(item::BLACK_STONE, P0);
        assert!(has_stones(&state, P0));
    }

    #[test]
    fn test_phoenix_cutscene_is_a_reachability_query() {
        let catalog = Catalog::new();
        let mut state = CollectionState::new(&catalog, &[WorldOptions::default()]);

        assert!(!phoenix_cutscene(&state, P0));

        state.mark_location_reachable(location::MOUNTAIN_KING, P0);
        assert!(phoenix_cutscene(&state, P0));
    }

    #[test]
    fn test_evaluator_table_covers_every_flag() {
        let table = evaluator_table();
        for flag in RuleFlag::ALL {
            assert!(table.contains_key(&flag), "missing evaluator for {:?}", flag);
        }
    }
}
