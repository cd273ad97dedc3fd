//! Rule evaluation integration tests.
//!
//! These tests exercise the engine through its public surface: compiled
//! access rules, the dependency table, and the short-circuit contract,
//! using a call-counting state stub where observability matters.

use std::cell::Cell;

use blazer_logic::names::{group, item, location, npc};
use blazer_logic::{
    Catalog, CollectionState, LogicState, OptionKey, PlayerId, RuleEngine, RuleFlag, RuleNode,
    WorldOptions,
};

const P0: PlayerId = PlayerId::new(0);

/// State stub that counts every query and answers a fixed value.
#[derive(Default)]
struct CountingState {
    item_queries: Cell<usize>,
    location_queries: Cell<usize>,
    region_queries: Cell<usize>,
}

impl LogicState for CountingState {
    fn has(&self, _item: &str, _player: PlayerId) -> bool {
        self.item_queries.set(self.item_queries.get() + 1);
        false
    }

    fn has_group_count(&self, _group: &str, _player: PlayerId, _threshold: u32) -> bool {
        false
    }

    fn can_reach_location(&self, _location: &str, _player: PlayerId) -> bool {
        self.location_queries.set(self.location_queries.get() + 1);
        true
    }

    fn can_reach_region(&self, _region: &str, _player: PlayerId) -> bool {
        self.region_queries.set(self.region_queries.get() + 1);
        true
    }

    fn option_value(&self, _player: PlayerId, _key: OptionKey) -> i64 {
        0
    }
}

/// A false node must stop evaluation before any later node runs.
#[test]
fn test_conjunction_short_circuits_on_first_false_node() {
    let engine = RuleEngine::new().unwrap();
    let state = CountingState::default();

    // HasAll on this stub is false after a single item query; the
    // reachability nodes behind it must never execute.
    let chain = RuleNode::has_all([item::DREAM_ROD])
        .then(RuleNode::can_reach_location(location::LUE))
        .then(RuleNode::can_reach_region("Greenwood"));

    assert!(!engine.evaluate(&chain, &state, P0));
    assert_eq!(state.item_queries.get(), 1);
    assert_eq!(state.location_queries.get(), 0);
    assert_eq!(state.region_queries.get(), 0);
}

/// A reachability-querying flag behind a false node must never run either.
#[test]
fn test_flag_after_false_node_never_evaluates() {
    let engine = RuleEngine::new().unwrap();
    let state = CountingState::default();

    let chain = RuleNode::has_any([]).then(RuleNode::flag(RuleFlag::PhoenixCutscene));

    assert!(!engine.evaluate(&chain, &state, P0));
    assert_eq!(state.location_queries.get(), 0);
}

/// All nodes run when every one of them is satisfied.
#[test]
fn test_satisfied_chain_visits_every_node() {
    let engine = RuleEngine::new().unwrap();
    let state = CountingState::default();

    let chain = RuleNode::can_reach_location(location::TEDDY)
        .then(RuleNode::can_reach_region("Grass Valley"));

    assert!(engine.evaluate(&chain, &state, P0));
    assert_eq!(state.location_queries.get(), 1);
    assert_eq!(state.region_queries.get(), 1);
}

/// Dependency-table rules evaluate against real collection state.
#[test]
fn test_location_dependencies_from_table() {
    let catalog = Catalog::new();
    let engine = RuleEngine::new().unwrap();
    let mut state = CollectionState::new(&catalog, &[WorldOptions::default()]);

    let rule = engine.rule_for(location::EMBLEM_A_TILE, P0);

    state.collect(npc::IVY, P0);
    state.collect(npc::IVY_EMBLEM_A, P0);
    assert!(!rule.is_satisfied(&state), "the water wheel must also be turning");

    state.collect(npc::WATER_MILL, P0);
    assert!(rule.is_satisfied(&state));
}

/// The Lue rule needs its release set plus one of two passages.
#[test]
fn test_lue_requires_either_passage() {
    let catalog = Catalog::new();
    let engine = RuleEngine::new().unwrap();
    let mut state = CollectionState::new(&catalog, &[WorldOptions::default()]);

    let rule = engine.rule_for(location::LUE, P0);

    state.collect(npc::LUE, P0);
    state.collect(npc::DOLPHIN_SAVES_LUE, P0);
    state.collect(npc::MERMAID_PEARL, P0);
    assert!(!rule.is_satisfied(&state), "no passage is open yet");

    let mut via_mermaid = state.clone();
    via_mermaid.collect(npc::MERMAID_BUBBLE_ARMOR, P0);
    assert!(rule.is_satisfied(&via_mermaid));

    let mut via_dolphin = state.clone();
    via_dolphin.collect(npc::DOLPHIN2, P0);
    assert!(rule.is_satisfied(&via_dolphin));
}

/// The stones threshold is read from options at evaluation time.
#[test]
fn test_stones_rule_follows_configured_threshold() {
    let catalog = Catalog::new();
    let engine = RuleEngine::new().unwrap();

    for stones_count in [1u8, 3, 6] {
        let options = WorldOptions {
            stones_count,
            ..WorldOptions::default()
        };
        let mut state = CollectionState::new(&catalog, &[options]);
        let chain = RuleNode::flag(RuleFlag::HasStones);

        let stones = catalog.group(group::STONES).unwrap();
        for (collected, stone) in stones.iter().enumerate() {
            let satisfied = engine.evaluate(&chain, &state, P0);
            assert_eq!(
                satisfied,
                collected >= stones_count as usize,
                "{} stones against threshold {}",
                collected,
                stones_count
            );
            state.collect(stone, P0);
        }
        assert!(engine.evaluate(&chain, &state, P0));
    }
}

/// Magic needs the magician's soul and a castable spell together.
#[test]
fn test_magic_rule_through_engine() {
    let catalog = Catalog::new();
    let engine = RuleEngine::new().unwrap();
    let chain = RuleNode::flag(RuleFlag::HasMagic);

    let mut soul_only = CollectionState::new(&catalog, &[WorldOptions::default()]);
    soul_only.collect(item::SOUL_OF_MAGICIAN, P0);
    assert!(!engine.evaluate(&chain, &soul_only, P0));

    let mut spell_only = CollectionState::new(&catalog, &[WorldOptions::default()]);
    spell_only.collect(item::SPARK_BOMB, P0);
    assert!(!engine.evaluate(&chain, &spell_only, P0));

    let mut both = soul_only;
    both.collect(item::SPARK_BOMB, P0);
    assert!(engine.evaluate(&chain, &both, P0));
}

/// Rules for different players do not observe each other's items.
#[test]
fn test_rules_are_player_scoped() {
    let catalog = Catalog::new();
    let engine = RuleEngine::new().unwrap();
    let mut state = CollectionState::new(&catalog, &[WorldOptions::default(); 3]);
    let p2 = PlayerId::new(2);

    state.collect(npc::BIRD_RED_HOT_MIRROR, P0);

    assert!(engine
        .rule_for(location::REDHOT_MIRROR_BIRD, P0)
        .is_satisfied(&state));
    assert!(!engine
        .rule_for(location::REDHOT_MIRROR_BIRD, p2)
        .is_satisfied(&state));
}
