//! Rule engine: evaluator registry, dependency table, and compiled rules.
//!
//! The engine is built once per process during world setup and shared by
//! reference into every query. Construction verifies that every
//! [`RuleFlag`] has a registered evaluator and that the dependency table
//! has no duplicate keys; after that, evaluation is infallible and
//! stateless between calls, so one engine can serve concurrent searches
//! for different players.
//!
//! [`RuleEngine::rule_for`] performs the dependency-table lookup once and
//! returns an [`AccessRule`] closing over the chain and player; the hot
//! evaluation path does no lookups beyond flag dispatch.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::core::PlayerId;
use crate::error::LogicError;
use crate::names::item;
use crate::state::LogicState;

use super::dependencies::build_dependency_table;
use super::flag::{evaluator_table, FlagEvaluator, RuleFlag};
use super::node::{RuleKind, RuleNode};

/// Shared read-only rule data.
#[derive(Debug)]
struct RuleTables {
    evaluators: FxHashMap<RuleFlag, FlagEvaluator>,
    dependencies: FxHashMap<&'static str, Arc<RuleNode>>,
}

/// The rule engine.
///
/// ## Example
///
/// ```
/// use blazer_logic::catalog::Catalog;
/// use blazer_logic::core::{PlayerId, WorldOptions};
/// use blazer_logic::names::{location, npc};
/// use blazer_logic::rules::RuleEngine;
/// use blazer_logic::state::CollectionState;
///
/// let catalog = Catalog::new();
/// let engine = RuleEngine::new().unwrap();
/// let player = PlayerId::new(0);
///
/// let rule = engine.rule_for(location::TOOL_SHOP_OWNER, player);
///
/// let mut state = CollectionState::new(&catalog, &[WorldOptions::default()]);
/// assert!(!rule.is_satisfied(&state));
///
/// state.collect(npc::TOOL_SHOP_OWNER, player);
/// assert!(rule.is_satisfied(&state));
/// ```
#[derive(Clone, Debug)]
pub struct RuleEngine {
    tables: Arc<RuleTables>,
}

impl RuleEngine {
    /// Build the engine, verifying evaluator coverage and table keys.
    ///
    /// A missing flag evaluator or a duplicate dependency key fails here,
    /// at construction time, never during evaluation.
    pub fn new() -> Result<Self, LogicError> {
        let evaluators = evaluator_table();
        for flag in RuleFlag::ALL {
            if !evaluators.contains_key(&flag) {
                return Err(LogicError::MissingFlagEvaluator { flag });
            }
        }

        let dependencies = build_dependency_table()?;

        Ok(Self {
            tables: Arc::new(RuleTables {
                evaluators,
                dependencies,
            }),
        })
    }

    /// Get the compiled access rule for a location or exit.
    ///
    /// The dependency-table lookup happens here, once; a name absent from
    /// the table yields an always-true rule.
    #[must_use]
    pub fn rule_for(&self, name: &str, player: PlayerId) -> AccessRule {
        AccessRule {
            tables: Arc::clone(&self.tables),
            chain: self.tables.dependencies.get(name).cloned(),
            player,
        }
    }

    /// The completion predicate: the player holds the victory token.
    ///
    /// Exposed for the host to register as the player's win condition.
    #[must_use]
    pub fn completion_rule(&self, player: PlayerId) -> AccessRule {
        AccessRule {
            tables: Arc::clone(&self.tables),
            chain: Some(Arc::new(RuleNode::has_all([item::VICTORY]))),
            player,
        }
    }

    /// Evaluate a chain directly against a state.
    #[must_use]
    pub fn evaluate(&self, chain: &RuleNode, state: &dyn LogicState, player: PlayerId) -> bool {
        evaluate_chain(&self.tables, chain, state, player)
    }

    /// Whether a location or exit has an entry in the dependency table.
    #[must_use]
    pub fn has_rule_for(&self, name: &str) -> bool {
        self.tables.dependencies.contains_key(name)
    }
}

/// A compiled access rule bound to one player.
///
/// Pure with respect to the state it is given and safe to evaluate any
/// number of times, concurrently, from any holder.
#[derive(Clone, Debug)]
pub struct AccessRule {
    tables: Arc<RuleTables>,
    chain: Option<Arc<RuleNode>>,
    player: PlayerId,
}

impl AccessRule {
    /// Evaluate this rule against a state.
    #[must_use]
    pub fn is_satisfied(&self, state: &dyn LogicState) -> bool {
        match &self.chain {
            Some(chain) => evaluate_chain(&self.tables, chain, state, self.player),
            None => true,
        }
    }

    /// The player this rule is bound to.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }
}

fn evaluate_chain(
    tables: &RuleTables,
    chain: &RuleNode,
    state: &dyn LogicState,
    player: PlayerId,
) -> bool {
    for node in chain.iter() {
        let satisfied = match node.kind() {
            RuleKind::NoRequirement => true,
            // Coverage over RuleFlag::ALL was verified at construction.
            RuleKind::Flag(flag) => (tables.evaluators[flag])(state, player),
            RuleKind::HasAll(items) => state.has_all(items.as_slice(), player),
            RuleKind::HasAny(items) => state.has_any(items.as_slice(), player),
            RuleKind::CanReachLocation(location) => state.can_reach_location(location, player),
            RuleKind::CanReachRegion(region) => state.can_reach_region(region, player),
        };
        if !satisfied {
            return false;
        }
    }
    true
}
