//! Rule engine: capability flags, rule-node chains, and compiled access
//! rules.
//!
//! ## Key Components
//!
//! - [`RuleFlag`]: closed set of primitive capability requirements, each
//!   paired with one evaluator
//! - [`RuleNode`] / [`RuleKind`]: AND-chained requirement nodes
//! - [`build_dependency_table`]: the authored location/exit dependency data
//! - [`RuleEngine`] / [`AccessRule`]: construction-time validation and
//!   per-player compiled predicates
//!
//! ## Evaluation-order caveat
//!
//! `CanReachLocation`/`CanReachRegion` nodes and the `PhoenixCutscene`
//! flag query the same reachability the outer search is computing. The
//! engine gives no ordering guarantee on its own: the caller must grow the
//! state monotonically and iterate evaluation to a fixed point, reporting
//! non-convergence as a generation-time failure instead of looping.

mod dependencies;
mod engine;
mod flag;
mod node;

pub use dependencies::build_dependency_table;
pub use engine::{AccessRule, RuleEngine};
pub use flag::{
    FlagEvaluator, RuleFlag, MAGIC_ITEMS, METAL_ITEMS, SPIRIT_ITEMS, SWORD_ITEMS, THUNDER_ITEMS,
};
pub use node::{ChainIter, ItemList, RuleKind, RuleNode};
