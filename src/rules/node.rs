//! Rule-node chains.
//!
//! An access rule is an ordered conjunction of nodes: the chain is
//! satisfied iff every node evaluates true, left to right, short-circuiting
//! on the first false node. Chains are built by explicit `next` linkage at
//! construction time and immutable afterwards, so they contain no cycles
//! and are safe to share across any number of concurrent evaluations.
//!
//! Evaluation lives in [`RuleEngine`](super::RuleEngine), which owns the
//! flag-evaluator registry a `Flag` node dispatches through.

use serde::Serialize;
use smallvec::SmallVec;

use super::flag::RuleFlag;

/// Item-name list inside a rule node.
///
/// Most rules reference 1-4 names; SmallVec keeps those inline.
pub type ItemList = SmallVec<[&'static str; 4]>;

/// A single requirement inside a rule chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum RuleKind {
    /// Always satisfied.
    NoRequirement,

    /// Delegates to the flag's registered evaluator.
    Flag(RuleFlag),

    /// The player holds every named item at least once.
    HasAll(ItemList),

    /// The player holds at least one of the named items.
    ///
    /// An empty list is never satisfied.
    HasAny(ItemList),

    /// The named location is currently reachable.
    CanReachLocation(&'static str),

    /// The named region is currently reachable.
    CanReachRegion(&'static str),
}

/// One link of an access-rule chain.
///
/// ## Example
///
/// ```
/// use blazer_logic::names::{item, npc};
/// use blazer_logic::rules::{RuleFlag, RuleNode};
///
/// let rule = RuleNode::has_all([npc::BOY_CAVE, item::PASS])
///     .then(RuleNode::flag(RuleFlag::CanCutMetal));
///
/// assert_eq!(rule.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RuleNode {
    kind: RuleKind,
    next: Option<Box<RuleNode>>,
}

impl RuleNode {
    /// Create a node from a kind, with no continuation.
    #[must_use]
    pub const fn new(kind: RuleKind) -> Self {
        Self { kind, next: None }
    }

    /// An always-true node.
    #[must_use]
    pub const fn no_requirement() -> Self {
        Self::new(RuleKind::NoRequirement)
    }

    /// A flag-requirement node.
    #[must_use]
    pub const fn flag(flag: RuleFlag) -> Self {
        Self::new(RuleKind::Flag(flag))
    }

    /// A node requiring every named item.
    #[must_use]
    pub fn has_all(items: impl IntoIterator<Item = &'static str>) -> Self {
        Self::new(RuleKind::HasAll(items.into_iter().collect()))
    }

    /// A node requiring at least one of the named items.
    #[must_use]
    pub fn has_any(items: impl IntoIterator<Item = &'static str>) -> Self {
        Self::new(RuleKind::HasAny(items.into_iter().collect()))
    }

    /// A node requiring the named location to be reachable.
    #[must_use]
    pub const fn can_reach_location(location: &'static str) -> Self {
        Self::new(RuleKind::CanReachLocation(location))
    }

    /// A node requiring the named region to be reachable.
    #[must_use]
    pub const fn can_reach_region(region: &'static str) -> Self {
        Self::new(RuleKind::CanReachRegion(region))
    }

    /// Append another requirement to the end of this chain.
    #[must_use]
    pub fn then(mut self, next: RuleNode) -> Self {
        self.next = Some(Box::new(match self.next.take() {
            Some(rest) => (*rest).then(next),
            None => next,
        }));
        self
    }

    /// This node's requirement.
    #[must_use]
    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    /// The rest of the chain, if any.
    #[must_use]
    pub fn next(&self) -> Option<&RuleNode> {
        self.next.as_deref()
    }

    /// Iterate over the nodes of this chain, head first.
    pub fn iter(&self) -> ChainIter<'_> {
        ChainIter { node: Some(self) }
    }

    /// Number of nodes in this chain (always at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }
}

/// Iterator over the nodes of a chain.
pub struct ChainIter<'a> {
    node: Option<&'a RuleNode>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a RuleNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node?;
        self.node = node.next();
        Some(node)
    }
}
