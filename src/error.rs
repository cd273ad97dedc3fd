//! Configuration-error taxonomy.
//!
//! Every variant signals a data-table authoring or wiring bug caught at
//! startup/construction time. Once a catalog or rule engine is built
//! successfully, per-query evaluation is infallible.

use thiserror::Error;

use crate::rules::RuleFlag;

/// Errors surfaced while building the catalog or rule engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LogicError {
    /// A reward name was looked up that no category table defines.
    #[error("unknown reward name: {name}")]
    UnknownReward { name: String },

    /// Two category tables define the same name.
    #[error("duplicate reward or rule key: {name}")]
    DuplicateKey { name: String },

    /// A rule flag has no registered evaluator.
    #[error("no evaluator registered for rule flag {flag:?}")]
    MissingFlagEvaluator { flag: RuleFlag },
}
