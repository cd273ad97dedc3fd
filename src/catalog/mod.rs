//! Reward catalog: identity records, static tables, and pool construction.
//!
//! The catalog is the leaf component everything else depends on for
//! identifiers. It maps every named reward to a canonical identity record
//! and derives the cross-system codes used by the surrounding multiworld
//! infrastructure.
//!
//! ## Key Components
//!
//! - [`RewardKind`] / [`Classification`] / [`RewardRecord`]: identity data
//! - [`Catalog`]: the merged, immutable registry with group membership
//! - [`RewardInstance`] / [`build_item_pool`]: placed copies and the
//!   per-world pool

mod record;
mod registry;
mod tables;

pub mod pool;

pub use pool::{
    build_item_pool, RewardInstance, BOTTLE_COUNT, EXP_VALUES_VANILLA, GEM_VALUES_VANILLA,
    HERB_COUNT, NOTHING_COUNT,
};
pub use record::{
    Classification, RewardKind, RewardRecord, BASE_CODE, LAIR_CODE_OFFSET, SOUL_CODE_OFFSET,
};
pub use registry::Catalog;
