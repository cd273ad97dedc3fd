//! Reward-instance pool construction.
//!
//! A pool holds one instance per unique reward plus the repeatable filler
//! and currency instances. Currency quantities come from the vanilla
//! constant lists, a fixed transform of them, or a seeded random draw,
//! per world options; given the same seed and options the pool is
//! identical between runs.

use serde::Serialize;

use crate::core::{GameRng, GemExpPool, WorldOptions};
use crate::names::item;

use super::record::RewardRecord;
use super::registry::Catalog;

/// Number of Medical Herbs in the vanilla pool.
pub const HERB_COUNT: usize = 20;

/// Number of Strange Bottles in the vanilla pool.
pub const BOTTLE_COUNT: usize = 7;

/// Number of "Nothing" rewards in the vanilla pool.
pub const NOTHING_COUNT: usize = 3;

/// Gem reward quantities in the vanilla pool.
pub const GEM_VALUES_VANILLA: [u16; 21] = [
    1, 12, 40, 50, 50, 50, 50, 50, 60, 60, 80, 80, 80, 80, 80, 100, 100, 100, 100, 150, 200,
];

/// Exp reward quantities in the vanilla pool.
pub const EXP_VALUES_VANILLA: [u16; 13] =
    [1, 30, 80, 150, 180, 200, 250, 300, 300, 300, 300, 300, 400];

/// A placed copy of a reward.
///
/// Instances are immutable values; assigning a randomized quantity goes
/// through [`RewardInstance::with_operand`], which produces a new instance
/// rather than mutating one that other holders may share.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RewardInstance {
    /// Catalog name of the reward.
    pub name: &'static str,
    /// The identity record for this copy.
    pub record: RewardRecord,
}

impl RewardInstance {
    /// Create a new reward instance.
    #[must_use]
    pub const fn new(name: &'static str, record: RewardRecord) -> Self {
        Self { name, record }
    }

    /// The cross-system code of this instance.
    #[must_use]
    pub fn code(&self) -> u64 {
        self.record.code()
    }

    /// Return a copy of this instance with a different operand.
    #[must_use]
    pub const fn with_operand(&self, operand: u16) -> Self {
        Self {
            name: self.name,
            record: self.record.with_operand(operand),
        }
    }
}

fn gem_values(options: &WorldOptions, rng: &mut GameRng) -> Vec<u16> {
    match options.gem_exp_pool {
        GemExpPool::Vanilla => GEM_VALUES_VANILLA.to_vec(),
        GemExpPool::Improved => GEM_VALUES_VANILLA.iter().map(|gem| gem * 2).collect(),
        GemExpPool::RandomRange => (0..GEM_VALUES_VANILLA.len())
            .map(|_| rng.gen_range_inclusive(1..=999))
            .collect(),
    }
}

fn exp_values(options: &WorldOptions, rng: &mut GameRng) -> Vec<u16> {
    match options.gem_exp_pool {
        GemExpPool::Vanilla => EXP_VALUES_VANILLA.to_vec(),
        GemExpPool::Improved => EXP_VALUES_VANILLA.iter().map(|exp| exp * 10).collect(),
        GemExpPool::RandomRange => (0..EXP_VALUES_VANILLA.len())
            .map(|_| rng.gen_range_inclusive(1..=9999))
            .collect(),
    }
}

/// Build the reward-instance pool for one world.
///
/// Produces, in order: one instance per unique reward (catalog table
/// order), the repeatable filler instances, then one Gems/Exp instance per
/// generated quantity. Deterministic given the same options and RNG seed.
pub fn build_item_pool(
    catalog: &Catalog,
    options: &WorldOptions,
    rng: &mut GameRng,
) -> Vec<RewardInstance> {
    let mut pool: Vec<RewardInstance> = catalog
        .unique_rewards()
        .map(|(name, record)| RewardInstance::new(name, *record))
        .collect();

    let herb = template(catalog, item::MEDICAL_HERB);
    pool.extend((0..HERB_COUNT).map(|_| RewardInstance::new(item::MEDICAL_HERB, herb)));

    let bottle = template(catalog, item::STRANGE_BOTTLE);
    pool.extend((0..BOTTLE_COUNT).map(|_| RewardInstance::new(item::STRANGE_BOTTLE, bottle)));

    let nothing = template(catalog, item::NOTHING);
    pool.extend((0..NOTHING_COUNT).map(|_| RewardInstance::new(item::NOTHING, nothing)));

    let gems = template(catalog, item::GEMS);
    pool.extend(
        gem_values(options, rng)
            .into_iter()
            .map(|value| RewardInstance::new(item::GEMS, gems).with_operand(value)),
    );

    let exp = template(catalog, item::EXP);
    pool.extend(
        exp_values(options, rng)
            .into_iter()
            .map(|value| RewardInstance::new(item::EXP, exp).with_operand(value)),
    );

    pool
}

fn template(catalog: &Catalog, name: &'static str) -> RewardRecord {
    *catalog
        .get(name)
        .expect("repeatable reward missing from catalog")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RewardKind;

    fn vanilla_options() -> WorldOptions {
        WorldOptions::default()
    }

    #[test]
    fn test_vanilla_pool_counts() {
        let catalog = Catalog::new();
        let mut rng = GameRng::new(42);

        let pool = build_item_pool(&catalog, &vanilla_options(), &mut rng);

        let unique_count = catalog.unique_rewards().count();
        assert_eq!(
            pool.len(),
            unique_count
                + HERB_COUNT
                + BOTTLE_COUNT
                + NOTHING_COUNT
                + GEM_VALUES_VANILLA.len()
                + EXP_VALUES_VANILLA.len()
        );

        let herbs = pool.iter().filter(|i| i.name == item::MEDICAL_HERB).count();
        assert_eq!(herbs, HERB_COUNT);
        let bottles = pool.iter().filter(|i| i.name == item::STRANGE_BOTTLE).count();
        assert_eq!(bottles, BOTTLE_COUNT);
        let nothings = pool.iter().filter(|i| i.name == item::NOTHING).count();
        assert_eq!(nothings, NOTHING_COUNT);
    }

    #[test]
    fn test_vanilla_currency_values_in_order() {
        let catalog = Catalog::new();
        let mut rng = GameRng::new(42);

        let pool = build_item_pool(&catalog, &vanilla_options(), &mut rng);

        let gems: Vec<u16> = pool
            .iter()
            .filter(|i| i.name == item::GEMS)
            .map(|i| i.record.operand)
            .collect();
        assert_eq!(gems, GEM_VALUES_VANILLA.to_vec());

        let exp: Vec<u16> = pool
            .iter()
            .filter(|i| i.name == item::EXP)
            .map(|i| i.record.operand)
            .collect();
        assert_eq!(exp, EXP_VALUES_VANILLA.to_vec());
    }

    #[test]
    fn test_improved_currency_transform() {
        let catalog = Catalog::new();
        let mut rng = GameRng::new(42);
        let options = WorldOptions {
            gem_exp_pool: GemExpPool::Improved,
            ..WorldOptions::default()
        };

        let pool = build_item_pool(&catalog, &options, &mut rng);

        let gems: Vec<u16> = pool
            .iter()
            .filter(|i| i.name == item::GEMS)
            .map(|i| i.record.operand)
            .collect();
        let expected: Vec<u16> = GEM_VALUES_VANILLA.iter().map(|g| g * 2).collect();
        assert_eq!(gems, expected);

        let exp: Vec<u16> = pool
            .iter()
            .filter(|i| i.name == item::EXP)
            .map(|i| i.record.operand)
            .collect();
        let expected: Vec<u16> = EXP_VALUES_VANILLA.iter().map(|e| e * 10).collect();
        assert_eq!(exp, expected);
    }

    #[test]
    fn test_random_range_is_reproducible() {
        let catalog = Catalog::new();
        let options = WorldOptions {
            gem_exp_pool: GemExpPool::RandomRange,
            ..WorldOptions::default()
        };

        let mut rng1 = GameRng::new(1234);
        let mut rng2 = GameRng::new(1234);

        let pool1 = build_item_pool(&catalog, &options, &mut rng1);
        let pool2 = build_item_pool(&catalog, &options, &mut rng2);

        assert_eq!(pool1, pool2);
    }

    #[test]
    fn test_random_range_values_stay_in_bounds() {
        let catalog = Catalog::new();
        let options = WorldOptions {
            gem_exp_pool: GemExpPool::RandomRange,
            ..WorldOptions::default()
        };
        let mut rng = GameRng::new(987);

        let pool = build_item_pool(&catalog, &options, &mut rng);

        for instance in pool.iter().filter(|i| i.name == item::GEMS) {
            assert!((1..=999).contains(&instance.record.operand));
        }
        for instance in pool.iter().filter(|i| i.name == item::EXP) {
            assert!((1..=9999).contains(&instance.record.operand));
        }

        let gem_count = pool.iter().filter(|i| i.name == item::GEMS).count();
        assert_eq!(gem_count, GEM_VALUES_VANILLA.len());
        let exp_count = pool.iter().filter(|i| i.name == item::EXP).count();
        assert_eq!(exp_count, EXP_VALUES_VANILLA.len());
    }

    #[test]
    fn test_instance_with_operand_leaves_source_untouched() {
        let catalog = Catalog::new();
        let gems = RewardInstance::new(item::GEMS, template(&catalog, item::GEMS));

        let assigned = gems.with_operand(555);

        assert_eq!(gems.record.operand, 100);
        assert_eq!(assigned.record.operand, 555);
        assert_eq!(assigned.record.kind, RewardKind::GEMS);
        assert_eq!(gems.code(), assigned.code());
    }
}
