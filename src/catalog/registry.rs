//! Reward catalog: the merged, immutable registry of every reward.
//!
//! The catalog merges the static category tables into one master table at
//! startup. Merging fails with [`LogicError::DuplicateKey`] if two
//! categories claim the same name - a silent overwrite would corrupt pool
//! counts and rule references. Entries keep table order so pool
//! construction is deterministic.

use rustc_hash::FxHashMap;

use crate::error::LogicError;
use crate::names::{group, item};

use super::record::{RewardKind, RewardRecord};
use super::tables;

/// Registry of reward records.
///
/// Built once from the static tables and read-only afterwards.
///
/// ## Example
///
/// ```
/// use blazer_logic::catalog::Catalog;
/// use blazer_logic::names::item;
///
/// let catalog = Catalog::new();
///
/// let sword = catalog.lookup(item::ZANTETSU_SWORD).unwrap();
/// assert!(sword.is_progression());
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    /// (name, record) pairs in table order.
    entries: Vec<(&'static str, RewardRecord)>,
    /// Name to entry-position index.
    index: FxHashMap<&'static str, usize>,
    /// Item-group membership, group name to member names.
    groups: FxHashMap<&'static str, Vec<&'static str>>,
}

impl Catalog {
    /// Build the catalog from the static tables.
    ///
    /// Panics if the tables are malformed; use [`Catalog::try_build`] to
    /// inspect the failure instead.
    #[must_use]
    pub fn new() -> Self {
        Self::try_build().expect("static reward tables are malformed")
    }

    /// Build the catalog, surfacing table-merge errors.
    pub fn try_build() -> Result<Self, LogicError> {
        let mut catalog = Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
            groups: FxHashMap::default(),
        };

        let categories: &[&[(&str, RewardRecord)]] = &[
            tables::SWORDS,
            tables::ARMORS,
            tables::SPELLS,
            tables::KEY_ITEMS,
            tables::EMBLEMS,
            tables::REDHOTS,
            tables::STONES,
            tables::MISC,
            tables::SOULS,
            tables::SPECIAL,
        ];

        let mut expected = 0;
        for table in categories {
            expected += table.len();
            for (name, record) in table.iter() {
                catalog.insert(name, *record)?;
            }
        }

        expected += tables::NPC_RELEASES.len();
        for (lair, (name, classification)) in tables::NPC_RELEASES.iter().enumerate() {
            let record =
                RewardRecord::new(RewardKind::LAIR_RELEASE, lair as u16, *classification);
            catalog.insert(name, record)?;
        }

        // Per-insert duplicate checks make a length mismatch impossible;
        // this guards the merge against a future refactor dropping them.
        assert_eq!(
            catalog.entries.len(),
            expected,
            "merged table length must equal the sum of category table lengths"
        );

        catalog.build_groups();

        Ok(catalog)
    }

    fn insert(&mut self, name: &'static str, record: RewardRecord) -> Result<(), LogicError> {
        if self.index.contains_key(name) {
            return Err(LogicError::DuplicateKey {
                name: name.to_string(),
            });
        }
        self.index.insert(name, self.entries.len());
        self.entries.push((name, record));
        Ok(())
    }

    fn build_groups(&mut self) {
        let group_tables: &[(&str, &[(&str, RewardRecord)])] = &[
            (group::SWORDS, tables::SWORDS),
            (group::ARMORS, tables::ARMORS),
            (group::MAGIC, tables::SPELLS),
            (group::STONES, tables::STONES),
            (group::EMBLEMS, tables::EMBLEMS),
            (group::REDHOTS, tables::REDHOTS),
            (group::SOULS, tables::SOULS),
        ];

        for (group_name, table) in group_tables {
            let members = table.iter().map(|(name, _)| *name).collect();
            self.groups.insert(group_name, members);
        }
    }

    /// Look up a reward record by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RewardRecord> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    /// Look up a reward record by name, failing on unknown names.
    ///
    /// An unknown name is a data-table authoring bug at the call site.
    pub fn lookup(&self, name: &str) -> Result<&RewardRecord, LogicError> {
        self.get(name).ok_or_else(|| LogicError::UnknownReward {
            name: name.to_string(),
        })
    }

    /// Check if a name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Get the number of registered rewards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all (name, record) pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &RewardRecord)> {
        self.entries.iter().map(|(name, record)| (*name, record))
    }

    /// Iterate over the rewards placed exactly once per world, in table
    /// order: everything except repeatables and the victory token.
    pub fn unique_rewards(&self) -> impl Iterator<Item = (&'static str, &RewardRecord)> {
        self.iter()
            .filter(|(name, _)| !Self::is_repeatable(name) && *name != item::VICTORY)
    }

    /// Whether a name may appear more than once in a pool.
    #[must_use]
    pub fn is_repeatable(name: &str) -> bool {
        tables::REPEATABLE_REWARDS.contains(&name)
    }

    /// Get the members of an item group.
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&[&'static str]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    /// Iterate over all (group name, members) pairs.
    pub fn groups(&self) -> impl Iterator<Item = (&'static str, &[&'static str])> {
        self.groups.iter().map(|(name, members)| (*name, members.as_slice()))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Classification;
    use crate::names::npc;

    #[test]
    fn test_lookup_known_names() {
        let catalog = Catalog::new();

        let sword = catalog.lookup(item::SOUL_BLADE).unwrap();
        assert_eq!(sword.kind, RewardKind::SOUL_BLADE);
        assert_eq!(sword.operand, 0);

        let soul = catalog.lookup(item::SOUL_OF_REALITY).unwrap();
        assert_eq!(soul.kind, RewardKind::SOUL);
        assert_eq!(soul.operand, 0x04);
    }

    #[test]
    fn test_lookup_unknown_name_fails() {
        let catalog = Catalog::new();

        let err = catalog.lookup("Moonberry").unwrap_err();
        assert_eq!(
            err,
            LogicError::UnknownReward {
                name: "Moonberry".to_string()
            }
        );
    }

    #[test]
    fn test_npc_releases_get_sequential_lairs() {
        let catalog = Catalog::new();

        let first = catalog.lookup(npc::OLD_WOMAN).unwrap();
        assert_eq!(first.kind, RewardKind::LAIR_RELEASE);
        assert_eq!(first.operand, 0);

        let last = catalog.lookup(npc::KING_MAGRIDD).unwrap();
        assert_eq!(last.kind, RewardKind::LAIR_RELEASE);
        assert_eq!(last.operand, (tables::NPC_RELEASES.len() - 1) as u16);
    }

    #[test]
    fn test_merged_length_is_sum_of_categories() {
        let catalog = Catalog::new();

        let expected = tables::SWORDS.len()
            + tables::ARMORS.len()
            + tables::SPELLS.len()
            + tables::KEY_ITEMS.len()
            + tables::EMBLEMS.len()
            + tables::REDHOTS.len()
            + tables::STONES.len()
            + tables::MISC.len()
            + tables::SOULS.len()
            + tables::SPECIAL.len()
            + tables::NPC_RELEASES.len();

        assert_eq!(catalog.len(), expected);
    }

    #[test]
    fn test_unique_rewards_exclude_repeatables_and_victory() {
        let catalog = Catalog::new();

        let unique: Vec<_> = catalog.unique_rewards().map(|(name, _)| name).collect();
        assert!(!unique.contains(&item::MEDICAL_HERB));
        assert!(!unique.contains(&item::GEMS));
        assert!(!unique.contains(&item::VICTORY));
        assert!(unique.contains(&item::SOUL_BLADE));
        assert!(unique.contains(&npc::KING_MAGRIDD));

        assert_eq!(
            unique.len(),
            catalog.len() - tables::REPEATABLE_REWARDS.len() - 1
        );
    }

    #[test]
    fn test_groups_match_category_tables() {
        let catalog = Catalog::new();

        let stones = catalog.group(group::STONES).unwrap();
        assert_eq!(stones.len(), 6);
        assert!(stones.contains(&item::BROWN_STONE));

        let magic = catalog.group(group::MAGIC).unwrap();
        assert_eq!(magic.len(), 8);
        assert!(magic.contains(&item::PHOENIX));

        assert!(catalog.group("weapons").is_none());
    }

    #[test]
    fn test_duplicate_insert_fails() {
        let mut catalog = Catalog::new();

        let record = RewardRecord::new(RewardKind::VICTORY, 0, Classification::Progression);
        let err = catalog.insert(item::VICTORY, record).unwrap_err();
        assert_eq!(
            err,
            LogicError::DuplicateKey {
                name: item::VICTORY.to_string()
            }
        );
    }

    #[test]
    fn test_iteration_order_is_table_order() {
        let catalog = Catalog::new();

        let names: Vec<_> = catalog.iter().map(|(name, _)| name).take(3).collect();
        assert_eq!(
            names,
            vec![item::LIFE_SWORD, item::PSYCHO_SWORD, item::CRITICAL_SWORD]
        );
    }
}
