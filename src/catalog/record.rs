//! Reward records - static reward identity data.
//!
//! `RewardRecord` holds the immutable identity of a reward: its kind, a
//! secondary numeric operand, and its progression classification. Records
//! are defined once in the static tables; a placed copy is a
//! [`RewardInstance`](super::pool::RewardInstance).
//!
//! ## Codes
//!
//! Every record derives a globally unique numeric code used as the
//! cross-system identifier by the surrounding multiworld infrastructure.
//! For most kinds the code is `BASE_CODE + kind`; NPC releases and soul
//! upgrades are families sharing one kind, so their operand (lair index,
//! soul index) is folded in behind a family offset instead. Codes are a
//! pure function of (kind, operand) and never collide across distinct
//! pairs.

use serde::{Deserialize, Serialize};

/// Base of the engine's code space.
pub const BASE_CODE: u64 = 0x0500_0000;

/// Offset of the NPC-release code family above [`BASE_CODE`].
pub const LAIR_CODE_OFFSET: u64 = 0x0100;

/// Offset of the soul-upgrade code family above [`BASE_CODE`].
pub const SOUL_CODE_OFFSET: u64 = 0x0300;

/// Reward kind identifier.
///
/// Per-item kinds for equipment, spells, and key items; `LAIR_RELEASE`,
/// `SOUL`, `GEMS`, and `EXP` are parameterized kinds whose operand selects
/// the concrete reward or quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RewardKind(pub u16);

impl RewardKind {
    // Swords
    pub const LIFE_SWORD: RewardKind = RewardKind(0x00);
    pub const PSYCHO_SWORD: RewardKind = RewardKind(0x01);
    pub const CRITICAL_SWORD: RewardKind = RewardKind(0x02);
    pub const LUCKY_BLADE: RewardKind = RewardKind(0x03);
    pub const ZANTETSU_SWORD: RewardKind = RewardKind(0x04);
    pub const SPIRIT_SWORD: RewardKind = RewardKind(0x05);
    pub const RECOVERY_SWORD: RewardKind = RewardKind(0x06);
    pub const SOUL_BLADE: RewardKind = RewardKind(0x07);

    // Armors
    pub const IRON_ARMOR: RewardKind = RewardKind(0x08);
    pub const ICE_ARMOR: RewardKind = RewardKind(0x09);
    pub const BUBBLE_ARMOR: RewardKind = RewardKind(0x0A);
    pub const MAGIC_ARMOR: RewardKind = RewardKind(0x0B);
    pub const MYSTIC_ARMOR: RewardKind = RewardKind(0x0C);
    pub const LIGHT_ARMOR: RewardKind = RewardKind(0x0D);
    pub const ELEMENTAL_ARMOR: RewardKind = RewardKind(0x0E);
    pub const SOUL_ARMOR: RewardKind = RewardKind(0x0F);

    // Spells
    pub const FLAME_BALL: RewardKind = RewardKind(0x10);
    pub const LIGHT_ARROW: RewardKind = RewardKind(0x11);
    pub const MAGIC_FLARE: RewardKind = RewardKind(0x12);
    pub const ROTATOR: RewardKind = RewardKind(0x13);
    pub const SPARK_BOMB: RewardKind = RewardKind(0x14);
    pub const FLAME_PILLAR: RewardKind = RewardKind(0x15);
    pub const TORNADO: RewardKind = RewardKind(0x16);
    pub const PHOENIX: RewardKind = RewardKind(0x17);

    // Key items and consumables
    pub const GOATS_FOOD: RewardKind = RewardKind(0x18);
    pub const HARP_STRING: RewardKind = RewardKind(0x19);
    pub const PASS: RewardKind = RewardKind(0x1A);
    pub const DREAM_ROD: RewardKind = RewardKind(0x1B);
    pub const LEOS_BRUSH: RewardKind = RewardKind(0x1C);
    pub const TURBOS_LEAVES: RewardKind = RewardKind(0x1D);
    pub const MOLES_RIBBON: RewardKind = RewardKind(0x1E);
    pub const BIG_PEARL: RewardKind = RewardKind(0x1F);
    pub const MERMAIDS_TEARS: RewardKind = RewardKind(0x20);
    pub const MUSHROOM_SHOES: RewardKind = RewardKind(0x21);
    pub const AIRSHIP_KEY: RewardKind = RewardKind(0x22);
    pub const THUNDER_RING: RewardKind = RewardKind(0x23);
    pub const DELICIOUS_SEEDS: RewardKind = RewardKind(0x24);
    pub const ACTINIDIA_LEAVES: RewardKind = RewardKind(0x25);
    pub const DOOR_KEY: RewardKind = RewardKind(0x26);
    pub const PLATINUM_CARD: RewardKind = RewardKind(0x27);
    pub const VIP_CARD: RewardKind = RewardKind(0x28);

    // Emblems
    pub const EMBLEM_A: RewardKind = RewardKind(0x29);
    pub const EMBLEM_B: RewardKind = RewardKind(0x2A);
    pub const EMBLEM_C: RewardKind = RewardKind(0x2B);
    pub const EMBLEM_D: RewardKind = RewardKind(0x2C);
    pub const EMBLEM_E: RewardKind = RewardKind(0x2D);
    pub const EMBLEM_F: RewardKind = RewardKind(0x2E);
    pub const EMBLEM_G: RewardKind = RewardKind(0x2F);
    pub const EMBLEM_H: RewardKind = RewardKind(0x30);

    // Red-hot items
    pub const RED_HOT_MIRROR: RewardKind = RewardKind(0x31);
    pub const RED_HOT_BALL: RewardKind = RewardKind(0x32);
    pub const RED_HOT_STICK: RewardKind = RewardKind(0x33);

    // Bracelets
    pub const POWER_BRACELET: RewardKind = RewardKind(0x34);
    pub const SHIELD_BRACELET: RewardKind = RewardKind(0x35);
    pub const SUPER_BRACELET: RewardKind = RewardKind(0x36);

    // Repeatable consumables
    pub const MEDICAL_HERB: RewardKind = RewardKind(0x37);
    pub const STRANGE_BOTTLE: RewardKind = RewardKind(0x38);

    // Stones
    pub const BROWN_STONE: RewardKind = RewardKind(0x39);
    pub const GREEN_STONE: RewardKind = RewardKind(0x3A);
    pub const BLUE_STONE: RewardKind = RewardKind(0x3B);
    pub const SILVER_STONE: RewardKind = RewardKind(0x3C);
    pub const PURPLE_STONE: RewardKind = RewardKind(0x3D);
    pub const BLACK_STONE: RewardKind = RewardKind(0x3E);

    pub const MAGIC_BELL: RewardKind = RewardKind(0x3F);

    // Parameterized kinds
    pub const NOTHING: RewardKind = RewardKind(0x40);
    pub const GEMS: RewardKind = RewardKind(0x41);
    pub const EXP: RewardKind = RewardKind(0x42);
    pub const LAIR_RELEASE: RewardKind = RewardKind(0x50);
    pub const SOUL: RewardKind = RewardKind(0x51);
    pub const VICTORY: RewardKind = RewardKind(0x52);

    /// Get the raw kind value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for RewardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Reward({:#04x})", self.0)
    }
}

/// Whether a reward matters for completion logic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// Required by some access rule.
    Progression,
    /// Helpful but never required.
    Useful,
    /// Irrelevant filler.
    Filler,
}

/// Static reward identity record.
///
/// Immutable once defined. The operand carries the granted quantity for
/// `GEMS`/`EXP`, the lair index for `LAIR_RELEASE`, the soul index for
/// `SOUL`, and is zero otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardRecord {
    /// Reward kind.
    pub kind: RewardKind,
    /// Secondary numeric payload (quantity or sub-identifier).
    pub operand: u16,
    /// Progression classification.
    pub classification: Classification,
}

impl RewardRecord {
    /// Create a new reward record.
    #[must_use]
    pub const fn new(kind: RewardKind, operand: u16, classification: Classification) -> Self {
        Self {
            kind,
            operand,
            classification,
        }
    }

    /// The globally unique code identifying this record across systems.
    ///
    /// Injective over the (kind, operand) pairs defined by the static
    /// tables: NPC releases and souls fold the operand in behind their
    /// family offset; every other kind maps straight to `BASE_CODE + kind`,
    /// so overwriting a currency quantity never changes the reward's
    /// identity.
    #[must_use]
    pub fn code(&self) -> u64 {
        match self.kind {
            RewardKind::LAIR_RELEASE => BASE_CODE + LAIR_CODE_OFFSET + u64::from(self.operand),
            RewardKind::SOUL => BASE_CODE + SOUL_CODE_OFFSET + u64::from(self.operand),
            _ => BASE_CODE + u64::from(self.kind.raw()),
        }
    }

    /// Return a copy of this record with a different operand.
    ///
    /// Copy-on-write: the receiver is left untouched, so a table template
    /// shared by many holders is never mutated through one of them.
    #[must_use]
    pub const fn with_operand(&self, operand: u16) -> Self {
        Self {
            kind: self.kind,
            operand,
            classification: self.classification,
        }
    }

    /// Whether this reward is required for completion logic.
    #[must_use]
    pub fn is_progression(&self) -> bool {
        self.classification == Classification::Progression
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_for_plain_kind() {
        let record = RewardRecord::new(RewardKind::LIFE_SWORD, 0, Classification::Progression);
        assert_eq!(record.code(), BASE_CODE);

        let record = RewardRecord::new(RewardKind::VICTORY, 0, Classification::Progression);
        assert_eq!(record.code(), BASE_CODE + 0x52);
    }

    #[test]
    fn test_code_families_use_operand() {
        let release = RewardRecord::new(RewardKind::LAIR_RELEASE, 7, Classification::Progression);
        assert_eq!(release.code(), BASE_CODE + LAIR_CODE_OFFSET + 7);

        let soul = RewardRecord::new(RewardKind::SOUL, 4, Classification::Progression);
        assert_eq!(soul.code(), BASE_CODE + SOUL_CODE_OFFSET + 4);
    }

    #[test]
    fn test_currency_code_ignores_operand() {
        let template = RewardRecord::new(RewardKind::GEMS, 100, Classification::Filler);
        let randomized = template.with_operand(731);
        assert_eq!(template.code(), randomized.code());
    }

    #[test]
    fn test_code_is_stable() {
        let a = RewardRecord::new(RewardKind::SOUL, 2, Classification::Useful);
        let b = RewardRecord::new(RewardKind::SOUL, 2, Classification::Useful);
        assert_eq!(a.code(), b.code());
    }

    #[test]
    fn test_with_operand_is_copy_on_write() {
        let template = RewardRecord::new(RewardKind::EXP, 250, Classification::Filler);
        let assigned = template.with_operand(4000);

        assert_eq!(template.operand, 250);
        assert_eq!(assigned.operand, 4000);
        assert_eq!(assigned.kind, RewardKind::EXP);
        assert_eq!(assigned.classification, Classification::Filler);
    }

    #[test]
    fn test_record_serde() {
        let record = RewardRecord::new(RewardKind::SOUL, 1, Classification::Progression);
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: RewardRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
