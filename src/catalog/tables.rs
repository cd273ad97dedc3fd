//! Static category tables.
//!
//! One table per reward category; the registry merges them and fails on any
//! name collision. NPC releases carry only a classification here - their
//! lair operand is the table position, assigned at merge time.

use crate::names::{item, npc};

use super::record::{Classification, RewardKind, RewardRecord};

const fn prog(kind: RewardKind) -> RewardRecord {
    RewardRecord::new(kind, 0, Classification::Progression)
}

const fn useful(kind: RewardKind) -> RewardRecord {
    RewardRecord::new(kind, 0, Classification::Useful)
}

const fn filler(kind: RewardKind) -> RewardRecord {
    RewardRecord::new(kind, 0, Classification::Filler)
}

const fn soul(index: u16, classification: Classification) -> RewardRecord {
    RewardRecord::new(RewardKind::SOUL, index, classification)
}

pub(crate) const SWORDS: &[(&str, RewardRecord)] = &[
    (item::LIFE_SWORD, prog(RewardKind::LIFE_SWORD)),
    (item::PSYCHO_SWORD, prog(RewardKind::PSYCHO_SWORD)),
    (item::CRITICAL_SWORD, prog(RewardKind::CRITICAL_SWORD)),
    (item::LUCKY_BLADE, prog(RewardKind::LUCKY_BLADE)),
    (item::ZANTETSU_SWORD, prog(RewardKind::ZANTETSU_SWORD)),
    (item::SPIRIT_SWORD, prog(RewardKind::SPIRIT_SWORD)),
    (item::RECOVERY_SWORD, prog(RewardKind::RECOVERY_SWORD)),
    (item::SOUL_BLADE, prog(RewardKind::SOUL_BLADE)),
];

pub(crate) const ARMORS: &[(&str, RewardRecord)] = &[
    (item::IRON_ARMOR, useful(RewardKind::IRON_ARMOR)),
    (item::ICE_ARMOR, prog(RewardKind::ICE_ARMOR)),
    (item::BUBBLE_ARMOR, prog(RewardKind::BUBBLE_ARMOR)),
    (item::MAGIC_ARMOR, useful(RewardKind::MAGIC_ARMOR)),
    (item::MYSTIC_ARMOR, useful(RewardKind::MYSTIC_ARMOR)),
    (item::LIGHT_ARMOR, useful(RewardKind::LIGHT_ARMOR)),
    (item::ELEMENTAL_ARMOR, useful(RewardKind::ELEMENTAL_ARMOR)),
    (item::SOUL_ARMOR, prog(RewardKind::SOUL_ARMOR)),
];

/// Castable spells plus the Phoenix summon.
pub(crate) const SPELLS: &[(&str, RewardRecord)] = &[
    (item::FLAME_BALL, prog(RewardKind::FLAME_BALL)),
    (item::LIGHT_ARROW, prog(RewardKind::LIGHT_ARROW)),
    (item::MAGIC_FLARE, prog(RewardKind::MAGIC_FLARE)),
    (item::ROTATOR, prog(RewardKind::ROTATOR)),
    (item::SPARK_BOMB, prog(RewardKind::SPARK_BOMB)),
    (item::FLAME_PILLAR, prog(RewardKind::FLAME_PILLAR)),
    (item::TORNADO, prog(RewardKind::TORNADO)),
    (item::PHOENIX, prog(RewardKind::PHOENIX)),
];

pub(crate) const EMBLEMS: &[(&str, RewardRecord)] = &[
    (item::EMBLEM_A, prog(RewardKind::EMBLEM_A)),
    (item::EMBLEM_B, prog(RewardKind::EMBLEM_B)),
    (item::EMBLEM_C, prog(RewardKind::EMBLEM_C)),
    (item::EMBLEM_D, prog(RewardKind::EMBLEM_D)),
    (item::EMBLEM_E, prog(RewardKind::EMBLEM_E)),
    (item::EMBLEM_F, prog(RewardKind::EMBLEM_F)),
    (item::EMBLEM_G, prog(RewardKind::EMBLEM_G)),
    (item::EMBLEM_H, prog(RewardKind::EMBLEM_H)),
];

pub(crate) const REDHOTS: &[(&str, RewardRecord)] = &[
    (item::RED_HOT_MIRROR, prog(RewardKind::RED_HOT_MIRROR)),
    (item::RED_HOT_BALL, prog(RewardKind::RED_HOT_BALL)),
    (item::RED_HOT_STICK, prog(RewardKind::RED_HOT_STICK)),
];

pub(crate) const STONES: &[(&str, RewardRecord)] = &[
    (item::BROWN_STONE, prog(RewardKind::BROWN_STONE)),
    (item::GREEN_STONE, prog(RewardKind::GREEN_STONE)),
    (item::BLUE_STONE, prog(RewardKind::BLUE_STONE)),
    (item::SILVER_STONE, prog(RewardKind::SILVER_STONE)),
    (item::PURPLE_STONE, prog(RewardKind::PURPLE_STONE)),
    (item::BLACK_STONE, prog(RewardKind::BLACK_STONE)),
];

pub(crate) const KEY_ITEMS: &[(&str, RewardRecord)] = &[
    (item::GOATS_FOOD, useful(RewardKind::GOATS_FOOD)),
    (item::HARP_STRING, prog(RewardKind::HARP_STRING)),
    (item::PASS, prog(RewardKind::PASS)),
    (item::DREAM_ROD, prog(RewardKind::DREAM_ROD)),
    (item::LEOS_BRUSH, prog(RewardKind::LEOS_BRUSH)),
    (item::TURBOS_LEAVES, prog(RewardKind::TURBOS_LEAVES)),
    (item::MOLES_RIBBON, prog(RewardKind::MOLES_RIBBON)),
    (item::BIG_PEARL, prog(RewardKind::BIG_PEARL)),
    (item::MERMAIDS_TEARS, prog(RewardKind::MERMAIDS_TEARS)),
    (item::MUSHROOM_SHOES, prog(RewardKind::MUSHROOM_SHOES)),
    (item::AIRSHIP_KEY, prog(RewardKind::AIRSHIP_KEY)),
    (item::THUNDER_RING, prog(RewardKind::THUNDER_RING)),
    (item::DELICIOUS_SEEDS, prog(RewardKind::DELICIOUS_SEEDS)),
    (item::ACTINIDIA_LEAVES, prog(RewardKind::ACTINIDIA_LEAVES)),
    (item::DOOR_KEY, prog(RewardKind::DOOR_KEY)),
    (item::PLATINUM_CARD, prog(RewardKind::PLATINUM_CARD)),
    (item::VIP_CARD, prog(RewardKind::VIP_CARD)),
    (item::POWER_BRACELET, useful(RewardKind::POWER_BRACELET)),
    (item::SHIELD_BRACELET, useful(RewardKind::SHIELD_BRACELET)),
    (item::SUPER_BRACELET, useful(RewardKind::SUPER_BRACELET)),
    (item::MAGIC_BELL, useful(RewardKind::MAGIC_BELL)),
];

/// Repeatable rewards. Gems/Exp operands here are pool templates; placed
/// instances get their quantity assigned at pool-construction time.
pub(crate) const MISC: &[(&str, RewardRecord)] = &[
    (item::MEDICAL_HERB, filler(RewardKind::MEDICAL_HERB)),
    (item::STRANGE_BOTTLE, filler(RewardKind::STRANGE_BOTTLE)),
    (item::NOTHING, filler(RewardKind::NOTHING)),
    (item::GEMS, RewardRecord::new(RewardKind::GEMS, 100, Classification::Filler)),
    (item::EXP, RewardRecord::new(RewardKind::EXP, 250, Classification::Filler)),
];

pub(crate) const SOULS: &[(&str, RewardRecord)] = &[
    (item::SOUL_OF_MAGICIAN, soul(0x00, Classification::Progression)),
    (item::SOUL_OF_LIGHT, soul(0x01, Classification::Progression)),
    (item::SOUL_OF_SHIELD, soul(0x02, Classification::Useful)),
    (item::SOUL_OF_DETECTION, soul(0x03, Classification::Useful)),
    (item::SOUL_OF_REALITY, soul(0x04, Classification::Progression)),
];

pub(crate) const SPECIAL: &[(&str, RewardRecord)] =
    &[(item::VICTORY, prog(RewardKind::VICTORY))];

/// Names that may appear more than once in a pool.
pub(crate) const REPEATABLE_REWARDS: &[&str] = &[
    item::MEDICAL_HERB,
    item::STRANGE_BOTTLE,
    item::NOTHING,
    item::GEMS,
    item::EXP,
];

/// NPC-release rewards in lair order; the lair operand is the position in
/// this table.
pub(crate) const NPC_RELEASES: &[(&str, Classification)] = &[
    (npc::OLD_WOMAN, Classification::Progression),
    (npc::TOOL_SHOP_OWNER, Classification::Progression),
    (npc::TULIP, Classification::Filler),
    (npc::BRIDGE_GUARD, Classification::Progression),
    (npc::VILLAGE_CHIEF, Classification::Progression),
    (npc::IVY_CHEST_ROOM, Classification::Progression),
    (npc::WATER_MILL, Classification::Progression),
    (npc::GOAT_HERB, Classification::Progression),
    (npc::LISA, Classification::Progression),
    (npc::TULIP2, Classification::Filler),
    (npc::ARCHITECT, Classification::Progression),
    (npc::IVY, Classification::Progression),
    (npc::GOAT, Classification::Progression),
    (npc::TEDDY, Classification::Progression),
    (npc::TULIP3, Classification::Filler),
    (npc::LEOS_HOUSE, Classification::Progression),
    (npc::LONELY_GOAT, Classification::Filler),
    (npc::TULIP_PASS, Classification::Progression),
    (npc::BOY_CABIN, Classification::Filler),
    (npc::BOY_CAVE, Classification::Progression),
    (npc::OLD_MAN, Classification::Filler),
    (npc::OLD_MAN2, Classification::Filler),
    (npc::IVY2, Classification::Filler),
    (npc::IVY_EMBLEM_A, Classification::Progression),
    (npc::IVY_RECOVERY_SWORD, Classification::Progression),
    (npc::TULIP4, Classification::Filler),
    (npc::GOAT2, Classification::Filler),
    (npc::BIRD_RED_HOT_MIRROR, Classification::Progression),
    (npc::BIRD, Classification::Filler),
    (npc::DOG, Classification::Filler),
    (npc::DOG2, Classification::Filler),
    (npc::DOG3, Classification::Progression),
    (npc::MOLE_SHIELD_BRACELET, Classification::Progression),
    (npc::SQUIRREL_EMBLEM_C, Classification::Progression),
    (npc::SQUIRREL_PSYCHO_SWORD, Classification::Progression),
    (npc::BIRD2, Classification::Filler),
    (npc::MOLE_SOUL_OF_LIGHT, Classification::Progression),
    (npc::DEER, Classification::Progression),
    (npc::CROCODILE, Classification::Progression),
    (npc::SQUIRREL, Classification::Filler),
    (npc::GREENWOODS_GUARDIAN, Classification::Progression),
    (npc::MOLE, Classification::Progression),
    (npc::DOG4, Classification::Filler),
    (npc::SQUIRREL_ICE_ARMOR, Classification::Progression),
    (npc::SQUIRREL2, Classification::Filler),
    (npc::DOG5, Classification::Filler),
    (npc::CROCODILE2, Classification::Progression),
    (npc::MOLE2, Classification::Filler),
    (npc::SQUIRREL3, Classification::Progression),
    (npc::BIRD_GREENWOOD_LEAF, Classification::Progression),
    (npc::MOLE3, Classification::Progression),
    (npc::DEER_MAGIC_BELL, Classification::Progression),
    (npc::BIRD3, Classification::Filler),
    (npc::CROCODILE3, Classification::Progression),
    (npc::MONMO, Classification::Progression),
    (npc::DOLPHIN, Classification::Filler),
    (npc::ANGELFISH, Classification::Filler),
    (npc::MERMAID, Classification::Progression),
    (npc::ANGELFISH2, Classification::Filler),
    (npc::MERMAID_PEARL, Classification::Progression),
    (npc::MERMAID2, Classification::Filler),
    (npc::DOLPHIN_SAVES_LUE, Classification::Progression),
    (npc::MERMAID_STATUE_BLESTER, Classification::Progression),
    (npc::MERMAID_RED_HOT_STICK, Classification::Progression),
    (npc::LUE, Classification::Progression),
    (npc::MERMAID3, Classification::Filler),
    (npc::MERMAID_NANA, Classification::Filler),
    (npc::MERMAID4, Classification::Filler),
    (npc::DOLPHIN2, Classification::Progression),
    (npc::MERMAID_STATUE_ROCKBIRD, Classification::Progression),
    (npc::MERMAID_BUBBLE_ARMOR, Classification::Progression),
    (npc::MERMAID5, Classification::Filler),
    (npc::MERMAID6, Classification::Filler),
    (npc::MERMAID_TEARS, Classification::Filler),
    (npc::MERMAID_STATUE_DUREAN, Classification::Progression),
    (npc::ANGELFISH3, Classification::Filler),
    (npc::ANGELFISH_SOUL_OF_SHIELD, Classification::Progression),
    (npc::MERMAID_MAGIC_FLARE, Classification::Progression),
    (npc::MERMAID_QUEEN, Classification::Progression),
    (npc::MERMAID_STATUE_GHOST_SHIP, Classification::Progression),
    (npc::DOLPHIN_SECRET_CAVE, Classification::Progression),
    (npc::MERMAID7, Classification::Filler),
    (npc::ANGELFISH4, Classification::Filler),
    (npc::MERMAID8, Classification::Filler),
    (npc::DOLPHIN_PEARL, Classification::Progression),
    (npc::MERMAID9, Classification::Filler),
    (npc::GRANDPA, Classification::Progression),
    (npc::GIRL, Classification::Filler),
    (npc::MUSHROOM, Classification::Filler),
    (npc::BOY, Classification::Progression),
    (npc::GRANDPA2, Classification::Filler),
    (npc::SNAIL_JOCKEY, Classification::Filler),
    (npc::NOME, Classification::Progression),
    (npc::BOY2, Classification::Filler),
    (npc::MUSHROOM_EMBLEM_F, Classification::Progression),
    (npc::DANCING_GRANDMA, Classification::Progression),
    (npc::DANCING_GRANDMA2, Classification::Progression),
    (npc::SNAIL_EMBLEM_E, Classification::Progression),
    (npc::BOY_MUSHROOM_SHOES, Classification::Progression),
    (npc::GRANDMA, Classification::Filler),
    (npc::GIRL2, Classification::Filler),
    (npc::MUSHROOM2, Classification::Progression),
    (npc::SNAIL_RACER, Classification::Filler),
    (npc::SNAIL_RACER2, Classification::Filler),
    (npc::GIRL3, Classification::Progression),
    (npc::MUSHROOM3, Classification::Filler),
    (npc::SNAIL, Classification::Filler),
    (npc::GRANDPA3, Classification::Progression),
    (npc::SNAIL2, Classification::Filler),
    (npc::GRANDPA4, Classification::Progression),
    (npc::GRANDPA_LUNE, Classification::Progression),
    (npc::GRANDPA5, Classification::Progression),
    (npc::MOUNTAIN_KING, Classification::Progression),
    (npc::PLANT_HERB, Classification::Progression),
    (npc::PLANT, Classification::Filler),
    (npc::CHEST_OF_DRAWERS_MYSTIC_ARMOR, Classification::Progression),
    (npc::CAT, Classification::Progression),
    (npc::GREAT_DOOR_ZANTETSU_SWORD, Classification::Progression),
    (npc::CAT2, Classification::Progression),
    (npc::GREAT_DOOR, Classification::Progression),
    (npc::CAT3, Classification::Filler),
    (npc::MODEL_TOWN1, Classification::Progression),
    (npc::GREAT_DOOR_MODEL_TOWNS, Classification::Progression),
    (npc::STEPS_UPSTAIRS, Classification::Progression),
    (npc::CAT_DOOR_KEY, Classification::Progression),
    (npc::MOUSE, Classification::Progression),
    (npc::MARIE, Classification::Progression),
    (npc::DOLL, Classification::Filler),
    (npc::CHEST_OF_DRAWERS, Classification::Filler),
    (npc::PLANT2, Classification::Filler),
    (npc::MOUSE2, Classification::Filler),
    (npc::MOUSE_SPARK_BOMB, Classification::Progression),
    (npc::MOUSE3, Classification::Filler),
    (npc::GREAT_DOOR_SOUL_OF_DETECTION, Classification::Progression),
    (npc::MODEL_TOWN2, Classification::Progression),
    (npc::MOUSE4, Classification::Filler),
    (npc::STEPS_MARIE, Classification::Progression),
    (npc::CHEST_OF_DRAWERS2, Classification::Progression),
    (npc::PLANT_ACTINIDIA_LEAVES, Classification::Progression),
    (npc::MOUSE5, Classification::Filler),
    (npc::CAT4, Classification::Filler),
    (npc::STAIRS_POWER_PLANT, Classification::Progression),
    (npc::SOLDIER, Classification::Filler),
    (npc::SOLDIER2, Classification::Filler),
    (npc::SOLDIER3, Classification::Filler),
    (npc::SOLDIER_ELEMENTAL_MAIL, Classification::Progression),
    (npc::SOLDIER4, Classification::Filler),
    (npc::SOLDIER5, Classification::Filler),
    (npc::SINGER_CONCERT_HALL, Classification::Progression),
    (npc::SOLDIER6, Classification::Filler),
    (npc::MAID, Classification::Filler),
    (npc::SOLDIER_LEFT_TOWER, Classification::Progression),
    (npc::SOLDIER_DOK, Classification::Progression),
    (npc::SOLDIER_PLATINUM_CARD, Classification::Progression),
    (npc::SINGER, Classification::Filler),
    (npc::SOLDIER_SOUL_OF_REALITY, Classification::Progression),
    (npc::MAID2, Classification::Filler),
    (npc::QUEEN_MAGRIDD, Classification::Progression),
    (npc::SOLDIER_WITH_LEO, Classification::Progression),
    (npc::SOLDIER_RIGHT_TOWER, Classification::Progression),
    (npc::DR_LEO, Classification::Progression),
    (npc::SOLDIER7, Classification::Filler),
    (npc::SOLDIER8, Classification::Filler),
    (npc::MAID_HERB, Classification::Progression),
    (npc::SOLDIER_CASTLE, Classification::Progression),
    (npc::SOLDIER9, Classification::Filler),
    (npc::SOLDIER10, Classification::Filler),
    (npc::SOLDIER11, Classification::Filler),
    (npc::KING_MAGRIDD, Classification::Progression),
];
