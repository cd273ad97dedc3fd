//! Name constants for rewards, locations, and regions.
//!
//! Every string that crosses the engine boundary (catalog keys, rule-node
//! item lists, dependency-table keys, reachability queries) is defined here
//! exactly once. Rules and tables reference these constants rather than
//! repeating literals.

/// Reward names for equipment, spells, and key items.
pub mod item {
    // Swords
    pub const LIFE_SWORD: &str = "Life Sword";
    pub const PSYCHO_SWORD: &str = "Psycho Sword";
    pub const CRITICAL_SWORD: &str = "Critical Sword";
    pub const LUCKY_BLADE: &str = "Lucky Blade";
    pub const ZANTETSU_SWORD: &str = "Zantetsu Sword";
    pub const SPIRIT_SWORD: &str = "Spirit Sword";
    pub const RECOVERY_SWORD: &str = "Recovery Sword";
    pub const SOUL_BLADE: &str = "Soul Blade";

    // Armors
    pub const IRON_ARMOR: &str = "Iron Armor";
    pub const ICE_ARMOR: &str = "Ice Armor";
    pub const BUBBLE_ARMOR: &str = "Bubble Armor";
    pub const MAGIC_ARMOR: &str = "Magic Armor";
    pub const MYSTIC_ARMOR: &str = "Mystic Armor";
    pub const LIGHT_ARMOR: &str = "Light Armor";
    pub const ELEMENTAL_ARMOR: &str = "Elemental Armor";
    pub const SOUL_ARMOR: &str = "Soul Armor";

    // Spells
    pub const FLAME_BALL: &str = "Flame Ball";
    pub const LIGHT_ARROW: &str = "Light Arrow";
    pub const MAGIC_FLARE: &str = "Magic Flare";
    pub const ROTATOR: &str = "Rotator";
    pub const SPARK_BOMB: &str = "Spark Bomb";
    pub const FLAME_PILLAR: &str = "Flame Pillar";
    pub const TORNADO: &str = "Tornado";
    pub const PHOENIX: &str = "Phoenix";

    // Key items and consumables
    pub const GOATS_FOOD: &str = "Goat's Food";
    pub const HARP_STRING: &str = "Harp String";
    pub const PASS: &str = "Pass";
    pub const DREAM_ROD: &str = "Dream Rod";
    pub const LEOS_BRUSH: &str = "Leo's Brush";
    pub const TURBOS_LEAVES: &str = "Turbo's Leaves";
    pub const MOLES_RIBBON: &str = "Mole's Ribbon";
    pub const BIG_PEARL: &str = "Big Pearl";
    pub const MERMAIDS_TEARS: &str = "Mermaid's Tears";
    pub const MUSHROOM_SHOES: &str = "Mushroom Shoes";
    pub const AIRSHIP_KEY: &str = "Airship Key";
    pub const THUNDER_RING: &str = "Thunder Ring";
    pub const DELICIOUS_SEEDS: &str = "Delicious Seeds";
    pub const ACTINIDIA_LEAVES: &str = "Actinidia Leaves";
    pub const DOOR_KEY: &str = "Door Key";
    pub const PLATINUM_CARD: &str = "Platinum Card";
    pub const VIP_CARD: &str = "VIP Card";

    // Emblems
    pub const EMBLEM_A: &str = "Emblem A";
    pub const EMBLEM_B: &str = "Emblem B";
    pub const EMBLEM_C: &str = "Emblem C";
    pub const EMBLEM_D: &str = "Emblem D";
    pub const EMBLEM_E: &str = "Emblem E";
    pub const EMBLEM_F: &str = "Emblem F";
    pub const EMBLEM_G: &str = "Emblem G";
    pub const EMBLEM_H: &str = "Emblem H";

    // Red-hot items
    pub const RED_HOT_MIRROR: &str = "Red-Hot Mirror";
    pub const RED_HOT_BALL: &str = "Red-Hot Ball";
    pub const RED_HOT_STICK: &str = "Red-Hot Stick";

    // Bracelets
    pub const POWER_BRACELET: &str = "Power Bracelet";
    pub const SHIELD_BRACELET: &str = "Shield Bracelet";
    pub const SUPER_BRACELET: &str = "Super Bracelet";

    // Repeatable consumables
    pub const MEDICAL_HERB: &str = "Medical Herb";
    pub const STRANGE_BOTTLE: &str = "Strange Bottle";

    // Stones
    pub const BROWN_STONE: &str = "Brown Stone";
    pub const GREEN_STONE: &str = "Green Stone";
    pub const BLUE_STONE: &str = "Blue Stone";
    pub const SILVER_STONE: &str = "Silver Stone";
    pub const PURPLE_STONE: &str = "Purple Stone";
    pub const BLACK_STONE: &str = "Black Stone";

    pub const MAGIC_BELL: &str = "Magic Bell";

    // Miscellaneous repeatable rewards
    pub const NOTHING: &str = "Nothing";
    pub const GEMS: &str = "Gems";
    pub const EXP: &str = "Exp";

    // Soul upgrades
    pub const SOUL_OF_MAGICIAN: &str = "Soul of Magician";
    pub const SOUL_OF_LIGHT: &str = "Soul of Light";
    pub const SOUL_OF_SHIELD: &str = "Soul of Shield";
    pub const SOUL_OF_DETECTION: &str = "Soul of Detection";
    pub const SOUL_OF_REALITY: &str = "Soul of Reality";

    pub const VICTORY: &str = "Victory";
}

/// NPC-release reward names. Each names the token that releases one sealed
/// NPC; the parenthetical qualifier distinguishes NPCs that share a sprite.
pub mod npc {
    // Act 1 - Grass Valley
    pub const OLD_WOMAN: &str = "Old Woman";
    pub const TOOL_SHOP_OWNER: &str = "Tool Shop Owner";
    pub const TULIP: &str = "Tulip";
    pub const BRIDGE_GUARD: &str = "Bridge Guard";
    pub const VILLAGE_CHIEF: &str = "Village Chief";
    pub const IVY_CHEST_ROOM: &str = "Ivy (Chest Room)";
    pub const WATER_MILL: &str = "Water Mill";
    pub const GOAT_HERB: &str = "Goat (Herb)";
    pub const LISA: &str = "Lisa";
    pub const TULIP2: &str = "Tulip 2";
    pub const ARCHITECT: &str = "Architect";
    pub const IVY: &str = "Ivy";
    pub const GOAT: &str = "Goat";
    pub const TEDDY: &str = "Teddy";
    pub const TULIP3: &str = "Tulip 3";
    pub const LEOS_HOUSE: &str = "Leo's House";
    pub const LONELY_GOAT: &str = "Lonely Goat";
    pub const TULIP_PASS: &str = "Tulip (Pass)";
    pub const BOY_CABIN: &str = "Boy (Cabin)";
    pub const BOY_CAVE: &str = "Boy (Cave)";
    pub const OLD_MAN: &str = "Old Man";
    pub const OLD_MAN2: &str = "Old Man 2";
    pub const IVY2: &str = "Ivy 2";
    pub const IVY_EMBLEM_A: &str = "Ivy (Emblem A)";
    pub const IVY_RECOVERY_SWORD: &str = "Ivy (Recovery Sword)";
    pub const TULIP4: &str = "Tulip 4";
    pub const GOAT2: &str = "Goat 2";

    // Act 2 - Greenwood
    pub const BIRD_RED_HOT_MIRROR: &str = "Bird (Red-Hot Mirror)";
    pub const BIRD: &str = "Bird";
    pub const DOG: &str = "Dog";
    pub const DOG2: &str = "Dog 2";
    pub const DOG3: &str = "Dog 3";
    pub const MOLE_SHIELD_BRACELET: &str = "Mole (Shield Bracelet)";
    pub const SQUIRREL_EMBLEM_C: &str = "Squirrel (Emblem C)";
    pub const SQUIRREL_PSYCHO_SWORD: &str = "Squirrel (Psycho Sword)";
    pub const BIRD2: &str = "Bird 2";
    pub const MOLE_SOUL_OF_LIGHT: &str = "Mole (Soul of Light)";
    pub const DEER: &str = "Deer";
    pub const CROCODILE: &str = "Crocodile";
    pub const SQUIRREL: &str = "Squirrel";
    pub const GREENWOODS_GUARDIAN: &str = "Greenwood's Guardian";
    pub const MOLE: &str = "Mole";
    pub const DOG4: &str = "Dog 4";
    pub const SQUIRREL_ICE_ARMOR: &str = "Squirrel (Ice Armor)";
    pub const SQUIRREL2: &str = "Squirrel 2";
    pub const DOG5: &str = "Dog 5";
    pub const CROCODILE2: &str = "Crocodile 2";
    pub const MOLE2: &str = "Mole 2";
    pub const SQUIRREL3: &str = "Squirrel 3";
    pub const BIRD_GREENWOOD_LEAF: &str = "Bird (Greenwood Leaf)";
    pub const MOLE3: &str = "Mole 3";
    pub const DEER_MAGIC_BELL: &str = "Deer (Magic Bell)";
    pub const BIRD3: &str = "Bird 3";
    pub const CROCODILE3: &str = "Crocodile 3";
    pub const MONMO: &str = "Monmo";

    // Act 3 - St. Elles
    pub const DOLPHIN: &str = "Dolphin";
    pub const ANGELFISH: &str = "Angelfish";
    pub const MERMAID: &str = "Mermaid";
    pub const ANGELFISH2: &str = "Angelfish 2";
    pub const MERMAID_PEARL: &str = "Mermaid (Pearl)";
    pub const MERMAID2: &str = "Mermaid 2";
    pub const DOLPHIN_SAVES_LUE: &str = "Dolphin (Saves Lue)";
    pub const MERMAID_STATUE_BLESTER: &str = "Mermaid Statue (Blester)";
    pub const MERMAID_RED_HOT_STICK: &str = "Mermaid (Red-Hot Stick)";
    pub const LUE: &str = "Lue";
    pub const MERMAID3: &str = "Mermaid 3";
    pub const MERMAID_NANA: &str = "Mermaid (Nana)";
    pub const MERMAID4: &str = "Mermaid 4";
    pub const DOLPHIN2: &str = "Dolphin 2";
    pub const MERMAID_STATUE_ROCKBIRD: &str = "Mermaid Statue (Rockbird)";
    pub const MERMAID_BUBBLE_ARMOR: &str = "Mermaid (Bubble Armor)";
    pub const MERMAID5: &str = "Mermaid 5";
    pub const MERMAID6: &str = "Mermaid 6";
    pub const MERMAID_TEARS: &str = "Mermaid (Tears)";
    pub const MERMAID_STATUE_DUREAN: &str = "Mermaid Statue (Durean)";
    pub const ANGELFISH3: &str = "Angelfish 3";
    pub const ANGELFISH_SOUL_OF_SHIELD: &str = "Angelfish (Soul of Shield)";
    pub const MERMAID_MAGIC_FLARE: &str = "Mermaid (Magic Flare)";
    pub const MERMAID_QUEEN: &str = "Mermaid Queen";
    pub const MERMAID_STATUE_GHOST_SHIP: &str = "Mermaid Statue (Ghost Ship)";
    pub const DOLPHIN_SECRET_CAVE: &str = "Dolphin (Secret Cave)";
    pub const MERMAID7: &str = "Mermaid 7";
    pub const ANGELFISH4: &str = "Angelfish 4";
    pub const MERMAID8: &str = "Mermaid 8";
    pub const DOLPHIN_PEARL: &str = "Dolphin (Pearl)";
    pub const MERMAID9: &str = "Mermaid 9";

    // Act 4 - Mountain of Souls
    pub const GRANDPA: &str = "Grandpa";
    pub const GIRL: &str = "Girl";
    pub const MUSHROOM: &str = "Mushroom";
    pub const BOY: &str = "Boy";
    pub const GRANDPA2: &str = "Grandpa 2";
    pub const SNAIL_JOCKEY: &str = "Snail Jockey";
    pub const NOME: &str = "Nome";
    pub const BOY2: &str = "Boy 2";
    pub const MUSHROOM_EMBLEM_F: &str = "Mushroom (Emblem F)";
    pub const DANCING_GRANDMA: &str = "Dancing Grandma";
    pub const DANCING_GRANDMA2: &str = "Dancing Grandma 2";
    pub const SNAIL_EMBLEM_E: &str = "Snail (Emblem E)";
    pub const BOY_MUSHROOM_SHOES: &str = "Boy (Mushroom Shoes)";
    pub const GRANDMA: &str = "Grandma";
    pub const GIRL2: &str = "Girl 2";
    pub const MUSHROOM2: &str = "Mushroom 2";
    pub const SNAIL_RACER: &str = "Snail Racer";
    pub const SNAIL_RACER2: &str = "Snail Racer 2";
    pub const GIRL3: &str = "Girl 3";
    pub const MUSHROOM3: &str = "Mushroom 3";
    pub const SNAIL: &str = "Snail";
    pub const GRANDPA3: &str = "Grandpa 3";
    pub const SNAIL2: &str = "Snail 2";
    pub const GRANDPA4: &str = "Grandpa 4";
    pub const GRANDPA_LUNE: &str = "Grandpa (Lune)";
    pub const GRANDPA5: &str = "Grandpa 5";
    pub const MOUNTAIN_KING: &str = "Mountain King";

    // Act 5 - Leo's Lab
    pub const PLANT_HERB: &str = "Plant (Herb)";
    pub const PLANT: &str = "Plant";
    pub const CHEST_OF_DRAWERS_MYSTIC_ARMOR: &str = "Chest of Drawers (Mystic Armor)";
    pub const CAT: &str = "Cat";
    pub const GREAT_DOOR_ZANTETSU_SWORD: &str = "Great Door (Zantetsu Sword)";
    pub const CAT2: &str = "Cat 2";
    pub const GREAT_DOOR: &str = "Great Door";
    pub const CAT3: &str = "Cat 3";
    pub const MODEL_TOWN1: &str = "Model Town 1";
    pub const GREAT_DOOR_MODEL_TOWNS: &str = "Great Door (Model Towns)";
    pub const STEPS_UPSTAIRS: &str = "Steps (Upstairs)";
    pub const CAT_DOOR_KEY: &str = "Cat (Door Key)";
    pub const MOUSE: &str = "Mouse";
    pub const MARIE: &str = "Marie";
    pub const DOLL: &str = "Doll";
    pub const CHEST_OF_DRAWERS: &str = "Chest of Drawers";
    pub const PLANT2: &str = "Plant 2";
    pub const MOUSE2: &str = "Mouse 2";
    pub const MOUSE_SPARK_BOMB: &str = "Mouse (Spark Bomb)";
    pub const MOUSE3: &str = "Mouse 3";
    pub const GREAT_DOOR_SOUL_OF_DETECTION: &str = "Great Door (Soul of Detection)";
    pub const MODEL_TOWN2: &str = "Model Town 2";
    pub const MOUSE4: &str = "Mouse 4";
    pub const STEPS_MARIE: &str = "Steps (Marie)";
    pub const CHEST_OF_DRAWERS2: &str = "Chest of Drawers 2";
    pub const PLANT_ACTINIDIA_LEAVES: &str = "Plant (Actinidia Leaves)";
    pub const MOUSE5: &str = "Mouse 5";
    pub const CAT4: &str = "Cat 4";
    pub const STAIRS_POWER_PLANT: &str = "Stairs (Power Plant)";

    // Act 6 - Magridd Castle
    pub const SOLDIER: &str = "Soldier";
    pub const SOLDIER2: &str = "Soldier 2";
    pub const SOLDIER3: &str = "Soldier 3";
    pub const SOLDIER_ELEMENTAL_MAIL: &str = "Soldier (Elemental Mail)";
    pub const SOLDIER4: &str = "Soldier 4";
    pub const SOLDIER5: &str = "Soldier 5";
    pub const SINGER_CONCERT_HALL: &str = "Singer (Concert Hall)";
    pub const SOLDIER6: &str = "Soldier 6";
    pub const MAID: &str = "Maid";
    pub const SOLDIER_LEFT_TOWER: &str = "Soldier (Left Tower)";
    pub const SOLDIER_DOK: &str = "Soldier (Dok)";
    pub const SOLDIER_PLATINUM_CARD: &str = "Soldier (Platinum Card)";
    pub const SINGER: &str = "Singer";
    pub const SOLDIER_SOUL_OF_REALITY: &str = "Soldier (Soul of Reality)";
    pub const MAID2: &str = "Maid 2";
    pub const QUEEN_MAGRIDD: &str = "Queen Magridd";
    pub const SOLDIER_WITH_LEO: &str = "Soldier (With Leo)";
    pub const SOLDIER_RIGHT_TOWER: &str = "Soldier (Right Tower)";
    pub const DR_LEO: &str = "Dr. Leo";
    pub const SOLDIER7: &str = "Soldier 7";
    pub const SOLDIER8: &str = "Soldier 8";
    pub const MAID_HERB: &str = "Maid (Herb)";
    pub const SOLDIER_CASTLE: &str = "Soldier (Castle)";
    pub const SOLDIER9: &str = "Soldier 9";
    pub const SOLDIER10: &str = "Soldier 10";
    pub const SOLDIER11: &str = "Soldier 11";
    pub const KING_MAGRIDD: &str = "King Magridd";
}

/// Location names used as dependency-table keys and reachability targets.
pub mod location {
    pub const TOOL_SHOP_OWNER: &str = "Tool Shop Owner";
    pub const EMBLEM_A_TILE: &str = "Emblem A Tile";
    pub const GOAT_PEN_CORNER: &str = "Goat Pen Corner";
    pub const TEDDY: &str = "Teddy";
    pub const PASS_TILE: &str = "Pass Tile";
    pub const TILE_IN_CHILDS_SECRET_CAVE: &str = "Tile in Child's Secret Cave";
    pub const RECOVERY_SWORD_CRYSTAL: &str = "Recovery Sword Crystal";
    pub const VILLAGE_CHIEF: &str = "Village Chief";
    pub const REDHOT_MIRROR_BIRD: &str = "Red-Hot Mirror Bird";
    pub const MAGIC_BELL_CRYSTAL: &str = "Magic Bell Crystal";
    pub const WOODSTIN_TRIO: &str = "Woodstin Trio";
    pub const GREENWOOD_LEAVES_TILE: &str = "Greenwood Leaves Tile";
    pub const SHIELD_BRACELET_MOLE: &str = "Shield Bracelet Mole";
    pub const PSYCHO_SWORD_SQUIRREL: &str = "Psycho Sword Squirrel";
    pub const EMBLEM_C_SQUIRREL: &str = "Emblem C Squirrel";
    pub const GREENWOOD_ICE_ARMOR_CHEST: &str = "Greenwood Ice Armor Chest";
    pub const NORTHEASTERN_MERMAID_HERB: &str = "Northeastern Mermaid Herb";
    pub const MAGIC_FLARE_MERMAID: &str = "Magic Flare Mermaid";
    pub const REDHOT_STICK_MERMAID: &str = "Red-Hot Stick Mermaid";
    pub const LUE: &str = "Lue";
    pub const MOUNTAIN_KING: &str = "Mountain King";
    pub const PHOENIX_TILE: &str = "Phoenix Tile";
    pub const DEATHTOLL: &str = "Deathtoll";

    // Monster-lair locations that carry their own release dependencies.
    pub const LAIR_DOG3: &str = "Dog 3 Lair";
    pub const LAIR_SQUIRREL3: &str = "Squirrel 3 Lair";
    pub const LAIR_DOLPHIN: &str = "Dolphin Lair";
    pub const LAIR_ANGELFISH: &str = "Angelfish Lair";
    pub const LAIR_MERMAID2: &str = "Mermaid 2 Lair";
    pub const LAIR_MERMAID_RED_HOT_STICK: &str = "Mermaid (Red-Hot Stick) Lair";
    pub const LAIR_MERMAID6: &str = "Mermaid 6 Lair";
    pub const LAIR_MERMAID_TEARS: &str = "Mermaid (Tears) Lair";
    pub const LAIR_MERMAID_MAGIC_FLARE: &str = "Mermaid (Magic Flare) Lair";
    pub const LAIR_ANGELFISH4: &str = "Angelfish 4 Lair";
    pub const LAIR_MERMAID8: &str = "Mermaid 8 Lair";
    pub const LAIR_MERMAID9: &str = "Mermaid 9 Lair";
    pub const LAIR_NOME: &str = "Nome Lair";
    pub const LAIR_BOY2: &str = "Boy 2 Lair";
    pub const LAIR_MUSHROOM_EMBLEM_F: &str = "Mushroom (Emblem F) Lair";
    pub const LAIR_GRANDMA: &str = "Grandma Lair";
    pub const LAIR_GIRL2: &str = "Girl 2 Lair";
    pub const LAIR_SNAIL: &str = "Snail Lair";
    pub const LAIR_SNAIL2: &str = "Snail 2 Lair";
    pub const LAIR_SOLDIER6: &str = "Soldier 6 Lair";
    pub const LAIR_SOLDIER_PLATINUM_CARD: &str = "Soldier (Platinum Card) Lair";
    pub const LAIR_MAID2: &str = "Maid 2 Lair";
    pub const LAIR_SOLDIER7: &str = "Soldier 7 Lair";
    pub const LAIR_SOLDIER8: &str = "Soldier 8 Lair";
    pub const LAIR_SOLDIER10: &str = "Soldier 10 Lair";
    pub const LAIR_KING_MAGRIDD: &str = "King Magridd Lair";
}

/// Region names used for region-reachability queries.
pub mod region {
    pub const GRASS_VALLEY: &str = "Grass Valley";
    pub const GREENWOOD: &str = "Greenwood";
    pub const ST_ELLES: &str = "St. Elles";
    pub const MOUNTAIN_OF_SOULS: &str = "Mountain of Souls";
    pub const LEOS_LAB: &str = "Leo's Lab";
    pub const MAGRIDD_CASTLE: &str = "Magridd Castle";
    pub const WORLD_OF_EVIL: &str = "World of Evil";
    pub const DEATHTOLLS_PALACE: &str = "Deathtoll's Palace";
}

/// Item-group names for counted-threshold queries.
pub mod group {
    pub const SWORDS: &str = "swords";
    pub const ARMORS: &str = "armors";
    pub const MAGIC: &str = "magic";
    pub const STONES: &str = "stones";
    pub const EMBLEMS: &str = "emblems";
    pub const REDHOTS: &str = "redhots";
    pub const SOULS: &str = "souls";
}
