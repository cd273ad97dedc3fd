//! The location/exit dependency table.
//!
//! Authored once as literal (name, chain) pairs and read-only afterwards.
//! Many locations depend on one or two NPC releases, so rather than create
//! graph regions to hold one location each, those location-specific
//! dependencies live here. Any name absent from the table carries no
//! requirement.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::error::LogicError;
use crate::names::{item, location, npc, region};

use super::flag::RuleFlag;
use super::node::RuleNode;

fn add(
    table: &mut FxHashMap<&'static str, Arc<RuleNode>>,
    name: &'static str,
    chain: RuleNode,
) -> Result<(), LogicError> {
    if table.insert(name, Arc::new(chain)).is_some() {
        return Err(LogicError::DuplicateKey {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Build the dependency table consumed at world-setup time.
///
/// A duplicate key is a configuration error, not a silent overwrite.
pub fn build_dependency_table() -> Result<FxHashMap<&'static str, Arc<RuleNode>>, LogicError> {
    let mut table = FxHashMap::default();

    // Act 1 - Grass Valley
    add(
        &mut table,
        location::TOOL_SHOP_OWNER,
        RuleNode::has_all([npc::TOOL_SHOP_OWNER]),
    )?;
    add(
        &mut table,
        location::EMBLEM_A_TILE,
        RuleNode::has_all([npc::IVY, npc::IVY_EMBLEM_A, npc::WATER_MILL]),
    )?;
    add(
        &mut table,
        location::GOAT_PEN_CORNER,
        RuleNode::has_all([npc::GOAT_HERB]),
    )?;
    add(
        &mut table,
        location::TEDDY,
        RuleNode::has_all([npc::TOOL_SHOP_OWNER, npc::TEDDY]),
    )?;
    add(
        &mut table,
        location::PASS_TILE,
        RuleNode::has_all([npc::IVY, npc::TULIP_PASS]),
    )?;
    add(
        &mut table,
        location::TILE_IN_CHILDS_SECRET_CAVE,
        RuleNode::has_all([npc::BOY_CAVE, item::PASS]),
    )?;
    add(
        &mut table,
        location::RECOVERY_SWORD_CRYSTAL,
        RuleNode::has_all([npc::IVY_RECOVERY_SWORD, npc::BOY_CAVE, item::PASS]),
    )?;
    add(
        &mut table,
        location::VILLAGE_CHIEF,
        RuleNode::has_all([npc::VILLAGE_CHIEF, npc::OLD_WOMAN]),
    )?;

    // Act 2 - Greenwood
    add(
        &mut table,
        location::REDHOT_MIRROR_BIRD,
        RuleNode::has_all([npc::BIRD_RED_HOT_MIRROR]),
    )?;
    add(
        &mut table,
        location::MAGIC_BELL_CRYSTAL,
        RuleNode::has_all([
            item::EMBLEM_A,
            item::EMBLEM_B,
            item::EMBLEM_C,
            item::EMBLEM_D,
            item::EMBLEM_E,
            item::EMBLEM_F,
            item::EMBLEM_G,
            item::EMBLEM_H,
            npc::DEER_MAGIC_BELL,
            npc::CROCODILE3,
        ]),
    )?;
    add(
        &mut table,
        location::WOODSTIN_TRIO,
        RuleNode::has_all([npc::DEER, npc::SQUIRREL3, npc::DOG3]),
    )?;
    add(
        &mut table,
        location::GREENWOOD_LEAVES_TILE,
        RuleNode::has_all([
            npc::MOLE_SOUL_OF_LIGHT,
            npc::CROCODILE,
            npc::CROCODILE2,
            npc::BIRD_GREENWOOD_LEAF,
            item::DREAM_ROD,
        ]),
    )?;
    add(
        &mut table,
        location::SHIELD_BRACELET_MOLE,
        RuleNode::has_all([npc::MOLE, npc::MOLE_SHIELD_BRACELET, item::MOLES_RIBBON]),
    )?;
    add(
        &mut table,
        location::PSYCHO_SWORD_SQUIRREL,
        RuleNode::has_all([npc::SQUIRREL_PSYCHO_SWORD, item::DELICIOUS_SEEDS]),
    )?;
    add(
        &mut table,
        location::EMBLEM_C_SQUIRREL,
        RuleNode::has_all([npc::SQUIRREL_EMBLEM_C, npc::SQUIRREL_PSYCHO_SWORD]),
    )?;
    add(
        &mut table,
        location::GREENWOOD_ICE_ARMOR_CHEST,
        RuleNode::has_all([npc::MOLE, npc::SQUIRREL_ICE_ARMOR, item::DREAM_ROD]),
    )?;

    // Act 3 - St. Elles
    add(
        &mut table,
        location::NORTHEASTERN_MERMAID_HERB,
        RuleNode::has_all([npc::MERMAID, npc::DOLPHIN2]),
    )?;
    add(
        &mut table,
        location::MAGIC_FLARE_MERMAID,
        RuleNode::has_all([npc::MERMAID_MAGIC_FLARE, npc::MERMAID_BUBBLE_ARMOR]),
    )?;
    add(
        &mut table,
        location::REDHOT_STICK_MERMAID,
        RuleNode::has_all([npc::MERMAID_BUBBLE_ARMOR]),
    )?;
    // Lue is reached through either the bubble-armor mermaid's passage or
    // Dolphin 2's.
    add(
        &mut table,
        location::LUE,
        RuleNode::has_all([npc::LUE, npc::DOLPHIN_SAVES_LUE, npc::MERMAID_PEARL])
            .then(RuleNode::has_any([npc::MERMAID_BUBBLE_ARMOR, npc::DOLPHIN2])),
    )?;

    // Act 4 - Mountain of Souls
    add(
        &mut table,
        location::MOUNTAIN_KING,
        RuleNode::has_all([npc::DANCING_GRANDMA, npc::DANCING_GRANDMA2]),
    )?;
    add(
        &mut table,
        location::PHOENIX_TILE,
        RuleNode::flag(RuleFlag::PhoenixCutscene),
    )?;

    // Lair-to-lair dependencies
    add(&mut table, location::LAIR_DOG3, RuleNode::has_all([npc::DEER]))?;
    add(
        &mut table,
        location::LAIR_SQUIRREL3,
        RuleNode::has_all([npc::DEER]),
    )?;
    add(
        &mut table,
        location::LAIR_DOLPHIN,
        RuleNode::has_all([npc::MERMAID_NANA]),
    )?;
    add(
        &mut table,
        location::LAIR_ANGELFISH,
        RuleNode::has_all([npc::ANGELFISH_SOUL_OF_SHIELD]),
    )?;
    add(
        &mut table,
        location::LAIR_MERMAID2,
        RuleNode::has_all([npc::MERMAID4]),
    )?;
    add(
        &mut table,
        location::LAIR_MERMAID_RED_HOT_STICK,
        RuleNode::has_all([npc::MERMAID_BUBBLE_ARMOR]),
    )?;
    add(
        &mut table,
        location::LAIR_MERMAID6,
        RuleNode::has_all([npc::MERMAID4]),
    )?;
    add(
        &mut table,
        location::LAIR_MERMAID_TEARS,
        RuleNode::has_all([npc::MERMAID_BUBBLE_ARMOR]),
    )?;
    add(
        &mut table,
        location::LAIR_MERMAID_MAGIC_FLARE,
        RuleNode::has_all([npc::MERMAID_BUBBLE_ARMOR]),
    )?;
    add(
        &mut table,
        location::LAIR_ANGELFISH4,
        RuleNode::has_all([npc::MERMAID5]),
    )?;
    add(
        &mut table,
        location::LAIR_MERMAID8,
        RuleNode::has_all([npc::MERMAID_BUBBLE_ARMOR]),
    )?;
    add(
        &mut table,
        location::LAIR_MERMAID9,
        RuleNode::has_all([npc::MERMAID4]),
    )?;
    add(&mut table, location::LAIR_NOME, RuleNode::has_all([npc::GRANDPA5]))?;
    add(&mut table, location::LAIR_BOY2, RuleNode::has_all([npc::GRANDPA5]))?;
    add(
        &mut table,
        location::LAIR_MUSHROOM_EMBLEM_F,
        RuleNode::has_all([npc::GRANDPA5]),
    )?;
    add(
        &mut table,
        location::LAIR_GRANDMA,
        RuleNode::has_all([npc::GRANDPA2]),
    )?;
    add(&mut table, location::LAIR_GIRL2, RuleNode::has_all([npc::BOY]))?;
    add(
        &mut table,
        location::LAIR_SNAIL,
        RuleNode::has_all([npc::BOY_MUSHROOM_SHOES]),
    )?;
    add(
        &mut table,
        location::LAIR_SNAIL2,
        RuleNode::has_all([npc::GRANDPA4]),
    )?;
    add(
        &mut table,
        location::LAIR_SOLDIER6,
        RuleNode::has_all([npc::SINGER_CONCERT_HALL]),
    )?;
    add(
        &mut table,
        location::LAIR_SOLDIER_PLATINUM_CARD,
        RuleNode::has_all([npc::SINGER_CONCERT_HALL]),
    )?;
    add(
        &mut table,
        location::LAIR_MAID2,
        RuleNode::has_all([npc::SINGER_CONCERT_HALL]),
    )?;
    add(&mut table, location::LAIR_SOLDIER7, RuleNode::has_all([npc::MAID]))?;
    add(
        &mut table,
        location::LAIR_SOLDIER8,
        RuleNode::has_all([npc::SOLDIER_SOUL_OF_REALITY]),
    )?;
    add(
        &mut table,
        location::LAIR_SOLDIER10,
        RuleNode::has_all([npc::MAID_HERB]),
    )?;
    add(
        &mut table,
        location::LAIR_KING_MAGRIDD,
        RuleNode::has_all([npc::SOLDIER_CASTLE]),
    )?;

    // Endgame
    add(
        &mut table,
        region::WORLD_OF_EVIL,
        RuleNode::has_all([item::SOUL_ARMOR]),
    )?;
    add(
        &mut table,
        region::DEATHTOLLS_PALACE,
        RuleNode::flag(RuleFlag::HasStones)
            .then(RuleNode::can_reach_region(region::WORLD_OF_EVIL)),
    )?;
    add(
        &mut table,
        location::DEATHTOLL,
        RuleNode::flag(RuleFlag::CanCutSpirit)
            .then(RuleNode::can_reach_region(region::DEATHTOLLS_PALACE)),
    )?;

    Ok(table)
}
