//! Static asset names for roster cards
//!
//! Maps races to portrait asset names and classes to icon asset names with
//! exhaustive matches, so an unmapped variant is a compile error rather than
//! a runtime lookup failure. A campaign whose race has not been chosen yet
//! falls back to the designated unknown portrait; an unchosen class simply
//! has no icon.

use crate::types::{CharacterClass, Race};

/// Portrait shown while a campaign has no race selected yet.
pub const UNKNOWN_PORTRAIT: &str = "portrait_unknown";

/// Asset name of the portrait for a race.
pub fn portrait_asset(race: Race) -> &'static str {
    match race {
        Race::Dragonborn => "portrait_dragonborn",
        Race::Dwarf => "portrait_dwarf",
        Race::Elf => "portrait_elf",
        Race::Gnome => "portrait_gnome",
        Race::HalfElf => "portrait_half_elf",
        Race::HalfOrc => "portrait_half_orc",
        Race::Halfling => "portrait_halfling",
        Race::Human => "portrait_human",
        Race::Tiefling => "portrait_tiefling",
    }
}

/// Portrait for an optional race, with the unknown fallback.
pub fn portrait_for(race: Option<Race>) -> &'static str {
    race.map_or(UNKNOWN_PORTRAIT, portrait_asset)
}

/// Asset name of the icon for a class.
pub fn class_icon_asset(class: CharacterClass) -> &'static str {
    match class {
        CharacterClass::Barbarian => "class_barbarian",
        CharacterClass::Bard => "class_bard",
        CharacterClass::Cleric => "class_cleric",
        CharacterClass::Druid => "class_druid",
        CharacterClass::Fighter => "class_fighter",
        CharacterClass::Monk => "class_monk",
        CharacterClass::Paladin => "class_paladin",
        CharacterClass::Ranger => "class_ranger",
        CharacterClass::Rogue => "class_rogue",
        CharacterClass::Sorcerer => "class_sorcerer",
        CharacterClass::Warlock => "class_warlock",
        CharacterClass::Wizard => "class_wizard",
    }
}

/// Icon for an optional class; `None` means show no icon.
pub fn class_icon_for(class: Option<CharacterClass>) -> Option<&'static str> {
    class.map(class_icon_asset)
}
