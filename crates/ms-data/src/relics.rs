//! Relic equipment table
//!
//! A restriction of type id 0 means any monster may equip the relic; a
//! non-zero restriction names the monster type required to use it, which
//! the relic placement consults under bravery mode.

use crate::types as ty;

pub type RelicId = u16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relic {
    pub id: RelicId,
    pub name: &'static str,
    pub monster_type_restriction: u16,
}

const fn r(id: RelicId, name: &'static str, monster_type_restriction: u16) -> Relic {
    Relic {
        id,
        name,
        monster_type_restriction,
    }
}

pub static RELICS: &[Relic] = &[
    r(0, "Blade of Unbound Chaos", ty::NONE),
    r(1, "Shield of Dissonance", ty::NONE),
    r(2, "Crown of the Oracle", ty::NONE),
    r(3, "Ring of Duplicity", ty::NONE),
    r(4, "Greaves of the Colossus", ty::CONSTRUCT),
    r(5, "Fang of Winter", ty::BEAST),
    r(6, "Totem of the Wildwood", ty::NATURE),
    r(7, "Pendant of Tides", ty::AQUATIC),
    r(8, "Gauntlet of Embers", ty::ELEMENTAL),
    r(9, "Scale of the Eternal Wyrm", ty::DRAGON),
    r(10, "Charm of Mischief", ty::GOBLIN),
    r(11, "Mask of Hollow Whispers", ty::SPIRIT),
    r(12, "Band of Stillwater", ty::NONE),
    r(13, "Cloak of Moth Wings", ty::NONE),
    r(14, "Lantern of Lost Souls", ty::UNDEAD),
    r(15, "Sigil of the Slime King", ty::SLIME),
    r(16, "Horn of the Vanguard", ty::NONE),
    r(17, "Talon of Storms", ty::BIRD),
    r(18, "Carapace Ward", ty::INSECT),
    r(19, "Idol of Shed Skin", ty::REPTILE),
    r(20, "Belt of the Pit Fighter", ty::HUMANOID),
    r(21, "Prism of Refraction", ty::NONE),
    r(22, "Hourglass of Stasis", ty::NONE),
    r(23, "Anchor of the Deep", ty::NONE),
    r(24, "Chalice of Echoes", ty::NONE),
    r(25, "Key of Beginnings", ty::NONE),
];
