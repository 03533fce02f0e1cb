//! Monster type lookup table
//!
//! Type id 0 means "no type"; a relic whose restriction is 0 is
//! unrestricted.

/// A monster type: id/name pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonsterType {
    pub id: u16,
    pub name: &'static str,
}

pub const NONE: u16 = 0;
pub const BEAST: u16 = 1;
pub const BIRD: u16 = 2;
pub const REPTILE: u16 = 3;
pub const INSECT: u16 = 4;
pub const AQUATIC: u16 = 5;
pub const SLIME: u16 = 6;
pub const SPIRIT: u16 = 7;
pub const UNDEAD: u16 = 8;
pub const CONSTRUCT: u16 = 9;
pub const DRAGON: u16 = 10;
pub const HUMANOID: u16 = 11;
pub const NATURE: u16 = 12;
pub const ELEMENTAL: u16 = 13;
pub const GOBLIN: u16 = 14;

pub static MONSTER_TYPES: &[MonsterType] = &[
    MonsterType { id: NONE, name: "None" },
    MonsterType { id: BEAST, name: "Beast" },
    MonsterType { id: BIRD, name: "Bird" },
    MonsterType { id: REPTILE, name: "Reptile" },
    MonsterType { id: INSECT, name: "Insect" },
    MonsterType { id: AQUATIC, name: "Aquatic" },
    MonsterType { id: SLIME, name: "Slime" },
    MonsterType { id: SPIRIT, name: "Spirit" },
    MonsterType { id: UNDEAD, name: "Undead" },
    MonsterType { id: CONSTRUCT, name: "Construct" },
    MonsterType { id: DRAGON, name: "Dragon" },
    MonsterType { id: HUMANOID, name: "Humanoid" },
    MonsterType { id: NATURE, name: "Nature" },
    MonsterType { id: ELEMENTAL, name: "Elemental" },
    MonsterType { id: GOBLIN, name: "Goblin" },
];
