//! Monster journal data (journal order, contiguous ids)
//!
//! Ids 0..=3 are the spectral familiars, id 49 is the Koi, id 50 the Tanuki
//! and id 110 the Bard. Ids 4..=109 form the randomizable domain.

use crate::actions;
use crate::types as ty;

pub type MonsterId = u16;

/// A journal monster. Immutable once loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Monster {
    pub id: MonsterId,
    pub name: &'static str,
    /// Explore-action id (see [`crate::actions`])
    pub explore_action: u16,
    /// Monster type ids (see [`crate::types`])
    pub monster_types: &'static [u16],
}

const fn m(
    id: MonsterId,
    name: &'static str,
    explore_action: u16,
    monster_types: &'static [u16],
) -> Monster {
    Monster {
        id,
        name,
        explore_action,
        monster_types,
    }
}

/// First randomizable monster id (the four familiars are fixed).
pub const FIRST_RANDOMIZABLE: MonsterId = 4;
/// One past the last randomizable monster id.
pub const RANDOMIZABLE_END: MonsterId = 110;

/// The monster replaced by the swimming draw in randomizer mode.
pub const KOI: MonsterId = 49;
/// The joker monster eligible to override per-area bravery picks.
pub const TANUKI: MonsterId = 50;
/// Number of familiar candidates (journal ids 0..FAMILIAR_COUNT).
pub const FAMILIAR_COUNT: i32 = 4;

/// Monster ids that are never remapped by the randomizer.
pub const UNRANDOMIZED: &[MonsterId] = &[0, 1, 2, 3, 110];

/// Monsters with the swimming ability, in list order. Drawn from for the
/// swimming role and for the Koi replacement.
pub const SWIMMING_MONSTERS: &[MonsterId] = &[36, 49, 54, 93, 94, 95, 103];

/// Monsters whose prefab instantiation consumes extra generator draws
/// during setup (flying animation frames). The engine must replicate that
/// consumption with `skip` after drawing one of these as a starter.
pub const EXTRA_PREFAB_DRAWS: &[(MonsterId, u32)] = &[
    (7, 1),   // Vaero
    (15, 1),  // Frosty
    (19, 1),  // Mad Eye
    (20, 1),  // Nightwing
    (21, 1),  // Toxiquus
    (25, 1),  // Magmamoth
    (27, 1),  // Glowfly
    (32, 1),  // Raduga
    (39, 1),  // Kanko
    (69, 1),  // Glowdra
    (70, 1),  // Draconov
    (76, 1),  // Vertraag
    (78, 1),  // Thanatos
    (88, 1),  // Amberlagna
    (92, 1),  // Ascendant
];

/// The full monster journal, indexed by id.
pub static MONSTERS: &[Monster] = &[
    m(0, "Spectral Wolf", actions::SMASH, &[ty::SPIRIT, ty::BEAST]),
    m(1, "Spectral Toad", actions::POISON_GAS, &[ty::SPIRIT, ty::REPTILE]),
    m(2, "Spectral Eagle", actions::FLYING, &[ty::SPIRIT, ty::BIRD]),
    m(3, "Spectral Lion", actions::LIGHT, &[ty::SPIRIT, ty::BEAST]),
    m(4, "Blob", actions::BLOB_FORM, &[ty::SLIME]),
    m(5, "Magmapillar", actions::IGNITE, &[ty::INSECT, ty::ELEMENTAL]),
    m(6, "Rocky", actions::BIG_ROCK, &[ty::CONSTRUCT]),
    m(7, "Vaero", actions::FLYING, &[ty::BIRD]),
    m(8, "Catzerker", actions::SMASH, &[ty::BEAST]),
    m(9, "Yowie", actions::MOUNT, &[ty::BEAST, ty::NATURE]),
    m(10, "Steam Golem", actions::CRUSH, &[ty::CONSTRUCT]),
    m(11, "Monk", actions::GRAPPLING, &[ty::HUMANOID]),
    m(12, "Grummy", actions::POISON_GAS, &[ty::SLIME]),
    m(13, "G'rulu", actions::CRUSH, &[ty::SLIME]),
    m(14, "Fungi", actions::SPORE_SHROUD, &[ty::NATURE]),
    m(15, "Frosty", actions::FLYING, &[ty::ELEMENTAL]),
    m(16, "Minitaur", actions::SMASH, &[ty::BEAST]),
    m(17, "Specter", actions::LEVITATE, &[ty::SPIRIT, ty::UNDEAD]),
    m(18, "Crackle Knight", actions::IGNITE, &[ty::HUMANOID, ty::ELEMENTAL]),
    m(19, "Mad Eye", actions::FLYING, &[ty::SPIRIT]),
    m(20, "Nightwing", actions::IMPROVED_FLYING, &[ty::BEAST, ty::BIRD]),
    m(21, "Toxiquus", actions::FLYING, &[ty::SPIRIT]),
    m(22, "Beetloid", actions::CRUSH, &[ty::INSECT, ty::CONSTRUCT]),
    m(23, "Druid Oak", actions::BIG_ROCK, &[ty::NATURE]),
    m(24, "Sizzle Knight", actions::IGNITE, &[ty::HUMANOID, ty::ELEMENTAL]),
    m(25, "Magmamoth", actions::IMPROVED_FLYING, &[ty::INSECT, ty::ELEMENTAL]),
    m(26, "Molebear", actions::SMASH, &[ty::BEAST]),
    m(27, "Glowfly", actions::FLYING, &[ty::INSECT]),
    m(28, "Goblin Brute", actions::SMASH, &[ty::GOBLIN]),
    m(29, "Goblin Hood", actions::GRAPPLING, &[ty::GOBLIN]),
    m(30, "Goblin Warlock", actions::IGNITE, &[ty::GOBLIN]),
    m(31, "Goblin King", actions::CRUSH, &[ty::GOBLIN]),
    m(32, "Raduga", actions::IMPROVED_FLYING, &[ty::BEAST]),
    m(33, "Ice Blob", actions::BLOB_FORM, &[ty::SLIME, ty::ELEMENTAL]),
    m(34, "Tengu", actions::MOUNT, &[ty::BEAST, ty::NATURE]),
    m(35, "Ninki", actions::GRAPPLING, &[ty::REPTILE]),
    m(36, "Ninki Nanka", actions::SWIMMING, &[ty::REPTILE, ty::AQUATIC]),
    m(37, "Aurumtail", actions::SECRET_VISION, &[ty::BEAST]),
    m(38, "Vasuki", actions::CHARGING_MOUNT, &[ty::REPTILE]),
    m(39, "Kanko", actions::IMPROVED_FLYING, &[ty::SPIRIT, ty::NATURE]),
    m(40, "Dodo", actions::LIGHT, &[ty::BIRD]),
    m(41, "Kongamato", actions::IMPROVED_FLYING, &[ty::BEAST, ty::BIRD]),
    m(42, "Ucan", actions::GRAPPLING, &[ty::AQUATIC]),
    m(43, "Caraglow", actions::LIGHT, &[ty::AQUATIC]),
    m(44, "Brutus", actions::CHARGING_MOUNT, &[ty::BEAST]),
    m(45, "Targoat", actions::MOUNT, &[ty::BEAST, ty::NATURE]),
    m(46, "Silvaero", actions::IMPROVED_FLYING, &[ty::BIRD]),
    m(47, "Thornish", actions::MOUNT, &[ty::REPTILE, ty::NATURE]),
    m(48, "Megataur", actions::SMASH, &[ty::BEAST]),
    m(49, "Koi", actions::SWIMMING, &[ty::AQUATIC]),
    m(50, "Tanuki", actions::MOUNT, &[ty::BEAST]),
    m(51, "Manticorb", actions::FLYING, &[ty::BEAST, ty::SPIRIT]),
    m(52, "Imori", actions::IGNITE, &[ty::REPTILE, ty::ELEMENTAL]),
    m(53, "Salahammer", actions::SMASH, &[ty::REPTILE, ty::ELEMENTAL]),
    m(54, "Akhlut", actions::SWIMMING, &[ty::BEAST, ty::AQUATIC]),
    m(55, "Crystal Snail", actions::TAR_MOUNT, &[ty::CONSTRUCT]),
    m(56, "Mogwai", actions::LIGHT, &[ty::SPIRIT, ty::BEAST]),
    m(57, "Sycophantom", actions::IMPROVED_FLYING, &[ty::SPIRIT, ty::UNDEAD]),
    m(58, "Plague Egg", actions::POISON_GAS, &[ty::UNDEAD]),
    m(59, "Stolby", actions::IGNITE, &[ty::CONSTRUCT, ty::ELEMENTAL]),
    m(60, "Mimic", actions::SECRET_VISION, &[ty::SPIRIT]),
    m(61, "Shockhopper", actions::LEVITATE, &[ty::CONSTRUCT]),
    m(62, "Mega Rock", actions::BIG_ROCK, &[ty::CONSTRUCT]),
    m(63, "Spinner", actions::GRAPPLING, &[ty::INSECT]),
    m(64, "Tar Blob", actions::TAR_MOUNT, &[ty::SLIME]),
    m(65, "Rainbow Blob", actions::BLOB_FORM, &[ty::SLIME]),
    m(66, "King Blob", actions::BLOB_FORM, &[ty::SLIME]),
    m(67, "Oculus", actions::SECRET_VISION, &[ty::CONSTRUCT, ty::SPIRIT]),
    m(68, "Polterofen", actions::IGNITE, &[ty::CONSTRUCT, ty::SPIRIT]),
    m(69, "Glowdra", actions::IMPROVED_FLYING, &[ty::DRAGON]),
    m(70, "Draconov", actions::FLYING, &[ty::DRAGON, ty::BIRD]),
    m(71, "Dracogran", actions::IMPROVED_FLYING, &[ty::DRAGON]),
    m(72, "Dracozul", actions::IMPROVED_FLYING, &[ty::DRAGON]),
    m(73, "Dracomer", actions::IMPROVED_FLYING, &[ty::DRAGON, ty::AQUATIC]),
    m(74, "Draconoir", actions::IMPROVED_FLYING, &[ty::DRAGON]),
    m(75, "Gryphonix", actions::IMPROVED_FLYING, &[ty::BEAST, ty::BIRD]),
    m(76, "Vertraag", actions::IMPROVED_FLYING, &[ty::DRAGON, ty::SPIRIT]),
    m(77, "Terradrile", actions::SONAR_MOUNT, &[ty::DRAGON]),
    m(78, "Thanatos", actions::IMPROVED_FLYING, &[ty::UNDEAD, ty::SPIRIT]),
    m(79, "Promethean", actions::IGNITE, &[ty::CONSTRUCT, ty::ELEMENTAL]),
    m(80, "Skorch", actions::IGNITE, &[ty::BEAST, ty::ELEMENTAL]),
    m(81, "Darnation", actions::IGNITE, &[ty::UNDEAD, ty::ELEMENTAL]),
    m(82, "Sutsune", actions::LIGHT, &[ty::BEAST, ty::SPIRIT]),
    m(83, "Fumagus", actions::SPORE_SHROUD, &[ty::NATURE, ty::UNDEAD]),
    m(84, "Goblin Miner", actions::SMASH, &[ty::GOBLIN]),
    m(85, "Goblin Pilot", actions::FLYING, &[ty::GOBLIN, ty::CONSTRUCT]),
    m(86, "Troll", actions::SMASH, &[ty::NATURE, ty::BEAST]),
    m(87, "Lava Blob", actions::BLOB_FORM, &[ty::SLIME, ty::ELEMENTAL]),
    m(88, "Amberlagna", actions::IMPROVED_FLYING, &[ty::DRAGON, ty::ELEMENTAL]),
    m(89, "Moccus", actions::CHARGING_MOUNT, &[ty::BEAST]),
    m(90, "Diavola", actions::LEVITATE, &[ty::UNDEAD, ty::SPIRIT]),
    m(91, "Aazerach", actions::IMPROVED_FLYING, &[ty::SPIRIT, ty::BIRD]),
    m(92, "Ascendant", actions::IMPROVED_FLYING, &[ty::SPIRIT, ty::HUMANOID]),
    m(93, "Vodinoy", actions::SWIMMING, &[ty::AQUATIC, ty::DRAGON]),
    m(94, "Krakaturtle", actions::SWIMMING, &[ty::AQUATIC, ty::REPTILE]),
    m(95, "Elderjel", actions::SWIMMING, &[ty::AQUATIC]),
    m(96, "Mad Lord", actions::SECRET_VISION, &[ty::SPIRIT]),
    m(97, "Changeling", actions::SECRET_VISION, &[ty::SPIRIT, ty::HUMANOID]),
    m(98, "Blade Widow", actions::GRAPPLING, &[ty::INSECT]),
    m(99, "Ornithopter", actions::IMPROVED_FLYING, &[ty::CONSTRUCT]),
    m(100, "Rathops", actions::MOUNT, &[ty::REPTILE]),
    m(101, "Rampede", actions::CHARGING_MOUNT, &[ty::BEAST]),
    m(102, "Brawlish", actions::CRUSH, &[ty::AQUATIC]),
    m(103, "Nautilid", actions::SWIMMING, &[ty::AQUATIC]),
    m(104, "Scorchpaw", actions::IGNITE, &[ty::BEAST, ty::ELEMENTAL]),
    m(105, "Asura", actions::GRAPPLING, &[ty::HUMANOID]),
    m(106, "Gorgon", actions::SECRET_VISION, &[ty::REPTILE, ty::SPIRIT]),
    m(107, "Snowmaw", actions::SONAR_MOUNT, &[ty::BEAST, ty::ELEMENTAL]),
    m(108, "Emberdrake", actions::IMPROVED_FLYING, &[ty::DRAGON, ty::ELEMENTAL]),
    m(109, "Grimalkin", actions::MOUNT, &[ty::BEAST, ty::SPIRIT]),
    m(110, "Bard", actions::SECRET_VISION, &[ty::HUMANOID, ty::SPIRIT]),
];

/// Number of journal monsters.
pub const fn num_monsters() -> usize {
    MONSTERS.len()
}
