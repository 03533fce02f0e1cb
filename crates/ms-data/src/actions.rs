//! Explore actions and ability groups
//!
//! Every monster carries exactly one explore action. An ability group names
//! a capability (Mount, Flying, Secret Vision, ...) and lists the actions
//! that satisfy it; one action may belong to several groups (Improved
//! Flying also counts as Flying, all Mount variants count as Mount).

use strum::{Display, EnumIter};

/// An explore action: id/name pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExploreAction {
    pub id: u16,
    pub name: &'static str,
}

pub const NONE: u16 = 0;
pub const SMASH: u16 = 1;
pub const FLYING: u16 = 2;
pub const IMPROVED_FLYING: u16 = 3;
pub const MOUNT: u16 = 4;
pub const CHARGING_MOUNT: u16 = 5;
pub const TAR_MOUNT: u16 = 6;
pub const SONAR_MOUNT: u16 = 7;
pub const SECRET_VISION: u16 = 8;
pub const IGNITE: u16 = 9;
pub const LIGHT: u16 = 10;
pub const CRUSH: u16 = 11;
pub const BIG_ROCK: u16 = 12;
pub const GRAPPLING: u16 = 13;
pub const BLOB_FORM: u16 = 14;
pub const LEVITATE: u16 = 15;
pub const SWIMMING: u16 = 16;
pub const SPORE_SHROUD: u16 = 17;
pub const POISON_GAS: u16 = 18;

pub static EXPLORE_ACTIONS: &[ExploreAction] = &[
    ExploreAction { id: NONE, name: "None" },
    ExploreAction { id: SMASH, name: "Smash" },
    ExploreAction { id: FLYING, name: "Flying" },
    ExploreAction { id: IMPROVED_FLYING, name: "Improved Flying" },
    ExploreAction { id: MOUNT, name: "Mount" },
    ExploreAction { id: CHARGING_MOUNT, name: "Charging Mount" },
    ExploreAction { id: TAR_MOUNT, name: "Tar Mount" },
    ExploreAction { id: SONAR_MOUNT, name: "Sonar Mount" },
    ExploreAction { id: SECRET_VISION, name: "Secret Vision" },
    ExploreAction { id: IGNITE, name: "Ignite" },
    ExploreAction { id: LIGHT, name: "Light" },
    ExploreAction { id: CRUSH, name: "Crush" },
    ExploreAction { id: BIG_ROCK, name: "Big Rock" },
    ExploreAction { id: GRAPPLING, name: "Grappling" },
    ExploreAction { id: BLOB_FORM, name: "Blob Form" },
    ExploreAction { id: LEVITATE, name: "Levitate" },
    ExploreAction { id: SWIMMING, name: "Swimming" },
    ExploreAction { id: SPORE_SHROUD, name: "Spore Shroud" },
    ExploreAction { id: POISON_GAS, name: "Poison Gas" },
];

/// Named capability satisfied by a set of explore actions.
///
/// The discriminant order is the game's ability table order; the army
/// procedure iterates [`ARMY_GROUPS`] in exactly this sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Ability {
    BreakWall,
    Mount,
    Flying,
    ImprovedFlying,
    SecretVision,
    Ignite,
    Light,
    Crush,
    BigRock,
    Grappling,
    BlobForm,
    Levitate,
}

impl Ability {
    /// Explore actions that satisfy this ability.
    pub const fn explore_actions(self) -> &'static [u16] {
        match self {
            Ability::BreakWall => &[SMASH],
            Ability::Mount => &[MOUNT, CHARGING_MOUNT, TAR_MOUNT, SONAR_MOUNT],
            Ability::Flying => &[FLYING, IMPROVED_FLYING],
            Ability::ImprovedFlying => &[IMPROVED_FLYING],
            Ability::SecretVision => &[SECRET_VISION],
            Ability::Ignite => &[IGNITE],
            Ability::Light => &[LIGHT],
            Ability::Crush => &[CRUSH],
            Ability::BigRock => &[BIG_ROCK],
            Ability::Grappling => &[GRAPPLING],
            Ability::BlobForm => &[BLOB_FORM],
            Ability::Levitate => &[LEVITATE],
        }
    }

    /// Does `action` satisfy this ability?
    pub fn contains(self, action: u16) -> bool {
        self.explore_actions().contains(&action)
    }
}

/// The seven army trade slots, in the order the game fills them.
pub const ARMY_GROUPS: [Ability; 7] = [
    Ability::Ignite,
    Ability::Light,
    Ability::Crush,
    Ability::BigRock,
    Ability::Grappling,
    Ability::BlobForm,
    Ability::Levitate,
];
