//! Generation results
//!
//! The structured output of one `generate` call: the randomizer mapping,
//! the bravery assignment bundle and the relic placement, tagged with the
//! seed and the active modes. Everything is serde-serializable so the
//! exporter can emit JSON without touching engine internals.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use ms_data::{AreaId, ChestId, MonsterId, RelicId, SceneId};

/// Active game mode flags for one generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modes {
    pub randomizer: bool,
    pub bravery: bool,
    pub relics: bool,
}

impl Modes {
    pub fn any(&self) -> bool {
        self.randomizer || self.bravery || self.relics
    }
}

impl fmt::Display for Modes {
    /// The game-mode label used in reports and the bad-seed log,
    /// e.g. "Randomizer | Bravery".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (active, name) in [
            (self.randomizer, "Randomizer"),
            (self.bravery, "Bravery"),
            (self.relics, "Relic"),
        ] {
            if active {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Total bijection from original monster id to replacement, over the
/// randomizable id domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomizerMapping {
    pub replacements: BTreeMap<MonsterId, MonsterId>,
}

impl RandomizerMapping {
    /// The effective identity of `id` under this mapping; ids outside the
    /// randomizable domain map to themselves.
    pub fn replacement(&self, id: MonsterId) -> MonsterId {
        self.replacements.get(&id).copied().unwrap_or(id)
    }
}

/// The bravery assignment bundle: one monster per area plus the fixed
/// narrative roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BraveryMonsters {
    /// Spectral familiar (journal ids 0..=3).
    pub familiar: MonsterId,
    /// The two starter companions.
    pub starters: [MonsterId; 2],
    /// Swimming role / Sun Tower monster.
    pub swimming: MonsterId,
    pub bex: MonsterId,
    /// Monster received from the Cryomancer.
    pub cryomancer: MonsterId,
    /// Monster the Cryomancer demands in trade. Absent when no used
    /// monster could be spared without breaking a reachability invariant.
    pub cryomancer_required: Option<MonsterId>,
    /// End of Time monsters, in draw order.
    pub end_of_time: [MonsterId; 3],
    /// The seven army trade slots, in ability-group order. A slot is
    /// `None` when no qualifying monster was available.
    pub army: [Option<MonsterId>; 7],
    /// One monster per map area, indexed like the area table.
    pub area_monsters: Vec<MonsterId>,
}

/// One placed relic: which relic, and the chest that holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelicSpot {
    pub area: AreaId,
    pub relic: RelicId,
    pub scene: SceneId,
    pub chest: ChestId,
}

/// One relic per map area, indexed like the area table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelicPlacement {
    pub spots: Vec<RelicSpot>,
}

/// The combined output of one successful generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedGame {
    pub seed: i32,
    pub modes: Modes,
    pub randomizer: Option<RandomizerMapping>,
    pub bravery: Option<BraveryMonsters>,
    pub relics: Option<RelicPlacement>,
}
