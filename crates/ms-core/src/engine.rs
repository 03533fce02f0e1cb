//! Generation driver and shared per-seed state
//!
//! One [`Engine`] wraps the validated tables and hands out
//! [`GeneratedGame`] values. All mode procedures run against a single
//! [`Scratch`] so a later mode sees everything an earlier mode decided
//! (relic restrictions look at the bravery picks, bravery looks through
//! the randomizer mapping). Draw order is load-bearing everywhere: the
//! generator is shared across modes and every rejected candidate still
//! consumed a draw.

use tracing::debug;

use ms_data::areas::{BLUE_CAVES, FORGOTTEN_WORLD, MOUNTAIN_PATH};
use ms_data::{
    Ability, MapArea, Monster, MonsterId, RelicId, Tables, FAMILIAR_COUNT, FIRST_RANDOMIZABLE,
};
use ms_rng::UnityRng;

use crate::error::GenerateError;
use crate::result::{GeneratedGame, Modes};

/// Seed generation engine over a validated table handle.
#[derive(Debug)]
pub struct Engine<'t> {
    tables: &'t Tables,
}

impl<'t> Engine<'t> {
    pub fn new(tables: &'t Tables) -> Self {
        Self { tables }
    }

    /// Run every active mode for `seed` and return the combined result.
    ///
    /// Mode order is fixed: randomizer, then bravery, then relics. The
    /// same call with the same seed and modes always returns the same
    /// value.
    pub fn generate(&self, seed: i32, modes: Modes) -> Result<GeneratedGame, GenerateError> {
        debug!(seed, modes = %modes, "generating seed");
        let mut scratch = Scratch::new(self.tables, seed, modes);

        let randomizer = if modes.randomizer {
            // Unbounded rejection sampling; each failed attempt rebuilds
            // the whole mapping from fresh draws.
            while !scratch.determine_random_mapping() {}
            Some(scratch.mapping_result())
        } else {
            None
        };

        let bravery = if modes.bravery {
            Some(scratch.determine_bravery_monsters()?)
        } else {
            None
        };

        let relics = if modes.relics {
            Some(scratch.determine_relics()?)
        } else {
            None
        };

        Ok(GeneratedGame {
            seed,
            modes,
            randomizer,
            bravery,
            relics,
        })
    }
}

/// Per-call mutable state shared by the mode procedures.
pub(crate) struct Scratch<'t> {
    pub(crate) tables: &'t Tables,
    pub(crate) rng: UnityRng,
    pub(crate) modes: Modes,
    pub(crate) seed: i32,

    /// Randomizer replacement per original id, indexed by id.
    pub(crate) mapping: Vec<Option<MonsterId>>,
    /// Randomizable ids not yet used as a replacement.
    pub(crate) monster_pool: Vec<MonsterId>,

    /// Journal id of the familiar; id 0 counts as taken until the
    /// starters are first drawn.
    pub(crate) familiar_index: i32,
    /// Familiar at index 0, then the two starters.
    pub(crate) player_monsters: Vec<MonsterId>,
    pub(crate) swimming_monster: Option<MonsterId>,
    pub(crate) bex_monster: Option<MonsterId>,
    pub(crate) cryomancer_monster: Option<MonsterId>,
    pub(crate) cryomancer_required: Option<MonsterId>,
    /// One pick per map area, indexed like the area table.
    pub(crate) area_monsters: Vec<Option<MonsterId>>,
    pub(crate) end_of_time: Vec<MonsterId>,
    /// Army slots in ability-group order; a slot may stay empty.
    pub(crate) army: Vec<Option<MonsterId>>,

    /// Relic placed per area so far, indexed like the area table.
    pub(crate) relic_by_area: Vec<Option<RelicId>>,
}

impl<'t> Scratch<'t> {
    pub(crate) fn new(tables: &'t Tables, seed: i32, modes: Modes) -> Self {
        Self {
            tables,
            rng: UnityRng::new(seed),
            modes,
            seed,
            mapping: vec![None; tables.monsters().len()],
            monster_pool: Vec::new(),
            familiar_index: 0,
            player_monsters: Vec::new(),
            swimming_monster: None,
            bex_monster: None,
            cryomancer_monster: None,
            cryomancer_required: None,
            area_monsters: vec![None; tables.areas().len()],
            end_of_time: Vec::new(),
            army: Vec::new(),
            relic_by_area: vec![None; tables.areas().len()],
        }
    }

    pub(crate) fn monster(&self, id: MonsterId) -> &'static Monster {
        &self.tables.monsters()[id as usize]
    }

    pub(crate) fn area(&self, index: usize) -> &'static MapArea {
        &self.tables.areas()[index]
    }

    /// The effective identity of `id`: its replacement when the
    /// randomizer is active and has mapped it, otherwise `id` itself.
    pub(crate) fn replacement(&self, id: MonsterId) -> MonsterId {
        if self.modes.randomizer {
            self.mapping
                .get(id as usize)
                .copied()
                .flatten()
                .unwrap_or(id)
        } else {
            id
        }
    }

    /// Has `id` already been handed out by any bravery decision?
    pub(crate) fn was_monster_already_determined(&self, id: MonsterId) -> bool {
        if i32::from(id) == self.familiar_index {
            return true;
        }
        if self.player_monsters.iter().skip(1).any(|&m| m == id) {
            return true;
        }
        if self.swimming_monster == Some(id)
            || self.cryomancer_monster == Some(id)
            || self.bex_monster == Some(id)
        {
            return true;
        }
        if self.area_monsters.iter().flatten().any(|&m| m == id) {
            return true;
        }
        if self.end_of_time.contains(&id) {
            return true;
        }
        self.army.iter().flatten().any(|&m| m == id)
    }

    /// Draw an unused monster by rejection sampling over the journal.
    /// Every rejected candidate still consumed a draw. The upper bound
    /// deliberately stops one short of the journal end, so the final
    /// journal entry is never rolled here.
    pub(crate) fn determine_random_monster(
        &mut self,
        can_have_improved_flying: bool,
        can_have_swimming: bool,
        can_be_familiar: bool,
    ) -> MonsterId {
        let low = if can_be_familiar {
            0
        } else {
            i32::from(FIRST_RANDOMIZABLE)
        };
        let high = self.tables.monsters().len() as i32 - 1;
        loop {
            let id = self.rng.range(low, high) as MonsterId;
            if !can_have_improved_flying && self.monster(id).has_ability(Ability::ImprovedFlying) {
                continue;
            }
            if !can_have_swimming && self.tables.is_swimming(id) {
                continue;
            }
            if self.was_monster_already_determined(id) {
                continue;
            }
            return id;
        }
    }

    /// `id` satisfies `ability` and is not the excluded monster.
    pub(crate) fn excluding_has(
        &self,
        id: MonsterId,
        ability: Ability,
        exclude: Option<MonsterId>,
    ) -> bool {
        exclude != Some(id) && self.monster(id).has_ability(ability)
    }

    pub(crate) fn excluding_mount_or_flying(
        &self,
        id: MonsterId,
        exclude: Option<MonsterId>,
    ) -> bool {
        if exclude == Some(id) {
            return false;
        }
        let monster = self.monster(id);
        monster.has_ability(Ability::Mount) || monster.has_ability(Ability::Flying)
    }

    /// The area's bravery pick satisfies `ability` (false while the area
    /// is still unassigned).
    pub(crate) fn area_pick_has(
        &self,
        area_index: usize,
        ability: Ability,
        exclude: Option<MonsterId>,
    ) -> bool {
        match self.area_monsters.get(area_index).copied().flatten() {
            Some(id) => self.excluding_has(id, ability, exclude),
            None => false,
        }
    }

    fn area_pick_mount_or_flying(&self, area_index: usize, exclude: Option<MonsterId>) -> bool {
        match self.area_monsters.get(area_index).copied().flatten() {
            Some(id) => self.excluding_mount_or_flying(id, exclude),
            None => false,
        }
    }

    // Reachability checks over the current bravery assignment. Each one
    // mirrors which sources the game credits for the ability in question;
    // the familiar counts for wall-breaking and flight but not for
    // mounts.

    pub(crate) fn has_break_wall_monster(&self, exclude: Option<MonsterId>) -> bool {
        self.player_monsters
            .iter()
            .skip(1)
            .any(|&m| self.excluding_has(m, Ability::BreakWall, exclude))
            || self.excluding_has(self.familiar_index as MonsterId, Ability::BreakWall, exclude)
            || self.area_pick_has(BLUE_CAVES, Ability::BreakWall, exclude)
            || self.area_pick_has(MOUNTAIN_PATH, Ability::BreakWall, exclude)
    }

    pub(crate) fn has_mount_monster(&self, exclude: Option<MonsterId>) -> bool {
        use ms_data::areas::{ANCIENT_WOODS, SNOWY_PEAKS, STRONGHOLD_DUNGEON, SUN_PALACE};
        self.player_monsters
            .iter()
            .skip(1)
            .any(|&m| self.excluding_has(m, Ability::Mount, exclude))
            || [
                BLUE_CAVES,
                MOUNTAIN_PATH,
                STRONGHOLD_DUNGEON,
                ANCIENT_WOODS,
                SNOWY_PEAKS,
                SUN_PALACE,
            ]
            .into_iter()
            .any(|area| self.area_pick_has(area, Ability::Mount, exclude))
    }

    pub(crate) fn has_mount_or_flying_monster(&self, exclude: Option<MonsterId>) -> bool {
        use ms_data::areas::{ANCIENT_WOODS, STRONGHOLD_DUNGEON};
        self.player_monsters
            .iter()
            .skip(1)
            .any(|&m| self.excluding_mount_or_flying(m, exclude))
            || self.excluding_mount_or_flying(self.familiar_index as MonsterId, exclude)
            || [BLUE_CAVES, MOUNTAIN_PATH, STRONGHOLD_DUNGEON, ANCIENT_WOODS]
                .into_iter()
                .any(|area| self.area_pick_mount_or_flying(area, exclude))
    }

    pub(crate) fn has_improved_flying_monster(&self, exclude: Option<MonsterId>) -> bool {
        use ms_data::areas::{
            ANCIENT_WOODS, HORIZON_BEACH, MAGMA_CHAMBER, SNOWY_PEAKS, STRONGHOLD_DUNGEON,
            SUN_PALACE,
        };
        [
            STRONGHOLD_DUNGEON,
            ANCIENT_WOODS,
            SNOWY_PEAKS,
            SUN_PALACE,
            HORIZON_BEACH,
            MAGMA_CHAMBER,
        ]
        .into_iter()
        .any(|area| self.area_pick_has(area, Ability::ImprovedFlying, exclude))
    }

    pub(crate) fn has_secret_vision_monster(&self, exclude: Option<MonsterId>) -> bool {
        self.player_monsters
            .iter()
            .skip(1)
            .any(|&m| self.excluding_has(m, Ability::SecretVision, exclude))
            || (0..self.tables.areas().len())
                .filter(|&i| i != FORGOTTEN_WORLD)
                .any(|area| self.area_pick_has(area, Ability::SecretVision, exclude))
            || self
                .bex_monster
                .is_some_and(|m| self.excluding_has(m, Ability::SecretVision, exclude))
    }

    /// Re-roll the familiar and the two starters, discarding any previous
    /// picks. Some starter prefabs consume extra generator draws when
    /// instantiated; replicate that consumption.
    pub(crate) fn determine_start_monsters(&mut self) {
        self.player_monsters.clear();
        self.familiar_index = self.rng.range(0, FAMILIAR_COUNT);
        self.player_monsters.push(self.familiar_index as MonsterId);
        for _ in 0..2 {
            let starter = self.determine_random_monster(false, false, false);
            self.player_monsters.push(starter);
            let extra = self.tables.extra_prefab_draws(starter);
            if extra > 0 {
                self.rng.skip(extra);
            }
        }
    }
}
