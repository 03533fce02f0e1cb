//! Bravery mode: one monster per area plus the fixed narrative roles
//!
//! The area assignment is a retry loop: score every area candidate with a
//! fresh draw, keep the best, let the Tanuki occasionally steal the slot,
//! then check five reachability invariants against the whole assignment.
//! Failures retry with fresh draws, re-rolling the starters every hundred
//! attempts, and give up past the ceiling with a bad-seed record. The
//! later roles (cryomancer trade, army, end of time) draw after the loop
//! settles, so their draws never interleave with retries.

use tracing::{trace, warn};

use ms_data::areas::FORGOTTEN_WORLD;
use ms_data::{
    Ability, MonsterId, ARMY_GROUPS, FIRST_RANDOMIZABLE, RANDOMIZABLE_END, TANUKI,
};

use crate::engine::Scratch;
use crate::error::BadSeed;
use crate::result::BraveryMonsters;

/// Area-assignment attempts before the seed is declared bad.
pub const BRAVERY_TRY_CEILING: u32 = 10_000;
/// Starters are re-rolled every this many failed attempts.
const STARTER_REROLL_INTERVAL: u32 = 100;
/// Chance for the Tanuki to challenge an area winner.
const TANUKI_OVERRIDE_CHANCE: f32 = 0.1;
/// Span of the discarded shift-offset draw after the end-of-time picks.
const SHIFT_OFFSET_SPAN: i32 = 1000;

impl Scratch<'_> {
    /// Run the full bravery procedure. Fails only when the area
    /// assignment exceeds the retry ceiling.
    pub(crate) fn determine_bravery_monsters(&mut self) -> Result<BraveryMonsters, BadSeed> {
        self.cryomancer_monster = None;

        let swim_list = self.tables.swimming_monsters();
        let swimming = swim_list[self.rng.range(0, swim_list.len() as i32) as usize];
        self.swimming_monster = Some(swimming);

        let bex = self.determine_random_monster(true, false, false);
        self.bex_monster = Some(bex);

        self.determine_start_monsters();
        self.retry_area_assignment(Self::assign_area_monsters)?;

        let cryomancer = self.determine_random_monster(true, false, true);
        self.cryomancer_monster = Some(cryomancer);
        self.cryomancer_required = self.determine_cryomancer_required();

        self.determine_monster_army();

        let mut end_of_time = [0 as MonsterId; 3];
        for slot in &mut end_of_time {
            let pick = self.determine_random_monster(true, true, true);
            self.end_of_time.push(pick);
            *slot = pick;
        }

        // The shift offset is rolled and thrown away; the draw itself is
        // part of the sequence.
        self.rng.range(0, SHIFT_OFFSET_SPAN);

        let mut army = [None; 7];
        for (slot, &pick) in army.iter_mut().zip(&self.army) {
            *slot = pick;
        }

        Ok(BraveryMonsters {
            familiar: self.familiar_index as MonsterId,
            starters: [self.player_monsters[1], self.player_monsters[2]],
            swimming,
            bex,
            cryomancer,
            cryomancer_required: self.cryomancer_required,
            end_of_time,
            army,
            area_monsters: self.area_monsters.iter().flatten().copied().collect(),
        })
    }

    /// Drive `assign` until it succeeds or the ceiling is passed.
    pub(crate) fn retry_area_assignment(
        &mut self,
        mut assign: impl FnMut(&mut Self) -> bool,
    ) -> Result<(), BadSeed> {
        let mut tries: u32 = 0;
        while !assign(self) {
            tries += 1;
            if tries.is_multiple_of(STARTER_REROLL_INTERVAL) {
                self.determine_start_monsters();
            }
            if tries > BRAVERY_TRY_CEILING {
                return Err(BadSeed {
                    seed: self.seed,
                    modes: self.modes,
                });
            }
        }
        trace!(seed = self.seed, tries, "area assignment settled");
        Ok(())
    }

    /// One assignment attempt: pick a monster per area, then validate the
    /// five reachability invariants over the whole assignment.
    pub(crate) fn assign_area_monsters(&mut self) -> bool {
        self.area_monsters = vec![None; self.tables.areas().len()];
        for index in 0..self.tables.areas().len() {
            let pick = self.pick_area_monster(index);
            self.area_monsters[index] = Some(pick);
        }
        self.has_break_wall_monster(None)
            && self.has_mount_monster(None)
            && self.has_mount_or_flying_monster(None)
            && self.has_improved_flying_monster(None)
            && self.has_secret_vision_monster(None)
    }

    /// Score every unused candidate in the area with a fresh draw and
    /// keep the strict maximum, then give the Tanuki its chance to steal
    /// the slot. An area with no unused candidates falls back to the
    /// Tanuki without any draw, even when the Tanuki is already placed.
    fn pick_area_monster(&mut self, area_index: usize) -> MonsterId {
        let area = self.area(area_index);
        let mut best: Option<MonsterId> = None;
        let mut best_score = -1.0f32;
        for &mid in area.monsters {
            let candidate = self.replacement(mid);
            if !self.was_monster_already_determined(candidate) {
                let score = self.rng.range_float(0.0, 1.0);
                if score > best_score {
                    best = Some(candidate);
                    best_score = score;
                }
            }
        }
        match best {
            None => TANUKI,
            Some(winner) => {
                // Both draws are conditional; the second happens only
                // when the first clears the override chance.
                if !self.was_monster_already_determined(TANUKI)
                    && self.rng.range_float(0.0, 1.0) < TANUKI_OVERRIDE_CHANCE
                    && self.rng.range_float(0.0, 1.0) > best_score
                {
                    TANUKI
                } else {
                    winner
                }
            }
        }
    }

    /// Pick the monster the Cryomancer demands in trade: the best-rated
    /// used monster whose loss keeps every reachability invariant intact.
    /// Returns `None` when no used monster can be spared.
    fn determine_cryomancer_required(&mut self) -> Option<MonsterId> {
        let candidates: Vec<MonsterId> = self
            .area_monsters
            .iter()
            .flatten()
            .copied()
            .chain(self.player_monsters.iter().skip(1).copied())
            .chain(self.bex_monster)
            .collect();

        let mut best: Option<MonsterId> = None;
        let mut best_rating = -1.0f32;
        for id in candidates {
            if self.trade_would_break_reachability(id) {
                continue;
            }
            let rating = self.rng.range_float(0.0, 1.0);
            if rating > best_rating {
                best = Some(id);
                best_rating = rating;
            }
        }
        best
    }

    fn trade_would_break_reachability(&self, id: MonsterId) -> bool {
        let monster = self.monster(id);
        // The improved-flying branch consults the wall-breaking coverage
        // check, exactly as the game does.
        (monster.has_ability(Ability::BreakWall) && !self.has_break_wall_monster(Some(id)))
            || (monster.has_ability(Ability::ImprovedFlying)
                && !self.has_break_wall_monster(Some(id)))
            || (monster.has_ability(Ability::SecretVision)
                && !self.has_secret_vision_monster(Some(id)))
            || (monster.has_ability(Ability::Mount) && !self.has_mount_monster(Some(id)))
    }

    /// Fill the seven army trade slots, one per ability group.
    fn determine_monster_army(&mut self) {
        for group in ARMY_GROUPS {
            self.determine_army_slot(group);
        }
    }

    /// When the endgame roster already covers the ability, the slot gets
    /// a free unused monster; otherwise the best-rated unused monster
    /// with the exact ability wins. A slot with no qualifying monster
    /// stays empty and generation continues.
    fn determine_army_slot(&mut self, group: Ability) {
        if self.has_endgame_ability_monster(group) {
            let pick = self.determine_random_monster(true, false, true);
            self.army.push(Some(pick));
            return;
        }
        let mut best: Option<MonsterId> = None;
        let mut best_score = -1.0f32;
        for id in FIRST_RANDOMIZABLE..RANDOMIZABLE_END {
            if self.monster(id).has_ability(group) && !self.was_monster_already_determined(id) {
                let score = self.rng.range_float(0.0, 1.0);
                if score > best_score {
                    best = Some(id);
                    best_score = score;
                }
            }
        }
        if best.is_none() {
            warn!(seed = self.seed, ability = %group, "no qualifying monster left for army slot");
        }
        self.army.push(best);
    }

    /// Does the endgame roster cover `group` without counting the monster
    /// promised to the Cryomancer?
    fn has_endgame_ability_monster(&self, group: Ability) -> bool {
        let promised = self.cryomancer_required;
        for &id in self.player_monsters.iter().skip(1) {
            if Some(id) != promised && self.monster(id).has_ability(group) {
                return true;
            }
        }
        for (index, pick) in self.area_monsters.iter().enumerate() {
            if index == FORGOTTEN_WORLD {
                continue;
            }
            if let Some(id) = *pick {
                if Some(id) != promised && self.monster(id).has_ability(group) {
                    return true;
                }
            }
        }
        match self.bex_monster {
            Some(id) => Some(id) != promised && self.monster(id).has_ability(group),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Engine, Scratch};
    use crate::result::Modes;
    use ms_data::areas::{BLUE_CAVES, MOUNTAIN_PATH};
    use ms_data::Tables;

    const BRAVERY: Modes = Modes {
        randomizer: false,
        bravery: true,
        relics: false,
    };

    fn bravery_for(seed: i32) -> BraveryMonsters {
        let tables = Tables::load().unwrap();
        let game = Engine::new(&tables).generate(seed, BRAVERY).unwrap();
        game.bravery.unwrap()
    }

    #[test]
    fn same_seed_same_assignment() {
        assert_eq!(bravery_for(31_337), bravery_for(31_337));
    }

    #[test]
    fn assignment_shape() {
        let tables = Tables::load().unwrap();
        for seed in [0, 1, 55, 4242] {
            let bravery = bravery_for(seed);
            assert!(i32::from(bravery.familiar) < ms_data::FAMILIAR_COUNT);
            assert_eq!(bravery.area_monsters.len(), tables.areas().len());
            assert_eq!(bravery.army.len(), 7);
            for starter in bravery.starters {
                assert!((FIRST_RANDOMIZABLE..RANDOMIZABLE_END).contains(&starter));
            }
            assert!(tables.is_swimming(bravery.swimming));
        }
    }

    #[test]
    fn starters_never_swim_or_improved_fly() {
        let tables = Tables::load().unwrap();
        for seed in [9, 88, 777] {
            let bravery = bravery_for(seed);
            for starter in bravery.starters {
                assert!(!tables.is_swimming(starter));
                assert!(!tables
                    .monster(starter)
                    .unwrap()
                    .has_ability(Ability::ImprovedFlying));
            }
        }
    }

    #[test]
    fn reachability_invariants_hold_on_success() {
        let tables = Tables::load().unwrap();
        for seed in [3, 12, 500, 60_000] {
            let bravery = bravery_for(seed);
            let has = |id: MonsterId, ability: Ability| {
                tables.monsters()[id as usize].has_ability(ability)
            };
            let area = |i: usize| bravery.area_monsters[i];

            let break_wall = bravery.starters.iter().any(|&m| has(m, Ability::BreakWall))
                || has(bravery.familiar, Ability::BreakWall)
                || has(area(BLUE_CAVES), Ability::BreakWall)
                || has(area(MOUNTAIN_PATH), Ability::BreakWall);
            assert!(break_wall, "seed {seed}: no wall breaker reachable");

            let improved_flying = [2usize, 3, 4, 5, 6, 7]
                .iter()
                .any(|&i| has(area(i), Ability::ImprovedFlying));
            assert!(improved_flying, "seed {seed}: no improved flyer reachable");

            let secret_vision = bravery
                .starters
                .iter()
                .any(|&m| has(m, Ability::SecretVision))
                || (0..tables.areas().len())
                    .filter(|&i| i != ms_data::areas::FORGOTTEN_WORLD)
                    .any(|i| has(area(i), Ability::SecretVision))
                || has(bravery.bex, Ability::SecretVision);
            assert!(secret_vision, "seed {seed}: no secret vision reachable");
        }
    }

    #[test]
    fn cryomancer_trade_never_named_after_an_army_exclusion() {
        // The promised monster is excluded from endgame coverage, so it
        // must never also fill an army slot.
        for seed in [21, 210, 2100] {
            let bravery = bravery_for(seed);
            if let Some(promised) = bravery.cryomancer_required {
                assert!(!bravery.army.contains(&Some(promised)));
            }
        }
    }

    #[test]
    fn no_duplicate_picks_across_roles() {
        for seed in [6, 66, 666] {
            let bravery = bravery_for(seed);
            let mut seen: Vec<MonsterId> = Vec::new();
            let mut check = |id: MonsterId| {
                // The Tanuki fallback may legitimately duplicate.
                if id != TANUKI {
                    assert!(!seen.contains(&id), "seed {seed}: monster {id} twice");
                }
                seen.push(id);
            };
            check(bravery.familiar);
            bravery.starters.iter().copied().for_each(&mut check);
            check(bravery.swimming);
            check(bravery.bex);
            check(bravery.cryomancer);
            bravery.area_monsters.iter().copied().for_each(&mut check);
            bravery.end_of_time.iter().copied().for_each(&mut check);
            bravery.army.iter().flatten().copied().for_each(&mut check);
        }
    }

    #[test]
    fn retry_loop_aborts_at_the_ceiling() {
        let tables = Tables::load().unwrap();
        let modes = BRAVERY;
        let mut scratch = Scratch::new(&tables, 1234, modes);
        let mut attempts = 0u32;
        let result = scratch.retry_area_assignment(|_| {
            attempts += 1;
            false
        });
        let bad = result.unwrap_err();
        assert_eq!(bad.seed, 1234);
        assert_eq!(bad.modes, modes);
        assert_eq!(attempts, BRAVERY_TRY_CEILING + 1);
    }

    #[test]
    fn bad_seed_line_format() {
        let bad = BadSeed {
            seed: -17,
            modes: Modes {
                randomizer: true,
                bravery: true,
                relics: false,
            },
        };
        assert_eq!(bad.to_string(), "Seed: -17 - Game modes: Randomizer | Bravery");
    }
}
