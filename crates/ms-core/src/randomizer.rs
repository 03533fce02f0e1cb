//! Randomizer mode: a bijective remapping of the randomizable journal
//!
//! The swimming role is fixed first (the Koi's replacement must swim),
//! then every other randomizable monster takes an unused pool entry under
//! placement constraints, and finally four traversal reachability checks
//! validate the whole mapping. Any failed check throws the attempt away
//! and the driver starts over with fresh draws.

use std::collections::BTreeMap;

use ms_data::areas::{
    ANCIENT_WOODS, BLUE_CAVES, FORGOTTEN_WORLD, HORIZON_BEACH, MAGMA_CHAMBER, MOUNTAIN_PATH,
    MYSTICAL_WORKSHOP, SNOWY_PEAKS, STRONGHOLD_DUNGEON, SUN_PALACE,
};
use ms_data::{Ability, Monster, MonsterId, FIRST_RANDOMIZABLE, KOI, RANDOMIZABLE_END, TANUKI};

use crate::engine::Scratch;
use crate::result::RandomizerMapping;

/// Areas where an Improved Flying replacement would let the player skip
/// early traversal gates.
const NO_IMPROVED_FLYING_AREAS: [usize; 2] = [BLUE_CAVES, MOUNTAIN_PATH];

/// Areas reached before the player can follow a swimming monster.
const NO_SWIMMING_AREAS: [usize; 8] = [
    BLUE_CAVES,
    MOUNTAIN_PATH,
    ANCIENT_WOODS,
    STRONGHOLD_DUNGEON,
    SNOWY_PEAKS,
    SUN_PALACE,
    MAGMA_CHAMBER,
    MYSTICAL_WORKSHOP,
];

impl Scratch<'_> {
    /// One full mapping attempt. Returns false when a reachability check
    /// rejects the mapping; the caller retries from the current generator
    /// position.
    pub(crate) fn determine_random_mapping(&mut self) -> bool {
        self.mapping = vec![None; self.tables.monsters().len()];
        self.monster_pool = (FIRST_RANDOMIZABLE..RANDOMIZABLE_END).collect();

        // The Koi slot is fixed first so exactly one swimming-capable
        // replacement is reachable where the game expects one.
        let swim_list = self.tables.swimming_monsters();
        let swim = swim_list[self.rng.range(0, swim_list.len() as i32) as usize];
        self.take_from_pool(swim);
        self.mapping[KOI as usize] = Some(swim);

        for id in FIRST_RANDOMIZABLE..RANDOMIZABLE_END {
            if id == KOI {
                continue;
            }
            let allow_improved_flying =
                id != TANUKI && !self.monster_in_areas(id, &NO_IMPROVED_FLYING_AREAS);
            let allow_swimming = id != TANUKI && !self.monster_in_areas(id, &NO_SWIMMING_AREAS);
            let pick = self.draw_pool_monster(allow_improved_flying, allow_swimming);
            self.take_from_pool(pick);
            self.mapping[id as usize] = Some(pick);
        }

        self.check_remapped(
            &[
                BLUE_CAVES,
                MOUNTAIN_PATH,
                STRONGHOLD_DUNGEON,
                ANCIENT_WOODS,
                SNOWY_PEAKS,
                SUN_PALACE,
            ],
            false,
            |m| m.has_ability(Ability::Mount),
        ) && self.check_remapped(
            &[BLUE_CAVES, MOUNTAIN_PATH, STRONGHOLD_DUNGEON, ANCIENT_WOODS],
            false,
            |m| m.has_ability(Ability::Mount) || m.has_ability(Ability::Flying),
        ) && self.check_remapped(
            &[
                STRONGHOLD_DUNGEON,
                ANCIENT_WOODS,
                SNOWY_PEAKS,
                SUN_PALACE,
                MAGMA_CHAMBER,
                HORIZON_BEACH,
            ],
            false,
            |m| m.has_ability(Ability::ImprovedFlying),
        ) && self.remapped_secret_vision_anywhere()
    }

    /// The finished mapping as a result value.
    pub(crate) fn mapping_result(&self) -> RandomizerMapping {
        let replacements: BTreeMap<MonsterId, MonsterId> = self
            .mapping
            .iter()
            .enumerate()
            .filter_map(|(id, pick)| pick.map(|p| (id as MonsterId, p)))
            .collect();
        RandomizerMapping { replacements }
    }

    fn take_from_pool(&mut self, id: MonsterId) {
        if let Some(pos) = self.monster_pool.iter().position(|&p| p == id) {
            self.monster_pool.remove(pos);
        }
    }

    /// Rejection-sample the remaining pool. Rejected candidates still
    /// consumed a draw.
    fn draw_pool_monster(&mut self, allow_improved_flying: bool, allow_swimming: bool) -> MonsterId {
        loop {
            let index = self.rng.range(0, self.monster_pool.len() as i32) as usize;
            let candidate = self.monster_pool[index];
            if !allow_improved_flying
                && self.monster(candidate).has_ability(Ability::ImprovedFlying)
            {
                continue;
            }
            if !allow_swimming && self.tables.is_swimming(candidate) {
                continue;
            }
            return candidate;
        }
    }

    fn monster_in_areas(&self, id: MonsterId, area_indices: &[usize]) -> bool {
        area_indices.iter().any(|&i| self.area(i).contains(id))
    }

    /// Does any monster slot in the given areas map to a replacement
    /// satisfying `pred`? `full_list` selects the whole encounter table
    /// instead of the randomizer check list.
    fn check_remapped(
        &self,
        area_indices: &[usize],
        full_list: bool,
        pred: impl Fn(&'static Monster) -> bool,
    ) -> bool {
        area_indices.iter().any(|&i| {
            let area = self.area(i);
            let list = if full_list {
                area.monsters
            } else {
                area.randomizer_check_list
            };
            list.iter()
                .any(|&mid| pred(self.monster(self.replacement(mid))))
        })
    }

    fn remapped_secret_vision_anywhere(&self) -> bool {
        (0..self.tables.areas().len())
            .filter(|&i| i != FORGOTTEN_WORLD)
            .any(|i| self.check_remapped(&[i], true, |m| m.has_ability(Ability::SecretVision)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;
    use crate::result::Modes;
    use ms_data::Tables;

    const RANDOMIZER: Modes = Modes {
        randomizer: true,
        bravery: false,
        relics: false,
    };

    fn mapping_for(seed: i32) -> RandomizerMapping {
        let tables = Tables::load().unwrap();
        let game = Engine::new(&tables).generate(seed, RANDOMIZER).unwrap();
        game.randomizer.unwrap()
    }

    #[test]
    fn mapping_is_a_bijection_over_the_randomizable_domain() {
        for seed in [0, 1, 7, 42, 1337, -5, i32::MIN, i32::MAX] {
            let mapping = mapping_for(seed);
            let domain: Vec<MonsterId> = (FIRST_RANDOMIZABLE..RANDOMIZABLE_END).collect();
            let keys: Vec<MonsterId> = mapping.replacements.keys().copied().collect();
            assert_eq!(keys, domain, "seed {seed}: keys must cover the domain");
            let mut values: Vec<MonsterId> = mapping.replacements.values().copied().collect();
            values.sort_unstable();
            values.dedup();
            assert_eq!(values, domain, "seed {seed}: values must permute the domain");
        }
    }

    #[test]
    fn koi_replacement_swims() {
        let tables = Tables::load().unwrap();
        for seed in [0, 3, 99, 12345] {
            let mapping = mapping_for(seed);
            assert!(tables.is_swimming(mapping.replacement(KOI)));
        }
    }

    #[test]
    fn identity_outside_the_domain() {
        let mapping = mapping_for(42);
        assert_eq!(mapping.replacement(0), 0);
        assert_eq!(mapping.replacement(110), 110);
    }

    #[test]
    fn same_seed_same_mapping() {
        assert_eq!(mapping_for(987_654), mapping_for(987_654));
    }

    #[test]
    fn early_areas_never_map_to_improved_flying_or_swimming() {
        let tables = Tables::load().unwrap();
        for seed in [2, 64, 4096] {
            let mapping = mapping_for(seed);
            for &area_index in &NO_IMPROVED_FLYING_AREAS {
                for &mid in tables.areas()[area_index].monsters {
                    if mid == KOI || !(FIRST_RANDOMIZABLE..RANDOMIZABLE_END).contains(&mid) {
                        continue;
                    }
                    let replacement = mapping.replacement(mid);
                    assert!(
                        !tables
                            .monster(replacement)
                            .unwrap()
                            .has_ability(Ability::ImprovedFlying),
                        "seed {seed}: monster {mid} maps to improved flyer {replacement}"
                    );
                }
            }
            for &area_index in &NO_SWIMMING_AREAS {
                for &mid in tables.areas()[area_index].monsters {
                    if mid == KOI || !(FIRST_RANDOMIZABLE..RANDOMIZABLE_END).contains(&mid) {
                        continue;
                    }
                    assert!(!tables.is_swimming(mapping.replacement(mid)));
                }
            }
        }
    }

    #[test]
    fn tanuki_keeps_a_grounded_replacement() {
        let tables = Tables::load().unwrap();
        for seed in [5, 77, 900] {
            let replacement = mapping_for(seed).replacement(TANUKI);
            let monster = tables.monster(replacement).unwrap();
            assert!(!monster.has_ability(Ability::ImprovedFlying));
            assert!(!tables.is_swimming(replacement));
        }
    }

    #[test]
    fn reachability_checks_hold_on_the_final_mapping() {
        let tables = Tables::load().unwrap();
        for seed in [11, 222, 3333] {
            let mapping = mapping_for(seed);
            let any_in = |areas: &[usize], pred: &dyn Fn(&Monster) -> bool| {
                areas.iter().any(|&i| {
                    tables.areas()[i]
                        .randomizer_check_list
                        .iter()
                        .any(|&mid| pred(&tables.monsters()[mapping.replacement(mid) as usize]))
                })
            };
            assert!(any_in(
                &[
                    BLUE_CAVES,
                    MOUNTAIN_PATH,
                    STRONGHOLD_DUNGEON,
                    ANCIENT_WOODS,
                    SNOWY_PEAKS,
                    SUN_PALACE
                ],
                &|m| m.has_ability(Ability::Mount)
            ));
            assert!(any_in(
                &[
                    STRONGHOLD_DUNGEON,
                    ANCIENT_WOODS,
                    SNOWY_PEAKS,
                    SUN_PALACE,
                    MAGMA_CHAMBER,
                    HORIZON_BEACH
                ],
                &|m| m.has_ability(Ability::ImprovedFlying)
            ));
        }
    }
}
