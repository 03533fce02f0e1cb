//! Relic mode: one unique relic per area, dropped into a concrete chest
//!
//! Relics are drawn by rejection sampling: a relic already placed is
//! redrawn, and under bravery mode a type-restricted relic is redrawn
//! unless the area's assigned monster or one of the player's monsters can
//! equip it. The chest follows from two more draws: a scene of the area,
//! then a chest of that scene.

use ms_data::types as ty;
use ms_data::{DataError, MonsterId, RelicId};

use crate::engine::Scratch;
use crate::result::{RelicPlacement, RelicSpot};

impl Scratch<'_> {
    pub(crate) fn determine_relics(&mut self) -> Result<RelicPlacement, DataError> {
        let areas = self.tables.areas();
        self.relic_by_area = vec![None; areas.len()];
        let mut spots = Vec::with_capacity(areas.len());
        for index in 0..areas.len() {
            let area = self.area(index);
            let relic = self.draw_relic(index);
            self.relic_by_area[index] = Some(relic);

            let scene_id = area.area_data[self.rng.range(0, area.area_data.len() as i32) as usize];
            let scene = self.tables.scene(scene_id)?;
            let chest = scene.chests[self.rng.range(0, scene.chests.len() as i32) as usize];

            spots.push(RelicSpot {
                area: area.id,
                relic,
                scene: scene_id,
                chest,
            });
        }
        Ok(RelicPlacement { spots })
    }

    /// Rejection-sample the relic table for this area. Rejected draws
    /// still advanced the generator.
    fn draw_relic(&mut self, area_index: usize) -> RelicId {
        let relics = self.tables.relics();
        loop {
            let relic = &relics[self.rng.range(0, relics.len() as i32) as usize];
            if self.relic_by_area.iter().flatten().any(|&placed| placed == relic.id) {
                continue;
            }
            if self.modes.bravery
                && relic.monster_type_restriction != ty::NONE
                && !self.restriction_satisfied(area_index, relic.monster_type_restriction)
            {
                continue;
            }
            return relic.id;
        }
    }

    /// Can anyone actually equip a relic with this type restriction: the
    /// area's bravery pick, or any of the player's monsters (familiar
    /// included)?
    fn restriction_satisfied(&self, area_index: usize, restriction: u16) -> bool {
        if let Some(id) = self.area_monsters.get(area_index).copied().flatten() {
            if self.monster_is_of_type(id, restriction) {
                return true;
            }
        }
        self.player_monsters
            .iter()
            .any(|&id| self.monster_is_of_type(id, restriction))
    }

    fn monster_is_of_type(&self, id: MonsterId, type_id: u16) -> bool {
        self.monster(id).monster_types.contains(&type_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;
    use crate::result::Modes;
    use ms_data::Tables;

    const RELIC_ONLY: Modes = Modes {
        randomizer: false,
        bravery: false,
        relics: true,
    };

    fn relics_for(seed: i32, modes: Modes) -> (Tables, crate::result::GeneratedGame) {
        let tables = Tables::load().unwrap();
        let game = Engine::new(&tables).generate(seed, modes).unwrap();
        (tables, game)
    }

    #[test]
    fn one_unique_relic_per_area() {
        for seed in [0, 10, 321, -44] {
            let (tables, game) = relics_for(seed, RELIC_ONLY);
            let placement = game.relics.unwrap();
            assert_eq!(placement.spots.len(), tables.areas().len());
            let mut relic_ids: Vec<RelicId> =
                placement.spots.iter().map(|s| s.relic).collect();
            relic_ids.sort_unstable();
            relic_ids.dedup();
            assert_eq!(relic_ids.len(), tables.areas().len());
        }
    }

    #[test]
    fn chests_belong_to_their_area() {
        let (tables, game) = relics_for(7, RELIC_ONLY);
        for spot in game.relics.unwrap().spots {
            let scene = tables.scene(spot.scene).unwrap();
            assert_eq!(scene.area_id, spot.area);
            assert!(scene.chests.contains(&spot.chest));
        }
    }

    #[test]
    fn seed_zero_relic_only_is_stable() {
        let (_, first) = relics_for(0, RELIC_ONLY);
        let (_, second) = relics_for(0, RELIC_ONLY);
        assert_eq!(first, second);
        assert!(first.randomizer.is_none());
        assert!(first.bravery.is_none());
    }

    #[test]
    fn bravery_restrictions_are_honored() {
        let modes = Modes {
            randomizer: false,
            bravery: true,
            relics: true,
        };
        for seed in [1, 23, 456] {
            let (tables, game) = relics_for(seed, modes);
            let bravery = game.bravery.unwrap();
            let mut players = vec![bravery.familiar];
            players.extend_from_slice(&bravery.starters);
            for spot in game.relics.unwrap().spots {
                let relic = tables.relics()[spot.relic as usize];
                if relic.monster_type_restriction == ty::NONE {
                    continue;
                }
                let area_monster = bravery.area_monsters[spot.area as usize];
                let satisfied = tables.monsters()[area_monster as usize]
                    .monster_types
                    .contains(&relic.monster_type_restriction)
                    || players.iter().any(|&p| {
                        tables.monsters()[p as usize]
                            .monster_types
                            .contains(&relic.monster_type_restriction)
                    });
                assert!(
                    satisfied,
                    "seed {seed}: relic {} restricted to type {} placed unusable",
                    relic.name, relic.monster_type_restriction
                );
            }
        }
    }

    #[test]
    fn relic_only_skips_restrictions() {
        // Without bravery there is no assignment to check against, so
        // restricted relics place freely.
        let (tables, game) = relics_for(0, RELIC_ONLY);
        let placed: Vec<RelicId> =
            game.relics.unwrap().spots.iter().map(|s| s.relic).collect();
        let restricted_count = placed
            .iter()
            .filter(|&&id| tables.relics()[id as usize].monster_type_restriction != ty::NONE)
            .count();
        // 13 placements over 12 unrestricted relics force at least one
        // restricted placement.
        assert!(restricted_count >= 1);
    }
}
