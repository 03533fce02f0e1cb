//! ms-data: Static game data for Monster Sanctuary seed reproduction
//!
//! The six reference tables (monsters, areas, area scene/chest data,
//! explore actions, monster types, relics) plus the side tables the
//! generation engine needs (swimming list, extra prefab draw counts,
//! unrandomizable ids). All data is embedded as static Rust tables and
//! never mutated; [`Tables`] is the validated handle built once per
//! process and shared read-only by everything else.
//!
//! Loading failures are configuration errors, not per-seed conditions:
//! a [`DataError`] at startup means the static domain contract is broken
//! and the process must not continue.

use std::collections::HashMap;

use thiserror::Error;

pub mod actions;
pub mod areas;
pub mod monsters;
pub mod relics;
pub mod types;

pub use actions::{Ability, ExploreAction, ARMY_GROUPS, EXPLORE_ACTIONS};
pub use areas::{AreaId, AreaSceneData, ChestId, MapArea, SceneId, AREAS, AREA_SCENES};
pub use monsters::{
    Monster, MonsterId, EXTRA_PREFAB_DRAWS, FAMILIAR_COUNT, FIRST_RANDOMIZABLE, KOI, MONSTERS,
    RANDOMIZABLE_END, SWIMMING_MONSTERS, TANUKI, UNRANDOMIZED,
};
pub use relics::{Relic, RelicId, RELICS};
pub use types::{MonsterType, MONSTER_TYPES};

/// Static table validation / lookup failure. Always fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataError {
    #[error("monster table not contiguous: index {index} holds id {id}")]
    NonContiguousMonsterIds { index: usize, id: MonsterId },

    #[error("area table not contiguous: index {index} holds id {id}")]
    NonContiguousAreaIds { index: usize, id: AreaId },

    #[error("monster id {0} out of range")]
    UnknownMonster(MonsterId),

    #[error("monster named {0:?} not found")]
    UnknownMonsterName(String),

    #[error("explore action id {action} (monster {monster}) not in action table")]
    UnknownExploreAction { monster: MonsterId, action: u16 },

    #[error("monster type id {0} out of range")]
    UnknownMonsterType(u16),

    #[error("scene id {0} has no scene data")]
    UnknownScene(SceneId),

    #[error("area {area} references scene {scene} owned by area {owner}")]
    ForeignScene { area: AreaId, scene: SceneId, owner: AreaId },

    #[error("area {area}: randomizer check list entry {monster} is not in the area")]
    CheckListNotSubset { area: AreaId, monster: MonsterId },

    #[error("duplicate normalized monster name {0:?}")]
    DuplicateMonsterName(String),

    #[error("scene {0} has no chests")]
    EmptyScene(SceneId),
}

/// Normalize a monster name for lookup: case-folded, whitespace and
/// apostrophes stripped ("G'rulu" and "grulu" resolve identically).
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '\'')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Validated handle over the static reference tables.
///
/// Construction walks every cross-reference once; afterwards all lookups
/// by id are O(1) slice indexing and lookups by name go through the
/// prebuilt normalized index.
#[derive(Debug)]
pub struct Tables {
    name_index: HashMap<String, MonsterId>,
    scene_index: HashMap<SceneId, usize>,
}

impl Tables {
    /// Build and validate the table handle. Call once at startup.
    pub fn load() -> Result<Self, DataError> {
        let mut name_index = HashMap::with_capacity(MONSTERS.len());
        for (index, monster) in MONSTERS.iter().enumerate() {
            if monster.id as usize != index {
                return Err(DataError::NonContiguousMonsterIds {
                    index,
                    id: monster.id,
                });
            }
            if !EXPLORE_ACTIONS.iter().any(|a| a.id == monster.explore_action) {
                return Err(DataError::UnknownExploreAction {
                    monster: monster.id,
                    action: monster.explore_action,
                });
            }
            for &type_id in monster.monster_types {
                if type_id as usize >= MONSTER_TYPES.len() {
                    return Err(DataError::UnknownMonsterType(type_id));
                }
            }
            let key = normalize_name(monster.name);
            if name_index.insert(key.clone(), monster.id).is_some() {
                return Err(DataError::DuplicateMonsterName(key));
            }
        }

        let mut scene_index = HashMap::with_capacity(AREA_SCENES.len());
        for (index, scene) in AREA_SCENES.iter().enumerate() {
            if scene.chests.is_empty() {
                return Err(DataError::EmptyScene(scene.scene_id));
            }
            scene_index.insert(scene.scene_id, index);
        }

        for (index, area) in AREAS.iter().enumerate() {
            if area.id as usize != index {
                return Err(DataError::NonContiguousAreaIds { index, id: area.id });
            }
            for &monster_id in area.monsters {
                if monster_id as usize >= MONSTERS.len() {
                    return Err(DataError::UnknownMonster(monster_id));
                }
            }
            for &monster_id in area.randomizer_check_list {
                if !area.monsters.contains(&monster_id) {
                    return Err(DataError::CheckListNotSubset {
                        area: area.id,
                        monster: monster_id,
                    });
                }
            }
            for &scene_id in area.area_data {
                let owner = scene_index
                    .get(&scene_id)
                    .map(|&i| AREA_SCENES[i].area_id)
                    .ok_or(DataError::UnknownScene(scene_id))?;
                if owner != area.id {
                    return Err(DataError::ForeignScene {
                        area: area.id,
                        scene: scene_id,
                        owner,
                    });
                }
            }
        }

        for &monster_id in SWIMMING_MONSTERS.iter().chain(UNRANDOMIZED) {
            if monster_id as usize >= MONSTERS.len() {
                return Err(DataError::UnknownMonster(monster_id));
            }
        }
        for &(monster_id, _) in EXTRA_PREFAB_DRAWS {
            if monster_id as usize >= MONSTERS.len() {
                return Err(DataError::UnknownMonster(monster_id));
            }
        }
        for relic in RELICS {
            if relic.monster_type_restriction as usize >= MONSTER_TYPES.len() {
                return Err(DataError::UnknownMonsterType(relic.monster_type_restriction));
            }
        }

        Ok(Self {
            name_index,
            scene_index,
        })
    }

    /// Expected-present monster lookup. A miss is a broken data contract.
    pub fn monster(&self, id: MonsterId) -> Result<&'static Monster, DataError> {
        MONSTERS
            .get(id as usize)
            .ok_or(DataError::UnknownMonster(id))
    }

    /// Lookup by normalized name. Genuinely optional.
    pub fn monster_by_name(&self, name: &str) -> Option<&'static Monster> {
        let id = *self.name_index.get(&normalize_name(name))?;
        Some(&MONSTERS[id as usize])
    }

    pub fn monsters(&self) -> &'static [Monster] {
        MONSTERS
    }

    pub fn areas(&self) -> &'static [MapArea] {
        AREAS
    }

    /// Expected-present scene lookup.
    pub fn scene(&self, scene_id: SceneId) -> Result<&'static AreaSceneData, DataError> {
        self.scene_index
            .get(&scene_id)
            .map(|&i| &AREA_SCENES[i])
            .ok_or(DataError::UnknownScene(scene_id))
    }

    pub fn relics(&self) -> &'static [Relic] {
        RELICS
    }

    pub fn monster_type(&self, id: u16) -> Result<&'static MonsterType, DataError> {
        MONSTER_TYPES
            .get(id as usize)
            .ok_or(DataError::UnknownMonsterType(id))
    }

    /// Swimming-capable monsters, in draw-list order.
    pub fn swimming_monsters(&self) -> &'static [MonsterId] {
        SWIMMING_MONSTERS
    }

    pub fn is_swimming(&self, id: MonsterId) -> bool {
        SWIMMING_MONSTERS.contains(&id)
    }

    /// Extra generator draws consumed when this monster's prefab is
    /// instantiated as a starter. Zero for most monsters.
    pub fn extra_prefab_draws(&self, id: MonsterId) -> u32 {
        EXTRA_PREFAB_DRAWS
            .iter()
            .find(|(m, _)| *m == id)
            .map(|&(_, n)| n)
            .unwrap_or(0)
    }

    /// Does the monster with id `id` satisfy `ability`?
    pub fn monster_has(&self, id: MonsterId, ability: Ability) -> Result<bool, DataError> {
        Ok(ability.contains(self.monster(id)?.explore_action))
    }
}

impl Monster {
    /// Does this monster's explore action satisfy `ability`?
    pub fn has_ability(&self, ability: Ability) -> bool {
        ability.contains(self.explore_action)
    }
}

impl MapArea {
    /// Is the monster native to this area?
    pub fn contains(&self, id: MonsterId) -> bool {
        self.monsters.contains(&id)
    }
}
