//! Declarative seed filters
//!
//! A filter is a JSON file of wanted outcomes, written with monster, area
//! and relic names. Names resolve through the normalized index, so
//! "Mad Eye", "madeye" and "MADEYE" all match. The file is parsed into a
//! [`FilterSpec`], resolved against the tables into a [`Filter`] of plain
//! ids, and evaluated against freshly generated games. Only the sections
//! for active modes are resolved; an unknown name is an error rather than
//! a silently dropped constraint.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use ms_core::{GeneratedGame, Modes};
use ms_data::{normalize_name, MonsterId, RelicId, Tables};

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("filter is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("filter names unknown monster {0:?}")]
    UnknownMonster(String),

    #[error("filter names unknown area {0:?}")]
    UnknownArea(String),

    #[error("filter names unknown relic {0:?}")]
    UnknownRelic(String),

    #[error("filter has no constraints for the active modes")]
    Empty,
}

/// The filter file as written: names, grouped by mode section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterSpec {
    #[serde(rename = "Randomizer")]
    pub randomizer: Option<RandomizerSpec>,
    #[serde(rename = "Bravery")]
    pub bravery: Option<BraverySpec>,
    #[serde(rename = "Relics")]
    pub relics: Option<RelicsSpec>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RandomizerSpec {
    /// Original monster name -> wanted replacement name.
    #[serde(rename = "Monsters")]
    pub monsters: Option<BTreeMap<String, String>>,
    /// Area name -> monsters wanted somewhere among its replacements.
    #[serde(rename = "Areas")]
    pub areas: Option<BTreeMap<String, Vec<String>>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BraverySpec {
    /// Monsters wanted anywhere in the assignment.
    #[serde(rename = "Available")]
    pub available: Option<Vec<String>>,
    #[serde(rename = "Familiar")]
    pub familiar: Option<String>,
    #[serde(rename = "Start")]
    pub start: Option<Vec<String>>,
    #[serde(rename = "Swimming")]
    pub swimming: Option<String>,
    #[serde(rename = "Bex")]
    pub bex: Option<String>,
    #[serde(rename = "Cryomancer")]
    pub cryomancer: Option<String>,
    #[serde(rename = "Cryomancer Required")]
    pub cryomancer_required: Option<String>,
    #[serde(rename = "End of Time")]
    pub end_of_time: Option<Vec<String>>,
    #[serde(rename = "Monster Army")]
    pub army: Option<Vec<String>>,
    /// Area name -> wanted area monster.
    #[serde(rename = "Areas")]
    pub areas: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelicsSpec {
    /// Relics wanted somewhere.
    #[serde(rename = "Available")]
    pub available: Option<Vec<String>>,
    /// Area name -> wanted relic.
    #[serde(rename = "Areas")]
    pub areas: Option<BTreeMap<String, String>>,
}

/// A filter resolved to ids, ready to evaluate.
#[derive(Debug, Default)]
pub struct Filter {
    /// Name used for the per-filter output directory (the file stem).
    pub name: String,
    randomizer: Option<RandomizerChecks>,
    bravery: Option<BraveryChecks>,
    relics: Option<RelicChecks>,
}

#[derive(Debug, Default)]
struct RandomizerChecks {
    monsters: Vec<(MonsterId, MonsterId)>,
    areas: Vec<(usize, Vec<MonsterId>)>,
}

#[derive(Debug, Default)]
struct BraveryChecks {
    available: Vec<MonsterId>,
    familiar: Option<MonsterId>,
    start: Vec<MonsterId>,
    swimming: Option<MonsterId>,
    bex: Option<MonsterId>,
    cryomancer: Option<MonsterId>,
    cryomancer_required: Option<MonsterId>,
    end_of_time: Vec<MonsterId>,
    army: Vec<MonsterId>,
    areas: Vec<(usize, MonsterId)>,
}

#[derive(Debug, Default)]
struct RelicChecks {
    available: Vec<RelicId>,
    areas: Vec<(usize, RelicId)>,
}

impl Filter {
    /// Read and resolve a filter file. Only the sections matching the
    /// active `modes` are kept.
    pub fn load(path: impl AsRef<Path>, tables: &Tables, modes: Modes) -> Result<Self, FilterError> {
        let path = path.as_ref();
        let spec: FilterSpec = serde_json::from_str(&fs::read_to_string(path)?)?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "filter".to_string());
        Self::resolve(spec, name, tables, modes)
    }

    pub fn resolve(
        spec: FilterSpec,
        name: String,
        tables: &Tables,
        modes: Modes,
    ) -> Result<Self, FilterError> {
        let mut filter = Filter {
            name,
            ..Filter::default()
        };

        if modes.randomizer {
            if let Some(section) = spec.randomizer {
                let mut checks = RandomizerChecks::default();
                for (original, replacement) in section.monsters.unwrap_or_default() {
                    checks
                        .monsters
                        .push((monster_id(tables, &original)?, monster_id(tables, &replacement)?));
                }
                for (area, wanted) in section.areas.unwrap_or_default() {
                    let index = area_index(tables, &area)?;
                    let wanted = wanted
                        .iter()
                        .map(|name| monster_id(tables, name))
                        .collect::<Result<Vec<_>, _>>()?;
                    checks.areas.push((index, wanted));
                }
                filter.randomizer = Some(checks);
            }
        }

        if modes.bravery {
            if let Some(section) = spec.bravery {
                let ids = |names: Option<Vec<String>>| {
                    names
                        .unwrap_or_default()
                        .iter()
                        .map(|name| monster_id(tables, name))
                        .collect::<Result<Vec<_>, _>>()
                };
                let id = |name: Option<String>| name.map(|n| monster_id(tables, &n)).transpose();
                let mut checks = BraveryChecks {
                    available: ids(section.available)?,
                    familiar: id(section.familiar)?,
                    start: ids(section.start)?,
                    swimming: id(section.swimming)?,
                    bex: id(section.bex)?,
                    cryomancer: id(section.cryomancer)?,
                    cryomancer_required: id(section.cryomancer_required)?,
                    end_of_time: ids(section.end_of_time)?,
                    army: ids(section.army)?,
                    areas: Vec::new(),
                };
                for (area, monster) in section.areas.unwrap_or_default() {
                    checks
                        .areas
                        .push((area_index(tables, &area)?, monster_id(tables, &monster)?));
                }
                filter.bravery = Some(checks);
            }
        }

        if modes.relics {
            if let Some(section) = spec.relics {
                let mut checks = RelicChecks::default();
                for name in section.available.unwrap_or_default() {
                    checks.available.push(relic_id(tables, &name)?);
                }
                for (area, relic) in section.areas.unwrap_or_default() {
                    checks
                        .areas
                        .push((area_index(tables, &area)?, relic_id(tables, &relic)?));
                }
                filter.relics = Some(checks);
            }
        }

        if filter.randomizer.is_none() && filter.bravery.is_none() && filter.relics.is_none() {
            return Err(FilterError::Empty);
        }
        Ok(filter)
    }

    /// Does the generated game satisfy every constraint?
    pub fn matches(&self, tables: &Tables, game: &GeneratedGame) -> bool {
        if let Some(checks) = &self.randomizer {
            let Some(mapping) = &game.randomizer else {
                return false;
            };
            for &(original, wanted) in &checks.monsters {
                if mapping.replacement(original) != wanted {
                    return false;
                }
            }
            for (area_index, wanted_ids) in &checks.areas {
                let area = &tables.areas()[*area_index];
                for &wanted in wanted_ids {
                    if !area
                        .monsters
                        .iter()
                        .any(|&mid| mapping.replacement(mid) == wanted)
                    {
                        return false;
                    }
                }
            }
        }

        if let Some(checks) = &self.bravery {
            let Some(bravery) = &game.bravery else {
                return false;
            };
            let everywhere = |id: MonsterId| {
                bravery.familiar == id
                    || bravery.starters.contains(&id)
                    || bravery.swimming == id
                    || bravery.bex == id
                    || bravery.cryomancer == id
                    || bravery.cryomancer_required == Some(id)
                    || bravery.end_of_time.contains(&id)
                    || bravery.army.contains(&Some(id))
                    || bravery.area_monsters.contains(&id)
            };
            if !checks.available.iter().all(|&id| everywhere(id)) {
                return false;
            }
            if checks.familiar.is_some_and(|id| bravery.familiar != id) {
                return false;
            }
            if !checks.start.iter().all(|id| bravery.starters.contains(id)) {
                return false;
            }
            if checks.swimming.is_some_and(|id| bravery.swimming != id) {
                return false;
            }
            if checks.bex.is_some_and(|id| bravery.bex != id) {
                return false;
            }
            if checks.cryomancer.is_some_and(|id| bravery.cryomancer != id) {
                return false;
            }
            if checks
                .cryomancer_required
                .is_some_and(|id| bravery.cryomancer_required != Some(id))
            {
                return false;
            }
            if !checks
                .end_of_time
                .iter()
                .all(|id| bravery.end_of_time.contains(id))
            {
                return false;
            }
            if !checks.army.iter().all(|&id| bravery.army.contains(&Some(id))) {
                return false;
            }
            for &(area_index, wanted) in &checks.areas {
                if bravery.area_monsters.get(area_index) != Some(&wanted) {
                    return false;
                }
            }
        }

        if let Some(checks) = &self.relics {
            let Some(placement) = &game.relics else {
                return false;
            };
            for &wanted in &checks.available {
                if !placement.spots.iter().any(|s| s.relic == wanted) {
                    return false;
                }
            }
            for &(area_index, wanted) in &checks.areas {
                if !placement
                    .spots
                    .iter()
                    .any(|s| s.area as usize == area_index && s.relic == wanted)
                {
                    return false;
                }
            }
        }

        true
    }
}

fn monster_id(tables: &Tables, name: &str) -> Result<MonsterId, FilterError> {
    tables
        .monster_by_name(name)
        .map(|m| m.id)
        .ok_or_else(|| FilterError::UnknownMonster(name.to_string()))
}

fn area_index(tables: &Tables, name: &str) -> Result<usize, FilterError> {
    let wanted = normalize_name(name);
    tables
        .areas()
        .iter()
        .position(|a| normalize_name(a.name) == wanted)
        .ok_or_else(|| FilterError::UnknownArea(name.to_string()))
}

fn relic_id(tables: &Tables, name: &str) -> Result<RelicId, FilterError> {
    let wanted = normalize_name(name);
    tables
        .relics()
        .iter()
        .find(|r| normalize_name(r.name) == wanted)
        .map(|r| r.id)
        .ok_or_else(|| FilterError::UnknownRelic(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ms_core::Engine;

    const ALL_MODES: Modes = Modes {
        randomizer: true,
        bravery: true,
        relics: true,
    };

    fn resolve(json: &str, modes: Modes) -> Result<Filter, FilterError> {
        let tables = Tables::load().unwrap();
        let spec: FilterSpec = serde_json::from_str(json).unwrap();
        Filter::resolve(spec, "test".to_string(), &tables, modes)
    }

    #[test]
    fn names_resolve_case_insensitively() {
        let filter = resolve(
            r#"{"Bravery": {"Start": ["catzerker"], "Swimming": "KOI"}}"#,
            ALL_MODES,
        )
        .unwrap();
        let checks = filter.bravery.unwrap();
        assert_eq!(checks.start, vec![8]);
        assert_eq!(checks.swimming, Some(49));
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = resolve(r#"{"Bravery": {"Bex": "Not A Monster"}}"#, ALL_MODES).unwrap_err();
        assert!(matches!(err, FilterError::UnknownMonster(_)));

        let err = resolve(
            r#"{"Relics": {"Areas": {"Nowhere": "Fang of Winter"}}}"#,
            ALL_MODES,
        )
        .unwrap_err();
        assert!(matches!(err, FilterError::UnknownArea(_)));
    }

    #[test]
    fn inactive_sections_are_ignored() {
        let modes = Modes {
            randomizer: true,
            bravery: false,
            relics: false,
        };
        let filter = resolve(
            r#"{"Randomizer": {"Monsters": {"Blob": "Yowie"}}, "Bravery": {"Bex": "Not A Monster"}}"#,
            modes,
        )
        .unwrap();
        assert!(filter.bravery.is_none());
        assert!(filter.randomizer.is_some());
    }

    #[test]
    fn filter_without_active_constraints_is_empty() {
        let modes = Modes {
            randomizer: false,
            bravery: true,
            relics: false,
        };
        let err = resolve(r#"{"Randomizer": {"Monsters": {"Blob": "Yowie"}}}"#, modes).unwrap_err();
        assert!(matches!(err, FilterError::Empty));
    }

    #[test]
    fn matches_against_generated_outcome() {
        // Build the filter from a generated game, then check it matches
        // that game and rejects a different seed.
        let tables = Tables::load().unwrap();
        let engine = Engine::new(&tables);
        let game = engine.generate(77, ALL_MODES).unwrap();
        let bravery = game.bravery.as_ref().unwrap();

        let swimming = tables.monsters()[bravery.swimming as usize].name;
        let starter = tables.monsters()[bravery.starters[0] as usize].name;
        let json = format!(r#"{{"Bravery": {{"Swimming": "{swimming}", "Start": ["{starter}"]}}}}"#);
        let filter = resolve(&json, ALL_MODES).unwrap();

        assert!(filter.matches(&tables, &game));

        let other = engine.generate(78, ALL_MODES).unwrap();
        let other_bravery = other.bravery.as_ref().unwrap();
        if other_bravery.swimming != bravery.swimming
            || !other_bravery.starters.contains(&bravery.starters[0])
        {
            assert!(!filter.matches(&tables, &other));
        }
    }

    #[test]
    fn randomizer_area_constraint() {
        let tables = Tables::load().unwrap();
        let engine = Engine::new(&tables);
        let modes = Modes {
            randomizer: true,
            bravery: false,
            relics: false,
        };
        let game = engine.generate(123, modes).unwrap();
        let mapping = game.randomizer.as_ref().unwrap();

        // Whatever Mountain Path's first slot maps to is, by definition,
        // available in Mountain Path.
        let present = mapping.replacement(tables.areas()[0].monsters[0]);
        let name = tables.monsters()[present as usize].name;
        let json = format!(r#"{{"Randomizer": {{"Areas": {{"Mountain Path": ["{name}"]}}}}}}"#);
        let filter = resolve(&json, modes).unwrap();
        assert!(filter.matches(&tables, &game));
    }
}
