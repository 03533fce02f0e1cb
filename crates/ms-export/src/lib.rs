//! ms-export: Seed report writers
//!
//! Renders a generated game into the human-readable seed report and
//! writes it under the output directory as `<seed>.txt` (or under a
//! per-filter subdirectory when the seed was found by a filter). Also
//! handles the machine-readable JSON form and the append-only
//! bad-seed log.

use std::fmt::Write as _;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use ms_core::{BadSeed, GeneratedGame};
use ms_data::Tables;

/// File name of the append-only bad-seed log.
pub const BAD_SEEDS_FILE: &str = "bad_seeds.txt";

/// Export failures. All fatal to the current write, never to a batch.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Data(#[from] ms_data::DataError),
}

/// Render the seed report.
///
/// Section order is bravery, randomizer, relics; sections for inactive
/// modes are omitted. `filter_name` names the filter that matched the
/// seed, when one did.
pub fn render_text(
    tables: &Tables,
    game: &GeneratedGame,
    filter_name: Option<&str>,
) -> Result<String, ExportError> {
    let mut out = String::new();
    let _ = writeln!(out, "Seed: {}", game.seed);
    let _ = writeln!(out, "Game modes: {}", game.modes);
    match filter_name {
        Some(name) => {
            let _ = writeln!(out, "Filter: {name}");
        }
        None => out.push('\n'),
    }
    out.push('\n');

    if let Some(bravery) = &game.bravery {
        let name = |id| tables.monster(id).map(|m| m.name);
        out.push_str("Bravery monsters:\n");
        let _ = writeln!(
            out,
            "  Starters: {} - {} - {}\n",
            name(bravery.familiar)?,
            name(bravery.starters[0])?,
            name(bravery.starters[1])?,
        );
        for (area, &monster) in tables.areas().iter().zip(&bravery.area_monsters) {
            let _ = writeln!(out, "  {}  ->  {}", area.name, name(monster)?);
        }
        let required = match bravery.cryomancer_required {
            Some(id) => name(id)?,
            None => "(none)",
        };
        let _ = writeln!(out, "\n  Cryomancer: {} -> {}", required, name(bravery.cryomancer)?);
        let _ = writeln!(out, "  Bex: {}", name(bravery.bex)?);
        let _ = writeln!(
            out,
            "  Swimming Monster / Sun Tower: {}\n",
            name(bravery.swimming)?
        );
        for (i, slot) in bravery.army.iter().enumerate() {
            let trade = match slot {
                Some(id) => name(*id)?,
                None => "(none)",
            };
            let _ = writeln!(out, "  Trade #{}: {}", i + 1, trade);
        }
        let mut end_of_time = Vec::with_capacity(bravery.end_of_time.len());
        for &id in &bravery.end_of_time {
            end_of_time.push(name(id)?);
        }
        let _ = writeln!(out, "  End of Time: {}", end_of_time.join(" - "));
        out.push('\n');
    }

    if let Some(mapping) = &game.randomizer {
        out.push_str("Randomizer mapping:\n");
        for area in tables.areas() {
            let _ = writeln!(out, "  {}:", area.name);
            for &monster_id in area.monsters {
                let original = tables.monster(monster_id)?;
                let replacement = tables.monster(mapping.replacement(monster_id))?;
                let _ = writeln!(out, "    [{}]  -->  {}", original.name, replacement.name);
            }
            out.push('\n');
        }
    }

    if let Some(placement) = &game.relics {
        out.push_str("Relics:\n");
        for spot in &placement.spots {
            let area = &tables.areas()[spot.area as usize];
            let relic = &tables.relics()[spot.relic as usize];
            let scene = tables.scene(spot.scene)?;
            let _ = writeln!(
                out,
                "  {}  ->  {}    ({} - chest {})",
                area.name, relic.name, scene.scene_name, spot.chest
            );
        }
    }

    Ok(out)
}

/// Write the seed report to `<dir>/<seed>.txt`, or to
/// `<dir>/<filter_name>/<seed>.txt` when the seed matched a filter.
/// Creates the directories as needed and returns the written path.
pub fn export_text(
    tables: &Tables,
    game: &GeneratedGame,
    dir: impl AsRef<Path>,
    filter_name: Option<&str>,
) -> Result<PathBuf, ExportError> {
    let mut dir = dir.as_ref().to_path_buf();
    if let Some(name) = filter_name {
        dir.push(name);
    }
    fs::create_dir_all(&dir)?;
    let path = dir.join(format!("{}.txt", game.seed));
    fs::write(&path, render_text(tables, game, filter_name)?)?;
    Ok(path)
}

/// Write the machine-readable form to `<dir>/<seed>.json`.
pub fn export_json(game: &GeneratedGame, dir: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.json", game.seed));
    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, game)?;
    writer.flush()?;
    Ok(path)
}

/// Append one bad-seed record to `<dir>/bad_seeds.txt`, creating the
/// file on first use. One line per record, in the record's Display form.
pub fn append_bad_seed(bad: &BadSeed, dir: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let path = dir.join(BAD_SEEDS_FILE);
    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    writeln!(file, "{bad}")?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ms_core::{Engine, Modes};

    const ALL_MODES: Modes = Modes {
        randomizer: true,
        bravery: true,
        relics: true,
    };

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("ms-export-{tag}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn sample_game(seed: i32, modes: Modes) -> (Tables, GeneratedGame) {
        let tables = Tables::load().unwrap();
        let game = Engine::new(&tables).generate(seed, modes).unwrap();
        (tables, game)
    }

    #[test]
    fn report_header() {
        let (tables, game) = sample_game(42, ALL_MODES);
        let text = render_text(&tables, &game, None).unwrap();
        assert!(text.starts_with("Seed: 42\nGame modes: Randomizer | Bravery | Relic\n"));
        assert!(text.contains("Bravery monsters:"));
        assert!(text.contains("Randomizer mapping:"));
        assert!(text.contains("Relics:"));
    }

    #[test]
    fn filter_line_present_only_when_filtered() {
        let (tables, game) = sample_game(7, ALL_MODES);
        let filtered = render_text(&tables, &game, Some("my-filter")).unwrap();
        assert!(filtered.contains("Filter: my-filter\n"));
        let plain = render_text(&tables, &game, None).unwrap();
        assert!(!plain.contains("Filter:"));
    }

    #[test]
    fn inactive_sections_are_omitted() {
        let modes = Modes {
            randomizer: false,
            bravery: false,
            relics: true,
        };
        let (tables, game) = sample_game(0, modes);
        let text = render_text(&tables, &game, None).unwrap();
        assert!(!text.contains("Bravery monsters:"));
        assert!(!text.contains("Randomizer mapping:"));
        assert!(text.contains("Relics:"));
    }

    #[test]
    fn text_export_paths() {
        let (tables, game) = sample_game(11, ALL_MODES);
        let dir = scratch_dir("text");

        let plain = export_text(&tables, &game, &dir, None).unwrap();
        assert_eq!(plain, dir.join("11.txt"));
        assert!(plain.is_file());

        let filtered = export_text(&tables, &game, &dir, Some("wanted")).unwrap();
        assert_eq!(filtered, dir.join("wanted").join("11.txt"));
        assert!(filtered.is_file());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn json_round_trips() {
        let (_, game) = sample_game(23, ALL_MODES);
        let dir = scratch_dir("json");
        let path = export_json(&game, &dir).unwrap();
        let back: GeneratedGame =
            serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        assert_eq!(back, game);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn bad_seed_log_appends() {
        let dir = scratch_dir("bad");
        let bad = BadSeed {
            seed: 9,
            modes: Modes {
                randomizer: false,
                bravery: true,
                relics: false,
            },
        };
        append_bad_seed(&bad, &dir).unwrap();
        let path = append_bad_seed(&bad, &dir).unwrap();
        let contents = fs::read_to_string(path).unwrap();
        assert_eq!(
            contents,
            "Seed: 9 - Game modes: Bravery\nSeed: 9 - Game modes: Bravery\n"
        );
        let _ = fs::remove_dir_all(&dir);
    }
}
