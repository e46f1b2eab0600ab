//! Loader for RON configuration files at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Everything the match needs from assets/data, defaults filled in.
#[derive(Debug, Clone, Default)]
pub struct LoadedContent {
    pub controller: ControllerConfig,
    pub entities: EntityDefs,
    pub players: PlayerSlots,
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Parse a single RON struct (not wrapped in DataFile).
pub fn parse_single<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Parse a RON file containing a DataFile<T> wrapper.
pub fn parse_data_file<T>(file: &str, contents: &str) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let data: DataFile<T> = parse_single(file, contents)?;
    Ok(data.items)
}

fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let contents = read_file(path)?;
    parse_single(&path.display().to_string(), &contents)
}

fn load_data_file<T>(path: &Path) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let contents = read_file(path)?;
    parse_data_file(&path.display().to_string(), &contents)
}

/// Load all configuration from assets/data/*.ron.
///
/// A file that fails to load keeps its default; the failures are returned
/// alongside so the caller can report them.
pub fn load_all_content(base_path: &Path) -> (LoadedContent, Vec<ContentLoadError>) {
    let mut content = LoadedContent::default();
    let mut errors = Vec::new();

    match load_single_file::<ControllerConfig>(&base_path.join("controller.ron")) {
        Ok(config) => content.controller = config,
        Err(e) => errors.push(e),
    }

    match load_data_file::<EntityDef>(&base_path.join("entities.ron")) {
        Ok(defs) => content.entities = EntityDefs { defs },
        Err(e) => errors.push(e),
    }

    match load_data_file::<PlayerSlotDef>(&base_path.join("players.ron")) {
        Ok(slots) if !slots.is_empty() => content.players = PlayerSlots { slots },
        Ok(_) => warn!("players.ron lists no player slots, keeping defaults"),
        Err(e) => errors.push(e),
    }

    (content, errors)
}
