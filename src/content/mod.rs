//! Content domain: RON-driven configuration for the match.

mod data;
mod loader;
mod validation;

pub use data::{ControllerConfig, EntityDefs, PlayerId, PlayerSlotDef, PlayerSlots, key_code};
pub use loader::{LoadedContent, load_all_content};
pub use validation::{validate_config, validate_entities, validate_players};

use bevy::prelude::*;
use std::path::Path;

const DATA_PATH: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<ControllerConfig>()
            .add_systems(Startup, load_content);
    }
}

/// Load configuration from disk, replacing anything that fails validation
/// with its default.
fn load_content(mut commands: Commands) {
    let (content, load_errors) = load_all_content(Path::new(DATA_PATH));
    for error in &load_errors {
        warn!("{}; using defaults", error);
    }

    let content = sanitize(content);
    info!(
        "Content loaded: speed={}, jump_force={}, tackle_duration={}s, {} entity kinds, {} players",
        content.controller.speed,
        content.controller.jump_force,
        content.controller.tackle_duration,
        content.entities.defs.len(),
        content.players.slots.len()
    );

    commands.insert_resource(content.controller);
    commands.insert_resource(content.entities);
    commands.insert_resource(content.players);
}

/// Swap every section with validation errors for its default.
pub(crate) fn sanitize(mut content: LoadedContent) -> LoadedContent {
    let config_errors = validate_config(&content.controller);
    if !config_errors.is_empty() {
        for error in &config_errors {
            error!("{}", error);
        }
        content.controller = ControllerConfig::default();
    }

    let entity_errors = validate_entities(&content.entities);
    if !entity_errors.is_empty() {
        for error in &entity_errors {
            error!("{}", error);
        }
        content.entities = EntityDefs::default();
    }

    let player_errors = validate_players(&content.players);
    if !player_errors.is_empty() {
        for error in &player_errors {
            error!("{}", error);
        }
        content.players = PlayerSlots::default();
    }

    content
}
