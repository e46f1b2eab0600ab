//! Core domain: app state for the match flow.

use bevy::prelude::*;

/// `Boot` lasts until configuration is loaded; controllers only tick in `Run`.
#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Boot,
    Run,
}
