//! Core domain: shared resources for match setup and level data.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// World units per metre. Gravity and the physics length unit are scaled by it.
pub const PIXELS_PER_METER: f32 = 32.0;

#[derive(Resource, Debug)]
pub struct MatchConfig {
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
        }
    }
}

/// Seeded generator for spawn-point selection
#[derive(Resource, Debug)]
pub struct SpawnRng(pub ChaCha8Rng);

impl SpawnRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

/// Places where characters can (re)appear
#[derive(Resource, Debug, Clone, Default)]
pub struct SpawnPoints {
    pub points: Vec<Vec2>,
}

impl SpawnPoints {
    /// Pick a random spawn point; `None` when the level defines none.
    pub fn random(&self, rng: &mut SpawnRng) -> Option<Vec2> {
        if self.points.is_empty() {
            return None;
        }
        let index = rng.0.random_range(0..self.points.len());
        Some(self.points[index])
    }

    /// Spawn point for the n-th character at match start, wrapping around.
    pub fn nth(&self, n: usize) -> Option<Vec2> {
        if self.points.is_empty() {
            return None;
        }
        Some(self.points[n % self.points.len()])
    }
}
