mod hazard;
mod labyrinth;
mod layout;
mod minigame;
mod outcome;
mod platform;
mod platformer;
mod progression;
mod room;
mod walkability;
mod world;

use std::path::Path;

use engine::Scene;

use self::layout::{keys, WORLD_HEIGHT, WORLD_WIDTH};
use self::walkability::WalkabilityMask;
use self::world::World;
use super::tuning::GameTuning;

/// Builds the root scene, loading the overworld walkability mask from
/// `assets_dir`.
pub(crate) fn build_world(assets_dir: &Path, tuning: GameTuning) -> Box<dyn Scene> {
    let mask = WalkabilityMask::load_or_all_walkable(
        assets_dir,
        keys::WALKABILITY_MASK,
        WORLD_WIDTH as u32,
        WORLD_HEIGHT as u32,
    );
    Box::new(World::new(tuning, mask))
}
