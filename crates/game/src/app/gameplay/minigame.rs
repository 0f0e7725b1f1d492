use engine::{Canvas, InputSnapshot, Rect};

use super::labyrinth::Labyrinth;
use super::outcome::Outcome;
use super::platformer::Platformer;
use super::progression::Progression;
use super::room::Room;
use crate::app::tuning::GameTuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum SceneKind {
    Labyrinth,
    Platformer,
    Room,
}

impl SceneKind {
    pub(crate) const ALL: [SceneKind; 3] =
        [SceneKind::Labyrinth, SceneKind::Platformer, SceneKind::Room];

    pub(crate) fn name(self) -> &'static str {
        match self {
            SceneKind::Labyrinth => "laser_labyrinth",
            SceneKind::Platformer => "platformer",
            SceneKind::Room => "room",
        }
    }
}

/// Sprite picked on the selection screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PlayerAppearance {
    pub(crate) sprite_key: &'static str,
    pub(crate) width: f32,
    pub(crate) height: f32,
}

pub(crate) const APPEARANCES: [PlayerAppearance; 4] = [
    PlayerAppearance {
        sprite_key: "main/sprite_1",
        width: 50.0,
        height: 75.0,
    },
    PlayerAppearance {
        sprite_key: "main/sprite_2",
        width: 50.0,
        height: 75.0,
    },
    PlayerAppearance {
        sprite_key: "main/sprite_3",
        width: 50.0,
        height: 75.0,
    },
    PlayerAppearance {
        sprite_key: "main/sprite_4",
        width: 60.0,
        height: 75.0,
    },
];

impl Default for PlayerAppearance {
    fn default() -> Self {
        APPEARANCES[0]
    }
}

/// A self-contained scene the overworld hands control to. It runs until a
/// tick returns something other than [`Outcome::Continue`].
pub(crate) trait MiniGame {
    fn tick(&mut self, input: &InputSnapshot, progression: &mut Progression) -> Outcome;
    fn render(&self, canvas: &mut Canvas<'_>, progression: &Progression);
}

pub(crate) fn build_minigame(
    kind: SceneKind,
    appearance: PlayerAppearance,
    tuning: &GameTuning,
) -> Box<dyn MiniGame> {
    match kind {
        SceneKind::Labyrinth => Box::new(Labyrinth::new(appearance, tuning)),
        SceneKind::Platformer => Box::new(Platformer::new(appearance, tuning)),
        SceneKind::Room => Box::new(Room::new(appearance, tuning)),
    }
}

/// Ticks `game` with each input in turn until it finishes. Returns
/// [`Outcome::Continue`] if the inputs run out first.
#[cfg(test)]
pub(crate) fn run_scene<'a>(
    game: &mut dyn MiniGame,
    inputs: impl IntoIterator<Item = &'a InputSnapshot>,
    progression: &mut Progression,
) -> Outcome {
    for input in inputs {
        let outcome = game.tick(input, progression);
        if outcome.is_finished() {
            return outcome;
        }
    }
    Outcome::Continue
}

/// Top-down walking shared by the labyrinth and the room: each held axis
/// moves `speed` pixels and the result is kept inside `bounds`.
pub(crate) fn walk(rect: Rect, input: &InputSnapshot, speed: f32, bounds: &Rect) -> Rect {
    let dx = input.horizontal_axis() as f32 * speed;
    let dy = input.vertical_axis() as f32 * speed;
    rect.translated(dx, dy).clamped_within(bounds)
}
