use engine::{Canvas, InputSnapshot, Rect, Vec2};
use tracing::info;

use super::layout::{colors, keys, screen_bounds};
use super::minigame::{MiniGame, PlayerAppearance};
use super::outcome::Outcome;
use super::platform::PlatformBody;
use super::progression::{KeyFlag, Progression};
use crate::app::tuning::GameTuning;

const PLAYER_START: Vec2 = Vec2::new(100.0, 500.0);
const PLATFORM_WIDTH: f32 = 150.0;
const PLATFORM_HEIGHT: f32 = 50.0;
const PLATFORM_POSITIONS: [(f32, f32); 9] = [
    (0.0, 550.0),
    (180.0, 500.0),
    (350.0, 450.0),
    (500.0, 500.0),
    (650.0, 400.0),
    (400.0, 300.0),
    (150.0, 250.0),
    (300.0, 200.0),
    (550.0, 150.0),
];
const GOAL_SIZE: f32 = 100.0;

fn platforms() -> Vec<Rect> {
    PLATFORM_POSITIONS
        .iter()
        .map(|&(x, y)| Rect::new(x, y, PLATFORM_WIDTH, PLATFORM_HEIGHT))
        .collect()
}

/// The door stands on the last platform, its bottom edge centred on it.
fn goal_door(platforms: &[Rect]) -> Rect {
    let anchor = platforms
        .last()
        .map(|last| Vec2::new(last.x + PLATFORM_WIDTH / 2.0, last.y))
        .unwrap_or(Vec2::ZERO);
    Rect::new(
        anchor.x - GOAL_SIZE / 2.0,
        anchor.y - GOAL_SIZE,
        GOAL_SIZE,
        GOAL_SIZE,
    )
}

pub(crate) struct Platformer {
    body: PlatformBody,
    sprite_key: &'static str,
    speed: f32,
    gravity: f32,
    jump_strength: f32,
    platforms: Vec<Rect>,
    goal: Rect,
    bounds: Rect,
}

impl Platformer {
    pub(crate) fn new(appearance: PlayerAppearance, tuning: &GameTuning) -> Self {
        let platforms = platforms();
        let goal = goal_door(&platforms);
        Self {
            body: PlatformBody::new(PLAYER_START, appearance.width, appearance.height),
            sprite_key: appearance.sprite_key,
            speed: tuning.platformer_speed,
            gravity: tuning.gravity,
            jump_strength: tuning.jump_strength,
            platforms,
            goal,
            bounds: screen_bounds(),
        }
    }

    #[cfg(test)]
    fn place_player(&mut self, position: Vec2) {
        let rect = self.body.rect();
        self.body = PlatformBody::new(position, rect.width(), rect.height());
    }
}

impl MiniGame for Platformer {
    fn tick(&mut self, input: &InputSnapshot, progression: &mut Progression) -> Outcome {
        if input.quit_requested() {
            return Outcome::Quit;
        }

        let width = self.body.rect().width();
        let dx = input.horizontal_axis() as f32 * self.speed;
        self.body
            .move_horizontal(dx, self.bounds.left(), self.bounds.right() - width);
        if input.jump_pressed() {
            self.body.try_jump(self.jump_strength);
        }
        self.body.step_vertical(self.gravity, &self.platforms);

        let rect = self.body.rect();
        if rect.top() > self.bounds.bottom() {
            info!(x = rect.x, "platformer_fell");
            progression.restart_adventure();
            return Outcome::RestartAdventure;
        }
        if rect.intersects(&self.goal) {
            progression.inventory.grant(KeyFlag::PlatformKey);
            return Outcome::Win;
        }
        Outcome::Continue
    }

    fn render(&self, canvas: &mut Canvas<'_>, _progression: &Progression) {
        canvas.clear(colors::SKY);
        canvas.draw_image(keys::PLATFORM_MAP, self.bounds, colors::SKY);
        for platform in &self.platforms {
            canvas.draw_image(keys::PLATFORM, *platform, colors::PLATFORM);
        }
        canvas.draw_image(keys::DOOR, self.goal, colors::EXIT);
        canvas.draw_image(self.sprite_key, self.body.rect(), colors::PLAYER);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::gameplay::minigame::run_scene;
    use engine::InputAction;

    fn platformer() -> Platformer {
        Platformer::new(PlayerAppearance::default(), &GameTuning::default())
    }

    fn jump() -> InputSnapshot {
        InputSnapshot::empty().with_jump_pressed(true)
    }

    #[test]
    fn goal_door_sits_on_last_platform() {
        let game = platformer();
        assert_eq!(game.goal, Rect::new(575.0, 50.0, 100.0, 100.0));
    }

    #[test]
    fn player_settles_on_start_platform() {
        let mut game = platformer();
        let mut progression = Progression::default();
        for _ in 0..30 {
            assert_eq!(game.tick(&InputSnapshot::empty(), &mut progression), Outcome::Continue);
        }
        assert!(game.body.on_ground());
        assert_eq!(game.body.rect().bottom(), 550.0);
    }

    #[test]
    fn no_jump_in_mid_air() {
        let mut game = platformer();
        let mut progression = Progression::default();
        game.place_player(Vec2::new(900.0, 100.0));

        game.tick(&jump(), &mut progression);

        assert!(game.body.velocity_y() > 0.0);
    }

    #[test]
    fn jump_from_ground_moves_up() {
        let mut game = platformer();
        let mut progression = Progression::default();
        for _ in 0..30 {
            game.tick(&InputSnapshot::empty(), &mut progression);
        }
        let grounded_y = game.body.rect().y;

        game.tick(&jump(), &mut progression);

        assert!(game.body.rect().y < grounded_y);
        assert!(game.body.velocity_y() < 0.0);
    }

    #[test]
    fn holding_space_jumps_only_once() {
        let mut game = platformer();
        let mut progression = Progression::default();
        for _ in 0..30 {
            game.tick(&InputSnapshot::empty(), &mut progression);
        }
        let held = InputSnapshot::empty().with_action_down(InputAction::Jump, true);
        let first = held.clone().with_jump_pressed(true);

        let mut jumps = 0;
        for tick in 0..300 {
            let input = if tick == 0 { &first } else { &held };
            let was_grounded = game.body.on_ground();
            assert_eq!(game.tick(input, &mut progression), Outcome::Continue);
            if was_grounded && game.body.velocity_y() < 0.0 {
                jumps += 1;
            }
        }

        assert_eq!(jumps, 1);
        assert!(game.body.on_ground());
    }

    #[test]
    fn falling_off_screen_restarts_adventure() {
        let mut game = platformer();
        let mut progression = Progression::default();
        progression.inventory.grant(KeyFlag::LabKey);
        progression.inventory.grant(KeyFlag::PlatformKey);
        game.place_player(Vec2::new(1000.0, 700.0));

        let inputs = vec![InputSnapshot::empty(); 60];
        let outcome = run_scene(&mut game, &inputs, &mut progression);

        assert_eq!(outcome, Outcome::RestartAdventure);
        assert!(progression.inventory.is_empty());
    }

    #[test]
    fn touching_goal_wins_platform_key() {
        let mut game = platformer();
        let mut progression = Progression::default();
        game.place_player(Vec2::new(600.0, 60.0));

        let outcome = game.tick(&InputSnapshot::empty(), &mut progression);

        assert_eq!(outcome, Outcome::Win);
        assert!(progression.inventory.has(KeyFlag::PlatformKey));
    }

    #[test]
    fn player_x_is_clamped_to_screen() {
        let mut game = platformer();
        let mut progression = Progression::default();
        let left = InputSnapshot::empty().with_action_down(InputAction::MoveLeft, true);
        for _ in 0..40 {
            game.tick(&left, &mut progression);
        }
        assert_eq!(game.body.rect().x, 0.0);
    }
}
