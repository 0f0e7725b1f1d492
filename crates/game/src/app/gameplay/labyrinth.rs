use engine::{Canvas, InputSnapshot, Rect, Vec2};
use tracing::info;

use super::hazard::{Axis, Hazard};
use super::layout::{colors, keys, screen_bounds};
use super::minigame::{walk, MiniGame, PlayerAppearance};
use super::outcome::Outcome;
use super::progression::{KeyFlag, Progression};
use crate::app::tuning::GameTuning;

const PLAYER_START: Vec2 = Vec2::new(100.0, 650.0);

fn default_hazards() -> Vec<Hazard> {
    vec![
        Hazard::new(Rect::new(100.0, 50.0, 200.0, 20.0), 3.0, Axis::Horizontal),
        Hazard::new(Rect::new(400.0, 150.0, 20.0, 200.0), 2.0, Axis::Vertical),
        Hazard::new(Rect::new(200.0, 400.0, 300.0, 20.0), 4.0, Axis::Horizontal),
        Hazard::new(Rect::new(600.0, 100.0, 20.0, 300.0), 3.0, Axis::Vertical),
    ]
}

fn exit_gate() -> Rect {
    Rect::new(1100.0, 50.0, 50.0, 50.0)
}

/// Walk from the bottom-left corner to the exit without touching a laser.
pub(crate) struct Labyrinth {
    player: Rect,
    sprite_key: &'static str,
    speed: f32,
    hitbox_padding: f32,
    hazards: Vec<Hazard>,
    exit: Rect,
    bounds: Rect,
}

impl Labyrinth {
    pub(crate) fn new(appearance: PlayerAppearance, tuning: &GameTuning) -> Self {
        Self {
            player: Rect::from_position(PLAYER_START, appearance.width, appearance.height),
            sprite_key: appearance.sprite_key,
            speed: tuning.labyrinth_speed,
            hitbox_padding: tuning.hitbox_padding,
            hazards: default_hazards(),
            exit: exit_gate(),
            bounds: screen_bounds(),
        }
    }

    #[cfg(test)]
    fn with_layout(mut self, player: Vec2, hazards: Vec<Hazard>) -> Self {
        self.player = Rect::from_position(player, self.player.width(), self.player.height());
        self.hazards = hazards;
        self
    }

    fn hitbox(&self) -> Rect {
        self.player.hitbox(self.hitbox_padding, self.hitbox_padding)
    }
}

impl MiniGame for Labyrinth {
    fn tick(&mut self, input: &InputSnapshot, progression: &mut Progression) -> Outcome {
        if input.quit_requested() {
            return Outcome::Quit;
        }

        self.player = walk(self.player, input, self.speed, &self.bounds);
        let hitbox = self.hitbox();
        for hazard in &mut self.hazards {
            hazard.advance(&self.bounds);
        }

        if self.hazards.iter().any(|hazard| hazard.rect().intersects(&hitbox)) {
            info!(x = self.player.x, y = self.player.y, "labyrinth_hazard_hit");
            progression.restart_adventure();
            return Outcome::RestartAdventure;
        }
        if hitbox.intersects(&self.exit) {
            progression.inventory.grant(KeyFlag::LabKey);
            return Outcome::Main;
        }
        Outcome::Continue
    }

    fn render(&self, canvas: &mut Canvas<'_>, _progression: &Progression) {
        canvas.clear(colors::LAB);
        canvas.draw_image(keys::LASER_MAP, self.bounds, colors::LAB);
        canvas.fill_rect(self.exit, colors::EXIT);
        for hazard in &self.hazards {
            canvas.fill_rect(hazard.rect(), colors::LASER);
        }
        canvas.draw_image(self.sprite_key, self.player, colors::PLAYER);
        canvas.draw_text(
            Vec2::new(16.0, 770.0),
            "REACH THE EXIT. AVOID THE LASERS.",
            2,
            colors::TEXT_DIM,
        );
    }
}

#[cfg(test)]
mod tests {
    use engine::InputAction;

    use super::*;
    use crate::app::gameplay::minigame::run_scene;

    fn labyrinth() -> Labyrinth {
        Labyrinth::new(PlayerAppearance::default(), &GameTuning::default())
    }

    fn held(action: InputAction) -> InputSnapshot {
        InputSnapshot::empty().with_action_down(action, true)
    }

    #[test]
    fn idle_player_continues() {
        let mut game = labyrinth();
        let mut progression = Progression::default();
        assert_eq!(game.tick(&InputSnapshot::empty(), &mut progression), Outcome::Continue);
    }

    #[test]
    fn hazard_hit_clears_inventory_and_restarts() {
        let laser = Hazard::new(Rect::new(120.0, 300.0, 20.0, 20.0), 0.0, Axis::Horizontal);
        let mut game = labyrinth().with_layout(Vec2::new(100.0, 280.0), vec![laser]);
        let mut progression = Progression::default();
        progression.inventory.grant(KeyFlag::PlatformKey);

        let outcome = game.tick(&InputSnapshot::empty(), &mut progression);

        assert_eq!(outcome, Outcome::RestartAdventure);
        assert!(progression.inventory.is_empty());
    }

    #[test]
    fn padding_lets_lasers_graze_the_sprite() {
        // Overlaps the sprite by 5px on the left but misses the padded hitbox.
        let laser = Hazard::new(Rect::new(85.0, 300.0, 20.0, 20.0), 0.0, Axis::Horizontal);
        let mut game = labyrinth().with_layout(Vec2::new(100.0, 280.0), vec![laser]);
        let mut progression = Progression::default();

        assert_eq!(game.tick(&InputSnapshot::empty(), &mut progression), Outcome::Continue);
    }

    #[test]
    fn reaching_exit_grants_lab_key() {
        let mut game = labyrinth().with_layout(Vec2::new(1000.0, 40.0), Vec::new());
        let mut progression = Progression::default();
        let inputs = vec![held(InputAction::MoveRight); 40];

        let outcome = run_scene(&mut game, &inputs, &mut progression);

        assert_eq!(outcome, Outcome::Main);
        assert!(progression.inventory.has(KeyFlag::LabKey));
    }

    #[test]
    fn player_stays_inside_scene() {
        let mut game = labyrinth().with_layout(PLAYER_START, Vec::new());
        let mut progression = Progression::default();
        for _ in 0..100 {
            game.tick(&held(InputAction::MoveLeft), &mut progression);
            game.tick(&held(InputAction::MoveDown), &mut progression);
        }
        assert_eq!(game.player.x, 0.0);
        assert_eq!(game.player.bottom(), 800.0);
    }

    #[test]
    fn laser_bounces_on_the_tick_it_reaches_the_wall() {
        let laser = Hazard::new(Rect::new(100.0, 0.0, 20.0, 20.0), 3.0, Axis::Horizontal);
        let mut game = labyrinth().with_layout(PLAYER_START, vec![laser]);
        let mut progression = Progression::default();

        for _ in 0..360 {
            game.tick(&InputSnapshot::empty(), &mut progression);
        }
        assert_eq!(game.hazards[0].rect().right(), 1200.0);
        assert_eq!(game.hazards[0].speed(), -3.0);

        game.tick(&InputSnapshot::empty(), &mut progression);
        assert_eq!(game.hazards[0].rect().x, 1177.0);
    }

    #[test]
    fn quit_is_reported() {
        let mut game = labyrinth();
        let mut progression = Progression::default();
        let quit = InputSnapshot::empty().with_quit_requested(true);
        assert_eq!(game.tick(&quit, &mut progression), Outcome::Quit);
    }
}
