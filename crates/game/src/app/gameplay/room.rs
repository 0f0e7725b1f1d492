use engine::{line_advance, wrap_text, Canvas, InputSnapshot, Rect, TextEdit, Vec2};
use tracing::info;

use super::layout::{
    colors, keys, screen_bounds, COMPANION_HEIGHT, COMPANION_TRAIL_OFFSET, COMPANION_WIDTH,
};
use super::minigame::{walk, MiniGame, PlayerAppearance};
use super::outcome::Outcome;
use super::progression::{KeyFlag, Progression};
use crate::app::tuning::GameTuning;

pub(crate) const RIDDLE_TEXT: &str = "I speak without a mouth and hear without ears. \
I have nobody, but I come alive with wind. What am I?";
pub(crate) const RIDDLE_ANSWER: &str = "echo";

const PLAYER_START: Vec2 = Vec2::new(100.0, 650.0);
const MAX_ANSWER_CHARS: usize = 24;
const TEXT_SCALE: i32 = 3;

fn fairy_trigger() -> Rect {
    Rect::new(50.0, 50.0, 150.0, 150.0)
}

fn princess_spot() -> Rect {
    Rect::from_center(Vec2::new(800.0, 400.0), 300.0, 300.0)
}

fn exit_door() -> Rect {
    Rect::new(460.0, 695.0, 110.0, 110.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RoomState {
    Idle,
    RiddleActive,
    RiddleSolved,
    Collected,
    Exited,
}

/// The fairy's riddle guards the princess. Solve it, pick her up, leave.
pub(crate) struct Room {
    state: RoomState,
    riddle_given: bool,
    answer: String,
    last_answer_rejected: bool,
    player: Rect,
    sprite_key: &'static str,
    speed: f32,
    hitbox_padding: f32,
    follow_factor: f32,
    fairy: Rect,
    princess: Rect,
    exit: Rect,
    bounds: Rect,
}

impl Room {
    pub(crate) fn new(appearance: PlayerAppearance, tuning: &GameTuning) -> Self {
        Self {
            state: RoomState::Idle,
            riddle_given: false,
            answer: String::new(),
            last_answer_rejected: false,
            player: Rect::from_position(PLAYER_START, appearance.width, appearance.height),
            sprite_key: appearance.sprite_key,
            speed: tuning.room_speed,
            hitbox_padding: tuning.hitbox_padding,
            follow_factor: tuning.companion_follow_factor,
            fairy: fairy_trigger(),
            princess: princess_spot(),
            exit: exit_door(),
            bounds: screen_bounds(),
        }
    }

    pub(crate) fn state(&self) -> RoomState {
        self.state
    }

    #[cfg(test)]
    fn place_player(&mut self, position: Vec2) {
        self.player = Rect::from_position(position, self.player.width(), self.player.height());
    }

    fn companion_target(&self) -> Vec2 {
        self.player
            .position()
            .offset(COMPANION_TRAIL_OFFSET.x, COMPANION_TRAIL_OFFSET.y)
    }

    fn handle_riddle_input(&mut self, edits: &[TextEdit]) {
        for edit in edits {
            match edit {
                TextEdit::Char(ch) => {
                    if self.answer.chars().count() < MAX_ANSWER_CHARS {
                        self.answer.push(*ch);
                    }
                }
                TextEdit::Backspace => {
                    self.answer.pop();
                }
                TextEdit::Submit => {
                    if self.answer.trim().to_lowercase() == RIDDLE_ANSWER {
                        info!("riddle_solved");
                        self.state = RoomState::RiddleSolved;
                        self.answer.clear();
                        self.last_answer_rejected = false;
                        return;
                    }
                    info!(answer = self.answer.as_str(), "riddle_answer_rejected");
                    self.answer.clear();
                    self.last_answer_rejected = true;
                }
            }
        }
    }

    fn render_riddle(&self, canvas: &mut Canvas<'_>) {
        let panel = Rect::new(150.0, 220.0, 900.0, 360.0);
        canvas.fill_rect(panel, colors::PANEL);
        canvas.outline_rect(panel, 3.0, colors::HIGHLIGHT);

        let mut y = panel.y + 24.0;
        let max_width = (panel.width() - 48.0) as i32;
        for line in wrap_text(RIDDLE_TEXT, TEXT_SCALE, max_width) {
            canvas.draw_text(Vec2::new(panel.x + 24.0, y), &line, TEXT_SCALE, colors::TEXT);
            y += line_advance(TEXT_SCALE) as f32;
        }

        y += line_advance(TEXT_SCALE) as f32;
        let prompt = format!("> {}_", self.answer);
        canvas.draw_text(Vec2::new(panel.x + 24.0, y), &prompt, TEXT_SCALE, colors::HIGHLIGHT);
        if self.last_answer_rejected {
            y += 2.0 * line_advance(TEXT_SCALE) as f32;
            canvas.draw_text(
                Vec2::new(panel.x + 24.0, y),
                "Not quite. Try again.",
                TEXT_SCALE,
                colors::WARNING,
            );
        }
    }
}

impl MiniGame for Room {
    fn tick(&mut self, input: &InputSnapshot, progression: &mut Progression) -> Outcome {
        if input.quit_requested() {
            return Outcome::Quit;
        }
        if !progression.inventory.has(KeyFlag::LabKey) {
            return Outcome::Main;
        }
        progression.companion.ensure_initialized(PLAYER_START.offset(
            COMPANION_TRAIL_OFFSET.x,
            COMPANION_TRAIL_OFFSET.y,
        ));

        match self.state {
            RoomState::Exited => return Outcome::Main,
            RoomState::RiddleActive => {
                self.handle_riddle_input(input.text_edits());
                return Outcome::Continue;
            }
            RoomState::Idle | RoomState::RiddleSolved | RoomState::Collected => {}
        }

        self.player = walk(self.player, input, self.speed, &self.bounds);
        let hitbox = self.player.hitbox(self.hitbox_padding, self.hitbox_padding);

        if !self.riddle_given && hitbox.intersects(&self.fairy) {
            self.riddle_given = true;
            self.state = RoomState::RiddleActive;
            info!("riddle_started");
            self.handle_riddle_input(input.text_edits());
            return Outcome::Continue;
        }
        if self.state == RoomState::RiddleSolved && hitbox.intersects(&self.princess) {
            progression.companion.attach();
            self.state = RoomState::Collected;
        }
        progression
            .companion
            .follow(self.companion_target(), self.follow_factor);

        if hitbox.intersects(&self.exit) {
            info!(with_companion = progression.companion.is_attached(), "room_exited");
            self.state = RoomState::Exited;
            return Outcome::Main;
        }
        Outcome::Continue
    }

    fn render(&self, canvas: &mut Canvas<'_>, progression: &Progression) {
        canvas.clear(colors::ROOM);
        canvas.draw_image(keys::ROOM, self.bounds, colors::ROOM);
        canvas.draw_image(keys::FAIRY, self.fairy, colors::FAIRY);
        canvas.outline_rect(self.exit, 3.0, colors::EXIT);

        let companion = &progression.companion;
        match companion.position() {
            Some(position) if companion.is_attached() => {
                let rect = Rect::from_position(position, COMPANION_WIDTH, COMPANION_HEIGHT);
                canvas.draw_image(keys::PRINCESS, rect, colors::COMPANION);
            }
            _ => canvas.draw_image(keys::PRINCESS, self.princess, colors::COMPANION),
        }
        canvas.draw_image(self.sprite_key, self.player, colors::PLAYER);

        if self.state == RoomState::RiddleActive {
            self.render_riddle(canvas);
        }
    }
}

#[cfg(test)]
mod tests {
    use engine::InputAction;

    use super::*;

    fn room() -> Room {
        Room::new(PlayerAppearance::default(), &GameTuning::default())
    }

    fn keyed_progression() -> Progression {
        let mut progression = Progression::default();
        progression.inventory.grant(KeyFlag::LabKey);
        progression
    }

    fn idle() -> InputSnapshot {
        InputSnapshot::empty()
    }

    fn start_riddle(game: &mut Room, progression: &mut Progression) {
        game.place_player(Vec2::new(100.0, 100.0));
        assert_eq!(game.tick(&idle(), progression), Outcome::Continue);
        assert_eq!(game.state(), RoomState::RiddleActive);
    }

    #[test]
    fn entering_without_lab_key_returns_to_main() {
        let mut game = room();
        let mut progression = Progression::default();
        assert_eq!(game.tick(&idle(), &mut progression), Outcome::Main);
        assert_eq!(progression.companion.position(), None);
    }

    #[test]
    fn first_entry_places_companion_behind_start() {
        let mut game = room();
        let mut progression = keyed_progression();
        game.tick(&idle(), &mut progression);
        assert_eq!(progression.companion.position(), Some(Vec2::new(90.0, 640.0)));
    }

    #[test]
    fn fairy_starts_riddle_once() {
        let mut game = room();
        let mut progression = keyed_progression();
        start_riddle(&mut game, &mut progression);

        game.tick(&idle().with_submitted_text("echo"), &mut progression);
        game.tick(&idle(), &mut progression);

        assert_eq!(game.state(), RoomState::RiddleSolved);
    }

    #[test]
    fn typing_on_the_trigger_tick_reaches_the_riddle() {
        let mut game = room();
        let mut progression = keyed_progression();
        game.place_player(Vec2::new(100.0, 100.0));

        let typed = idle().with_text_edit(TextEdit::Char('e'));
        assert_eq!(game.tick(&typed, &mut progression), Outcome::Continue);

        assert_eq!(game.state(), RoomState::RiddleActive);
        assert_eq!(game.answer, "e");
    }

    #[test]
    fn answer_is_trimmed_and_case_insensitive() {
        let mut game = room();
        let mut progression = keyed_progression();
        start_riddle(&mut game, &mut progression);

        game.tick(&idle().with_submitted_text("  Echo "), &mut progression);

        assert_eq!(game.state(), RoomState::RiddleSolved);
    }

    #[test]
    fn wrong_answer_clears_buffer_and_stays_modal() {
        let mut game = room();
        let mut progression = keyed_progression();
        start_riddle(&mut game, &mut progression);

        game.tick(&idle().with_submitted_text("wind"), &mut progression);

        assert_eq!(game.state(), RoomState::RiddleActive);
        assert!(game.answer.is_empty());
        assert!(game.last_answer_rejected);
    }

    #[test]
    fn backspace_edits_the_answer() {
        let mut game = room();
        let mut progression = keyed_progression();
        start_riddle(&mut game, &mut progression);

        let typed = idle()
            .with_text_edit(TextEdit::Char('e'))
            .with_text_edit(TextEdit::Char('x'))
            .with_text_edit(TextEdit::Backspace)
            .with_submitted_text("cho");
        game.tick(&typed, &mut progression);

        assert_eq!(game.state(), RoomState::RiddleSolved);
    }

    #[test]
    fn movement_is_ignored_while_riddle_is_open() {
        let mut game = room();
        let mut progression = keyed_progression();
        start_riddle(&mut game, &mut progression);
        let before = game.player;

        let walking = idle().with_action_down(InputAction::MoveRight, true);
        game.tick(&walking, &mut progression);

        assert_eq!(game.player, before);
    }

    #[test]
    fn princess_pickup_requires_solved_riddle() {
        let mut game = room();
        let mut progression = keyed_progression();
        game.place_player(Vec2::new(780.0, 380.0));

        for _ in 0..5 {
            game.tick(&idle(), &mut progression);
        }

        assert!(!progression.companion.is_attached());
        assert_eq!(game.state(), RoomState::Idle);
    }

    #[test]
    fn solved_riddle_then_pickup_attaches_companion() {
        let mut game = room();
        let mut progression = keyed_progression();
        start_riddle(&mut game, &mut progression);
        game.tick(&idle().with_submitted_text("echo"), &mut progression);

        game.place_player(Vec2::new(780.0, 380.0));
        game.tick(&idle(), &mut progression);

        assert_eq!(game.state(), RoomState::Collected);
        assert!(progression.companion.is_attached());
    }

    #[test]
    fn attached_companion_lags_behind_player() {
        let mut game = room();
        let mut progression = keyed_progression();
        start_riddle(&mut game, &mut progression);
        game.tick(&idle().with_submitted_text("echo"), &mut progression);
        game.place_player(Vec2::new(780.0, 380.0));
        game.tick(&idle(), &mut progression);

        let target = Vec2::new(770.0, 370.0);
        let position = progression.companion.position().expect("companion");
        assert_ne!(position, target);
        assert!(position.x > 90.0 && position.x < target.x);
    }

    #[test]
    fn exit_returns_main_with_or_without_princess() {
        let mut game = room();
        let mut progression = keyed_progression();
        game.place_player(Vec2::new(480.0, 700.0));

        assert_eq!(game.tick(&idle(), &mut progression), Outcome::Main);
        assert_eq!(game.state(), RoomState::Exited);
        assert!(!progression.companion.is_attached());
    }

    #[test]
    fn player_stays_inside_room() {
        let mut game = room();
        let mut progression = keyed_progression();
        game.place_player(Vec2::new(100.0, 300.0));
        let right = idle().with_action_down(InputAction::MoveRight, true);
        for _ in 0..400 {
            game.tick(&right, &mut progression);
        }
        assert_eq!(game.player.right(), 1200.0);
    }
}
