use std::collections::HashMap;

use engine::{Canvas, InputSnapshot, Rect, Scene, SceneCommand, Vec2};
use tracing::info;

use super::layout::{
    colors, keys, play_button, screen_bounds, selection_boxes, world_bounds, COMPANION_DRAW_OFFSET,
    COMPANION_HEIGHT, COMPANION_WIDTH, LOCKED_WARNING_TICKS, SCREEN_HEIGHT, SCREEN_WIDTH,
    SPAWN_POINT, WORLD_HEIGHT, WORLD_WIDTH,
};
use super::minigame::{build_minigame, MiniGame, PlayerAppearance, SceneKind, APPEARANCES};
use super::outcome::Outcome;
use super::progression::{KeyFlag, Progression};
use super::walkability::WalkabilityMask;
use crate::app::tuning::GameTuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WorldState {
    Title,
    SpriteSelection,
    Overworld,
    Victory,
}

/// Entrance to a mini-game on the overworld map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Gate {
    pub(crate) kind: SceneKind,
    pub(crate) rect: Rect,
    pub(crate) required: Option<KeyFlag>,
}

pub(crate) fn default_gates() -> Vec<Gate> {
    vec![
        Gate {
            kind: SceneKind::Platformer,
            rect: Rect::new(1570.0, 800.0, 100.0, 130.0),
            required: None,
        },
        Gate {
            kind: SceneKind::Labyrinth,
            rect: Rect::new(1250.0, 480.0, 130.0, 120.0),
            required: Some(KeyFlag::PlatformKey),
        },
        Gate {
            kind: SceneKind::Room,
            rect: Rect::new(1025.0, 780.0, 150.0, 200.0),
            required: Some(KeyFlag::LabKey),
        },
    ]
}

/// Keeps the player centred while never showing anything past the map edge.
pub(crate) fn camera_offset(player: Vec2) -> Vec2 {
    Vec2::new(
        (SCREEN_WIDTH / 2.0 - player.x).clamp(SCREEN_WIDTH - WORLD_WIDTH, 0.0),
        (SCREEN_HEIGHT / 2.0 - player.y).clamp(SCREEN_HEIGHT - WORLD_HEIGHT, 0.0),
    )
}

struct ActiveScene {
    kind: SceneKind,
    game: Box<dyn MiniGame>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Warning {
    message: &'static str,
    ticks_remaining: u32,
}

/// Root scene: title, sprite selection, the overworld and the win screen.
/// While a mini-game runs the overworld is frozen and every tick goes to it.
pub(crate) struct World {
    state: WorldState,
    tuning: GameTuning,
    mask: WalkabilityMask,
    progression: Progression,
    appearance: PlayerAppearance,
    player: Rect,
    last_clear_position: Vec2,
    gates: Vec<Gate>,
    active: Option<ActiveScene>,
    entries: HashMap<SceneKind, u32>,
    warning: Option<Warning>,
    camera: Vec2,
}

impl World {
    pub(crate) fn new(tuning: GameTuning, mask: WalkabilityMask) -> Self {
        let appearance = PlayerAppearance::default();
        Self {
            state: WorldState::Title,
            tuning,
            mask,
            progression: Progression::default(),
            appearance,
            player: Rect::from_position(SPAWN_POINT, appearance.width, appearance.height),
            last_clear_position: SPAWN_POINT,
            gates: default_gates(),
            active: None,
            entries: HashMap::new(),
            warning: None,
            camera: camera_offset(SPAWN_POINT),
        }
    }

    pub(crate) fn place_player(&mut self, position: Vec2) {
        self.player = Rect::from_position(position, self.appearance.width, self.appearance.height);
        self.camera = camera_offset(position);
    }

    fn update_title(&mut self, input: &InputSnapshot) -> SceneCommand {
        if input.quit_requested() {
            return SceneCommand::Quit;
        }
        if input
            .left_click_at()
            .is_some_and(|point| play_button().contains_point(point))
        {
            info!("title_play_clicked");
            self.state = WorldState::SpriteSelection;
        }
        SceneCommand::None
    }

    fn update_selection(&mut self, input: &InputSnapshot) -> SceneCommand {
        if input.quit_requested() {
            return SceneCommand::Quit;
        }
        let Some(point) = input.left_click_at() else {
            return SceneCommand::None;
        };
        let Some(index) = selection_boxes()
            .iter()
            .position(|slot| slot.contains_point(point))
        else {
            return SceneCommand::None;
        };

        self.appearance = APPEARANCES[index];
        self.place_player(SPAWN_POINT);
        self.last_clear_position = SPAWN_POINT;
        self.state = WorldState::Overworld;
        info!(sprite = self.appearance.sprite_key, "sprite_selected");
        SceneCommand::None
    }

    fn update_overworld(&mut self, input: &InputSnapshot) -> SceneCommand {
        if let Some(active) = self.active.as_mut() {
            let kind = active.kind;
            let outcome = active.game.tick(input, &mut self.progression);
            return self.resolve_outcome(kind, outcome);
        }
        if input.quit_requested() {
            return SceneCommand::Quit;
        }

        self.tick_warning();
        self.move_player(input);
        let carried = self
            .player
            .position()
            .offset(COMPANION_DRAW_OFFSET.x, COMPANION_DRAW_OFFSET.y);
        self.progression.companion.carry_to(carried);
        self.check_gates();
        self.camera = camera_offset(self.player.position());
        SceneCommand::None
    }

    fn update_victory(&mut self, input: &InputSnapshot) -> SceneCommand {
        if input.quit_requested() || input.any_key_pressed() || input.left_click_pressed() {
            info!("victory_dismissed");
            return SceneCommand::Quit;
        }
        SceneCommand::None
    }

    /// One prospective rectangle for the combined move; it is committed only
    /// if the mask allows all four of its corners.
    fn move_player(&mut self, input: &InputSnapshot) {
        let speed = self.tuning.overworld_speed;
        let dx = input.horizontal_axis() as f32 * speed;
        let dy = input.vertical_axis() as f32 * speed;
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        let prospective = self.player.translated(dx, dy);
        if self.mask.allows(&prospective) {
            self.player = prospective.clamped_within(&world_bounds());
        }
    }

    fn check_gates(&mut self) {
        let touched = self
            .gates
            .iter()
            .find(|gate| gate.rect.intersects(&self.player))
            .copied();
        let Some(gate) = touched else {
            self.last_clear_position = self.player.position();
            return;
        };

        match gate.required {
            Some(flag) if !self.progression.inventory.has(flag) => {
                if self.warning.is_none() {
                    info!(scene = gate.kind.name(), flag = flag.name(), "gate_locked");
                }
                self.warning = Some(Warning {
                    message: flag.locked_message(),
                    ticks_remaining: LOCKED_WARNING_TICKS,
                });
            }
            _ => self.enter_scene(gate.kind),
        }
    }

    fn enter_scene(&mut self, kind: SceneKind) {
        let entries = self.entries.entry(kind).or_insert(0);
        *entries += 1;
        info!(scene = kind.name(), entries = *entries, "scene_entered");
        self.warning = None;
        self.active = Some(ActiveScene {
            kind,
            game: build_minigame(kind, self.appearance, &self.tuning),
        });
    }

    fn resolve_outcome(&mut self, kind: SceneKind, outcome: Outcome) -> SceneCommand {
        if !outcome.is_finished() {
            return SceneCommand::None;
        }
        self.active = None;
        info!(scene = kind.name(), outcome = ?outcome, "scene_finished");

        match outcome {
            Outcome::Quit => return SceneCommand::Quit,
            Outcome::RestartAdventure => {
                self.progression.restart_adventure();
                self.place_player(SPAWN_POINT);
                self.last_clear_position = SPAWN_POINT;
            }
            Outcome::Win | Outcome::Main => {
                self.place_player(self.last_clear_position);
                if kind == SceneKind::Room
                    && outcome == Outcome::Main
                    && self.progression.companion.is_attached()
                {
                    info!("victory");
                    self.state = WorldState::Victory;
                }
            }
            Outcome::Continue => {}
        }
        SceneCommand::None
    }

    fn tick_warning(&mut self) {
        if let Some(warning) = self.warning.as_mut() {
            warning.ticks_remaining = warning.ticks_remaining.saturating_sub(1);
            if warning.ticks_remaining == 0 {
                self.warning = None;
            }
        }
    }

    fn render_title(&self, canvas: &mut Canvas<'_>) {
        canvas.draw_image(keys::TITLE_PAGE, screen_bounds(), colors::BACKDROP);
        let button = play_button();
        canvas.fill_rect(button, colors::BUTTON);
        canvas.outline_rect(button, 2.0, colors::TEXT);
        canvas.draw_text_centered(button.center().x, button.y + 15.0, "PLAY", 4, colors::TEXT);
    }

    fn render_selection(&self, canvas: &mut Canvas<'_>) {
        canvas.clear(colors::BACKDROP);
        canvas.draw_text_centered(
            SCREEN_WIDTH / 2.0,
            30.0,
            "CHOOSE YOUR SLEEPWALKER",
            4,
            colors::TEXT,
        );
        for (slot, appearance) in selection_boxes().iter().zip(APPEARANCES.iter()) {
            canvas.outline_rect(*slot, 3.0, colors::HIGHLIGHT);
            let sprite = Rect::from_center(
                slot.center(),
                appearance.width * 2.0,
                appearance.height * 2.0,
            );
            canvas.draw_image(appearance.sprite_key, sprite, colors::PLAYER);
        }
    }

    fn render_overworld(&self, canvas: &mut Canvas<'_>) {
        let offset = self.camera;
        let map = world_bounds().translated(offset.x, offset.y);
        canvas.clear(colors::BACKDROP);
        canvas.draw_image(keys::MAP_BACKGROUND, map, colors::MAP);

        let companion = &self.progression.companion;
        if let Some(position) = companion.position().filter(|_| companion.is_attached()) {
            let rect = Rect::from_position(
                position.offset(offset.x, offset.y),
                COMPANION_WIDTH,
                COMPANION_HEIGHT,
            );
            canvas.draw_image(keys::PRINCESS, rect, colors::COMPANION);
        }
        canvas.draw_image(
            self.appearance.sprite_key,
            self.player.translated(offset.x, offset.y),
            colors::PLAYER,
        );
        canvas.draw_image(keys::MAP_FOREGROUND, map, colors::CLEAR);

        self.render_hud(canvas);
    }

    fn render_hud(&self, canvas: &mut Canvas<'_>) {
        let mut y = 16.0;
        for flag in KeyFlag::ALL {
            if !self.progression.inventory.has(flag) {
                continue;
            }
            canvas.draw_image(keys::HEART, Rect::new(16.0, y, 24.0, 24.0), colors::WARNING);
            canvas.draw_text(Vec2::new(48.0, y + 5.0), flag.label(), 2, colors::TEXT);
            y += 32.0;
        }

        if let Some(warning) = self.warning {
            let panel = Rect::new(300.0, 40.0, 600.0, 50.0);
            canvas.fill_rect(panel, colors::PANEL);
            canvas.draw_text_centered(
                panel.center().x,
                panel.y + 16.0,
                warning.message,
                3,
                colors::WARNING,
            );
        }
    }

    fn render_victory(&self, canvas: &mut Canvas<'_>) {
        canvas.draw_image(keys::WIN, screen_bounds(), colors::BACKDROP);
        let center_x = SCREEN_WIDTH / 2.0;
        canvas.draw_text_centered(center_x, 680.0, "YOU BROUGHT HER HOME!", 4, colors::HIGHLIGHT);
        canvas.draw_text_centered(center_x, 730.0, "PRESS ANY KEY TO QUIT", 2, colors::TEXT_DIM);
    }
}

impl Scene for World {
    fn load(&mut self) {
        info!(gates = self.gates.len(), "world_loaded");
    }

    fn update(&mut self, _fixed_dt_seconds: f32, input: &InputSnapshot) -> SceneCommand {
        match self.state {
            WorldState::Title => self.update_title(input),
            WorldState::SpriteSelection => self.update_selection(input),
            WorldState::Overworld => self.update_overworld(input),
            WorldState::Victory => self.update_victory(input),
        }
    }

    fn render(&mut self, canvas: &mut Canvas<'_>) {
        match self.state {
            WorldState::Title => self.render_title(canvas),
            WorldState::SpriteSelection => self.render_selection(canvas),
            WorldState::Overworld => match &self.active {
                Some(active) => active.game.render(canvas, &self.progression),
                None => self.render_overworld(canvas),
            },
            WorldState::Victory => self.render_victory(canvas),
        }
    }

    fn unload(&mut self) {
        for kind in SceneKind::ALL {
            info!(
                scene = kind.name(),
                entries = self.entries.get(&kind).copied().unwrap_or(0),
                "scene_entry_total"
            );
        }
    }

    fn debug_title(&self) -> Option<String> {
        let location = match (self.state, &self.active) {
            (WorldState::Title, _) => return None,
            (WorldState::SpriteSelection, _) => "sprite selection",
            (WorldState::Overworld, Some(active)) => active.kind.name(),
            (WorldState::Overworld, None) => "overworld",
            (WorldState::Victory, _) => "victory",
        };
        Some(format!("Sleepwalkers | {location}"))
    }
}

#[cfg(test)]
impl World {
    pub(crate) fn state(&self) -> WorldState {
        self.state
    }

    pub(crate) fn player(&self) -> Rect {
        self.player
    }

    pub(crate) fn appearance(&self) -> PlayerAppearance {
        self.appearance
    }

    pub(crate) fn camera(&self) -> Vec2 {
        self.camera
    }

    pub(crate) fn progression(&self) -> &Progression {
        &self.progression
    }

    pub(crate) fn progression_mut(&mut self) -> &mut Progression {
        &mut self.progression
    }

    pub(crate) fn entry_count(&self, kind: SceneKind) -> u32 {
        self.entries.get(&kind).copied().unwrap_or(0)
    }

    pub(crate) fn active_kind(&self) -> Option<SceneKind> {
        self.active.as_ref().map(|active| active.kind)
    }

    pub(crate) fn warning_message(&self) -> Option<&'static str> {
        self.warning.map(|warning| warning.message)
    }

    /// Skips the title and selection screens.
    pub(crate) fn enter_overworld(&mut self) {
        self.state = WorldState::Overworld;
        self.place_player(SPAWN_POINT);
        self.last_clear_position = SPAWN_POINT;
    }

    /// Runs `game` as if the player had walked into the `kind` gate.
    pub(crate) fn start_scene_with(&mut self, kind: SceneKind, game: Box<dyn MiniGame>) {
        self.enter_scene(kind);
        if let Some(active) = self.active.as_mut() {
            active.game = game;
        }
    }
}
