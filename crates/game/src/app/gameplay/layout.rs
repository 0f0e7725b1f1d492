//! Fixed screen geometry and asset keys.

use engine::{Rect, Vec2};

pub(crate) const SCREEN_WIDTH: f32 = 1200.0;
pub(crate) const SCREEN_HEIGHT: f32 = 800.0;
pub(crate) const WORLD_WIDTH: f32 = 2400.0;
pub(crate) const WORLD_HEIGHT: f32 = 1600.0;

/// `(world_w / 2 - 100, world_h / 2 + 220)`.
pub(crate) const SPAWN_POINT: Vec2 = Vec2::new(WORLD_WIDTH / 2.0 - 100.0, WORLD_HEIGHT / 2.0 + 220.0);

/// Offset of the companion from the player in the overworld.
pub(crate) const COMPANION_DRAW_OFFSET: Vec2 = Vec2::new(10.0, 10.0);
/// Where the companion trails behind the player inside the room.
pub(crate) const COMPANION_TRAIL_OFFSET: Vec2 = Vec2::new(-10.0, -10.0);
pub(crate) const COMPANION_WIDTH: f32 = 50.0;
pub(crate) const COMPANION_HEIGHT: f32 = 75.0;

pub(crate) const LOCKED_WARNING_TICKS: u32 = 90;

pub(crate) fn screen_bounds() -> Rect {
    Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT)
}

pub(crate) fn world_bounds() -> Rect {
    Rect::new(0.0, 0.0, WORLD_WIDTH, WORLD_HEIGHT)
}

pub(crate) fn play_button() -> Rect {
    Rect::new(530.0, 550.0, 140.0, 50.0)
}

pub(crate) fn selection_boxes() -> [Rect; 4] {
    [
        Rect::new(375.0, 75.0, 200.0, 300.0),
        Rect::new(625.0, 75.0, 200.0, 300.0),
        Rect::new(375.0, 425.0, 200.0, 300.0),
        Rect::new(625.0, 425.0, 200.0, 300.0),
    ]
}

pub(crate) mod keys {
    pub(crate) const TITLE_PAGE: &str = "main/title_page";
    pub(crate) const MAP_BACKGROUND: &str = "main/map_background";
    pub(crate) const MAP_FOREGROUND: &str = "main/map_foreground";
    pub(crate) const WALKABILITY_MASK: &str = "main/path_background";
    pub(crate) const HEART: &str = "main/hardcore_heart";
    pub(crate) const WIN: &str = "main/win";
    pub(crate) const LASER_MAP: &str = "laser_labyrinth/laser_map";
    pub(crate) const PLATFORM_MAP: &str = "platformer/platform_map";
    pub(crate) const PLATFORM: &str = "platformer/platform_brown";
    pub(crate) const DOOR: &str = "platformer/door";
    pub(crate) const ROOM: &str = "room/room";
    pub(crate) const PRINCESS: &str = "room/princess";
    pub(crate) const FAIRY: &str = "room/fairy";
}

pub(crate) mod colors {
    pub(crate) const BACKDROP: [u8; 4] = [24, 20, 37, 255];
    pub(crate) const TEXT: [u8; 4] = [255, 255, 255, 255];
    pub(crate) const TEXT_DIM: [u8; 4] = [190, 190, 210, 255];
    pub(crate) const WARNING: [u8; 4] = [255, 90, 90, 255];
    pub(crate) const PANEL: [u8; 4] = [0, 0, 0, 190];
    pub(crate) const BUTTON: [u8; 4] = [70, 110, 200, 255];
    pub(crate) const HIGHLIGHT: [u8; 4] = [255, 220, 120, 255];
    pub(crate) const LASER: [u8; 4] = [235, 40, 40, 255];
    pub(crate) const EXIT: [u8; 4] = [60, 200, 120, 255];
    pub(crate) const PLAYER: [u8; 4] = [90, 160, 255, 255];
    pub(crate) const COMPANION: [u8; 4] = [255, 150, 200, 255];
    pub(crate) const FAIRY: [u8; 4] = [170, 255, 230, 255];
    pub(crate) const PLATFORM: [u8; 4] = [130, 85, 45, 255];
    pub(crate) const MAP: [u8; 4] = [70, 120, 60, 255];
    pub(crate) const ROOM: [u8; 4] = [95, 70, 110, 255];
    pub(crate) const LAB: [u8; 4] = [30, 30, 45, 255];
    pub(crate) const SKY: [u8; 4] = [120, 170, 230, 255];
    pub(crate) const CLEAR: [u8; 4] = [0, 0, 0, 0];
}
