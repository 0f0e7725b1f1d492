use engine::{Rect, Vec2};

/// Player body under gravity, resting on static platforms.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlatformBody {
    rect: Rect,
    velocity_y: f32,
    on_ground: bool,
}

impl PlatformBody {
    pub(crate) fn new(position: Vec2, width: f32, height: f32) -> Self {
        Self {
            rect: Rect::from_position(position, width, height),
            velocity_y: 0.0,
            on_ground: false,
        }
    }

    pub(crate) fn rect(&self) -> Rect {
        self.rect
    }

    pub(crate) fn velocity_y(&self) -> f32 {
        self.velocity_y
    }

    pub(crate) fn on_ground(&self) -> bool {
        self.on_ground
    }

    /// Shifts by `dx` and keeps the left edge within `[min_x, max_x]`.
    pub(crate) fn move_horizontal(&mut self, dx: f32, min_x: f32, max_x: f32) {
        self.rect.x = (self.rect.x + dx).clamp(min_x, max_x.max(min_x));
    }

    /// Starts a jump when standing on a platform. Returns whether it jumped.
    pub(crate) fn try_jump(&mut self, strength: f32) -> bool {
        if !self.on_ground {
            return false;
        }
        self.velocity_y = -strength;
        self.on_ground = false;
        true
    }

    /// Integrates one tick of gravity and resolves vertical overlap with
    /// `platforms`: landing snaps the feet onto the top, a head bump snaps
    /// the head under the bottom. Either way vertical speed is zeroed.
    pub(crate) fn step_vertical(&mut self, gravity: f32, platforms: &[Rect]) {
        self.velocity_y += gravity;
        self.rect.y += self.velocity_y;
        self.on_ground = false;

        for platform in platforms {
            if !self.rect.intersects(platform) {
                continue;
            }
            if self.velocity_y > 0.0 {
                self.rect.y = platform.top() - self.rect.height();
                self.velocity_y = 0.0;
                self.on_ground = true;
            } else if self.velocity_y < 0.0 {
                self.rect.y = platform.bottom();
                self.velocity_y = 0.0;
            }
        }
    }
}
