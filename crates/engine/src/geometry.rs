//! Screen-space geometry shared by the loop, the canvas and game scenes.
//!
//! All coordinates are framebuffer pixels with the origin at the top-left and
//! `y` growing downward.

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Axis-aligned rectangle. Width and height are never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    width: f32,
    height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width: non_negative(width),
            height: non_negative(height),
        }
    }

    pub fn from_position(position: Vec2, width: f32, height: f32) -> Self {
        Self::new(position.x, position.y, width, height)
    }

    pub fn from_center(center: Vec2, width: f32, height: f32) -> Self {
        Self::new(
            center.x - width * 0.5,
            center.y - height * 0.5,
            width,
            height,
        )
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self { x: self.x + dx, y: self.y + dy, ..*self }
    }

    /// Strict AABB overlap: rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.right() <= other.left()
            || self.left() >= other.right()
            || self.bottom() <= other.top()
            || self.top() >= other.bottom())
    }

    /// Half-open containment, matching how a click on the right or bottom
    /// edge lands in the neighbouring rectangle.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Collision box shrunk by `padding_x` on the left and right and
    /// `padding_y` on the top and bottom.
    ///
    /// A padding larger than half of the matching dimension collapses that
    /// dimension to zero around the centre, so the result always lies inside
    /// `self`.
    pub fn hitbox(&self, padding_x: f32, padding_y: f32) -> Rect {
        let pad_x = non_negative(padding_x).min(self.width * 0.5);
        let pad_y = non_negative(padding_y).min(self.height * 0.5);
        Rect::new(
            self.x + pad_x,
            self.y + pad_y,
            self.width - 2.0 * pad_x,
            self.height - 2.0 * pad_y,
        )
    }

    /// Moves the rectangle the least distance needed to sit inside `bounds`.
    /// Rectangles larger than `bounds` are pinned to its top-left corner.
    pub fn clamped_within(&self, bounds: &Rect) -> Rect {
        let max_x = (bounds.right() - self.width).max(bounds.left());
        let max_y = (bounds.bottom() - self.height).max(bounds.top());
        Rect {
            x: self.x.clamp(bounds.left(), max_x),
            y: self.y.clamp(bounds.top(), max_y),
            ..*self
        }
    }
}

fn non_negative(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_rects_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn edge_touching_rects_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn negative_dimensions_clamp_to_zero() {
        let rect = Rect::new(3.0, 4.0, -5.0, f32::NAN);
        assert_eq!(rect.width(), 0.0);
        assert_eq!(rect.height(), 0.0);
    }

    #[test]
    fn hitbox_shrinks_each_side_by_padding() {
        let sprite = Rect::new(100.0, 200.0, 50.0, 75.0);
        let hitbox = sprite.hitbox(10.0, 10.0);
        assert_eq!(hitbox, Rect::new(110.0, 210.0, 30.0, 55.0));
    }

    #[test]
    fn oversized_padding_collapses_to_center() {
        let sprite = Rect::new(0.0, 0.0, 20.0, 40.0);
        let hitbox = sprite.hitbox(15.0, 5.0);
        assert_eq!(hitbox.width(), 0.0);
        assert_eq!(hitbox.x, 10.0);
        assert_eq!(hitbox.height(), 30.0);
        assert!(hitbox.left() >= sprite.left() && hitbox.right() <= sprite.right());
    }

    #[test]
    fn contains_point_is_half_open() {
        let rect = Rect::new(10.0, 10.0, 10.0, 10.0);
        assert!(rect.contains_point(Vec2::new(10.0, 10.0)));
        assert!(rect.contains_point(Vec2::new(19.9, 19.9)));
        assert!(!rect.contains_point(Vec2::new(20.0, 15.0)));
    }

    #[test]
    fn clamped_within_keeps_rect_inside_bounds() {
        let bounds = Rect::new(0.0, 0.0, 1200.0, 800.0);
        let clamped = Rect::new(1190.0, -20.0, 50.0, 75.0).clamped_within(&bounds);
        assert_eq!(clamped.x, 1150.0);
        assert_eq!(clamped.y, 0.0);
    }
}
