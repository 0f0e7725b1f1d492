use engine::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    Horizontal,
    Vertical,
}

/// A laser sliding back and forth along one axis.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Hazard {
    rect: Rect,
    speed: f32,
    axis: Axis,
}

impl Hazard {
    pub(crate) fn new(rect: Rect, speed: f32, axis: Axis) -> Self {
        Self { rect, speed, axis }
    }

    pub(crate) fn rect(&self) -> Rect {
        self.rect
    }

    pub(crate) fn speed(&self) -> f32 {
        self.speed
    }

    /// Moves by `speed`, then bounces off whichever bound the leading edge
    /// reached. The hazard is left touching that bound, never past it.
    pub(crate) fn advance(&mut self, bounds: &Rect) {
        let (low, high) = match self.axis {
            Axis::Horizontal => {
                self.rect.x += self.speed;
                (self.rect.left() <= bounds.left(), self.rect.right() >= bounds.right())
            }
            Axis::Vertical => {
                self.rect.y += self.speed;
                (self.rect.top() <= bounds.top(), self.rect.bottom() >= bounds.bottom())
            }
        };

        if (self.speed > 0.0 && high) || (self.speed < 0.0 && low) {
            self.speed = -self.speed;
        }
        self.rect = self.rect.clamped_within(bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rect {
        Rect::new(0.0, 0.0, 1200.0, 800.0)
    }

    #[test]
    fn bounces_when_right_edge_reaches_bound() {
        let mut hazard = Hazard::new(Rect::new(1177.0, 0.0, 20.0, 20.0), 3.0, Axis::Horizontal);

        hazard.advance(&bounds());
        assert_eq!(hazard.rect().right(), 1200.0);
        assert_eq!(hazard.speed(), -3.0);

        hazard.advance(&bounds());
        assert_eq!(hazard.rect().x, 1177.0);
    }

    #[test]
    fn overshoot_is_clamped_onto_the_bound() {
        let mut hazard = Hazard::new(Rect::new(1179.0, 0.0, 20.0, 20.0), 3.0, Axis::Horizontal);
        hazard.advance(&bounds());
        assert_eq!(hazard.rect().x, 1180.0);
        assert_eq!(hazard.speed(), -3.0);
    }

    #[test]
    fn vertical_hazard_bounces_off_top() {
        let mut hazard = Hazard::new(Rect::new(400.0, 1.0, 20.0, 200.0), -2.0, Axis::Vertical);
        hazard.advance(&bounds());
        assert_eq!(hazard.rect().y, 0.0);
        assert_eq!(hazard.speed(), 2.0);
        hazard.advance(&bounds());
        assert_eq!(hazard.rect().y, 2.0);
    }

    #[test]
    fn hazards_stay_within_bounds_over_many_ticks() {
        let mut hazards = vec![
            Hazard::new(Rect::new(100.0, 50.0, 200.0, 20.0), 3.0, Axis::Horizontal),
            Hazard::new(Rect::new(400.0, 150.0, 20.0, 200.0), 2.0, Axis::Vertical),
            Hazard::new(Rect::new(200.0, 400.0, 300.0, 20.0), 4.0, Axis::Horizontal),
            Hazard::new(Rect::new(600.0, 100.0, 20.0, 300.0), 3.0, Axis::Vertical),
        ];
        for _ in 0..5_000 {
            for hazard in &mut hazards {
                hazard.advance(&bounds());
                let rect = hazard.rect();
                assert!(rect.left() >= 0.0 && rect.right() <= 1200.0);
                assert!(rect.top() >= 0.0 && rect.bottom() <= 800.0);
            }
        }
    }
}
