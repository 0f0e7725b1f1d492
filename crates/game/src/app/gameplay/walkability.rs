use std::path::Path;

use engine::{load_image, Image, Rect, Vec2};
use tracing::{info, warn};

const WALKABLE_RGB: [u8; 3] = [255, 255, 255];

/// Terrain classification sampled from a reference image: pure white is
/// walkable, any other colour blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WalkabilityMask {
    width: u32,
    height: u32,
    walkable: Vec<bool>,
}

impl WalkabilityMask {
    pub(crate) fn from_image(image: &Image) -> Self {
        let walkable = image
            .rgba()
            .chunks_exact(4)
            .map(|pixel| pixel[..3] == WALKABLE_RGB)
            .collect();
        Self {
            width: image.width(),
            height: image.height(),
            walkable,
        }
    }

    pub(crate) fn all_walkable(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            walkable: vec![true; width as usize * height as usize],
        }
    }

    /// Loads the mask image, resampled to `width x height`. A missing or
    /// unreadable image yields an all-walkable mask.
    pub(crate) fn load_or_all_walkable(assets_dir: &Path, key: &str, width: u32, height: u32) -> Self {
        match load_image(assets_dir, key) {
            Ok(image) => {
                info!(
                    key,
                    source_width = image.width(),
                    source_height = image.height(),
                    "walkability_mask_loaded"
                );
                Self::from_image(&image.resized_nearest(width, height))
            }
            Err(error) => {
                warn!(key, error = %error, "walkability_mask_missing_all_walkable");
                Self::all_walkable(width, height)
            }
        }
    }

    /// Samples the pixel under `point`, clamped into the image.
    pub(crate) fn is_walkable_at(&self, point: Vec2) -> bool {
        if self.width == 0 || self.height == 0 {
            return true;
        }
        let x = clamp_index(point.x, self.width);
        let y = clamp_index(point.y, self.height);
        self.walkable
            .get(y * self.width as usize + x)
            .copied()
            .unwrap_or(false)
    }

    /// Checks only the four corners of `rect`; an obstacle thinner than the
    /// rectangle that lies strictly inside it is not detected.
    pub(crate) fn allows(&self, rect: &Rect) -> bool {
        [
            Vec2::new(rect.left(), rect.top()),
            Vec2::new(rect.right(), rect.top()),
            Vec2::new(rect.left(), rect.bottom()),
            Vec2::new(rect.right(), rect.bottom()),
        ]
        .into_iter()
        .all(|corner| self.is_walkable_at(corner))
    }
}

fn clamp_index(coordinate: f32, extent: u32) -> usize {
    let max = extent.saturating_sub(1) as f32;
    if coordinate.is_nan() {
        return 0;
    }
    coordinate.floor().clamp(0.0, max) as usize
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const WHITE: [u8; 4] = [255, 255, 255, 255];
    const WALL: [u8; 4] = [20, 20, 20, 255];

    #[test]
    fn only_pure_white_is_walkable() {
        let mut image = Image::solid(4, 1, WHITE);
        image.set_pixel(1, 0, [254, 255, 255, 255]);
        image.set_pixel(2, 0, [255, 255, 255, 0]);
        let mask = WalkabilityMask::from_image(&image);

        assert!(mask.is_walkable_at(Vec2::new(0.0, 0.0)));
        assert!(!mask.is_walkable_at(Vec2::new(1.0, 0.0)));
        assert!(mask.is_walkable_at(Vec2::new(2.0, 0.0)));
    }

    #[test]
    fn blocked_corner_rejects_rect() {
        let mut image = Image::solid(100, 100, WHITE);
        image.set_pixel(30, 40, WALL);
        let mask = WalkabilityMask::from_image(&image);

        assert!(!mask.allows(&Rect::new(10.0, 20.0, 20.0, 20.0)));
        assert!(mask.allows(&Rect::new(11.0, 20.0, 20.0, 20.0)));
    }

    #[test]
    fn obstacle_inside_rect_is_not_detected() {
        let mut image = Image::solid(100, 100, WHITE);
        image.set_pixel(20, 30, WALL);
        let mask = WalkabilityMask::from_image(&image);
        assert!(mask.allows(&Rect::new(10.0, 20.0, 20.0, 20.0)));
    }

    #[test]
    fn corners_outside_image_are_clamped() {
        let mut image = Image::solid(10, 10, WHITE);
        image.set_pixel(9, 9, WALL);
        let mask = WalkabilityMask::from_image(&image);
        assert!(!mask.is_walkable_at(Vec2::new(50.0, 50.0)));
        assert!(mask.is_walkable_at(Vec2::new(-5.0, -5.0)));
    }

    #[test]
    fn missing_image_loads_all_walkable_mask() {
        let temp = tempfile::tempdir().expect("tempdir");
        let mask = WalkabilityMask::load_or_all_walkable(temp.path(), "main/path_background", 24, 16);
        assert_eq!(mask, WalkabilityMask::all_walkable(24, 16));
    }

    #[test]
    fn loaded_image_is_resampled_to_world_size() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::create_dir_all(temp.path().join("main")).expect("asset dir");
        let mut source = image::RgbaImage::from_pixel(2, 2, image::Rgba(WHITE));
        source.put_pixel(1, 1, image::Rgba(WALL));
        source
            .save(temp.path().join("main").join("path_background.png"))
            .expect("save mask");

        let mask = WalkabilityMask::load_or_all_walkable(temp.path(), "main/path_background", 20, 20);

        assert!(mask.is_walkable_at(Vec2::new(5.0, 5.0)));
        assert!(!mask.is_walkable_at(Vec2::new(15.0, 15.0)));
    }
}
