use crate::assets::{AssetStore, Image};
use crate::geometry::{Rect, Vec2};

use super::text::{draw_text_clipped, text_width};

/// Drawing surface handed to a scene for one frame. Wraps the RGBA8
/// framebuffer and the asset cache so scenes can draw images by key.
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
    assets: &'a mut AssetStore,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32, assets: &'a mut AssetStore) -> Self {
        Self {
            frame,
            width,
            height,
            assets,
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f32, self.height as f32)
    }

    pub fn clear(&mut self, color: [u8; 4]) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&color);
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: [u8; 4]) {
        let Some((left, top, right, bottom)) = self.clip(rect) else {
            return;
        };
        for y in top..bottom {
            for x in left..right {
                blend_pixel(self.frame, self.width, x, y, color);
            }
        }
    }

    pub fn outline_rect(&mut self, rect: Rect, thickness: f32, color: [u8; 4]) {
        let t = thickness.max(1.0);
        self.fill_rect(Rect::new(rect.x, rect.y, rect.width(), t), color);
        self.fill_rect(
            Rect::new(rect.x, rect.bottom() - t, rect.width(), t),
            color,
        );
        self.fill_rect(Rect::new(rect.x, rect.y, t, rect.height()), color);
        self.fill_rect(
            Rect::new(rect.right() - t, rect.y, t, rect.height()),
            color,
        );
    }

    /// Draws the image stored under `key` stretched to `dest`. When the asset
    /// is unavailable the rectangle is filled with `placeholder` instead.
    pub fn draw_image(&mut self, key: &str, dest: Rect, placeholder: [u8; 4]) {
        let Some(image) = self.assets.image(key) else {
            self.fill_rect(dest, placeholder);
            return;
        };
        blit_scaled(self.frame, self.width, self.height, image, dest);
    }

    pub fn draw_text(&mut self, position: Vec2, text: &str, scale: i32, color: [u8; 4]) {
        draw_text_clipped(
            self.frame,
            self.width,
            self.height,
            position.x.round() as i32,
            position.y.round() as i32,
            text,
            scale,
            color,
        );
    }

    /// Draws `text` horizontally centred on `center_x`.
    pub fn draw_text_centered(&mut self, center_x: f32, y: f32, text: &str, scale: i32, color: [u8; 4]) {
        let x = center_x - text_width(text, scale) as f32 * 0.5;
        self.draw_text(Vec2::new(x, y), text, scale, color);
    }

    fn clip(&self, rect: Rect) -> Option<(i32, i32, i32, i32)> {
        let left = (rect.left().round() as i32).max(0);
        let top = (rect.top().round() as i32).max(0);
        let right = (rect.right().round() as i32).min(self.width as i32);
        let bottom = (rect.bottom().round() as i32).min(self.height as i32);
        (left < right && top < bottom).then_some((left, top, right, bottom))
    }
}

pub(crate) fn write_pixel_clipped(
    frame: &mut [u8],
    width: u32,
    height: u32,
    x: i32,
    y: i32,
    color: [u8; 4],
) {
    if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
        return;
    }
    let offset = (y as usize * width as usize + x as usize) * 4;
    let Some(end) = offset.checked_add(4) else {
        return;
    };
    if end > frame.len() {
        return;
    }
    frame[offset..end].copy_from_slice(&color);
}

fn blend_pixel(frame: &mut [u8], width: u32, x: i32, y: i32, color: [u8; 4]) {
    let offset = (y as usize * width as usize + x as usize) * 4;
    let Some(dst) = frame.get_mut(offset..offset + 4) else {
        return;
    };
    match color[3] {
        0 => {}
        255 => dst.copy_from_slice(&color),
        alpha => {
            let a = alpha as u16;
            for channel in 0..3 {
                let src = color[channel] as u16;
                let old = dst[channel] as u16;
                dst[channel] = ((src * a + old * (255 - a)) / 255) as u8;
            }
            dst[3] = 255;
        }
    }
}

fn blit_scaled(frame: &mut [u8], width: u32, height: u32, image: &Image, dest: Rect) {
    if image.width() == 0 || image.height() == 0 || dest.width() < 1.0 || dest.height() < 1.0 {
        return;
    }
    let left = dest.left().round() as i32;
    let top = dest.top().round() as i32;
    let dest_w = dest.width().round() as i32;
    let dest_h = dest.height().round() as i32;
    let draw_left = left.max(0);
    let draw_top = top.max(0);
    let draw_right = (left + dest_w).min(width as i32);
    let draw_bottom = (top + dest_h).min(height as i32);
    if draw_left >= draw_right || draw_top >= draw_bottom {
        return;
    }

    let src = image.rgba();
    let src_width = image.width() as usize;
    for out_y in draw_top..draw_bottom {
        let src_y = ((out_y - top) as i64 * image.height() as i64 / dest_h as i64) as usize;
        let src_y = src_y.min(image.height() as usize - 1);
        for out_x in draw_left..draw_right {
            let src_x = ((out_x - left) as i64 * image.width() as i64 / dest_w as i64) as usize;
            let src_x = src_x.min(src_width - 1);
            let src_offset = (src_y * src_width + src_x) * 4;
            let color = [
                src[src_offset],
                src[src_offset + 1],
                src[src_offset + 2],
                src[src_offset + 3],
            ];
            blend_pixel(frame, width, out_x, out_y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn pixel(frame: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
        let offset = ((y * width + x) * 4) as usize;
        [
            frame[offset],
            frame[offset + 1],
            frame[offset + 2],
            frame[offset + 3],
        ]
    }

    #[test]
    fn fill_rect_is_clipped_to_frame() {
        let mut frame = vec![0u8; 4 * 4 * 4];
        let mut assets = AssetStore::new(PathBuf::from("/nonexistent"));
        let mut canvas = Canvas::new(&mut frame, 4, 4, &mut assets);
        canvas.fill_rect(Rect::new(-2.0, 2.0, 4.0, 10.0), [9, 9, 9, 255]);

        assert_eq!(pixel(&frame, 4, 0, 3), [9, 9, 9, 255]);
        assert_eq!(pixel(&frame, 4, 1, 2), [9, 9, 9, 255]);
        assert_eq!(pixel(&frame, 4, 2, 2), [0, 0, 0, 0]);
        assert_eq!(pixel(&frame, 4, 0, 1), [0, 0, 0, 0]);
    }

    #[test]
    fn missing_image_draws_placeholder_fill() {
        let mut frame = vec![0u8; 4 * 4 * 4];
        let mut assets = AssetStore::new(PathBuf::from("/nonexistent"));
        let mut canvas = Canvas::new(&mut frame, 4, 4, &mut assets);
        canvas.draw_image("main/hardcore_heart", Rect::new(1.0, 1.0, 2.0, 2.0), [200, 0, 0, 255]);

        assert_eq!(pixel(&frame, 4, 1, 1), [200, 0, 0, 255]);
        assert_eq!(pixel(&frame, 4, 2, 2), [200, 0, 0, 255]);
        assert_eq!(pixel(&frame, 4, 3, 3), [0, 0, 0, 0]);
    }

    #[test]
    fn cached_image_is_stretched_to_destination() {
        let mut frame = vec![0u8; 4 * 4 * 4];
        let mut assets = AssetStore::new(PathBuf::from("/nonexistent"));
        let mut image = Image::solid(2, 1, [10, 20, 30, 255]);
        image.set_pixel(1, 0, [40, 50, 60, 255]);
        assets.insert("room/fairy", image);
        let mut canvas = Canvas::new(&mut frame, 4, 4, &mut assets);
        canvas.draw_image("room/fairy", Rect::new(0.0, 0.0, 4.0, 2.0), [255, 0, 255, 255]);

        assert_eq!(pixel(&frame, 4, 0, 0), [10, 20, 30, 255]);
        assert_eq!(pixel(&frame, 4, 1, 1), [10, 20, 30, 255]);
        assert_eq!(pixel(&frame, 4, 2, 0), [40, 50, 60, 255]);
        assert_eq!(pixel(&frame, 4, 3, 1), [40, 50, 60, 255]);
        assert_eq!(pixel(&frame, 4, 0, 2), [0, 0, 0, 0]);
    }

    #[test]
    fn translucent_fill_blends_with_background() {
        let mut frame = vec![0u8; 4];
        let mut assets = AssetStore::new(PathBuf::from("/nonexistent"));
        let mut canvas = Canvas::new(&mut frame, 1, 1, &mut assets);
        canvas.clear([0, 0, 0, 255]);
        canvas.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), [255, 255, 255, 51]);
        assert_eq!(pixel(&frame, 1, 0, 0), [51, 51, 51, 255]);
    }
}
