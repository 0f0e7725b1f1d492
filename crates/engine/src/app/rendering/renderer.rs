use std::path::PathBuf;
use std::sync::Arc;

use pixels::{Error, Pixels, SurfaceTexture, TextureError};
use winit::window::Window;

use crate::app::Scene;
use crate::assets::AssetStore;
use crate::geometry::Vec2;

use super::Canvas;

/// Fixed-size software framebuffer presented through `pixels`. The buffer
/// keeps the logical resolution; the surface scales it to the window.
pub struct Renderer {
    pixels: Pixels<'static>,
    buffer_width: u32,
    buffer_height: u32,
    assets: AssetStore,
}

impl Renderer {
    pub fn new(
        window: Arc<Window>,
        buffer_width: u32,
        buffer_height: u32,
        asset_root: PathBuf,
    ) -> Result<Self, Error> {
        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width.max(1), size.height.max(1), window);
        let pixels = Pixels::new(buffer_width, buffer_height, surface)?;
        Ok(Self {
            pixels,
            buffer_width,
            buffer_height,
            assets: AssetStore::new(asset_root),
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels.resize_surface(width, height)
    }

    /// Maps a physical window position to framebuffer pixels, or `None` when
    /// the cursor is over the letterbox.
    pub fn window_to_buffer(&self, x: f32, y: f32) -> Option<Vec2> {
        self.pixels
            .window_pos_to_pixel((x, y))
            .ok()
            .map(|(px, py)| Vec2::new(px as f32, py as f32))
    }

    pub(crate) fn render_scene(&mut self, scene: &mut dyn Scene) -> Result<(), Error> {
        let frame = self.pixels.frame_mut();
        let mut canvas = Canvas::new(
            frame,
            self.buffer_width,
            self.buffer_height,
            &mut self.assets,
        );
        scene.render(&mut canvas);
        self.pixels.render()
    }
}
