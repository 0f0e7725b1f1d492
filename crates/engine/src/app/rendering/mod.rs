mod canvas;
mod renderer;
mod text;

pub use canvas::Canvas;
pub use renderer::Renderer;
pub use text::{glyph_advance, line_advance, text_width, wrap_text};
