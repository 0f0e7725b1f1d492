mod input;
mod loop_runner;
mod metrics;
mod rendering;
mod scene;

pub use input::{InputAction, InputSnapshot, TextEdit};
pub use loop_runner::{run_app, AppError, LoopConfig, SLOW_FRAME_ENV_VAR};
pub use metrics::LoopMetricsSnapshot;
pub use rendering::{glyph_advance, line_advance, text_width, wrap_text, Canvas, Renderer};
pub use scene::{Scene, SceneCommand};
