use std::path::PathBuf;

use engine::{resolve_app_paths, LoopConfig, Scene, StartupError};
use tracing::info;
use tracing_subscriber::EnvFilter;

use super::gameplay;
use super::tuning::resolve_tuning;

pub(crate) struct AppWiring {
    pub(crate) config: LoopConfig,
    pub(crate) asset_root: PathBuf,
    pub(crate) scene: Box<dyn Scene>,
}

pub(crate) fn build_app() -> Result<AppWiring, StartupError> {
    init_tracing();
    info!("=== Sleepwalkers Startup ===");

    let paths = resolve_app_paths()?;
    info!(root = %paths.root.display(), "project_root_resolved");
    let tuning = resolve_tuning(&paths.assets_dir);
    let scene = gameplay::build_world(&paths.assets_dir, tuning);

    Ok(AppWiring {
        config: LoopConfig::default(),
        asset_root: paths.assets_dir,
        scene,
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}
