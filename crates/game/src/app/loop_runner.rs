use std::process::ExitCode;

use engine::{run_app, AppError};
use tracing::error;

use super::bootstrap::build_app;

pub(crate) fn run() -> ExitCode {
    if let Err(err) = try_run() {
        error!(error = %err, "startup_failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn try_run() -> Result<(), AppError> {
    let app = build_app()?;
    run_app(app.config, app.asset_root, app.scene)
}
