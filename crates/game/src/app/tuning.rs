use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

pub(crate) const TUNING_FILE_NAME: &str = "tuning.json";

/// Gameplay numbers that can be overridden from `assets/tuning.json`.
/// Speeds are pixels per tick at 60 ticks per second.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct GameTuning {
    pub(crate) overworld_speed: f32,
    pub(crate) labyrinth_speed: f32,
    pub(crate) room_speed: f32,
    pub(crate) platformer_speed: f32,
    pub(crate) gravity: f32,
    pub(crate) jump_strength: f32,
    pub(crate) hitbox_padding: f32,
    pub(crate) companion_follow_factor: f32,
}

impl Default for GameTuning {
    fn default() -> Self {
        Self {
            overworld_speed: 7.0,
            labyrinth_speed: 5.0,
            room_speed: 5.0,
            platformer_speed: 5.0,
            gravity: 0.8,
            jump_strength: 15.0,
            hitbox_padding: 10.0,
            companion_follow_factor: 0.3,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum TuningError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path} at {json_path}: {source}")]
    Parse {
        path: PathBuf,
        json_path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid value for {field}: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

impl GameTuning {
    fn validate(&self) -> Result<(), TuningError> {
        let non_negative = [
            ("overworld_speed", self.overworld_speed),
            ("labyrinth_speed", self.labyrinth_speed),
            ("room_speed", self.room_speed),
            ("platformer_speed", self.platformer_speed),
            ("gravity", self.gravity),
            ("jump_strength", self.jump_strength),
            ("hitbox_padding", self.hitbox_padding),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(TuningError::Invalid {
                    field,
                    message: format!("expected a finite non-negative number, got {value}"),
                });
            }
        }

        let factor = self.companion_follow_factor;
        if !(factor > 0.0 && factor <= 1.0) {
            return Err(TuningError::Invalid {
                field: "companion_follow_factor",
                message: format!("expected a number in (0, 1], got {factor}"),
            });
        }
        Ok(())
    }
}

/// Reads the tuning file. `Ok(None)` means the file does not exist.
pub(crate) fn load_tuning(path: &Path) -> Result<Option<GameTuning>, TuningError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(TuningError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let tuning = parse_tuning(path, &raw)?;
    tuning.validate()?;
    Ok(Some(tuning))
}

fn parse_tuning(path: &Path, raw: &str) -> Result<GameTuning, TuningError> {
    let mut deserializer = serde_json::Deserializer::from_str(raw);
    serde_path_to_error::deserialize::<_, GameTuning>(&mut deserializer).map_err(|error| {
        let json_path = match error.path().to_string() {
            location if location.is_empty() || location == "." => "<root>".to_string(),
            location => location,
        };
        TuningError::Parse {
            path: path.to_path_buf(),
            json_path,
            source: error.into_inner(),
        }
    })
}

/// Loads `<assets_dir>/tuning.json`, falling back to defaults when the file
/// is missing or invalid.
pub(crate) fn resolve_tuning(assets_dir: &Path) -> GameTuning {
    let path = assets_dir.join(TUNING_FILE_NAME);
    match load_tuning(&path) {
        Ok(Some(tuning)) => {
            info!(path = %path.display(), "tuning_loaded");
            tuning
        }
        Ok(None) => {
            info!(path = %path.display(), "tuning_file_absent_using_defaults");
            GameTuning::default()
        }
        Err(error) => {
            warn!(error = %error, "tuning_invalid_using_defaults");
            GameTuning::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_tuning(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(TUNING_FILE_NAME);
        fs::write(&path, contents).expect("write tuning");
        (temp, path)
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let loaded = load_tuning(&temp.path().join(TUNING_FILE_NAME)).expect("load");
        assert_eq!(loaded, None);
    }

    #[test]
    fn partial_file_keeps_defaults_for_other_fields() {
        let (_temp, path) = write_tuning(r#"{ "overworld_speed": 9.5 }"#);
        let tuning = load_tuning(&path).expect("load").expect("tuning");
        assert_eq!(tuning.overworld_speed, 9.5);
        assert_eq!(tuning.gravity, GameTuning::default().gravity);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let (_temp, path) = write_tuning(r#"{ "moon_gravity": 1.0 }"#);
        let error = load_tuning(&path).expect_err("unknown field");
        assert!(matches!(error, TuningError::Parse { .. }));
    }

    #[test]
    fn type_error_reports_json_path() {
        let (_temp, path) = write_tuning(r#"{ "jump_strength": "high" }"#);
        match load_tuning(&path).expect_err("type error") {
            TuningError::Parse { json_path, .. } => assert_eq!(json_path, "jump_strength"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn out_of_range_follow_factor_is_invalid() {
        let (_temp, path) = write_tuning(r#"{ "companion_follow_factor": 1.5 }"#);
        match load_tuning(&path).expect_err("invalid") {
            TuningError::Invalid { field, .. } => assert_eq!(field, "companion_follow_factor"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_file_resolves_to_defaults() {
        let (temp, _path) = write_tuning("not json");
        assert_eq!(resolve_tuning(temp.path()), GameTuning::default());
    }
}
