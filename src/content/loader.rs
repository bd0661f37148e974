//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::{CONTROLLER_SCHEMA_VERSION, ControllerFile};
use crate::movement::MovementTuning;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse and validate the contents of a controller.ron file.
pub fn parse_controller_tuning(
    file_name: &str,
    contents: &str,
) -> Result<MovementTuning, ContentLoadError> {
    let data: ControllerFile = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    if data.schema_version != CONTROLLER_SCHEMA_VERSION {
        return Err(ContentLoadError {
            file: file_name.to_string(),
            message: format!(
                "Unsupported schema_version {} (expected {})",
                data.schema_version, CONTROLLER_SCHEMA_VERSION
            ),
        });
    }

    data.player.validate().map_err(|message| ContentLoadError {
        file: file_name.to_string(),
        message: format!("Invalid tuning: {}", message),
    })?;

    Ok(data.player)
}

/// Load the player's movement tuning from a controller.ron file.
pub fn load_controller_tuning(path: &Path) -> Result<MovementTuning, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_controller_tuning(&file_name, &contents)
}
