pub mod defaults;
pub mod settings;

pub use settings::{DEFAULT_LINE_LENGTH, FormatSettings, IndentKind};

use crate::error::{FormatError, FormatResult};
use std::fs;
use std::path::Path;

/// Configuration file discovered in the working directory when no explicit
/// path is given.
pub const CONFIG_FILE_NAME: &str = ".orikaeshi.toml";

/// Load settings from an explicit path, or from [`CONFIG_FILE_NAME`] in the
/// current directory when present, or the defaults otherwise.
///
/// Validation happens here so the engine only ever sees well-formed
/// settings.
pub fn load_settings(explicit: Option<&Path>) -> FormatResult<FormatSettings> {
    match explicit {
        Some(path) => read_settings_file(path),
        None => {
            let discovered = Path::new(CONFIG_FILE_NAME);
            if discovered.is_file() {
                read_settings_file(discovered)
            } else {
                Ok(FormatSettings::default())
            }
        }
    }
}

fn read_settings_file(path: &Path) -> FormatResult<FormatSettings> {
    let text = fs::read_to_string(path)
        .map_err(|e| FormatError::config(format!("{}: {}", path.display(), e)))?;
    let settings: FormatSettings = toml::from_str(&text)
        .map_err(|e| FormatError::config(format!("{}: {}", path.display(), e)))?;
    validate(&settings).map_err(|e| FormatError::config(format!("{}: {}", path.display(), e)))?;
    Ok(settings)
}

/// Check the shape constraints the engine assumes.
pub fn validate(settings: &FormatSettings) -> Result<(), String> {
    if settings.line_length == 0 {
        return Err("line-length must be a positive integer".to_string());
    }
    Ok(())
}
