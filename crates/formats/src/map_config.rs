use std::fs;
use std::path::Path;

use layers::map_config::MapConfig;

use crate::error::FormatError;

/// Parses and validates a map configuration; omitted fields take defaults.
pub fn parse_map_config(payload: &str) -> Result<MapConfig, FormatError> {
    let config: MapConfig = serde_json::from_str(payload).map_err(FormatError::Parse)?;
    config.validate().map_err(FormatError::InvalidConfig)?;
    Ok(config)
}

pub fn load_map_config(path: impl AsRef<Path>) -> Result<MapConfig, FormatError> {
    let payload = fs::read_to_string(path.as_ref()).map_err(FormatError::Io)?;
    parse_map_config(&payload)
}
