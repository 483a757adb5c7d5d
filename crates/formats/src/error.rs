use std::fmt;

use layers::map_config::MapConfigError;

#[derive(Debug)]
pub enum FormatError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    NotFeatureCollection,
    InvalidConfig(MapConfigError),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Io(err) => write!(f, "I/O error: {err}"),
            FormatError::Parse(err) => write!(f, "JSON parse error: {err}"),
            FormatError::NotFeatureCollection => {
                write!(f, "expected a GeoJSON FeatureCollection")
            }
            FormatError::InvalidConfig(err) => write!(f, "invalid map config: {err}"),
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormatError::Io(err) => Some(err),
            FormatError::Parse(err) => Some(err),
            FormatError::NotFeatureCollection => None,
            FormatError::InvalidConfig(err) => Some(err),
        }
    }
}
