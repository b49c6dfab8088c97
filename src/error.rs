use std::fmt;

/// Errors produced while configuring, running or exporting a simulation
#[derive(Debug)]
pub enum SimError {
    /// IO operation failed
    Io(std::io::Error),
    /// Configuration values rejected by validation
    InvalidConfig(String),
    /// Configuration file could not be parsed
    ConfigParse(String),
    /// Frame export failed
    Export(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Io(err) => write!(f, "IO error: {}", err),
            SimError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            SimError::ConfigParse(msg) => write!(f, "Config parse error: {}", msg),
            SimError::Export(msg) => write!(f, "Export failed: {}", msg),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::Io(err)
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::Export(err.to_string())
    }
}

impl From<bincode::Error> for SimError {
    fn from(err: bincode::Error) -> Self {
        SimError::Export(err.to_string())
    }
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, SimError>;
