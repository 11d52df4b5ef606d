use std::{fmt, path::PathBuf};

#[derive(Debug)]
pub enum SettingsError {
    FileNotFound(PathBuf),
    IoError(PathBuf, std::io::Error),
    MalformedSideConfig(PathBuf, String),
    InvalidArgument(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::FileNotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            SettingsError::IoError(path, error) => write!(f, "{}: {}", path.display(), error),
            SettingsError::MalformedSideConfig(path, reason) => {
                write!(f, "Failed to read config file {}: {}", path.display(), reason)
            }
            SettingsError::InvalidArgument(reason) => write!(f, "invalid argument: {}", reason),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::IoError(_, error) => Some(error),
            _ => None,
        }
    }
}

/// Maps an io error on `path`, keeping "not found" distinct from other failures.
pub(crate) fn from_io(path: &std::path::Path, error: std::io::Error) -> SettingsError {
    if error.kind() == std::io::ErrorKind::NotFound {
        SettingsError::FileNotFound(path.to_path_buf())
    } else {
        SettingsError::IoError(path.to_path_buf(), error)
    }
}
