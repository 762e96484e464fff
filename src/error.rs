//! Application error type

use std::fmt;

use polyview_math::GeometryError;

use crate::config::ConfigError;

/// Anything that stops the viewer
#[derive(Debug)]
pub enum AppError {
    /// Configuration could not be loaded
    Config(ConfigError),
    /// Scene, camera or frame construction failed
    Geometry(GeometryError),
    /// Writing frame output failed
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "{}", e),
            AppError::Geometry(e) => write!(f, "Geometry error: {}", e),
            AppError::Io(e) => write!(f, "Output error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(e) => Some(e),
            AppError::Geometry(e) => Some(e),
            AppError::Io(e) => Some(e),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e)
    }
}

impl From<GeometryError> for AppError {
    fn from(e: GeometryError) -> Self {
        AppError::Geometry(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_error_display() {
        let err: AppError = GeometryError::InvalidDimension(0).into();
        assert!(err.to_string().starts_with("Geometry error: "));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_io_error_display() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into();
        assert_eq!(err.to_string(), "Output error: closed");
    }
}
