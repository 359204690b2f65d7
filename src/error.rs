use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for pomgen operations
#[derive(Error, Debug)]
pub enum PomgenError {
    /// IO error when listing directories or writing output
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Scan directory does not exist or is not a directory
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Output fragment could not be written or replaced
    #[error("Cannot write output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Marker is empty, which would match every entry and strip nothing
    #[error("Marker substring must not be empty")]
    EmptyMarker,

    /// `WalkDir` error during recursive scanning
    #[error("Directory traversal error: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// Glob compilation error for exclude patterns
    #[error("Glob error: {0}")]
    Glob(#[from] globset::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PomgenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PomgenError::DirectoryNotFound {
            path: PathBuf::from("/test/lib"),
        };
        assert_eq!(format!("{err}"), "Directory not found: /test/lib");

        let err = PomgenError::OutputWrite {
            path: PathBuf::from("pom_temp.xml"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(format!("{err}").contains("pom_temp.xml"));
        assert!(format!("{err}").contains("denied"));

        let err = PomgenError::EmptyMarker;
        assert_eq!(format!("{err}"), "Marker substring must not be empty");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "test");
        let err: PomgenError = io_err.into();
        assert!(matches!(err, PomgenError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<String>("invalid").unwrap_err();
        let err: PomgenError = json_err.into();
        assert!(matches!(err, PomgenError::Json(_)));
    }
}
