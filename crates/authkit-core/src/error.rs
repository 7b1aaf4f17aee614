//! Error types for template discovery, copying and scaffolding

use std::io;
use std::path::PathBuf;

/// Result alias used throughout the core library
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure the core can report. Nothing is retried or recovered locally.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The templates root could not be listed
    #[error("could not discover templates in {}", .path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("template '{0}' not found")]
    NotFound(String),

    #[error("no templates found in {}", .0.display())]
    NoTemplates(PathBuf),

    #[error("invalid selection '{input}': expected a number between 1 and {count}")]
    InvalidSelection { input: String, count: usize },

    #[error("project name cannot be empty")]
    EmptyName,

    #[error("directory '{}' already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error("destination directory '{}' already exists and is not empty", .0.display())]
    DestinationNotEmpty(PathBuf),

    /// A walk, read or write failed part-way; files already written stay on disk
    #[error("failed to copy {}", .path.display())]
    Copy {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("required tool '{tool}' not found in PATH")]
    ToolNotFound { tool: String },

    /// Copying the selected template into the new project failed
    #[error("failed to copy template")]
    Scaffold(#[source] Box<Error>),

    #[error("failed to parse {}", .path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Terminal or working-directory I/O outside of template copying
    #[error("I/O error")]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn copy(path: impl Into<PathBuf>, source: impl Into<io::Error>) -> Self {
        Error::Copy {
            path: path.into(),
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_io_error_message_is_neutral() {
        let err = Error::from(io::Error::new(io::ErrorKind::NotFound, "cwd removed"));
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "I/O error");
        assert_eq!(err.source().unwrap().to_string(), "cwd removed");
    }

    #[test]
    fn test_scaffold_error_keeps_cause() {
        let cause = Error::DestinationNotEmpty(PathBuf::from("app"));
        let err = Error::Scaffold(Box::new(cause));
        assert!(err.source().unwrap().to_string().contains("not empty"));
    }
}
