//! File Collection Error Types

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FileSetError {
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed to walk '{}': {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to canonicalize '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl crate::core::error_handling::ContextualError for FileSetError {
    fn is_user_actionable(&self) -> bool {
        matches!(self, FileSetError::InvalidPattern { .. })
    }

    fn user_message(&self) -> Option<String> {
        match self {
            FileSetError::InvalidPattern { .. } => Some(self.to_string()),
            _ => None,
        }
    }
}

/// Result type for file collection operations
pub type FileSetResult<T> = Result<T, FileSetError>;
