//! Source Set Error Types

use crate::core::error_handling::ContextualError;
use crate::fileset::api::FileSetError;

#[derive(Debug, thiserror::Error)]
pub enum ExtensionError {
    #[error("Source set '{source_set}' already has an extension named '{extension}'")]
    DuplicateExtensionName {
        source_set: String,
        extension: String,
    },

    #[error("Source set '{source_set}' has no extension named '{extension}'")]
    UnknownExtension {
        source_set: String,
        extension: String,
    },

    #[error("Unknown source set '{source_set}'")]
    UnknownSourceSet { source_set: String },

    #[error("Extension '{extension}' of source set '{source_set}': {source}")]
    FileSet {
        source_set: String,
        extension: String,
        #[source]
        source: FileSetError,
    },
}

impl ContextualError for ExtensionError {
    fn is_user_actionable(&self) -> bool {
        match self {
            ExtensionError::FileSet { source, .. } => source.is_user_actionable(),
            _ => true,
        }
    }

    fn user_message(&self) -> Option<String> {
        self.is_user_actionable().then(|| self.to_string())
    }
}

/// Result type for source set and extension operations
pub type ExtensionResult<T> = Result<T, ExtensionError>;
