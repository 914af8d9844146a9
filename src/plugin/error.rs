//! Plugin Error Handling
//!
//! Errors raised while registering, resolving and applying plugins. All of
//! them are configuration errors: the build file (or the plugin set) has to
//! change before the build unit can be configured.

use crate::core::error_handling::ContextualError;
use crate::sourceset::api::ExtensionError;
use crate::task::api::TaskError;
use std::fmt;

/// Result type alias for plugin operations
pub type PluginResult<T> = std::result::Result<T, PluginError>;

#[derive(Debug)]
pub enum PluginError {
    /// Two descriptors share one id
    DuplicateId { id: String },

    /// No descriptor with this id or short name
    UnknownPlugin { id: String },

    /// Id does not follow the dotted lowercase convention
    InvalidId { id: String, reason: String },

    /// A plugin was applied before something it builds on
    MissingDependency { plugin: String, requirement: String },

    /// Re-application rejected by the build unit's policy
    AlreadyApplied { plugin: String, unit: String },

    /// A failure while a specific plugin was being applied
    ApplyFailed {
        plugin: String,
        source: Box<PluginError>,
    },

    Extension(ExtensionError),

    Task(TaskError),
}

impl PluginError {
    /// Attribute an error raised during `plugin`'s application
    pub(crate) fn in_plugin(self, plugin: &str) -> Self {
        match self {
            PluginError::Extension(_) | PluginError::Task(_) => PluginError::ApplyFailed {
                plugin: plugin.to_string(),
                source: Box::new(self),
            },
            other => other,
        }
    }
}

impl fmt::Display for PluginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PluginError::DuplicateId { id } => {
                write!(f, "Plugin id '{}' is already registered", id)
            }
            PluginError::UnknownPlugin { id } => write!(f, "Unknown plugin '{}'", id),
            PluginError::InvalidId { id, reason } => {
                write!(f, "Invalid plugin id '{}': {}", id, reason)
            }
            PluginError::MissingDependency {
                plugin,
                requirement,
            } => write!(f, "Plugin '{}' requires {}", plugin, requirement),
            PluginError::AlreadyApplied { plugin, unit } => {
                write!(f, "Plugin '{}' is already applied to '{}'", plugin, unit)
            }
            PluginError::ApplyFailed { plugin, source } => {
                write!(f, "Failed to apply plugin '{}': {}", plugin, source)
            }
            PluginError::Extension(e) => write!(f, "{}", e),
            PluginError::Task(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for PluginError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PluginError::ApplyFailed { source, .. } => Some(source.as_ref()),
            PluginError::Extension(e) => Some(e),
            PluginError::Task(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ExtensionError> for PluginError {
    fn from(e: ExtensionError) -> Self {
        PluginError::Extension(e)
    }
}

impl From<TaskError> for PluginError {
    fn from(e: TaskError) -> Self {
        PluginError::Task(e)
    }
}

impl ContextualError for PluginError {
    fn is_user_actionable(&self) -> bool {
        match self {
            PluginError::ApplyFailed { source, .. } => source.is_user_actionable(),
            PluginError::Extension(e) => e.is_user_actionable(),
            PluginError::Task(e) => e.is_user_actionable(),
            _ => true,
        }
    }

    fn user_message(&self) -> Option<String> {
        self.is_user_actionable().then(|| self.to_string())
    }
}
