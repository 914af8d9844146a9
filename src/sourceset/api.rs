//! Public API for source sets and their extensions

pub use crate::sourceset::container::{ExtensionConvention, SourceSet, SourceSetContainer};
pub use crate::sourceset::error::{ExtensionError, ExtensionResult};
pub use crate::sourceset::extension::{ExtensionName, SourceSetExtension};
