//! Public API for file collections

pub use crate::fileset::collection::{FileCollectionSet, FileOp, FileOrder};
pub use crate::fileset::error::{FileSetError, FileSetResult};
