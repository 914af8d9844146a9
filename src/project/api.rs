//! Public API for build units

pub use crate::project::extensions::{RunSvunitToolChain, ToolChains};
pub use crate::project::unit::{
    BuildUnit, DeferredAction, ReapplyPolicy, SourceSetHook, MAIN_SOURCE_SET,
};
