//! Public API for the plugin system
//!
//! External modules should import from here rather than directly from
//! internal modules.

// Error handling
pub use crate::plugin::error::{PluginError, PluginResult};

// Identity and registration
pub use crate::plugin::registry::PluginRegistry;
pub use crate::plugin::types::{PluginDescriptor, PluginId, ID_PREFIX};

// Built-in plugins
pub use crate::plugin::builtin::dvt::DVT_TASK;
pub use crate::plugin::builtin::svunit::TEST_SOURCE_SET;
pub use crate::plugin::builtin::svunit_build::WRITE_COMPILE_SPEC_TASK;
pub use crate::plugin::builtin::svunit_injector::INJECT_TASK;
pub use crate::plugin::builtin::{
    CPlugin, DvtPlugin, Plugin, SvUnitBuildInjectorPlugin, SvUnitBuildPlugin, SvUnitPlugin,
    SystemVerilogPlugin,
};
