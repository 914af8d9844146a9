//! API for builtin plugin registration and discovery
//!
//! Plugins use the `builtin!` macro to register a descriptor factory for
//! automatic discovery.

use crate::plugin::types::PluginDescriptor;
use inventory;

/// Entry for a builtin plugin in the dynamic registry
pub struct BuiltinPluginEntry {
    pub factory: fn() -> PluginDescriptor,
}

// Collect all builtin plugin entries
inventory::collect!(BuiltinPluginEntry);

/// Macro for registering builtin plugins
#[macro_export]
macro_rules! builtin {
    ($factory_expr:expr) => {
        inventory::submit!($crate::plugin::builtin::api::BuiltinPluginEntry {
            factory: $factory_expr
        });
    };
}

/// Descriptors of all registered builtin plugins
pub fn collect_builtin_descriptors() -> Vec<PluginDescriptor> {
    inventory::iter::<BuiltinPluginEntry>()
        .map(|entry| (entry.factory)())
        .collect()
}
