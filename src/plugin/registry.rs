//! Plugin Registry
//!
//! Maps plugin ids to descriptors. The process-wide registry is assembled
//! once, on first use, from every descriptor submitted with `builtin!`.

use crate::plugin::builtin::api::collect_builtin_descriptors;
use crate::plugin::error::{PluginError, PluginResult};
use crate::plugin::types::{PluginDescriptor, PluginId};
use once_cell::sync::OnceCell;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct PluginRegistry {
    descriptors: BTreeMap<PluginId, PluginDescriptor>,
}

static GLOBAL: OnceCell<PluginRegistry> = OnceCell::new();

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in plugin
    pub fn with_builtins() -> PluginResult<Self> {
        let mut registry = Self::new();
        for descriptor in collect_builtin_descriptors() {
            registry.register(descriptor)?;
        }
        Ok(registry)
    }

    /// The process-wide registry, built on first access
    pub fn global() -> PluginResult<&'static PluginRegistry> {
        GLOBAL.get_or_try_init(|| {
            let registry = Self::with_builtins()?;
            log::debug!("Plugin registry holds {} plugin(s)", registry.len());
            Ok(registry)
        })
    }

    pub fn register(&mut self, descriptor: PluginDescriptor) -> PluginResult<()> {
        if !descriptor.id.is_valid() {
            return Err(PluginError::InvalidId {
                id: descriptor.id.to_string(),
                reason: "expected dot-separated lowercase segments".to_string(),
            });
        }
        if self.descriptors.contains_key(&descriptor.id) {
            return Err(PluginError::DuplicateId {
                id: descriptor.id.to_string(),
            });
        }
        self.descriptors.insert(descriptor.id.clone(), descriptor);
        Ok(())
    }

    /// Look up by exact id
    pub fn resolve(&self, id: &str) -> PluginResult<&PluginDescriptor> {
        self.descriptors
            .get(id)
            .ok_or_else(|| PluginError::UnknownPlugin { id: id.to_string() })
    }

    /// Look up by id or by short name
    pub fn resolve_name(&self, name: &str) -> PluginResult<&PluginDescriptor> {
        self.resolve(name).or_else(|_| {
            self.descriptors
                .values()
                .find(|descriptor| descriptor.name == name)
                .ok_or_else(|| PluginError::UnknownPlugin {
                    id: name.to_string(),
                })
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.resolve(id).is_ok()
    }

    /// All descriptors, ordered by id
    pub fn descriptors(&self) -> impl Iterator<Item = &PluginDescriptor> {
        self.descriptors.values()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
