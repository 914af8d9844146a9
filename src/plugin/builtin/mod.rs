//! Built-in Plugin Implementations
//!
//! The plugin set is closed: every plugin that ships with hdvl is a variant
//! of [`Plugin`] and registers its descriptor with `builtin!`.

pub(crate) mod api;
pub(crate) mod base;
pub(crate) mod c;
pub(crate) mod dvt;
pub(crate) mod svunit;
pub(crate) mod svunit_build;
pub(crate) mod svunit_injector;
pub(crate) mod systemverilog;

use crate::plugin::error::{PluginError, PluginResult};
use crate::plugin::types::PluginId;
use crate::project::api::{BuildUnit, MAIN_SOURCE_SET};
use crate::sourceset::api::ExtensionName;

pub use c::CPlugin;
pub use dvt::DvtPlugin;
pub use svunit::SvUnitPlugin;
pub use svunit_build::SvUnitBuildPlugin;
pub use svunit_injector::SvUnitBuildInjectorPlugin;
pub use systemverilog::SystemVerilogPlugin;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plugin {
    SystemVerilog(SystemVerilogPlugin),
    C(CPlugin),
    SvUnit(SvUnitPlugin),
    SvUnitBuild(SvUnitBuildPlugin),
    SvUnitBuildInjector(SvUnitBuildInjectorPlugin),
    Dvt(DvtPlugin),
}

impl Plugin {
    pub fn id(&self) -> PluginId {
        PluginId::from_static(match self {
            Plugin::SystemVerilog(_) => SystemVerilogPlugin::ID,
            Plugin::C(_) => CPlugin::ID,
            Plugin::SvUnit(_) => SvUnitPlugin::ID,
            Plugin::SvUnitBuild(_) => SvUnitBuildPlugin::ID,
            Plugin::SvUnitBuildInjector(_) => SvUnitBuildInjectorPlugin::ID,
            Plugin::Dvt(_) => DvtPlugin::ID,
        })
    }

    pub(crate) fn apply(&self, unit: &mut BuildUnit) -> PluginResult<()> {
        match self {
            Plugin::SystemVerilog(plugin) => plugin.apply(unit),
            Plugin::C(plugin) => plugin.apply(unit),
            Plugin::SvUnit(plugin) => plugin.apply(unit),
            Plugin::SvUnitBuild(plugin) => plugin.apply(unit),
            Plugin::SvUnitBuildInjector(plugin) => plugin.apply(unit),
            Plugin::Dvt(plugin) => plugin.apply(unit),
        }
    }
}

/// Apply SystemVerilog first unless the unit already has it
pub(crate) fn ensure_systemverilog(unit: &mut BuildUnit) -> PluginResult<()> {
    if unit.has_plugin(SystemVerilogPlugin::ID) {
        return Ok(());
    }
    unit.apply_plugin(Plugin::SystemVerilog(SystemVerilogPlugin))
}

/// Fail unless `main` already has the `sv` extension
pub(crate) fn require_main_sv(unit: &BuildUnit, plugin: &str) -> PluginResult<()> {
    let has_sv = unit
        .source_set(MAIN_SOURCE_SET)
        .map(|set| set.has_extension(&ExtensionName::SV))
        .unwrap_or(false);
    if has_sv {
        Ok(())
    } else {
        Err(PluginError::MissingDependency {
            plugin: plugin.to_string(),
            requirement: format!(
                "the 'sv' extension on source set '{}'; apply '{}' first",
                MAIN_SOURCE_SET,
                SystemVerilogPlugin::ID
            ),
        })
    }
}
