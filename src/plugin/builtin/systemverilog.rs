//! SystemVerilog plugin
//!
//! Adds `sv` (`src/<set>/sv`, `**/*.sv`) and `svHeaders`
//! (`src/<set>/sv_headers`) to every source set and binds them into that
//! set's args-file tasks.

use crate::core::naming::Names;
use crate::plugin::builtin::{base, Plugin};
use crate::plugin::error::PluginResult;
use crate::plugin::types::{PluginDescriptor, PluginId};
use crate::project::api::BuildUnit;
use crate::sourceset::api::{ExtensionConvention, ExtensionName};
use crate::task::api::{ExtensionRef, InputRole, InputSource, Tool};
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemVerilogPlugin;

impl SystemVerilogPlugin {
    pub const ID: &'static str = "com.verificationgentleman.gradle.hdvl.systemverilog";

    pub fn descriptor() -> PluginDescriptor {
        PluginDescriptor {
            id: PluginId::from_static(Self::ID),
            name: "systemverilog",
            display_name: "Plugin for SystemVerilog support in HDL simulators",
            description: "A plugin that adds support for compiling and running SystemVerilog code in HDL simulators",
            factory: || Plugin::SystemVerilog(SystemVerilogPlugin),
        }
    }

    pub(crate) fn apply(&self, unit: &mut BuildUnit) -> PluginResult<()> {
        base::ensure_applied(unit)?;
        unit.add_extension_convention(ExtensionConvention {
            name: ExtensionName::SV,
            display_name: "SystemVerilog source",
            dir: "sv",
            include: Some("**/*.sv"),
        })?;
        unit.add_extension_convention(ExtensionConvention {
            name: ExtensionName::SV_HEADERS,
            display_name: "SystemVerilog headers",
            dir: "sv_headers",
            include: None,
        })?;
        unit.all_source_sets(bind_sv_inputs)
    }
}

fn bind_sv_inputs(unit: &mut BuildUnit, source_set: &str) -> PluginResult<()> {
    let sv = ExtensionRef::new(source_set, ExtensionName::SV);
    let headers = ExtensionRef::new(source_set, ExtensionName::SV_HEADERS);
    let names = Names::of(source_set);
    for tool in Tool::iter() {
        let (sv, headers) = (sv.clone(), headers.clone());
        unit.configure_task(&names.gen_args_file_task(tool.as_ref()), |task| {
            task.set_input(InputRole::SvSource, InputSource::Extension(sv.clone()));
            task.set_input(InputRole::SvPrivateIncludeDirs, InputSource::ExtensionDirs(sv));
            task.set_input(
                InputRole::SvExportedHeaderDirs,
                InputSource::ExtensionDirs(headers),
            );
        })?;
    }
    Ok(())
}

crate::builtin!(SystemVerilogPlugin::descriptor);
