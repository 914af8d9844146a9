//! C plugin: DPI sources compiled alongside SystemVerilog

use crate::core::naming::Names;
use crate::plugin::builtin::{base, ensure_systemverilog, Plugin};
use crate::plugin::error::PluginResult;
use crate::plugin::types::{PluginDescriptor, PluginId};
use crate::project::api::BuildUnit;
use crate::sourceset::api::{ExtensionConvention, ExtensionName};
use crate::task::api::{ExtensionRef, InputRole, InputSource, Tool};
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CPlugin;

impl CPlugin {
    pub const ID: &'static str = "com.verificationgentleman.gradle.hdvl.c";

    pub fn descriptor() -> PluginDescriptor {
        PluginDescriptor {
            id: PluginId::from_static(Self::ID),
            name: "c",
            display_name: "Plugin for C support in HDL simulators",
            description: "A plugin that adds support for compiling and running C code in HDL simulators through the DPI",
            factory: || Plugin::C(CPlugin),
        }
    }

    pub(crate) fn apply(&self, unit: &mut BuildUnit) -> PluginResult<()> {
        ensure_systemverilog(unit)?;
        base::ensure_applied(unit)?;
        unit.add_extension_convention(ExtensionConvention {
            name: ExtensionName::C,
            display_name: "C source",
            dir: "c",
            include: Some("**/*.c"),
        })?;
        unit.all_source_sets(bind_c_inputs)
    }
}

fn bind_c_inputs(unit: &mut BuildUnit, source_set: &str) -> PluginResult<()> {
    let c = ExtensionRef::new(source_set, ExtensionName::C);
    let names = Names::of(source_set);
    for tool in Tool::iter() {
        let c = c.clone();
        unit.configure_task(&names.gen_args_file_task(tool.as_ref()), |task| {
            task.set_input(InputRole::CSource, InputSource::Extension(c))
        })?;
    }
    Ok(())
}

crate::builtin!(CPlugin::descriptor);
