//! Building SVUnit itself as an hdvl project
//!
//! Points `main.sv` and `main.svHeaders` at SVUnit's `svunit_base` and
//! registers `writeCompileSpecFile`, which describes what to compile for
//! consumers of the checkout.

use crate::plugin::builtin::{require_main_sv, Plugin};
use crate::plugin::error::PluginResult;
use crate::plugin::types::{PluginDescriptor, PluginId};
use crate::project::api::{BuildUnit, MAIN_SOURCE_SET};
use crate::sourceset::api::ExtensionName;
use crate::task::api::{ExtensionRef, InputRole, InputSource, Task, TaskAction};

pub const WRITE_COMPILE_SPEC_TASK: &str = "writeCompileSpecFile";

const SVUNIT_BASE: &str = "svunit_base";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SvUnitBuildPlugin;

impl SvUnitBuildPlugin {
    pub const ID: &'static str = "com.verificationgentleman.gradle.hdvl.svunit-build";

    pub fn descriptor() -> PluginDescriptor {
        PluginDescriptor {
            id: PluginId::from_static(Self::ID),
            name: "svunit-build",
            display_name: "Plugin for building SVUnit itself as an HDVL project",
            description: "A plugin that builds SVUnit as an HDVL project",
            factory: || Plugin::SvUnitBuild(SvUnitBuildPlugin),
        }
    }

    pub(crate) fn apply(&self, unit: &mut BuildUnit) -> PluginResult<()> {
        require_main_sv(unit, Self::ID)?;

        let main = unit.source_set_mut(MAIN_SOURCE_SET)?;
        main.sv_mut()?.src_dir(SVUNIT_BASE);
        main.sv_headers_mut()?.src_dir(SVUNIT_BASE);

        let sv = ExtensionRef::new(MAIN_SOURCE_SET, ExtensionName::SV);
        let headers = ExtensionRef::new(MAIN_SOURCE_SET, ExtensionName::SV_HEADERS);
        let task = Task::new(WRITE_COMPILE_SPEC_TASK, TaskAction::WriteCompileSpec)
            .with_description("Writes the compile specification for SVUnit.")
            .with_output(unit.build_dir().join(".hdvl").join("compile-spec.json"))
            .with_input(InputRole::SvSource, InputSource::Extension(sv.clone()))
            .with_input(InputRole::SvPrivateIncludeDirs, InputSource::ExtensionDirs(sv))
            .with_input(
                InputRole::SvExportedHeaderDirs,
                InputSource::ExtensionDirs(headers),
            );
        unit.register_task(task)?;

        unit.after_evaluate(bind_c_sources);
        Ok(())
    }
}

/// The C plugin may be applied after this one
fn bind_c_sources(unit: &mut BuildUnit) -> PluginResult<()> {
    let has_c = unit.source_set(MAIN_SOURCE_SET)?.has_extension(&ExtensionName::C);
    if has_c {
        unit.configure_task(WRITE_COMPILE_SPEC_TASK, |task| {
            task.set_input(
                InputRole::CSource,
                InputSource::Extension(ExtensionRef::new(MAIN_SOURCE_SET, ExtensionName::C)),
            )
        })?;
    }
    Ok(())
}

crate::builtin!(SvUnitBuildPlugin::descriptor);
