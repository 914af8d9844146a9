//! DVT Eclipse IDE plugin

use crate::core::naming::Names;
use crate::plugin::builtin::svunit::{SvUnitPlugin, TEST_SOURCE_SET};
use crate::plugin::builtin::{base, Plugin};
use crate::plugin::error::PluginResult;
use crate::plugin::types::{PluginDescriptor, PluginId};
use crate::project::api::{BuildUnit, MAIN_SOURCE_SET};
use crate::sourceset::api::ExtensionName;
use crate::task::api::{ExtensionRef, InputRole, InputSource, Task, TaskAction, Tool};

pub const DVT_TASK: &str = "dvt";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DvtPlugin;

impl DvtPlugin {
    pub const ID: &'static str = "com.verificationgentleman.gradle.hdvl.dvt";

    pub fn descriptor() -> PluginDescriptor {
        PluginDescriptor {
            id: PluginId::from_static(Self::ID),
            name: "dvt",
            display_name: "Plugin for DVT IDE support",
            description: "A plugin that creates DVT projects from HDVL sources",
            factory: || Plugin::Dvt(DvtPlugin),
        }
    }

    pub(crate) fn apply(&self, unit: &mut BuildUnit) -> PluginResult<()> {
        base::ensure_applied(unit)?;
        let full_args = Names::of(MAIN_SOURCE_SET).gen_full_args_file_task(Tool::Xrun.as_ref());
        let task = Task::new(DVT_TASK, TaskAction::GenerateDvtProject)
            .with_description("Generates the DVT project files.")
            .with_output(unit.project_dir().join(".dvt").join("default.build"))
            .with_input(InputRole::ArgsFile, InputSource::TaskOutput(full_args));
        unit.register_task(task)?;
        unit.after_evaluate(include_tests);
        Ok(())
    }
}

/// With SVUnit applied, the IDE also sees the unit tests
fn include_tests(unit: &mut BuildUnit) -> PluginResult<()> {
    if !unit.has_plugin(SvUnitPlugin::ID) {
        return Ok(());
    }
    let tests = ExtensionRef::new(TEST_SOURCE_SET, ExtensionName::SV);
    let working_dir = unit.build_dir().join("dvt").join("svunit");
    unit.configure_task(DVT_TASK, |task| {
        task.set_input(InputRole::TestsRoot, InputSource::ExtensionDirs(tests.clone()));
        task.set_input(InputRole::TestSource, InputSource::Extension(tests));
        task.set_input(InputRole::WorkingDir, InputSource::Paths(vec![working_dir]));
    })
}

crate::builtin!(DvtPlugin::descriptor);
