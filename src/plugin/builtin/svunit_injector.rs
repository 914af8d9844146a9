//! Injects an hdvl build file into an SVUnit checkout
//!
//! Needs `writeCompileSpecFile` from the SVUnit build plugin. The build file
//! and a copy of the compile spec are written to the configured SVUnit root,
//! or to the project directory when none is set.

use crate::plugin::builtin::svunit_build::{SvUnitBuildPlugin, WRITE_COMPILE_SPEC_TASK};
use crate::plugin::builtin::Plugin;
use crate::plugin::error::{PluginError, PluginResult};
use crate::plugin::types::{PluginDescriptor, PluginId};
use crate::project::api::BuildUnit;
use crate::task::api::{InputRole, InputSource, Task, TaskAction};

pub const INJECT_TASK: &str = "injectSvunitBuild";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SvUnitBuildInjectorPlugin;

impl SvUnitBuildInjectorPlugin {
    pub const ID: &'static str = "com.verificationgentleman.gradle.hdvl.svunit-build-injector";

    pub fn descriptor() -> PluginDescriptor {
        PluginDescriptor {
            id: PluginId::from_static(Self::ID),
            name: "svunit-build-injector",
            display_name: "Plugin for injecting build Gradle into SVUnit itself",
            description: "A plugin that injects a Gradle build into SVUnit",
            factory: || Plugin::SvUnitBuildInjector(SvUnitBuildInjectorPlugin),
        }
    }

    pub(crate) fn apply(&self, unit: &mut BuildUnit) -> PluginResult<()> {
        if !unit.tasks().contains(WRITE_COMPILE_SPEC_TASK) {
            return Err(PluginError::MissingDependency {
                plugin: Self::ID.to_string(),
                requirement: format!(
                    "task '{}'; apply '{}' first",
                    WRITE_COMPILE_SPEC_TASK,
                    SvUnitBuildPlugin::ID
                ),
            });
        }

        let task = Task::new(INJECT_TASK, TaskAction::InjectBuildScript)
            .with_description("Injects the hdvl build file into the SVUnit checkout.")
            .with_input(
                InputRole::CompileSpec,
                InputSource::TaskOutput(WRITE_COMPILE_SPEC_TASK.to_string()),
            );
        unit.register_task(task)?;
        unit.after_evaluate(bind_target);
        Ok(())
    }
}

fn bind_target(unit: &mut BuildUnit) -> PluginResult<()> {
    let target = unit
        .svunit_root()
        .unwrap_or_else(|| unit.project_dir())
        .to_path_buf();
    unit.configure_task(INJECT_TASK, |task| {
        task.set_output(target.join("hdvl.toml"));
        task.set_input(InputRole::InjectTarget, InputSource::Paths(vec![target]));
    })
}

crate::builtin!(SvUnitBuildInjectorPlugin::descriptor);
