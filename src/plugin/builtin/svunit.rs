//! SVUnit plugin
//!
//! Adds the `test` source set, the `toolChains` project extension and one
//! `testWith<Tool>` task per simulator. The tasks run `runSVUnit` against
//! the full `main` args file and the `test` args file.

use crate::core::naming::{test_task_name, Names};
use crate::plugin::builtin::{base, ensure_systemverilog, Plugin};
use crate::plugin::error::PluginResult;
use crate::plugin::types::{PluginDescriptor, PluginId};
use crate::project::api::{BuildUnit, MAIN_SOURCE_SET};
use crate::sourceset::api::ExtensionName;
use crate::task::api::{ExtensionRef, InputRole, InputSource, Task, TaskAction, Tool};
use strum::IntoEnumIterator;

pub const TEST_SOURCE_SET: &str = "test";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SvUnitPlugin;

impl SvUnitPlugin {
    pub const ID: &'static str = "com.verificationgentleman.gradle.hdvl.svunit";

    pub fn descriptor() -> PluginDescriptor {
        PluginDescriptor {
            id: PluginId::from_static(Self::ID),
            name: "svunit",
            display_name: "Plugin for SVUnit support",
            description: "A plugin that adds testing of HDVL projects with SVUnit",
            factory: || Plugin::SvUnit(SvUnitPlugin),
        }
    }

    pub(crate) fn apply(&self, unit: &mut BuildUnit) -> PluginResult<()> {
        ensure_systemverilog(unit)?;
        base::ensure_applied(unit)?;
        unit.get_or_create_source_set(TEST_SOURCE_SET)?;
        unit.install_tool_chains();

        let main = Names::of(MAIN_SOURCE_SET);
        let test = Names::of(TEST_SOURCE_SET);
        let tests_root = ExtensionRef::new(TEST_SOURCE_SET, ExtensionName::SV);
        for tool in Tool::iter() {
            let task = Task::new(
                test_task_name(tool.as_ref()),
                TaskAction::RunSvunit {
                    tool,
                    extra_args: Vec::new(),
                },
            )
            .with_description(format!("Runs the unit tests using {}.", tool))
            .with_output(unit.build_dir().join("svunit").join(tool.as_ref()))
            .with_input(
                InputRole::MainArgsFile,
                InputSource::TaskOutput(main.gen_full_args_file_task(tool.as_ref())),
            )
            .with_input(
                InputRole::TestArgsFile,
                InputSource::TaskOutput(test.gen_args_file_task(tool.as_ref())),
            )
            .with_input(
                InputRole::TestsRoot,
                InputSource::ExtensionDirs(tests_root.clone()),
            );
            unit.register_task(task)?;
        }

        unit.after_evaluate(bind_settings);
        Ok(())
    }
}

/// Copy `toolChains` arguments and the SVUnit root into the test tasks
fn bind_settings(unit: &mut BuildUnit) -> PluginResult<()> {
    let args = unit
        .tool_chains()
        .map(|chains| chains.run_svunit.args().to_vec())
        .unwrap_or_default();
    let root = unit.svunit_root().map(|root| root.to_path_buf());

    for tool in Tool::iter() {
        let args = args.clone();
        let root = root.clone();
        unit.configure_task(&test_task_name(tool.as_ref()), move |task| {
            if let TaskAction::RunSvunit { extra_args, .. } = task.action_mut() {
                *extra_args = args;
            }
            if let Some(root) = root {
                task.set_input(InputRole::SvunitRoot, InputSource::Paths(vec![root]));
            }
        })?;
    }
    Ok(())
}

crate::builtin!(SvUnitPlugin::descriptor);
