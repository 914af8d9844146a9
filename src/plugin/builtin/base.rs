//! Behaviour shared by every plugin
//!
//! Applied implicitly, at most once per unit: creates the `main` source set
//! and gives every source set an args-file task per tool. `main` also gets a
//! full args-file task that pulls in dependency projects.

use crate::core::naming::Names;
use crate::plugin::error::PluginResult;
use crate::project::api::{BuildUnit, MAIN_SOURCE_SET};
use crate::task::api::{InputRole, InputSource, Task, TaskAction, Tool};
use std::path::PathBuf;
use strum::IntoEnumIterator;

pub(crate) fn ensure_applied(unit: &mut BuildUnit) -> PluginResult<()> {
    if !unit.mark_base_applied() {
        return Ok(());
    }
    unit.get_or_create_source_set(MAIN_SOURCE_SET)?;
    unit.all_source_sets(register_args_file_tasks)?;
    unit.after_evaluate(bind_dependency_args_files);
    Ok(())
}

fn register_args_file_tasks(unit: &mut BuildUnit, source_set: &str) -> PluginResult<()> {
    let names = Names::of(source_set);
    for tool in Tool::iter() {
        let gen_name = names.gen_args_file_task(tool.as_ref());
        let gen = Task::new(&gen_name, TaskAction::GenArgsFile { tool })
            .with_description(format!(
                "Generates an argument file for the {} source code.",
                source_set
            ))
            .with_output(unit.build_dir().join(names.args_file_name(tool.as_ref())));
        unit.register_task(gen)?;

        if source_set == MAIN_SOURCE_SET {
            let full = Task::new(
                names.gen_full_args_file_task(tool.as_ref()),
                TaskAction::GenFullArgsFile,
            )
            .with_description(format!(
                "Generates an argument file for the {} source code and its dependencies.",
                source_set
            ))
            .with_output(unit.build_dir().join(names.full_args_file_name(tool.as_ref())))
            .with_input(InputRole::ArgsFile, InputSource::TaskOutput(gen_name));
            unit.register_task(full)?;
        }
    }
    Ok(())
}

fn bind_dependency_args_files(unit: &mut BuildUnit) -> PluginResult<()> {
    if unit.dependencies().is_empty() {
        return Ok(());
    }
    let names = Names::of(MAIN_SOURCE_SET);
    for tool in Tool::iter() {
        let files: Vec<PathBuf> = unit
            .dependencies()
            .iter()
            .map(|dir| dir.join("build").join(names.args_file_name(tool.as_ref())))
            .collect();
        unit.configure_task(&names.gen_full_args_file_task(tool.as_ref()), |task| {
            task.set_input(InputRole::DependencyArgsFiles, InputSource::Paths(files))
        })?;
    }
    Ok(())
}
