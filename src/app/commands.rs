//! Subcommand implementations

use crate::app::cli::config::{BuildFile, ConfigError};
use crate::app::error::AppResult;
use crate::core::styles::StyleRole;
use crate::plugin::api::PluginRegistry;
use crate::project::api::BuildUnit;
use crate::sourceset::api::ExtensionName;
use crate::task::api::{ExecutionPlan, Executor, RunSummary};
use prettytable::{format, Cell, Row, Table};
use std::path::{Path, PathBuf};

fn cell(text: &str, role: StyleRole, use_color: bool) -> Cell {
    let cell = Cell::new(text);
    match role.to_prettytable_spec() {
        Some(spec) if use_color => cell.style_spec(spec),
        _ => cell,
    }
}

fn titles(names: &[&str], use_color: bool) -> Row {
    Row::new(
        names
            .iter()
            .map(|name| cell(name, StyleRole::Header, use_color))
            .collect(),
    )
}

pub fn plugins_table(registry: &PluginRegistry, use_color: bool) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);
    table.set_titles(titles(&["Id", "Name", "Plugin", "Description"], use_color));
    for descriptor in registry.descriptors() {
        table.add_row(Row::new(vec![
            cell(descriptor.id.as_str(), StyleRole::Id, use_color),
            cell(descriptor.name, StyleRole::Name, use_color),
            Cell::new(descriptor.display_name),
            Cell::new(descriptor.description),
        ]));
    }
    table
}

pub fn tasks_table(plan: &ExecutionPlan, use_color: bool) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);
    table.set_titles(titles(&["Task", "Depends on", "Description"], use_color));
    for task in plan.tasks() {
        table.add_row(Row::new(vec![
            cell(task.name(), StyleRole::Task, use_color),
            cell(&task.dependencies().join(", "), StyleRole::Dim, use_color),
            Cell::new(task.description()),
        ]));
    }
    table
}

/// Build file next to the project, configured and ready to finalize
pub fn load_unit(build_file: &Path, project_dir: &Path) -> AppResult<BuildUnit> {
    Ok(BuildFile::load(build_file)?.configure(project_dir)?)
}

pub fn list_plugins(use_color: bool) -> AppResult<()> {
    let registry = PluginRegistry::global()?;
    plugins_table(registry, use_color).printstd();
    Ok(())
}

pub fn list_tasks(unit: BuildUnit, use_color: bool) -> AppResult<()> {
    let plan = unit.finalize()?;
    tasks_table(&plan, use_color).printstd();
    Ok(())
}

pub fn extension_files(
    unit: &BuildUnit,
    source_set: &str,
    extension: &str,
) -> AppResult<Vec<PathBuf>> {
    let files = unit
        .source_set(source_set)
        .and_then(|set| set.extension(&ExtensionName::new(extension)))
        .and_then(|ext| ext.resolve_ordered())
        .map_err(ConfigError::from)?;
    Ok(files)
}

pub fn list_files(unit: &BuildUnit, source_set: &str, extension: &str) -> AppResult<()> {
    for file in extension_files(unit, source_set, extension)? {
        println!("{}", file.display());
    }
    Ok(())
}

pub fn print_summary(summary: &RunSummary, use_color: bool) {
    for name in &summary.executed {
        println!("{}", StyleRole::Task.paint(name, use_color));
    }
}

pub async fn run_tasks(unit: BuildUnit, tasks: &[String]) -> AppResult<RunSummary> {
    let plan = unit.finalize()?;
    let summary = Executor::new().run(&plan, tasks).await?;
    log::info!("{} task(s) executed", summary.executed.len());
    Ok(summary)
}
