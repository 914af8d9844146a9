//! Built-in task actions

pub(crate) mod args_file;
pub(crate) mod compile_spec;
pub(crate) mod dvt;
pub(crate) mod inject;
pub(crate) mod svunit;

use crate::task::error::{TaskError, TaskResult};
use crate::task::plan::{ExecutionPlan, ResolvedTask};
use crate::task::types::TaskAction;
use std::path::Path;

pub(crate) async fn run(plan: &ExecutionPlan, task: &ResolvedTask) -> TaskResult<()> {
    match task.action() {
        TaskAction::GenArgsFile { tool } => args_file::generate(task, *tool).await,
        TaskAction::GenFullArgsFile => args_file::generate_full(task).await,
        TaskAction::WriteCompileSpec => compile_spec::write(plan, task).await,
        TaskAction::GenerateDvtProject => dvt::generate(task).await,
        TaskAction::RunSvunit { tool, extra_args } => svunit::run(task, *tool, extra_args).await,
        TaskAction::InjectBuildScript => inject::inject(task).await,
    }
}

/// Write `contents` to `path`, creating parent directories
pub(crate) async fn write_file(task: &ResolvedTask, path: &Path, contents: &str) -> TaskResult<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| TaskError::io(task.name(), parent, e))?;
    }
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| TaskError::io(task.name(), path, e))?;
    log::debug!("Wrote {}", path.display());
    Ok(())
}

/// Render lines with a trailing newline
pub(crate) fn join_lines(lines: &[String]) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}
