//! Compile specification consumed by projects that build against this one

use crate::task::actions::write_file;
use crate::task::error::{TaskError, TaskResult};
use crate::task::plan::{ExecutionPlan, ResolvedTask};
use crate::task::types::InputRole;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// JSON document listing what to compile, relative to the project directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileSpec {
    pub sv_source_files: Vec<PathBuf>,
    pub sv_private_include_dirs: Vec<PathBuf>,
    pub sv_exported_header_dirs: Vec<PathBuf>,
    pub c_source_files: Vec<PathBuf>,
}

impl CompileSpec {
    pub(crate) fn from_task(task: &ResolvedTask, project_dir: &Path) -> Self {
        let relative = |role| -> Vec<PathBuf> {
            task.files(role)
                .iter()
                .map(|path| relative_to(path, project_dir))
                .collect()
        };
        Self {
            sv_source_files: relative(InputRole::SvSource),
            sv_private_include_dirs: relative(InputRole::SvPrivateIncludeDirs),
            sv_exported_header_dirs: relative(InputRole::SvExportedHeaderDirs),
            c_source_files: relative(InputRole::CSource),
        }
    }
}

fn relative_to(path: &Path, base: &Path) -> PathBuf {
    path.strip_prefix(base)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

pub(crate) async fn write(plan: &ExecutionPlan, task: &ResolvedTask) -> TaskResult<()> {
    // Inputs are canonical paths
    let project_dir = tokio::fs::canonicalize(plan.project_dir())
        .await
        .unwrap_or_else(|_| plan.project_dir().to_path_buf());
    let spec = CompileSpec::from_task(task, &project_dir);
    let json = serde_json::to_string_pretty(&spec)
        .map_err(|e| TaskError::failed(task.name(), format!("cannot serialize: {}", e)))?;
    write_file(task, task.required_output()?, &json).await
}
