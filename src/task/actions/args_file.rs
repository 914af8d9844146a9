//! Simulator argument files
//!
//! A per-source-set args file compiles the set into its own library:
//!
//! ```text
//! -incdir /project/src/main/sv_headers
//! -makelib worklib
//!   -incdir /project/src/main/sv
//!   /project/src/main/sv/pkg.sv
//!   /project/src/main/c/model.c
//! -endlib
//! ```
//!
//! The full args file for `main` pulls in the args files of dependencies
//! with `-f` before its own.

use crate::task::actions::{join_lines, write_file};
use crate::task::error::TaskResult;
use crate::task::plan::ResolvedTask;
use crate::task::types::{InputRole, Tool};
use std::path::PathBuf;

pub(crate) fn render(
    tool: Tool,
    exported_header_dirs: &[PathBuf],
    private_include_dirs: &[PathBuf],
    sv_files: &[PathBuf],
    c_files: &[PathBuf],
) -> String {
    let mut lines: Vec<String> = exported_header_dirs
        .iter()
        .map(|dir| tool.incdir(dir))
        .collect();
    lines.push(format!("-makelib {}", tool.library_name()));
    lines.extend(
        private_include_dirs
            .iter()
            .map(|dir| format!("  {}", tool.incdir(dir))),
    );
    lines.extend(
        sv_files
            .iter()
            .chain(c_files)
            .map(|file| format!("  {}", file.display())),
    );
    lines.push("-endlib".to_string());
    join_lines(&lines)
}

pub(crate) fn render_full(dependency_args_files: &[PathBuf], args_file: &[PathBuf]) -> String {
    let lines: Vec<String> = dependency_args_files
        .iter()
        .chain(args_file)
        .map(|file| format!("-f {}", file.display()))
        .collect();
    join_lines(&lines)
}

pub(crate) async fn generate(task: &ResolvedTask, tool: Tool) -> TaskResult<()> {
    let contents = render(
        tool,
        task.files(InputRole::SvExportedHeaderDirs),
        task.files(InputRole::SvPrivateIncludeDirs),
        task.files(InputRole::SvSource),
        task.files(InputRole::CSource),
    );
    write_file(task, task.required_output()?, &contents).await
}

pub(crate) async fn generate_full(task: &ResolvedTask) -> TaskResult<()> {
    let contents = render_full(
        task.files(InputRole::DependencyArgsFiles),
        task.files(InputRole::ArgsFile),
    );
    write_file(task, task.required_output()?, &contents).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_xrun() {
        let text = render(
            Tool::Xrun,
            &[PathBuf::from("/p/src/main/sv_headers")],
            &[PathBuf::from("/p/src/main/sv")],
            &[PathBuf::from("/p/src/main/sv/pkg.sv")],
            &[PathBuf::from("/p/src/main/c/model.c")],
        );
        assert_eq!(
            text,
            "-incdir /p/src/main/sv_headers\n\
             -makelib worklib\n\
             \x20\x20-incdir /p/src/main/sv\n\
             \x20\x20/p/src/main/sv/pkg.sv\n\
             \x20\x20/p/src/main/c/model.c\n\
             -endlib\n"
        );
    }

    #[test]
    fn test_render_qrun_uses_plus_incdir() {
        let text = render(Tool::Qrun, &[], &[PathBuf::from("/p/sv")], &[], &[]);
        assert_eq!(text, "-makelib work\n  +incdir+/p/sv\n-endlib\n");
    }

    #[test]
    fn test_render_full_lists_dependencies_first() {
        let text = render_full(
            &[PathBuf::from("/lib/build/xrun_args.f")],
            &[PathBuf::from("/p/build/xrun_args.f")],
        );
        assert_eq!(text, "-f /lib/build/xrun_args.f\n-f /p/build/xrun_args.f\n");
    }
}
