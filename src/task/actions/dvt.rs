//! DVT Eclipse IDE project
//!
//! `.dvt/default.build` holds one `+dvt_init` section compiling the full
//! xrun args file. With unit tests configured a second section adds the
//! tests root and the test sources.

use crate::task::actions::{join_lines, write_file};
use crate::task::error::{TaskError, TaskResult};
use crate::task::plan::ResolvedTask;
use crate::task::types::{InputRole, Tool};
use std::path::PathBuf;

const DVT_INIT: &str = "+dvt_init+xcelium.xrun";

pub(crate) fn render(
    args_file: &[PathBuf],
    tests_roots: &[PathBuf],
    test_sources: &[PathBuf],
) -> String {
    let mut lines = vec![DVT_INIT.to_string()];
    lines.extend(args_file.iter().map(|f| format!("-f {}", f.display())));
    if !tests_roots.is_empty() {
        lines.push(DVT_INIT.to_string());
        lines.extend(tests_roots.iter().map(|dir| Tool::Xrun.incdir(dir)));
        lines.extend(test_sources.iter().map(|f| f.display().to_string()));
    }
    join_lines(&lines)
}

pub(crate) async fn generate(task: &ResolvedTask) -> TaskResult<()> {
    for dir in task.files(InputRole::WorkingDir) {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| TaskError::io(task.name(), dir, e))?;
    }
    let contents = render(
        task.files(InputRole::ArgsFile),
        task.files(InputRole::TestsRoot),
        task.files(InputRole::TestSource),
    );
    write_file(task, task.required_output()?, &contents).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_without_tests() {
        let text = render(&[PathBuf::from("/p/build/full_xrun_args.f")], &[], &[]);
        assert_eq!(text, "+dvt_init+xcelium.xrun\n-f /p/build/full_xrun_args.f\n");
    }

    #[test]
    fn test_render_with_tests() {
        let text = render(
            &[PathBuf::from("/p/build/full_xrun_args.f")],
            &[PathBuf::from("/p/src/test/sv")],
            &[PathBuf::from("/p/src/test/sv/foo_unit_test.sv")],
        );
        assert_eq!(
            text,
            "+dvt_init+xcelium.xrun\n\
             -f /p/build/full_xrun_args.f\n\
             +dvt_init+xcelium.xrun\n\
             -incdir /p/src/test/sv\n\
             /p/src/test/sv/foo_unit_test.sv\n"
        );
    }
}
