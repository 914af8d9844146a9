//! Injecting an hdvl build file into an SVUnit checkout

use crate::plugin::api::{SvUnitBuildPlugin, SystemVerilogPlugin};
use crate::task::actions::write_file;
use crate::task::error::{TaskError, TaskResult};
use crate::task::plan::ResolvedTask;
use crate::task::types::InputRole;

pub(crate) const GENERATED_MARKER: &str = "# Generated by hdvl injectSvunitBuild";

pub(crate) fn render() -> String {
    format!(
        "{marker}\n\
         [project]\n\
         name = \"svunit\"\n\
         plugins = [\"{sv}\", \"{build}\"]\n",
        marker = GENERATED_MARKER,
        sv = SystemVerilogPlugin::ID,
        build = SvUnitBuildPlugin::ID,
    )
}

pub(crate) async fn inject(task: &ResolvedTask) -> TaskResult<()> {
    let target = task.single(InputRole::InjectTarget)?;
    let compile_spec = task.single(InputRole::CompileSpec)?;
    let build_file = task.required_output()?;

    if let Ok(existing) = tokio::fs::read_to_string(build_file).await {
        if !existing.starts_with(GENERATED_MARKER) {
            return Err(TaskError::failed(
                task.name(),
                format!(
                    "refusing to overwrite hand-written {}",
                    build_file.display()
                ),
            ));
        }
    }
    write_file(task, build_file, &render()).await?;

    let copied = target.join(".hdvl").join("compile-spec.json");
    let spec = tokio::fs::read_to_string(compile_spec)
        .await
        .map_err(|e| TaskError::io(task.name(), compile_spec, e))?;
    write_file(task, &copied, &spec).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendered_build_file_parses() {
        let value: toml::Value = toml::from_str(&render()).unwrap();
        let plugins = value["project"]["plugins"].as_array().unwrap();
        assert_eq!(plugins.len(), 2);
        assert_eq!(plugins[1].as_str(), Some(SvUnitBuildPlugin::ID));
    }
}
