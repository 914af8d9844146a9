//! Task definitions
//!
//! A task names its inputs by reference (an extension, the directories of an
//! extension, another task's output, or fixed paths). Nothing is resolved
//! while plugins configure the build unit; see [`crate::task::plan`].

use crate::sourceset::api::ExtensionName;
use std::fmt;
use std::path::{Path, PathBuf};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// HDL simulators that argument files are generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(EnumIter, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Tool {
    /// Cadence Xcelium
    Xrun,
    /// Siemens Questa
    Qrun,
}

impl Tool {
    /// Library name used in `-makelib`
    pub fn library_name(&self) -> &'static str {
        match self {
            Tool::Xrun => "worklib",
            Tool::Qrun => "work",
        }
    }

    /// Include directory option for this tool
    pub fn incdir(&self, dir: &Path) -> String {
        match self {
            Tool::Xrun => format!("-incdir {}", dir.display()),
            Tool::Qrun => format!("+incdir+{}", dir.display()),
        }
    }
}

/// Reference to an extension on a source set
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtensionRef {
    pub source_set: String,
    pub extension: ExtensionName,
}

impl ExtensionRef {
    pub fn new(source_set: &str, extension: ExtensionName) -> Self {
        Self {
            source_set: source_set.to_string(),
            extension,
        }
    }
}

impl fmt::Display for ExtensionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sourceSets.{}.{}", self.source_set, self.extension)
    }
}

/// Where the files of an input come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Files selected by an extension
    Extension(ExtensionRef),
    /// Existing root directories of an extension
    ExtensionDirs(ExtensionRef),
    /// The output of another task, which becomes a dependency
    TaskOutput(String),
    Paths(Vec<PathBuf>),
}

/// What an input means to the task action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum InputRole {
    SvSource,
    SvPrivateIncludeDirs,
    SvExportedHeaderDirs,
    CSource,
    /// The args file wrapped by a full args file, or read by an IDE project
    ArgsFile,
    /// Args files of other projects this one depends on
    DependencyArgsFiles,
    MainArgsFile,
    TestArgsFile,
    TestsRoot,
    TestSource,
    SvunitRoot,
    /// Scratch directory created before the action runs
    WorkingDir,
    CompileSpec,
    InjectTarget,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInput {
    pub role: InputRole,
    pub source: InputSource,
}

/// The work a task performs when executed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    GenArgsFile { tool: Tool },
    GenFullArgsFile,
    WriteCompileSpec,
    GenerateDvtProject,
    RunSvunit { tool: Tool, extra_args: Vec<String> },
    InjectBuildScript,
}

impl TaskAction {
    pub fn kind(&self) -> &'static str {
        match self {
            TaskAction::GenArgsFile { .. } => "args-file",
            TaskAction::GenFullArgsFile => "full-args-file",
            TaskAction::WriteCompileSpec => "compile-spec",
            TaskAction::GenerateDvtProject => "dvt-project",
            TaskAction::RunSvunit { .. } => "svunit",
            TaskAction::InjectBuildScript => "inject",
        }
    }
}

/// A named unit of work with declared inputs and an output location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    name: String,
    description: String,
    action: TaskAction,
    inputs: Vec<TaskInput>,
    output: Option<PathBuf>,
    depends_on: Vec<String>,
}

impl Task {
    pub fn new(name: impl Into<String>, action: TaskAction) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            action,
            inputs: Vec::new(),
            output: None,
            depends_on: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_input(mut self, role: InputRole, source: InputSource) -> Self {
        self.add_input(role, source);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn action(&self) -> &TaskAction {
        &self.action
    }

    pub fn action_mut(&mut self) -> &mut TaskAction {
        &mut self.action
    }

    pub fn inputs(&self) -> &[TaskInput] {
        &self.inputs
    }

    pub fn inputs_for(&self, role: InputRole) -> impl Iterator<Item = &InputSource> {
        self.inputs
            .iter()
            .filter(move |input| input.role == role)
            .map(|input| &input.source)
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    pub fn set_output(&mut self, output: impl Into<PathBuf>) {
        self.output = Some(output.into());
    }

    pub fn add_input(&mut self, role: InputRole, source: InputSource) {
        self.inputs.push(TaskInput { role, source });
    }

    /// Replace every input bound to `role`
    pub fn set_input(&mut self, role: InputRole, source: InputSource) {
        self.inputs.retain(|input| input.role != role);
        self.add_input(role, source);
    }

    pub fn depends_on(&mut self, task: impl Into<String>) {
        let task = task.into();
        if !self.depends_on.contains(&task) {
            self.depends_on.push(task);
        }
    }

    /// Explicit dependencies plus every task whose output is an input
    pub fn dependencies(&self) -> Vec<&str> {
        let mut deps: Vec<&str> = self.depends_on.iter().map(String::as_str).collect();
        for input in &self.inputs {
            if let InputSource::TaskOutput(task) = &input.source {
                if !deps.contains(&task.as_str()) {
                    deps.push(task);
                }
            }
        }
        deps
    }
}
