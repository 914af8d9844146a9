//! Public API for tasks

pub use crate::task::actions::compile_spec::CompileSpec;
pub use crate::task::container::TaskContainer;
pub use crate::task::error::{TaskError, TaskResult};
pub use crate::task::executor::{ActionRunner, DefaultActionRunner, Executor, RunSummary};
pub use crate::task::plan::{ExecutionPlan, ResolvedTask};
pub use crate::task::types::{
    ExtensionRef, InputRole, InputSource, Task, TaskAction, TaskInput, Tool,
};
