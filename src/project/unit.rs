//! Build unit
//!
//! A [`BuildUnit`] is configured by applying plugins and reading the build
//! file. Plugins only record intent: extensions, tasks, input bindings and
//! deferred actions. [`BuildUnit::finalize`] consumes the unit, runs the
//! deferred actions in registration order and resolves everything into an
//! immutable [`ExecutionPlan`].

use crate::plugin::api::{Plugin, PluginError, PluginId, PluginRegistry, PluginResult};
use crate::project::extensions::ToolChains;
use crate::sourceset::api::{
    ExtensionConvention, ExtensionName, ExtensionResult, SourceSet, SourceSetContainer,
    SourceSetExtension,
};
use crate::task::api::{ExecutionPlan, Task, TaskContainer};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use strum_macros::Display;

/// Name of the source set every build unit starts with
pub const MAIN_SOURCE_SET: &str = "main";

/// What happens when a plugin is applied to a unit that already has it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReapplyPolicy {
    /// Second application is a no-op
    #[default]
    Ignore,
    /// Second application fails with `AlreadyApplied`
    Reject,
}

/// Action run against the unit when it is finalized
pub type DeferredAction = Box<dyn FnOnce(&mut BuildUnit) -> PluginResult<()>>;

/// Run for every existing source set and for each one created later
pub type SourceSetHook = fn(&mut BuildUnit, &str) -> PluginResult<()>;

pub struct BuildUnit {
    name: String,
    project_dir: PathBuf,
    build_dir: PathBuf,
    reapply_policy: ReapplyPolicy,
    source_sets: SourceSetContainer,
    source_set_hooks: Vec<SourceSetHook>,
    tasks: TaskContainer,
    applied: Vec<PluginId>,
    base_applied: bool,
    deferred: Vec<DeferredAction>,
    tool_chains: Option<ToolChains>,
    svunit_root: Option<PathBuf>,
    dependencies: Vec<PathBuf>,
}

impl fmt::Debug for BuildUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildUnit")
            .field("name", &self.name)
            .field("project_dir", &self.project_dir)
            .field("applied", &self.applied)
            .field("source_sets", &self.source_sets.names())
            .field("tasks", &self.tasks.names())
            .field("deferred", &self.deferred.len())
            .finish()
    }
}

impl BuildUnit {
    /// Create an unconfigured unit; the build directory defaults to `build/`
    pub fn new(name: &str, project_dir: impl Into<PathBuf>) -> Self {
        let project_dir = project_dir.into();
        Self {
            name: name.to_string(),
            build_dir: project_dir.join("build"),
            source_sets: SourceSetContainer::new(&project_dir),
            project_dir,
            reapply_policy: ReapplyPolicy::default(),
            source_set_hooks: Vec::new(),
            tasks: TaskContainer::new(),
            applied: Vec::new(),
            base_applied: false,
            deferred: Vec::new(),
            tool_chains: None,
            svunit_root: None,
            dependencies: Vec::new(),
        }
    }

    pub fn with_reapply_policy(mut self, policy: ReapplyPolicy) -> Self {
        self.reapply_policy = policy;
        self
    }

    /// Relative paths are taken from the project directory
    pub fn with_build_dir(mut self, build_dir: impl AsRef<Path>) -> Self {
        self.build_dir = self.project_dir.join(build_dir);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    pub fn reapply_policy(&self) -> ReapplyPolicy {
        self.reapply_policy
    }

    // Source sets

    pub fn source_sets(&self) -> &SourceSetContainer {
        &self.source_sets
    }

    pub fn source_set(&self, name: &str) -> ExtensionResult<&SourceSet> {
        self.source_sets.get(name)
    }

    pub fn source_set_mut(&mut self, name: &str) -> ExtensionResult<&mut SourceSet> {
        self.source_sets.get_mut(name)
    }

    /// Return the named source set, creating it and running every hook if new
    pub fn get_or_create_source_set(&mut self, name: &str) -> PluginResult<&mut SourceSet> {
        if !self.source_sets.contains(name) {
            self.source_sets.get_or_create(name)?;
            for hook in self.source_set_hooks.clone() {
                hook(self, name)?;
            }
        }
        Ok(self.source_sets.get_mut(name)?)
    }

    pub fn add_extension_to_source_set<I, P>(
        &mut self,
        source_set: &str,
        name: ExtensionName,
        display_name: &str,
        roots: I,
    ) -> PluginResult<&mut SourceSetExtension>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Ok(self
            .source_sets
            .get_mut(source_set)?
            .add_extension(name, display_name, roots)?)
    }

    /// Give every existing and future source set an extension
    pub fn add_extension_convention(&mut self, convention: ExtensionConvention) -> PluginResult<()> {
        Ok(self.source_sets.add_convention(convention)?)
    }

    /// Run `hook` for every existing source set and remember it for new ones
    pub fn all_source_sets(&mut self, hook: SourceSetHook) -> PluginResult<()> {
        for name in self.source_sets.names() {
            hook(self, &name)?;
        }
        self.source_set_hooks.push(hook);
        Ok(())
    }

    // Tasks

    pub fn tasks(&self) -> &TaskContainer {
        &self.tasks
    }

    pub fn register_task(&mut self, task: Task) -> PluginResult<()> {
        Ok(self.tasks.register(task)?)
    }

    pub fn configure_task<F>(&mut self, name: &str, configure: F) -> PluginResult<()>
    where
        F: FnOnce(&mut Task),
    {
        Ok(self.tasks.configure(name, configure)?)
    }

    // Plugins

    /// Apply a plugin by id or short name through the global registry
    pub fn apply_plugin_named(&mut self, name: &str) -> PluginResult<()> {
        let descriptor = PluginRegistry::global()?.resolve_name(name)?;
        self.apply_plugin(descriptor.instantiate())
    }

    /// Apply `plugin`, honouring the unit's [`ReapplyPolicy`]
    ///
    /// A failed application leaves the unit partially configured; callers
    /// must treat the error as fatal for this unit.
    pub fn apply_plugin(&mut self, plugin: Plugin) -> PluginResult<()> {
        let id = plugin.id();
        if self.has_plugin(id.as_str()) {
            return match self.reapply_policy {
                ReapplyPolicy::Ignore => {
                    log::debug!("Plugin '{}' already applied to '{}'", id, self.name);
                    Ok(())
                }
                ReapplyPolicy::Reject => Err(PluginError::AlreadyApplied {
                    plugin: id.to_string(),
                    unit: self.name.clone(),
                }),
            };
        }

        plugin.apply(self).map_err(|e| e.in_plugin(id.as_str()))?;
        log::debug!("Applied plugin '{}' to '{}'", id, self.name);
        self.applied.push(id);
        Ok(())
    }

    pub fn has_plugin(&self, id: &str) -> bool {
        self.applied.iter().any(|applied| applied.as_str() == id)
    }

    pub fn applied_plugins(&self) -> &[PluginId] {
        &self.applied
    }

    /// Returns true the first time it is called
    pub(crate) fn mark_base_applied(&mut self) -> bool {
        !std::mem::replace(&mut self.base_applied, true)
    }

    /// Defer `action` until the unit is finalized
    pub fn after_evaluate<F>(&mut self, action: F)
    where
        F: FnOnce(&mut BuildUnit) -> PluginResult<()> + 'static,
    {
        self.deferred.push(Box::new(action));
    }

    // Settings contributed by plugins and the build file

    pub fn tool_chains(&self) -> Option<&ToolChains> {
        self.tool_chains.as_ref()
    }

    pub fn tool_chains_mut(&mut self) -> Option<&mut ToolChains> {
        self.tool_chains.as_mut()
    }

    pub(crate) fn install_tool_chains(&mut self) {
        self.tool_chains.get_or_insert_with(ToolChains::default);
    }

    pub fn svunit_root(&self) -> Option<&Path> {
        self.svunit_root.as_deref()
    }

    pub fn set_svunit_root(&mut self, root: impl AsRef<Path>) {
        self.svunit_root = Some(self.project_dir.join(root));
    }

    /// Project directories whose main args files are compiled before ours
    pub fn dependencies(&self) -> &[PathBuf] {
        &self.dependencies
    }

    pub fn add_dependency(&mut self, project_dir: impl AsRef<Path>) {
        self.dependencies.push(self.project_dir.join(project_dir));
    }

    /// Run deferred actions, then resolve every task into an execution plan
    pub fn finalize(mut self) -> PluginResult<ExecutionPlan> {
        while !self.deferred.is_empty() {
            let deferred = std::mem::take(&mut self.deferred);
            log::debug!("Running {} deferred action(s) for '{}'", deferred.len(), self.name);
            for action in deferred {
                action(&mut self)?;
            }
        }
        Ok(ExecutionPlan::build(
            &self.project_dir,
            &self.build_dir,
            &self.tasks,
            &self.source_sets,
        )?)
    }
}
