//! Build file parsing and loading
//!
//! `hdvl.toml` declares which plugins a project applies and how their
//! extensions are configured:
//!
//! ```toml
//! [project]
//! name = "uart"
//! plugins = ["systemverilog", "svunit"]
//! dependencies = ["../common"]
//!
//! [source-sets.main.sv]
//! exclude = ["**/dummy.sv"]
//! order = { first = "**/*_pkg.sv" }
//!
//! [tool-chains.run-svunit]
//! args = ["--uvm"]
//!
//! [svunit]
//! root = "../svunit"
//! ```
//!
//! Plugins are applied first, in the listed order; every other section is
//! applied to the configured unit afterwards.

use crate::core::error_handling::ContextualError;
use crate::plugin::api::PluginError;
use crate::project::api::{BuildUnit, ReapplyPolicy};
use crate::sourceset::api::{ExtensionError, ExtensionName};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default build file name, looked up in the current directory
pub const BUILD_FILE_NAME: &str = "hdvl.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid build file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("[{section}] {message}")]
    Setting { section: String, message: String },

    #[error(transparent)]
    Plugin(#[from] PluginError),

    #[error(transparent)]
    Extension(#[from] ExtensionError),
}

impl ContextualError for ConfigError {
    fn is_user_actionable(&self) -> bool {
        match self {
            ConfigError::Plugin(e) => e.is_user_actionable(),
            ConfigError::Extension(e) => e.is_user_actionable(),
            _ => true,
        }
    }

    fn user_message(&self) -> Option<String> {
        self.is_user_actionable().then(|| self.to_string())
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct BuildFile {
    #[serde(default)]
    pub project: ProjectSection,
    /// source set -> extension -> settings
    #[serde(default)]
    pub source_sets: BTreeMap<String, BTreeMap<String, ExtensionSection>>,
    #[serde(default)]
    pub tool_chains: ToolChainsSection,
    pub svunit: Option<SvunitSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ProjectSection {
    pub name: Option<String>,
    pub build_dir: Option<PathBuf>,
    /// Plugin ids or short names, applied in order
    #[serde(default)]
    pub plugins: Vec<String>,
    #[serde(default)]
    pub reapply: ReapplyPolicy,
    /// Other hdvl project directories compiled before this one
    #[serde(default)]
    pub dependencies: Vec<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ExtensionSection {
    /// Replaces the conventional roots
    pub src_dirs: Option<Vec<PathBuf>>,
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
    pub order: Option<OrderSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderSection {
    pub first: Option<String>,
    pub last: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ToolChainsSection {
    pub run_svunit: Option<RunSvunitSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunSvunitSection {
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SvunitSection {
    pub root: PathBuf,
}

impl BuildFile {
    pub fn parse(text: &str, path: &Path) -> ConfigResult<Self> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let build_file = Self::parse(&text, path)?;
        log::debug!("Loaded build file {}", path.display());
        Ok(build_file)
    }

    /// Create and configure a build unit rooted at `project_dir`
    pub fn configure(&self, project_dir: &Path) -> ConfigResult<BuildUnit> {
        let name = self.project.name.clone().unwrap_or_else(|| {
            project_dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "hdvl".to_string())
        });

        let mut unit =
            BuildUnit::new(&name, project_dir).with_reapply_policy(self.project.reapply);
        if let Some(build_dir) = &self.project.build_dir {
            unit = unit.with_build_dir(build_dir);
        }

        for plugin in &self.project.plugins {
            unit.apply_plugin_named(plugin)?;
        }
        for dependency in &self.project.dependencies {
            unit.add_dependency(dependency);
        }
        if let Some(svunit) = &self.svunit {
            unit.set_svunit_root(&svunit.root);
        }
        self.configure_tool_chains(&mut unit)?;
        self.configure_source_sets(&mut unit)?;

        log::info!(
            "Configured '{}' with {} plugin(s) and {} task(s)",
            unit.name(),
            unit.applied_plugins().len(),
            unit.tasks().len()
        );
        Ok(unit)
    }

    fn configure_tool_chains(&self, unit: &mut BuildUnit) -> ConfigResult<()> {
        let Some(run_svunit) = &self.tool_chains.run_svunit else {
            return Ok(());
        };
        let chains = unit.tool_chains_mut().ok_or_else(|| ConfigError::Setting {
            section: "tool-chains".to_string(),
            message: "requires the svunit plugin".to_string(),
        })?;
        chains.run_svunit.add_args(run_svunit.args.iter().cloned());
        Ok(())
    }

    fn configure_source_sets(&self, unit: &mut BuildUnit) -> ConfigResult<()> {
        for (set_name, extensions) in &self.source_sets {
            let source_set = unit.get_or_create_source_set(set_name)?;
            for (ext_name, section) in extensions {
                let extension = source_set.extension_mut(&ExtensionName::new(ext_name.as_str()))?;
                if let Some(dirs) = &section.src_dirs {
                    extension.set_src_dirs(dirs.iter().cloned());
                }
                for pattern in &section.include {
                    extension.include(pattern)?;
                }
                for pattern in &section.exclude {
                    extension.exclude(pattern)?;
                }
                if let Some(order) = &section.order {
                    if let Some(first) = &order.first {
                        extension.order_first(first)?;
                    }
                    if let Some(last) = &order.last {
                        extension.order_last(last)?;
                    }
                }
            }
        }
        Ok(())
    }
}
