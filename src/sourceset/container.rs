//! Source sets and the container that owns them

use crate::fileset::api::FileCollectionSet;
use crate::sourceset::error::{ExtensionError, ExtensionResult};
use crate::sourceset::extension::{ExtensionName, SourceSetExtension};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Named grouping of sources within a build unit
#[derive(Debug, Clone)]
pub struct SourceSet {
    name: String,
    project_dir: PathBuf,
    extensions: BTreeMap<ExtensionName, SourceSetExtension>,
}

impl SourceSet {
    pub fn new(name: &str, project_dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.to_string(),
            project_dir: project_dir.into(),
            extensions: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attach a new extension rooted at `roots`
    ///
    /// Fails without touching the existing extension if `name` is taken.
    pub fn add_extension<I, P>(
        &mut self,
        name: ExtensionName,
        display_name: &str,
        roots: I,
    ) -> ExtensionResult<&mut SourceSetExtension>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        if self.extensions.contains_key(&name) {
            return Err(ExtensionError::DuplicateExtensionName {
                source_set: self.name.clone(),
                extension: name.to_string(),
            });
        }
        let files = FileCollectionSet::with_roots(&self.project_dir, roots);
        let extension = SourceSetExtension::new(&self.name, name.clone(), display_name, files);
        Ok(self.extensions.entry(name).or_insert(extension))
    }

    pub fn has_extension(&self, name: &ExtensionName) -> bool {
        self.extensions.contains_key(name)
    }

    pub fn extension(&self, name: &ExtensionName) -> ExtensionResult<&SourceSetExtension> {
        self.extensions
            .get(name)
            .ok_or_else(|| self.unknown_extension(name))
    }

    pub fn extension_mut(
        &mut self,
        name: &ExtensionName,
    ) -> ExtensionResult<&mut SourceSetExtension> {
        let error = self.unknown_extension(name);
        self.extensions.get_mut(name).ok_or(error)
    }

    fn unknown_extension(&self, name: &ExtensionName) -> ExtensionError {
        ExtensionError::UnknownExtension {
            source_set: self.name.clone(),
            extension: name.to_string(),
        }
    }

    pub fn extensions(&self) -> impl Iterator<Item = &SourceSetExtension> {
        self.extensions.values()
    }
}

/// An extension every source set receives, e.g. `sv` rooted at `src/<set>/sv`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionConvention {
    pub name: ExtensionName,
    pub display_name: &'static str,
    /// Directory under `src/<set>/`
    pub dir: &'static str,
    pub include: Option<&'static str>,
}

impl ExtensionConvention {
    fn default_root(&self, source_set: &str) -> PathBuf {
        Path::new("src").join(source_set).join(self.dir)
    }

    fn apply_to(&self, source_set: &mut SourceSet) -> ExtensionResult<()> {
        let root = self.default_root(&source_set.name);
        let extension = source_set.add_extension(self.name.clone(), self.display_name, [root])?;
        if let Some(pattern) = self.include {
            extension.include(pattern)?;
        }
        Ok(())
    }
}

/// All source sets of a build unit
#[derive(Debug, Clone)]
pub struct SourceSetContainer {
    project_dir: PathBuf,
    sets: BTreeMap<String, SourceSet>,
    conventions: Vec<ExtensionConvention>,
}

impl SourceSetContainer {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            sets: BTreeMap::new(),
            conventions: Vec::new(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sets.contains_key(name)
    }

    /// Return the named source set, creating it with all registered conventions
    pub fn get_or_create(&mut self, name: &str) -> ExtensionResult<&mut SourceSet> {
        if !self.sets.contains_key(name) {
            let mut source_set = SourceSet::new(name, &self.project_dir);
            for convention in &self.conventions {
                convention.apply_to(&mut source_set)?;
            }
            log::debug!("Created source set '{}'", name);
            self.sets.insert(name.to_string(), source_set);
        }
        self.get_mut(name)
    }

    pub fn get(&self, name: &str) -> ExtensionResult<&SourceSet> {
        self.sets
            .get(name)
            .ok_or_else(|| ExtensionError::UnknownSourceSet {
                source_set: name.to_string(),
            })
    }

    pub fn get_mut(&mut self, name: &str) -> ExtensionResult<&mut SourceSet> {
        self.sets
            .get_mut(name)
            .ok_or_else(|| ExtensionError::UnknownSourceSet {
                source_set: name.to_string(),
            })
    }

    /// Register a convention for every existing and future source set
    pub fn add_convention(&mut self, convention: ExtensionConvention) -> ExtensionResult<()> {
        for source_set in self.sets.values_mut() {
            convention.apply_to(source_set)?;
        }
        self.conventions.push(convention);
        Ok(())
    }

    pub fn names(&self) -> Vec<String> {
        self.sets.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SourceSet> {
        self.sets.values()
    }
}
