//! Source set extensions
//!
//! An extension is a named file collection attached to a source set. The
//! names that plugins in this crate contribute (`sv`, `svHeaders`, `c`) are
//! available as constants and as typed accessors on [`SourceSet`], so callers
//! never have to spell the string themselves.

use crate::fileset::api::{FileCollectionSet, FileSetResult};
use crate::sourceset::container::SourceSet;
use crate::sourceset::error::{ExtensionError, ExtensionResult};
use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;

/// Name of an extension, unique within one source set
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExtensionName(Cow<'static, str>);

impl ExtensionName {
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExtensionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExtensionName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

macro_rules! known_extensions {
    ($($(#[$doc:meta])* $konst:ident = $name:literal => $get:ident, $get_mut:ident;)*) => {
        impl ExtensionName {
            $(
                $(#[$doc])*
                pub const $konst: ExtensionName = ExtensionName::from_static($name);
            )*
        }

        impl SourceSet {
            $(
                $(#[$doc])*
                pub fn $get(&self) -> ExtensionResult<&SourceSetExtension> {
                    self.extension(&ExtensionName::$konst)
                }

                pub fn $get_mut(&mut self) -> ExtensionResult<&mut SourceSetExtension> {
                    self.extension_mut(&ExtensionName::$konst)
                }
            )*
        }
    };
}

known_extensions! {
    /// SystemVerilog sources
    SV = "sv" => sv, sv_mut;
    /// Exported SystemVerilog header directories
    SV_HEADERS = "svHeaders" => sv_headers, sv_headers_mut;
    /// C sources called through the DPI
    C = "c" => c, c_mut;
}

/// A named file collection owned by one source set
#[derive(Debug, Clone)]
pub struct SourceSetExtension {
    source_set: String,
    name: ExtensionName,
    display_name: String,
    files: FileCollectionSet,
}

impl SourceSetExtension {
    pub(crate) fn new(
        source_set: &str,
        name: ExtensionName,
        display_name: &str,
        files: FileCollectionSet,
    ) -> Self {
        Self {
            source_set: source_set.to_string(),
            name,
            display_name: display_name.to_string(),
            files,
        }
    }

    pub fn name(&self) -> &ExtensionName {
        &self.name
    }

    pub fn source_set(&self) -> &str {
        &self.source_set
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn files(&self) -> &FileCollectionSet {
        &self.files
    }

    fn wrap<T>(&self, result: FileSetResult<T>) -> ExtensionResult<T> {
        result.map_err(|source| ExtensionError::FileSet {
            source_set: self.source_set.clone(),
            extension: self.name.to_string(),
            source,
        })
    }

    pub fn src_dir(&mut self, root: impl Into<PathBuf>) -> &mut Self {
        self.files.src_dir(root);
        self
    }

    pub fn set_src_dirs<I, P>(&mut self, roots: I) -> &mut Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.files.set_src_dirs(roots);
        self
    }

    pub fn include(&mut self, pattern: &str) -> ExtensionResult<&mut Self> {
        let recorded = self.files.include(pattern).map(|_| ());
        self.wrap(recorded)?;
        Ok(self)
    }

    pub fn exclude(&mut self, pattern: &str) -> ExtensionResult<&mut Self> {
        let recorded = self.files.exclude(pattern).map(|_| ());
        self.wrap(recorded)?;
        Ok(self)
    }

    pub fn order_first(&mut self, pattern: &str) -> ExtensionResult<&mut Self> {
        let recorded = self.files.order_first(pattern).map(|_| ());
        self.wrap(recorded)?;
        Ok(self)
    }

    pub fn order_last(&mut self, pattern: &str) -> ExtensionResult<&mut Self> {
        let recorded = self.files.order_last(pattern).map(|_| ());
        self.wrap(recorded)?;
        Ok(self)
    }

    /// Resolve the files currently selected by this extension
    pub fn resolve(&self) -> ExtensionResult<Vec<PathBuf>> {
        self.wrap(self.files.resolve())
    }

    pub fn resolve_ordered(&self) -> ExtensionResult<Vec<PathBuf>> {
        self.wrap(self.files.resolve_ordered())
    }

    /// Existing root directories, used as include directories
    pub fn source_directories(&self) -> ExtensionResult<Vec<PathBuf>> {
        self.wrap(self.files.source_directories())
    }

    /// The single configured root, as SVUnit expects one tests directory
    pub fn single_root(&self) -> Option<PathBuf> {
        match self.files.roots().as_slice() {
            [root] => Some(root.clone()),
            _ => None,
        }
    }
}
