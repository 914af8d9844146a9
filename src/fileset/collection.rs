//! Lazily resolved, filterable file collections
//!
//! A [`FileCollectionSet`] only records what it was told: source directories
//! and include/exclude patterns, in call order. Nothing touches the
//! filesystem until [`FileCollectionSet::resolve`] is called, and every call
//! walks the roots again so the result always reflects the current tree.

use crate::core::pattern::GlobPattern;
use crate::fileset::error::{FileSetError, FileSetResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One recorded configuration operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOp {
    /// Add a root
    SrcDir(PathBuf),
    /// Replace all roots recorded so far
    SetSrcDirs(Vec<PathBuf>),
    Include(GlobPattern),
    Exclude(GlobPattern),
}

/// Ordering hint for compilation: files matching `first` are placed before
/// everything else, files matching `last` after everything else
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileOrder {
    pub first: Option<GlobPattern>,
    pub last: Option<GlobPattern>,
}

impl FileOrder {
    pub fn is_empty(&self) -> bool {
        self.first.is_none() && self.last.is_none()
    }
}

/// Ordered include/exclude configuration over a set of root paths
#[derive(Debug, Clone)]
pub struct FileCollectionSet {
    base_dir: PathBuf,
    ops: Vec<FileOp>,
    order: FileOrder,
}

/// Roots and filters after folding the recorded operations
struct Effective<'a> {
    roots: Vec<PathBuf>,
    includes: Vec<&'a GlobPattern>,
    excludes: Vec<&'a GlobPattern>,
}

impl Effective<'_> {
    fn accepts(&self, relative: &Path) -> bool {
        let included =
            self.includes.is_empty() || self.includes.iter().any(|p| p.matches_relative(relative));
        included && !self.excludes.iter().any(|p| p.matches_relative(relative))
    }
}

impl FileCollectionSet {
    /// Create an empty collection; relative roots are taken from `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            ops: Vec::new(),
            order: FileOrder::default(),
        }
    }

    /// Create a collection with initial roots
    pub fn with_roots<I, P>(base_dir: impl Into<PathBuf>, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut set = Self::new(base_dir);
        for root in roots {
            set.src_dir(root);
        }
        set
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn operations(&self) -> &[FileOp] {
        &self.ops
    }

    pub fn src_dir(&mut self, root: impl Into<PathBuf>) -> &mut Self {
        self.ops.push(FileOp::SrcDir(root.into()));
        self
    }

    pub fn set_src_dirs<I, P>(&mut self, roots: I) -> &mut Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.ops
            .push(FileOp::SetSrcDirs(roots.into_iter().map(Into::into).collect()));
        self
    }

    pub fn include(&mut self, pattern: &str) -> FileSetResult<&mut Self> {
        self.ops.push(FileOp::Include(compile(pattern)?));
        Ok(self)
    }

    pub fn exclude(&mut self, pattern: &str) -> FileSetResult<&mut Self> {
        self.ops.push(FileOp::Exclude(compile(pattern)?));
        Ok(self)
    }

    pub fn order(&self) -> &FileOrder {
        &self.order
    }

    pub fn order_first(&mut self, pattern: &str) -> FileSetResult<&mut Self> {
        self.order.first = Some(compile(pattern)?);
        Ok(self)
    }

    pub fn order_last(&mut self, pattern: &str) -> FileSetResult<&mut Self> {
        self.order.last = Some(compile(pattern)?);
        Ok(self)
    }

    fn effective(&self) -> Effective<'_> {
        let mut effective = Effective {
            roots: Vec::new(),
            includes: Vec::new(),
            excludes: Vec::new(),
        };
        for op in &self.ops {
            match op {
                FileOp::SrcDir(root) => effective.roots.push(self.absolute(root)),
                FileOp::SetSrcDirs(roots) => {
                    effective.roots = roots.iter().map(|r| self.absolute(r)).collect();
                }
                FileOp::Include(pattern) => effective.includes.push(pattern),
                FileOp::Exclude(pattern) => effective.excludes.push(pattern),
            }
        }
        effective
    }

    fn absolute(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// The configured roots, absolute, whether or not they exist
    pub fn roots(&self) -> Vec<PathBuf> {
        self.effective().roots
    }

    /// Roots that currently exist as directories, canonical and de-duplicated
    pub fn source_directories(&self) -> FileSetResult<Vec<PathBuf>> {
        let mut dirs = Vec::new();
        for root in self.effective().roots {
            if !root.is_dir() {
                continue;
            }
            let canonical = canonicalize(&root)?;
            if !dirs.contains(&canonical) {
                dirs.push(canonical);
            }
        }
        Ok(dirs)
    }

    /// Canonical path -> path relative to the root it was found under
    fn resolve_entries(&self) -> FileSetResult<BTreeMap<PathBuf, PathBuf>> {
        let effective = self.effective();
        let mut entries = BTreeMap::new();

        for root in &effective.roots {
            if !root.exists() {
                log::trace!("Skipping missing root {}", root.display());
                continue;
            }
            for entry in WalkDir::new(root).follow_links(true) {
                let entry = entry.map_err(|source| FileSetError::Walk {
                    root: root.clone(),
                    source,
                })?;
                if !entry.file_type().is_file() {
                    continue;
                }
                let relative = if entry.depth() == 0 {
                    PathBuf::from(entry.file_name())
                } else {
                    entry
                        .path()
                        .strip_prefix(root)
                        .unwrap_or(entry.path())
                        .to_path_buf()
                };
                if !effective.accepts(&relative) {
                    continue;
                }
                let canonical = canonicalize(entry.path())?;
                entries.entry(canonical).or_insert(relative);
            }
        }
        Ok(entries)
    }

    /// Resolve to canonical absolute paths, de-duplicated and sorted
    pub fn resolve(&self) -> FileSetResult<Vec<PathBuf>> {
        Ok(self.resolve_entries()?.into_keys().collect())
    }

    /// Resolve and then apply the [`FileOrder`] hint
    pub fn resolve_ordered(&self) -> FileSetResult<Vec<PathBuf>> {
        let entries = self.resolve_entries()?;
        if self.order.is_empty() {
            return Ok(entries.into_keys().collect());
        }

        let matches = |pattern: &Option<GlobPattern>, relative: &Path| {
            pattern
                .as_ref()
                .is_some_and(|p| p.matches_relative(relative))
        };

        let mut first = Vec::new();
        let mut middle = Vec::new();
        let mut last = Vec::new();
        for (path, relative) in entries {
            if matches(&self.order.first, relative.as_path()) {
                first.push(path);
            } else if matches(&self.order.last, relative.as_path()) {
                last.push(path);
            } else {
                middle.push(path);
            }
        }
        first.extend(middle);
        first.extend(last);
        Ok(first)
    }
}

fn compile(pattern: &str) -> FileSetResult<GlobPattern> {
    GlobPattern::new(pattern).map_err(|source| FileSetError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

fn canonicalize(path: &Path) -> FileSetResult<PathBuf> {
    std::fs::canonicalize(path).map_err(|source| FileSetError::Io {
        path: path.to_path_buf(),
        source,
    })
}
