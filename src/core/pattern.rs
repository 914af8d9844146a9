//! Glob pattern helpers for include/exclude filtering
//!
//! Patterns are matched against paths relative to the directory they were
//! collected from. `*` and `?` never cross a `/`; `**` matches any number of
//! directories, including none.

use glob::{MatchOptions, Pattern, PatternError};
use std::path::{Component, Path};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A compiled glob pattern that remembers its source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobPattern {
    text: String,
    pattern: Pattern,
}

impl GlobPattern {
    /// Compile a pattern, rejecting malformed syntax such as `[a-`
    pub fn new(text: &str) -> Result<Self, PatternError> {
        Ok(Self {
            text: text.to_string(),
            pattern: Pattern::new(text)?,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Match against a path relative to its collection root
    pub fn matches_relative(&self, relative: &Path) -> bool {
        self.pattern
            .matches_with(&to_slash_path(relative), MATCH_OPTIONS)
    }
}

impl std::fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Render a relative path with `/` separators regardless of platform
pub fn to_slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_star_matches_any_depth() {
        let pattern = GlobPattern::new("**/dummy.sv").unwrap();
        assert!(pattern.matches_relative(Path::new("dummy.sv")));
        assert!(pattern.matches_relative(Path::new("a/dummy.sv")));
        assert!(pattern.matches_relative(Path::new("a/b/c/dummy.sv")));
        assert!(!pattern.matches_relative(Path::new("a/not_dummy.sv")));
    }

    #[test]
    fn test_single_star_stays_in_one_directory() {
        let pattern = GlobPattern::new("*.sv").unwrap();
        assert!(pattern.matches_relative(Path::new("top.sv")));
        assert!(!pattern.matches_relative(Path::new("sub/top.sv")));
    }

    #[test]
    fn test_extension_filter() {
        let pattern = GlobPattern::new("**/*.sv").unwrap();
        assert!(pattern.matches_relative(Path::new("pkg/uart_pkg.sv")));
        assert!(!pattern.matches_relative(Path::new("pkg/uart_pkg.svh")));
    }

    #[test]
    fn test_malformed_pattern_is_rejected() {
        assert!(GlobPattern::new("src/[a-").is_err());
    }

    #[test]
    fn test_slash_path_drops_current_dir_components() {
        assert_eq!(to_slash_path(Path::new("./a/b.sv")), "a/b.sv");
    }

    #[test]
    fn test_display_keeps_source_text() {
        let pattern = GlobPattern::new("**/*_pkg.sv").unwrap();
        assert_eq!(pattern.to_string(), "**/*_pkg.sv");
        assert_eq!(pattern.as_str(), "**/*_pkg.sv");
    }
}
