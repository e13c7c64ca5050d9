//! Exclusion patterns
//!
//! One matching rule for everything: glob patterns (anything containing
//! `*`, `?` or `[`) are compiled with a literal separator, so `*` never
//! crosses `/`, and match either the full relative path or a single
//! path segment. Every other pattern is a plain substring of the
//! relative path.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

/// Patterns excluded from every scan unless --no-default-excludes is given
pub const DEFAULT_EXCLUDES: &[&str] = &[
    // VCS
    ".git",
    ".svn",
    ".hg",
    // Dependencies and build output
    "node_modules",
    "target",
    "__pycache__",
    ".venv",
    "venv",
    // Caches
    ".cache",
    ".npm",
    ".mypy_cache",
    ".pytest_cache",
    ".ruff_cache",
    // Editor and OS droppings
    ".idea",
    ".vscode",
    ".DS_Store",
    "*.swp",
];

/// The merged set of exclusion patterns for one invocation
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    literals: Vec<String>,
    globs: GlobSet,
}

impl ExclusionSet {
    /// Merge default and caller-supplied patterns into a matcher.
    ///
    /// Pattern syntax is not validated: a pattern globset rejects is
    /// kept and matched as a literal substring. Duplicates are harmless
    /// and order is irrelevant.
    pub fn build(defaults: &[&str], extra: &[String]) -> Self {
        let mut literals = Vec::new();
        let mut builder = GlobSetBuilder::new();

        let patterns = defaults
            .iter()
            .map(|p| p.to_string())
            .chain(extra.iter().cloned());

        for pattern in patterns {
            if pattern.chars().any(|c| matches!(c, '*' | '?' | '[')) {
                match GlobBuilder::new(&pattern).literal_separator(true).build() {
                    Ok(glob) => {
                        builder.add(glob);
                    }
                    Err(_) => literals.push(pattern),
                }
            } else {
                literals.push(pattern);
            }
        }

        let globs = builder.build().unwrap_or_else(|_| GlobSet::empty());
        Self { literals, globs }
    }

    /// Check a '/'-separated path relative to the scan root.
    pub fn matches(&self, relative: &str) -> bool {
        if self.globs.is_match(relative) {
            return true;
        }
        if relative.split('/').any(|segment| self.globs.is_match(segment)) {
            return true;
        }
        // Substring match subsumes "any segment contains pattern".
        self.literals.iter().any(|lit| relative.contains(lit))
    }
}
