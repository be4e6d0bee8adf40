use crate::errors::{CoreError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Set of name globs whose matches are omitted from partitioning.
///
/// Matching is case-sensitive and applies to an item's base name only,
/// never to its full path. Excluded items are neither measured nor moved.
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    patterns: Vec<String>,
    set: GlobSet,
}

impl ExclusionSet {
    /// An exclusion set that matches nothing.
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
            set: GlobSet::empty(),
        }
    }

    /// Compiles the given glob patterns into a matcher.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = GlobSetBuilder::new();
        let mut kept = Vec::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let glob = Glob::new(pattern).map_err(|err| {
                CoreError::invalid_input(format!("invalid exclude pattern '{pattern}': {err}"))
            })?;
            builder.add(glob);
            kept.push(pattern.to_string());
        }
        let set = builder
            .build()
            .map_err(|err| CoreError::invalid_input(format!("invalid exclude patterns: {err}")))?;
        Ok(Self { patterns: kept, set })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Returns true when `name` matches any pattern in the set.
    pub fn matches(&self, name: &str) -> bool {
        self.set.is_match(name)
    }
}
