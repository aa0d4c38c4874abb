//! Path-based inclusion filter
//!
//! A file is kept when its path contains at least one required fragment
//! and matches none of the exclusions. Exclusion always wins. Both the
//! path and the fragments are normalized to `/` separators first, so
//! reports written on Windows match the same filters.

use crate::lcov::normalize_path;
use crate::result::{CovfoldError, CovfoldResult};
use regex::Regex;

/// A single exclusion rule
#[derive(Debug, Clone)]
pub enum Exclusion {
    /// Path contains the fragment
    Contains(String),
    /// Path matches the regular expression
    Pattern(Regex),
}

impl Exclusion {
    /// Check the rule against a normalized path
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Contains(fragment) => path.contains(fragment.as_str()),
            Self::Pattern(regex) => regex.is_match(path),
        }
    }
}

/// Inclusion predicate over file paths
#[derive(Debug, Clone, Default)]
pub struct InclusionFilter {
    required: Vec<String>,
    excluded: Vec<Exclusion>,
}

impl InclusionFilter {
    /// Filter that includes every path
    #[must_use]
    pub fn allow_all() -> Self {
        Self::default()
    }

    /// Start building a filter
    #[must_use]
    pub fn builder() -> InclusionFilterBuilder {
        InclusionFilterBuilder::default()
    }

    /// Whether the file at `path` takes part in the aggregate
    #[must_use]
    pub fn include(&self, path: &str) -> bool {
        let path = normalize_path(path);
        let required = self.required.is_empty()
            || self.required.iter().any(|f| path.contains(f.as_str()));
        required && !self.excluded.iter().any(|e| e.matches(&path))
    }

    /// Required fragments (normalized)
    #[must_use]
    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// Exclusion rules
    #[must_use]
    pub fn excluded(&self) -> &[Exclusion] {
        &self.excluded
    }
}

/// Builder for [`InclusionFilter`]
#[derive(Debug, Default)]
pub struct InclusionFilterBuilder {
    required: Vec<String>,
    contains: Vec<String>,
    patterns: Vec<String>,
}

impl InclusionFilterBuilder {
    /// Require a path fragment (any one of the required fragments suffices)
    #[must_use]
    pub fn require(mut self, fragment: impl AsRef<str>) -> Self {
        self.required.push(normalize_path(fragment.as_ref()));
        self
    }

    /// Drop paths containing a fragment
    #[must_use]
    pub fn exclude(mut self, fragment: impl AsRef<str>) -> Self {
        self.contains.push(normalize_path(fragment.as_ref()));
        self
    }

    /// Drop paths matching a regular expression
    #[must_use]
    pub fn exclude_regex(mut self, pattern: impl Into<String>) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    /// Compile the filter
    ///
    /// # Errors
    ///
    /// Returns [`CovfoldError::Pattern`] if an exclusion regex is invalid.
    pub fn build(self) -> CovfoldResult<InclusionFilter> {
        let mut excluded: Vec<Exclusion> =
            self.contains.into_iter().map(Exclusion::Contains).collect();
        for pattern in self.patterns {
            let regex = Regex::new(&pattern)
                .map_err(|source| CovfoldError::Pattern { pattern, source })?;
            excluded.push(Exclusion::Pattern(regex));
        }
        Ok(InclusionFilter {
            required: self.required,
            excluded,
        })
    }
}
