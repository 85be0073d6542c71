//! The composed forbidden-dependency matcher.

use std::sync::OnceLock;

use crate::dependency::Dependency;
use crate::errors::ConfigError;
use crate::pattern::CoordinatePattern;
use crate::range::VersionRangeSpec;

/// A compiled forbidden-dependency matcher: coordinate pattern plus version
/// range. Read-only once built; freely shared across threads.
#[derive(Debug, Clone)]
pub struct DependencyMatcher {
    pattern: CoordinatePattern,
    range: VersionRangeSpec,
}

impl DependencyMatcher {
    /// Compile both halves of a rule configuration. The first error wins;
    /// no partial matcher is ever returned.
    pub fn build(dependency_pattern: &str, version_range: &str) -> Result<Self, ConfigError> {
        let pattern = CoordinatePattern::compile(dependency_pattern)?;
        let range = VersionRangeSpec::parse(version_range)?;
        Ok(Self { pattern, range })
    }

    /// Whether the dependency is forbidden. The coordinate check runs first,
    /// short-circuiting the version comparison.
    pub fn matches(&self, dependency: &Dependency) -> bool {
        self.pattern
            .matches(&dependency.group_id, &dependency.artifact_id)
            && self.range.contains(&dependency.version)
    }
}

/// A matcher compiled on first use and memoized for the lifetime of its
/// rule configuration.
///
/// Concurrent first calls trigger at most one compilation; every caller
/// observes the same completed matcher or the same failure, and the failure
/// is permanent for this configuration.
#[derive(Debug)]
pub struct LazyMatcher {
    dependency_pattern: String,
    version_range: String,
    cell: OnceLock<Result<DependencyMatcher, ConfigError>>,
}

impl LazyMatcher {
    pub fn new(dependency_pattern: impl Into<String>, version_range: impl Into<String>) -> Self {
        Self {
            dependency_pattern: dependency_pattern.into(),
            version_range: version_range.into(),
            cell: OnceLock::new(),
        }
    }

    /// The compiled matcher, building it on first call.
    pub fn get(&self) -> Result<&DependencyMatcher, ConfigError> {
        self.cell
            .get_or_init(|| DependencyMatcher::build(&self.dependency_pattern, &self.version_range))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Convenience for `get()?.matches(dependency)`.
    pub fn matches(&self, dependency: &Dependency) -> Result<bool, ConfigError> {
        Ok(self.get()?.matches(dependency))
    }
}
