//! The disallowed-dependencies rule.

use depveto_core::matcher::LazyMatcher;
use depveto_util::errors::DepvetoError;

use crate::collector::ScannedDependency;
use crate::finding::Finding;
use crate::ruleset::RuleConfig;

/// Message reported when a rule does not configure its own.
pub const DEFAULT_MESSAGE: &str = "Remove this forbidden dependency.";

/// A configured rule that flags dependencies matching a coordinate pattern
/// and version range.
///
/// The matcher is compiled on the first `check` call and reused for every
/// dependency afterwards; a configuration error is reported on every call
/// without re-parsing.
#[derive(Debug)]
pub struct DisallowedDependencies {
    config: RuleConfig,
    matcher: LazyMatcher,
}

impl DisallowedDependencies {
    pub fn new(config: RuleConfig) -> Self {
        let matcher = LazyMatcher::new(config.dependency.clone(), config.version.clone());
        Self { config, matcher }
    }

    pub fn key(&self) -> &str {
        &self.config.key
    }

    /// Check every scanned dependency, returning a finding per hit.
    pub fn check(&self, dependencies: &[ScannedDependency]) -> miette::Result<Vec<Finding>> {
        let matcher = self.matcher.get().map_err(|source| DepvetoError::Rule {
            rule: self.config.key.clone(),
            source,
        })?;

        let message = self
            .config
            .message
            .clone()
            .unwrap_or_else(|| DEFAULT_MESSAGE.to_string());

        let mut findings = Vec::new();
        for scanned in dependencies {
            if matcher.matches(&scanned.dependency) {
                tracing::debug!(
                    rule = %self.config.key,
                    dependency = %scanned.dependency,
                    "forbidden dependency"
                );
                findings.push(Finding {
                    rule: self.config.key.clone(),
                    dependency: scanned.dependency.clone(),
                    line: scanned.line,
                    message: message.clone(),
                });
            }
        }
        Ok(findings)
    }
}
