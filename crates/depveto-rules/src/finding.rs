//! Findings produced by the rule driver.

use std::fmt;

use serde::Serialize;

use depveto_core::dependency::Dependency;

/// A single forbidden-dependency hit.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub rule: String,
    pub dependency: Dependency,
    /// 1-based line of the declaration in the descriptor, when known.
    pub line: Option<u64>,
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(
                f,
                "line {line}: {} [{}] {}",
                self.dependency, self.rule, self.message
            ),
            None => write!(f, "{} [{}] {}", self.dependency, self.rule, self.message),
        }
    }
}

/// All findings for one descriptor.
#[derive(Debug, Default, Serialize)]
pub struct FindingReport {
    pub findings: Vec<Finding>,
}

impl FindingReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, findings: Vec<Finding>) {
        self.findings.extend(findings);
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }
}

impl fmt::Display for FindingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.findings.is_empty() {
            return write!(f, "No forbidden dependencies.");
        }
        writeln!(f, "Forbidden dependencies ({}):", self.findings.len())?;
        for finding in &self.findings {
            writeln!(f, "  {finding}")?;
        }
        Ok(())
    }
}
