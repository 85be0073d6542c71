use std::path::Path;

use serde::{Deserialize, Serialize};

use depveto_util::errors::DepvetoError;

/// Configuration for a single forbidden-dependency rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Identifier used in findings and error messages.
    pub key: String,

    /// Pattern describing the forbidden group and artifact ids,
    /// e.g. `*:*log4j` or `x.y:*`.
    pub dependency: String,

    /// Version pattern or dash-delimited range. Blank forbids all versions.
    /// E.g. `1.3.*`, `1.0-3.1`, `1.0-*` or `*-3.1`.
    #[serde(default)]
    pub version: String,

    /// Message reported with each finding; a default is used when absent.
    #[serde(default)]
    pub message: Option<String>,
}

/// The parsed representation of a ruleset TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

impl RuleSet {
    /// Load and parse a ruleset file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DepvetoError::Ruleset {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::from_str(&content)
    }

    /// Parse a ruleset from a string.
    pub fn from_str(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            DepvetoError::Ruleset {
                message: format!("Failed to parse ruleset: {e}"),
            }
            .into()
        })
    }
}
