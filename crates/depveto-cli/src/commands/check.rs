//! Handler for `depveto check`.

use std::path::Path;

use miette::Result;

use depveto_rules::collector;
use depveto_rules::disallowed::DisallowedDependencies;
use depveto_rules::finding::FindingReport;
use depveto_rules::ruleset::{RuleConfig, RuleSet};
use depveto_util::errors::DepvetoError;
use depveto_util::progress;

use crate::cli::OutputFormat;

pub fn exec(
    descriptor: &Path,
    rules: Option<&Path>,
    deny: Option<&str>,
    versions: &str,
    format: OutputFormat,
) -> Result<()> {
    let ruleset = load_ruleset(rules, deny, versions)?;

    if !descriptor.is_file() {
        return Err(DepvetoError::Descriptor {
            message: format!("No descriptor found at {}", descriptor.display()),
        }
        .into());
    }

    let dependencies = collector::scan_pom_file(descriptor)?;
    tracing::debug!(
        descriptor = %descriptor.display(),
        count = dependencies.len(),
        "collected dependencies"
    );
    progress::status(
        "Checking",
        &format!(
            "{} ({} dependencies, {} rules)",
            descriptor.display(),
            dependencies.len(),
            ruleset.rules.len()
        ),
    );

    let mut report = FindingReport::new();
    for config in ruleset.rules {
        let rule = DisallowedDependencies::new(config);
        report.extend(rule.check(&dependencies)?);
    }

    match format {
        OutputFormat::Text => {
            for finding in &report.findings {
                progress::status_warn("Forbidden", &finding.to_string());
            }
            println!("{report}");
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).map_err(|e| {
                DepvetoError::Generic {
                    message: format!("Failed to serialize findings: {e}"),
                }
            })?;
            println!("{json}");
        }
    }

    if report.is_empty() {
        Ok(())
    } else {
        let noun = if report.len() == 1 {
            "dependency"
        } else {
            "dependencies"
        };
        Err(DepvetoError::Generic {
            message: format!("{} forbidden {noun} found", report.len()),
        }
        .into())
    }
}

/// Build the effective ruleset from `--rules` or an ad-hoc `--deny` rule.
fn load_ruleset(rules: Option<&Path>, deny: Option<&str>, versions: &str) -> Result<RuleSet> {
    match (rules, deny) {
        (Some(path), None) => RuleSet::from_path(path),
        (None, Some(pattern)) => Ok(RuleSet {
            rules: vec![RuleConfig {
                key: "deny".to_string(),
                dependency: pattern.to_string(),
                version: versions.to_string(),
                message: None,
            }],
        }),
        _ => Err(DepvetoError::Ruleset {
            message: "Provide either --rules FILE or --deny PATTERN".to_string(),
        }
        .into()),
    }
}
