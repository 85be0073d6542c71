//! Coordinate wildcard patterns (`group:artifact`).

use regex::Regex;

use crate::errors::ConfigError;

/// A compiled `group:artifact` wildcard pattern.
///
/// Each segment is compiled independently: `*` matches any run of
/// characters (including none) within its segment, everything else matches
/// literally. Matching is case-sensitive and anchored to the whole segment,
/// so a wildcard never crosses the `:` boundary.
#[derive(Debug, Clone)]
pub struct CoordinatePattern {
    group: Regex,
    artifact: Regex,
}

impl CoordinatePattern {
    /// Compile a pattern of the form `<groupExpr>:<artifactExpr>`.
    pub fn compile(pattern: &str) -> Result<Self, ConfigError> {
        if pattern.trim().is_empty() {
            return Err(ConfigError::EmptyPattern);
        }

        let mut parts = pattern.split(':');
        let (group, artifact) = match (parts.next(), parts.next(), parts.next()) {
            (Some(group), Some(artifact), None) => (group, artifact),
            _ => {
                return Err(ConfigError::MalformedPattern {
                    pattern: pattern.to_string(),
                })
            }
        };

        Ok(Self {
            group: compile_segment(group),
            artifact: compile_segment(artifact),
        })
    }

    /// Whether both segments match the given coordinates.
    pub fn matches(&self, group_id: &str, artifact_id: &str) -> bool {
        self.group.is_match(group_id) && self.artifact.is_match(artifact_id)
    }
}

/// Compile one segment expression into an anchored regex: `*` becomes `.*`,
/// every other character (including regex metacharacters like `.`) matches
/// itself.
fn compile_segment(segment: &str) -> Regex {
    let mut pattern = String::with_capacity(segment.len() + 2);
    pattern.push('^');
    for (i, part) in segment.split('*').enumerate() {
        if i > 0 {
            pattern.push_str(".*");
        }
        pattern.push_str(&regex::escape(part));
    }
    pattern.push('$');
    // Escaped literals joined by `.*` are always a valid regex.
    Regex::new(&pattern).expect("valid segment pattern")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_pattern_is_exact() {
        let p = CoordinatePattern::compile("org.example:my-lib").unwrap();
        assert!(p.matches("org.example", "my-lib"));
        assert!(!p.matches("org.example", "my-lib2"));
        assert!(!p.matches("org.examplX", "my-lib"));
        // The dot in the group is literal, not "any character".
        assert!(!p.matches("orgXexample", "my-lib"));
    }

    #[test]
    fn full_wildcard_matches_everything() {
        let p = CoordinatePattern::compile("*:*").unwrap();
        assert!(p.matches("org.apache", "x"));
        assert!(p.matches("", ""));
    }

    #[test]
    fn trailing_wildcard_in_group() {
        let p = CoordinatePattern::compile("org.apache.*:*").unwrap();
        assert!(p.matches("org.apache.logging", "log4j-core"));
        // `*` matches zero characters, so the bare `org.apache.` also hits.
        assert!(p.matches("org.apache.", "x"));
        assert!(!p.matches("org.apache", "x"));
    }

    #[test]
    fn interior_and_leading_wildcards() {
        let p = CoordinatePattern::compile("*:*log4j*").unwrap();
        assert!(p.matches("anything", "log4j"));
        assert!(p.matches("anything", "old-log4j-core"));
        assert!(!p.matches("anything", "logback"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let p = CoordinatePattern::compile("org.example:artifact").unwrap();
        assert!(!p.matches("Org.Example", "artifact"));
        assert!(!p.matches("org.example", "Artifact"));
    }

    #[test]
    fn empty_pattern_rejected() {
        assert!(matches!(
            CoordinatePattern::compile(""),
            Err(ConfigError::EmptyPattern)
        ));
        assert!(matches!(
            CoordinatePattern::compile("   "),
            Err(ConfigError::EmptyPattern)
        ));
    }

    #[test]
    fn separator_count_enforced() {
        assert!(matches!(
            CoordinatePattern::compile("no-separator"),
            Err(ConfigError::MalformedPattern { .. })
        ));
        assert!(matches!(
            CoordinatePattern::compile("a:b:c"),
            Err(ConfigError::MalformedPattern { .. })
        ));
    }
}
