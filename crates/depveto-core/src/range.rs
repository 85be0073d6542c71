//! Version range expressions for forbidden-dependency rules.
//!
//! Three shapes are recognized: blank (all versions), a trailing prefix
//! wildcard (`1.3.*`), and an inclusive dash range (`1.0-3.1`) where either
//! side may be `*` to leave that bound open.

use crate::errors::ConfigError;
use crate::version::MavenVersion;
use std::cmp::Ordering;

/// A compiled version range predicate.
#[derive(Debug, Clone)]
pub enum VersionRangeSpec {
    /// Blank configuration: every version matches.
    Unbounded,
    /// `1.3.*`: any version equal to the prefix or extending it by further
    /// dot-delimited segments.
    PrefixWildcard { prefix: String },
    /// Inclusive bounds; an absent side is open.
    Bounded {
        lower: Option<MavenVersion>,
        upper: Option<MavenVersion>,
    },
}

impl VersionRangeSpec {
    /// Compile a version range expression.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Self::Unbounded);
        }

        if text.contains('-') {
            return Self::parse_dash_range(text);
        }

        if text.contains('*') {
            // Only a lone `*` or a trailing `.*` after a literal prefix is a
            // well-formed wildcard.
            if text == "*" {
                return Ok(Self::Unbounded);
            }
            return match text.strip_suffix(".*") {
                Some(prefix) if !prefix.is_empty() && !prefix.contains('*') => {
                    Ok(Self::PrefixWildcard {
                        prefix: prefix.to_string(),
                    })
                }
                _ => Err(ConfigError::MalformedRange {
                    range: text.to_string(),
                }),
            };
        }

        // A bare literal forbids exactly that version.
        let exact = MavenVersion::parse(text);
        Ok(Self::Bounded {
            lower: Some(exact.clone()),
            upper: Some(exact),
        })
    }

    fn parse_dash_range(text: &str) -> Result<Self, ConfigError> {
        let mut sides = text.split('-');
        let (lower, upper) = match (sides.next(), sides.next(), sides.next()) {
            (Some(lower), Some(upper), None) => (lower, upper),
            _ => {
                return Err(ConfigError::MalformedRange {
                    range: text.to_string(),
                })
            }
        };

        let lower = Self::parse_bound(lower, text)?;
        let upper = Self::parse_bound(upper, text)?;
        if lower.is_none() && upper.is_none() {
            // `*-*` leaves both sides open.
            return Ok(Self::Unbounded);
        }
        Ok(Self::Bounded { lower, upper })
    }

    fn parse_bound(side: &str, range: &str) -> Result<Option<MavenVersion>, ConfigError> {
        match side {
            "*" => Ok(None),
            "" => Err(ConfigError::MalformedRange {
                range: range.to_string(),
            }),
            literal if literal.contains('*') => Err(ConfigError::MalformedRange {
                range: range.to_string(),
            }),
            literal => Ok(Some(MavenVersion::parse(literal))),
        }
    }

    /// Whether a version falls inside this range. Total over any input.
    pub fn contains(&self, version: &str) -> bool {
        match self {
            Self::Unbounded => true,
            Self::PrefixWildcard { prefix } => {
                // Segment-wise prefix: the version equals the prefix or
                // continues it past a dot, so `1.3.*` rejects `1.30.0`.
                version == prefix
                    || version
                        .strip_prefix(prefix.as_str())
                        .is_some_and(|rest| rest.starts_with('.'))
            }
            Self::Bounded { lower, upper } => {
                let v = MavenVersion::parse(version);
                if let Some(lower) = lower {
                    if v.cmp(lower) == Ordering::Less {
                        return false;
                    }
                }
                if let Some(upper) = upper {
                    if v.cmp(upper) == Ordering::Greater {
                        return false;
                    }
                }
                true
            }
        }
    }
}
