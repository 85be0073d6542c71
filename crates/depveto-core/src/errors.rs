use miette::Diagnostic;
use thiserror::Error;

/// A rule configuration that could not be compiled into a matcher.
///
/// Detected once, at matcher build time. `Clone` so a lazily-built matcher
/// can cache the failure and hand it to every subsequent caller without
/// re-parsing the configuration.
#[derive(Debug, Clone, Error, Diagnostic)]
pub enum ConfigError {
    /// The coordinate pattern was blank.
    #[error("dependency pattern is empty")]
    #[diagnostic(help("Provide a pattern of the form 'group:artifact', e.g. '*:log4j'"))]
    EmptyPattern,

    /// The coordinate pattern did not have exactly one `:` separator.
    #[error("malformed dependency pattern '{pattern}': expected exactly one ':' separator")]
    #[diagnostic(help("Provide a pattern of the form 'group:artifact', e.g. 'org.apache.*:*'"))]
    MalformedPattern { pattern: String },

    /// The version range expression had an unrecognized shape.
    #[error("malformed version range '{range}'")]
    #[diagnostic(help(
        "Use a blank range for all versions, a prefix wildcard like '1.3.*', \
         or a dash range like '1.0-3.1', '1.0-*' or '*-3.1'"
    ))]
    MalformedRange { range: String },
}
