use depveto_core::errors::ConfigError;
use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all depveto operations.
#[derive(Debug, Error, Diagnostic)]
pub enum DepvetoError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or unreadable build descriptor (e.g. pom.xml).
    #[error("Descriptor error: {message}")]
    #[diagnostic(help("Check that the descriptor is well-formed XML"))]
    Descriptor { message: String },

    /// Invalid or unreadable ruleset file.
    #[error("Ruleset error: {message}")]
    #[diagnostic(help("Check your ruleset TOML for syntax errors"))]
    Ruleset { message: String },

    /// A rule's pattern or version configuration failed to compile.
    #[error("[{rule}] Unable to build matcher from rule configuration")]
    Rule {
        rule: String,
        #[source]
        #[diagnostic_source]
        source: ConfigError,
    },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type DepvetoResult<T> = miette::Result<T>;
