//! Matching engine for forbidden Maven dependencies.
//!
//! This crate decides whether a `(groupId, artifactId, version)` triple is
//! forbidden by a rule configuration. A rule supplies two strings: a
//! coordinate pattern (`group:artifact`, wildcards via `*`) and a version
//! range expression (blank for all versions, a prefix wildcard like `1.3.*`,
//! or a dash range like `1.0-3.1` with `*` for an open side).
//!
//! This crate is intentionally free of file, format, and reporting concerns;
//! those live in `depveto-rules` and the CLI.

pub mod dependency;
pub mod errors;
pub mod matcher;
pub mod pattern;
pub mod range;
pub mod version;
