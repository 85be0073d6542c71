//! Rule driver for the depveto dependency checker.
//!
//! Loads forbidden-dependency rules from a TOML ruleset, collects the
//! dependencies declared in a Maven POM descriptor, and reports a finding
//! for every declaration a rule forbids.

pub mod collector;
pub mod disallowed;
pub mod finding;
pub mod ruleset;
