//! Shared utilities for the depveto dependency checker.
//!
//! This crate provides the cross-cutting concerns used by the other depveto
//! crates: the unified error type and terminal status output.

pub mod errors;
pub mod progress;
