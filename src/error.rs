// src/error.rs

//! Crate-wide error type for catalog loading and recipe resolution.

use std::collections::{BTreeMap, BTreeSet};

/// Errors produced while loading recipe catalogs or resolving build orders.
///
/// User-facing failures (`Conflict`, `NoValidOrder`) are distinct variants
/// from `Internal`, which signals a resolver or catalog bug rather than a
/// problem with the requirements.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Two requested recipes provably can never coexist, regardless of which
    /// alternative dependencies get chosen. Raised by the preflight pass
    /// before enumeration starts.
    #[error("conflict detected: {first} conflicts with {second}")]
    Conflict { first: String, second: String },

    /// One candidate dependency graph contains a cycle. Recoverable inside
    /// [`resolve`](crate::resolve): the candidate is dropped and resolution
    /// continues with the remaining candidates.
    #[error("dependency cycle detected: {remaining:?}")]
    DependencyCycle {
        /// The residual dependency map that could not be linearized further.
        remaining: BTreeMap<String, BTreeSet<String>>,
    },

    /// Enumeration and sorting left no usable build order.
    #[error("didn't find any valid dependency graphs; the requirements pull in conflicting dependencies")]
    NoValidOrder,

    /// An internal invariant was violated.
    #[error("internal consistency violation: {0}")]
    Internal(String),

    /// Failed to read a recipe file or directory.
    #[error("IO error: {0}")]
    IoError(String),

    /// A recipe file was not valid TOML or failed validation.
    #[error("parse error: {0}")]
    ParseError(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
