//! Error types
//!
//! Request-level problems surface as typed failures; catalog-level problems
//! are recovered locally (the offending template is logged and skipped) and
//! never abort generation.

use thiserror::Error;

/// A generation request the engine refuses to honor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// Item levels start at 1
    #[error("invalid item level {0}; levels start at 1")]
    InvalidItemLevel(u32),

    /// A base item without tags can never match any affix
    #[error("base item `{0}` has no tags")]
    UntaggedBaseItem(String),

    /// Bulk generation was asked to draw from an empty base item pool
    #[error("no base items to draw from")]
    EmptyBasePool,
}

/// Failure to read or parse catalog data files
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("failed to serialize catalog: {0}")]
    Serialize(#[from] ron::Error),
}
