//! Error types for the geojson-tree crate.

use thiserror::Error;

/// Errors surfaced by this crate.
///
/// Parsing itself is total: malformed sub-structures degrade (see the
/// `parser` module) instead of failing the document, so the only fallible
/// public operation is loading a document from disk.
#[derive(Error, Debug)]
pub enum GeoJsonError {
    /// The input file could not be read.
    #[error("failed to read input file: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout geojson-tree.
pub type Result<T> = std::result::Result<T, GeoJsonError>;
