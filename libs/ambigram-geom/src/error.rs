//! # Geometry Errors
//!
//! Error types for the geometry collaborator boundary.
//!
//! ## Error Policy
//!
//! - Kernel failures are never retried; they abort the current layout
//! - No partial assembly is valid after a failure

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur at the geometry kernel boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeomError {
    /// The kernel failed to realize a letter pair (e.g. missing glyph).
    #[error("Failed to realize pair ({lead:?}, {tail:?}): {message}")]
    Realization {
        /// Lead element of the failed pair.
        lead: char,
        /// Tail element of the failed pair.
        tail: char,
        /// Kernel-provided failure detail.
        message: String,
    },

    /// A polygon outline was unusable for extrusion.
    #[error("Degenerate polygon: {0}")]
    DegeneratePolygon(String),

    /// An assembly entry name was added twice.
    #[error("Assembly already contains an entry named {0:?}")]
    DuplicateName(String),
}

/// Result type alias for geometry operations.
pub type GeomResult<T> = Result<T, GeomError>;

// =============================================================================
// TESTS
// =============================================================================
