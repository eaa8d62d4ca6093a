//! # Placement Errors
//!
//! Error types for the placement accumulator and the base/support
//! builders.
//!
//! ## Error Policy
//!
//! - Every failure aborts the current layout pass
//! - No partial layout is ever returned; the caller retries with
//!   different input if it wants to

use ambigram_geom::GeomError;
use ambigram_layout::LayoutError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while placing an ambigram or building its bases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaceError {
    /// Sequence pairing failed.
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    /// The geometry kernel failed.
    #[error("Geometry error: {0}")]
    Geom(#[from] GeomError),

    /// A support was requested for a name that is not a placed letter.
    #[error("Assembly has no letter named {0:?}")]
    UnknownLetter(String),

    /// Support builder called with insufficient parameters.
    #[error("Invalid support parameters: {0}")]
    InvalidSupport(String),

    /// A base was requested under an assembly with no members.
    #[error("Assembly has no members to build a base under")]
    EmptyAssembly,
}

/// Result type alias for placement operations.
pub type PlaceResult<T> = Result<T, PlaceError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlaceError::InvalidSupport("a cylinder needs both a height and a radius".into());
        assert!(err.to_string().contains("Invalid support"));
    }

    #[test]
    fn test_layout_error_converts() {
        let err: PlaceError = LayoutError::EmptyInput.into();
        assert!(matches!(err, PlaceError::Layout(LayoutError::EmptyInput)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PlaceError>();
    }
}
