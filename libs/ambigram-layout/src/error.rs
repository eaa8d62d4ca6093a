//! # Layout Errors
//!
//! Error types for sequence pairing and column repair.
//!
//! ## Error Policy
//!
//! - All failures are explicit errors, never silently-corrected input
//! - Repair-pass failures indicate a pairer defect, not bad user input

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while pairing two sequences into columns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// One of the input sequences is empty.
    #[error("Input sequence is empty")]
    EmptyInput,

    /// A sequence starts or ends with the delimiter under strict mode.
    ///
    /// Only raised when `ignore_delimiter` is set; trim the input first.
    #[error("Sequence {0:?} starts or ends with the delimiter; strip it first")]
    DelimiterAtEdge(String),

    /// The repair pass found no adjacent tail element to borrow.
    ///
    /// The pairer's distribution guarantees a donor exists, so hitting
    /// this means an internal defect rather than bad input.
    #[error("Column repair found no element to borrow at column {0}")]
    RepairUnderflow(usize),

    /// The repair pass exceeded its iteration cap without converging.
    #[error("Column repair did not converge after {0} mutations")]
    RepairDiverged(usize),
}

/// Result type alias for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;

// =============================================================================
// TESTS
// =============================================================================
