//! # Column Types
//!
//! Data types for the paired-column representation of two sequences.
//!
//! A column is one placement step: the shorter sequence contributes the
//! `lead` element, the longer sequence contributes the `tail` slice
//! stacked behind it.

use serde::{Deserialize, Serialize};

// =============================================================================
// COLUMN
// =============================================================================

/// One column of a merged sequence pair.
///
/// Concatenating all leads in order reconstructs the shorter sequence;
/// concatenating all tails in order reconstructs the longer one. The
/// repair pass preserves both properties because it only moves elements
/// between adjacent tails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Element from the shorter sequence driving this column.
    pub lead: char,
    /// Elements from the longer sequence stacked behind the lead.
    pub tail: Vec<char>,
}

impl Column {
    /// Create a column with an empty tail.
    pub fn new(lead: char) -> Self {
        Self {
            lead,
            tail: Vec::new(),
        }
    }

    /// Create a column with the given tail.
    pub fn with_tail(lead: char, tail: Vec<char>) -> Self {
        Self { lead, tail }
    }

    /// Whether the lead is the delimiter element.
    pub fn is_delimiter_lead(&self, delimiter: char) -> bool {
        self.lead == delimiter
    }

    /// Whether the tail is non-empty and consists only of delimiters.
    ///
    /// Such a column is visually empty along one viewing axis while
    /// still occupying a placement slot; the repair pass removes them.
    pub fn tail_is_all_delimiter(&self, delimiter: char) -> bool {
        !self.tail.is_empty() && self.tail.iter().all(|&c| c == delimiter)
    }
}

// =============================================================================
// MERGE OPTIONS
// =============================================================================

/// Direction the repair pass borrows from when fixing a degenerate column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BorrowDirection {
    /// Borrow the previous column's last tail element (historical default).
    #[default]
    Backward,
    /// Borrow the next column's first tail element.
    Forward,
}

/// Delimiter policy for [`merge_strings`](crate::merge_strings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOptions {
    /// The distinguished delimiter element.
    pub delimiter: char,
    /// Exclude delimiters from length accounting and never pair content
    /// behind a delimiter lead. Requires delimiter-free sequence edges.
    pub ignore_delimiter: bool,
    /// Permit a content lead whose tail is entirely delimiters.
    ///
    /// When false (and `ignore_delimiter` is set), the repair pass
    /// migrates content into such columns.
    pub allow_delimiter_column: bool,
    /// Repair-pass borrow direction.
    pub borrow: BorrowDirection,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            delimiter: config::constants::DEFAULT_DELIMITER,
            ignore_delimiter: false,
            allow_delimiter_column: false,
            borrow: BorrowDirection::Backward,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
