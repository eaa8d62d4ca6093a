//! # Placement Options
//!
//! Configuration consumed by the placement accumulator and the support
//! builders. One configuration is fixed for a whole layout pass.

use ambigram_layout::{BorrowDirection, MergeOptions};
use config::constants::{DEFAULT_DELIMITER, DEFAULT_FONT_SIZE, SPACING_DIVISOR};
use serde::{Deserialize, Serialize};

// =============================================================================
// AMBIGRAM CONFIG
// =============================================================================

/// Configuration for one ambigram layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmbigramConfig {
    /// Letter height along Z, and the extrusion depth of each pair.
    pub font_size: f64,
    /// Gap between letters; `None` derives `font_size / 16`.
    pub letter_spacing: Option<f64>,
    /// The delimiter element.
    pub delimiter: char,
    /// Exclude delimiters from distribution and pair nothing behind them.
    pub ignore_delimiter: bool,
    /// Permit content leads with delimiter-only tails (skips repair).
    pub allow_delimiter_column: bool,
    /// Repair-pass borrow direction.
    pub borrow: BorrowDirection,
}

impl Default for AmbigramConfig {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            letter_spacing: None,
            delimiter: DEFAULT_DELIMITER,
            ignore_delimiter: true,
            allow_delimiter_column: false,
            borrow: BorrowDirection::Backward,
        }
    }
}

impl AmbigramConfig {
    /// Resolved letter spacing.
    pub fn spacing(&self) -> f64 {
        self.letter_spacing
            .unwrap_or(self.font_size / SPACING_DIVISOR)
    }

    /// Delimiter policy handed to the sequence pairer.
    pub fn merge_options(&self) -> MergeOptions {
        MergeOptions {
            delimiter: self.delimiter,
            ignore_delimiter: self.ignore_delimiter,
            allow_delimiter_column: self.allow_delimiter_column,
            borrow: self.borrow,
        }
    }
}

// =============================================================================
// SUPPORT PARAMS
// =============================================================================

/// Pedestal parameters for the letter-support builders.
///
/// A support is an optional cylinder and/or an optional rectangular slab
/// matching the letter's footprint; when both are present the slab sits
/// between the letter and the cylinder. At least one of the two must be
/// requested, and a cylinder needs both its height and its radius.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SupportParams {
    /// Cylinder height along Z.
    pub cylinder_height: Option<f64>,
    /// Cylinder radius in XY.
    pub cylinder_radius: Option<f64>,
    /// Slab height along Z.
    pub rect_height: Option<f64>,
}

// =============================================================================
// TESTS
// =============================================================================
