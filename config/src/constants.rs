//! # Configuration Constants
//!
//! Centralized constants for the ambigram layout pipeline. Typography
//! defaults, delimiter policy defaults, and safety bounds are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Typography**: Default font size and letter spacing
//! - **Delimiters**: Default delimiter element
//! - **Limits**: Safety bounds on fixed-point iterations

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used when comparing cursor positions and bounding-box extents, which
/// accumulate small errors across a layout pass.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// TYPOGRAPHY CONSTANTS
// =============================================================================

/// Default font size in model units.
///
/// The height of each letter along Z; the extrusion depth of a realized
/// pair also defaults to this value so the intersection is cubical.
pub const DEFAULT_FONT_SIZE: f64 = 16.0;

/// Divisor deriving the default letter spacing from the font size.
///
/// When no explicit letter spacing is configured, the spacing between
/// letters is `font_size / SPACING_DIVISOR`.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_FONT_SIZE, SPACING_DIVISOR};
///
/// let spacing = DEFAULT_FONT_SIZE / SPACING_DIVISOR;
/// assert_eq!(spacing, 1.0);
/// ```
pub const SPACING_DIVISOR: f64 = 16.0;

// =============================================================================
// DELIMITER CONSTANTS
// =============================================================================

/// Default delimiter element separating words in an input sequence.
///
/// Delimiter elements never receive paired content and are realized as
/// empty space sized by the blank probe pair.
pub const DEFAULT_DELIMITER: char = ' ';

/// Probe glyph used to size the blank bounding box.
///
/// A delimiter pair adds no solid to the assembly; the cursor still has
/// to advance by the footprint of *some* realized pair, so the probe
/// pair `(BLANK_PROBE_GLYPH, BLANK_PROBE_GLYPH)` is realized once and
/// only its bounding box is kept.
pub const BLANK_PROBE_GLYPH: char = 'A';

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of mutations the column repair pass may perform.
///
/// The repair pass is a fixed-point iteration that restarts its scan
/// after every mutation. Each mutation shifts a content element exactly
/// one column earlier, so the loop terminates for well-formed input;
/// this cap turns an unexpected divergence into an error instead of a
/// hang.
pub const REPAIR_ITERATION_CAP: usize = 10_000;
