//! # Config Crate
//!
//! Centralized configuration constants for the ambigram layout pipeline.
//! All magic numbers and tunable defaults are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_FONT_SIZE, SPACING_DIVISOR, EPSILON};
//!
//! // Derive the default letter spacing from the font size
//! let spacing = DEFAULT_FONT_SIZE / SPACING_DIVISOR;
//! assert_eq!(spacing, 1.0);
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 1e-11;
//! assert!(value.abs() < EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure constants, usable from every crate
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
