//! # Ambigram Layout
//!
//! Sequence pairing for 3D ambigram layout.
//!
//! ## Architecture
//!
//! ```text
//! (text, text) → ambigram-layout (columns) → ambigram-place (assembly)
//! ```
//!
//! Two sequences are interleaved into ordered columns: each column
//! carries one element of the shorter sequence (the lead) and the slice
//! of the longer sequence stacked behind it. Downstream placement turns
//! every (lead, tail element) pair into one solid.
//!
//! ## Example
//!
//! ```rust
//! use ambigram_layout::{merge_strings, MergeOptions};
//!
//! let columns = merge_strings("ABCDEFG", "HIJKLMNOPQRSTUVWXYZ", &MergeOptions::default()).unwrap();
//! assert_eq!(columns.len(), 7);
//! assert_eq!(columns[0].tail, vec!['H', 'I', 'J']);
//! ```

pub mod column;
pub mod error;
pub mod merge;

// Re-export public API
pub use column::{BorrowDirection, Column, MergeOptions};
pub use error::{LayoutError, LayoutResult};
pub use merge::{merge_strings, repair_columns};
