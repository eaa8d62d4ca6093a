//! # Ambigram Place
//!
//! Placement accumulator and base/support builders for 3D ambigrams.
//!
//! ## Architecture
//!
//! ```text
//! ambigram-layout (columns) → ambigram-place (assembly + extent stats)
//!                                   ⇅
//!                        ambigram-geom (kernel seam)
//! ```
//!
//! One call to [`layout_ambigram`] pairs the two sequences, realizes
//! every letter pair through the geometry kernel, and returns a fresh
//! [`Layout`]: the placed assembly plus the per-column extent vector.
//! The base and support builders then append derived solids to the same
//! layout.
//!
//! ## Example
//!
//! ```rust
//! use ambigram_geom::testkernel::SlabKernel;
//! use ambigram_place::{add_base_p2p, layout_ambigram, AmbigramConfig};
//!
//! let kernel = SlabKernel::new(16.0);
//! let mut layout =
//!     layout_ambigram(&kernel, "AMBIGRAM", "CADQUERY", &AmbigramConfig::default()).unwrap();
//! add_base_p2p(&kernel, &mut layout, 1.6, 1.6).unwrap();
//! assert_eq!(layout.assembly.len(), 9);
//! ```

pub mod accumulate;
pub mod base;
pub mod error;
pub mod options;

// Re-export public API
pub use accumulate::{layout_ambigram, Layout};
pub use base::{
    add_base_notched, add_base_p2p, add_base_rectangle, add_letter_support,
    add_letter_support_to_all, assembly_bounds,
};
pub use error::{PlaceError, PlaceResult};
pub use options::{AmbigramConfig, SupportParams};

#[cfg(test)]
mod tests;
