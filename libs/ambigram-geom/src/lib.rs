//! # Ambigram Geom
//!
//! Geometry collaborator seam for the ambigram pipeline.
//!
//! ## Architecture
//!
//! ```text
//! ambigram-layout (columns) → ambigram-place ⇄ ambigram-geom (kernel seam)
//! ```
//!
//! The layout core drives an external solid-modeling kernel through the
//! [`GeometryKernel`] trait and stores the resulting solids in an
//! ordered, append-only [`Assembly`]. No boolean geometry is implemented
//! here; the kernel is the collaborator that does the actual
//! construction.

pub mod assembly;
pub mod bbox;
pub mod error;
pub mod kernel;

#[cfg(any(test, feature = "testkernel"))]
pub mod testkernel;

// Re-export public API
pub use assembly::{is_letter_name, Assembly, BASE_NAME, SUPPORT_PREFIX};
pub use bbox::BoundingBox;
pub use error::{GeomError, GeomResult};
pub use kernel::GeometryKernel;
