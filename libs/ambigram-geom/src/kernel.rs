//! # Geometry Kernel
//!
//! The trait boundary to the external solid-modeling kernel.
//!
//! The layout core never performs boolean geometry itself: text meshing,
//! intersection, extrusion and union are delegated through this trait.
//! Implementations wrap a real CAD kernel; the in-tree `SlabKernel`
//! (feature `testkernel`) provides a deterministic stand-in for tests.

use crate::bbox::BoundingBox;
use crate::error::GeomResult;
use glam::{DVec2, DVec3};

// =============================================================================
// GEOMETRY KERNEL TRAIT
// =============================================================================

/// External solid-modeling collaborator.
///
/// All glyph realization uses one font/size configuration fixed for the
/// whole layout run; that configuration lives in the implementation.
///
/// ## Coordinate contracts
///
/// - [`realize_pair`](Self::realize_pair) returns a solid whose bounding
///   box has its minimum corner at the origin; the caller translates it
///   into place.
/// - [`extrude_polygon`](Self::extrude_polygon) extrudes an XY outline
///   at `z = 0` upward by `height`.
/// - [`box_solid`](Self::box_solid) spans the origin to `size`.
/// - [`cylinder`](Self::cylinder) is centered on the Z axis with its
///   base at `z = 0`.
pub trait GeometryKernel {
    /// Opaque solid handle owned by the kernel.
    type Solid: Clone;

    /// Build the intersection solid for a letter pair: `lead` visible
    /// along one viewing axis, `tail` (rotated 90° about Z) along the
    /// perpendicular axis.
    fn realize_pair(&self, lead: char, tail: char) -> GeomResult<Self::Solid>;

    /// Axis-aligned bounding box of a solid.
    fn bounding_box(&self, solid: &Self::Solid) -> BoundingBox;

    /// Translate a solid by `offset`.
    fn translate(&self, solid: Self::Solid, offset: DVec3) -> Self::Solid;

    /// Extrude a closed XY outline upward by `height`.
    fn extrude_polygon(&self, points: &[DVec2], height: f64) -> GeomResult<Self::Solid>;

    /// Axis-aligned box spanning the origin to `size`.
    fn box_solid(&self, size: DVec3) -> GeomResult<Self::Solid>;

    /// Upright cylinder, base at the origin, centered in XY.
    fn cylinder(&self, height: f64, radius: f64) -> GeomResult<Self::Solid>;

    /// Boolean union of two solids.
    fn union(&self, a: Self::Solid, b: &Self::Solid) -> GeomResult<Self::Solid>;
}
