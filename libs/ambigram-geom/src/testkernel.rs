//! # Slab Kernel
//!
//! Deterministic [`GeometryKernel`] for tests: every pair is realized as
//! an axis-aligned slab whose dimensions derive from the two characters,
//! so cursor math and footprint accumulation can be asserted exactly.
//! Ships behind the `testkernel` feature for dependent crates' tests.

use crate::bbox::BoundingBox;
use crate::error::{GeomError, GeomResult};
use crate::kernel::GeometryKernel;
use glam::{DVec2, DVec3};
use std::collections::HashSet;

/// A solid that is nothing but its bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct SlabSolid {
    /// Bounds of the slab.
    pub bounds: BoundingBox,
}

/// Deterministic kernel realizing letter pairs as slabs.
///
/// Glyph widths vary per character so extent maxima are meaningful, and
/// a configurable missing-glyph set injects realization failures.
#[derive(Debug, Clone)]
pub struct SlabKernel {
    font_size: f64,
    missing: HashSet<char>,
}

impl SlabKernel {
    /// Kernel with the given font size and a complete glyph set.
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            missing: HashSet::new(),
        }
    }

    /// Mark glyphs as absent from the font.
    pub fn with_missing_glyphs(mut self, glyphs: impl IntoIterator<Item = char>) -> Self {
        self.missing.extend(glyphs);
        self
    }

    /// Deterministic per-character advance width.
    pub fn glyph_width(&self, c: char) -> f64 {
        self.font_size * (0.5 + 0.05 * f64::from(c as u32 % 8))
    }
}

impl GeometryKernel for SlabKernel {
    type Solid = SlabSolid;

    fn realize_pair(&self, lead: char, tail: char) -> GeomResult<Self::Solid> {
        for c in [lead, tail] {
            if self.missing.contains(&c) {
                return Err(GeomError::Realization {
                    lead,
                    tail,
                    message: format!("glyph {c:?} not found in font"),
                });
            }
        }
        // Lead spans X, the rotated tail spans Y, extrusion spans Z.
        let size = DVec3::new(
            self.glyph_width(lead),
            self.glyph_width(tail),
            self.font_size,
        );
        Ok(SlabSolid {
            bounds: BoundingBox::from_size(size),
        })
    }

    fn bounding_box(&self, solid: &Self::Solid) -> BoundingBox {
        solid.bounds
    }

    fn translate(&self, solid: Self::Solid, offset: DVec3) -> Self::Solid {
        SlabSolid {
            bounds: solid.bounds.translated(offset),
        }
    }

    fn extrude_polygon(&self, points: &[DVec2], height: f64) -> GeomResult<Self::Solid> {
        if points.len() < 3 {
            return Err(GeomError::DegeneratePolygon(format!(
                "outline has {} points, need at least 3",
                points.len()
            )));
        }
        if height <= 0.0 {
            return Err(GeomError::DegeneratePolygon(format!(
                "extrusion height {height} must be positive"
            )));
        }
        let mut min = points[0];
        let mut max = points[0];
        for &p in &points[1..] {
            min = min.min(p);
            max = max.max(p);
        }
        Ok(SlabSolid {
            bounds: BoundingBox::new(
                DVec3::new(min.x, min.y, 0.0),
                DVec3::new(max.x, max.y, height),
            ),
        })
    }

    fn box_solid(&self, size: DVec3) -> GeomResult<Self::Solid> {
        Ok(SlabSolid {
            bounds: BoundingBox::from_size(size),
        })
    }

    fn cylinder(&self, height: f64, radius: f64) -> GeomResult<Self::Solid> {
        Ok(SlabSolid {
            bounds: BoundingBox::new(
                DVec3::new(-radius, -radius, 0.0),
                DVec3::new(radius, radius, height),
            ),
        })
    }

    fn union(&self, a: Self::Solid, b: &Self::Solid) -> GeomResult<Self::Solid> {
        Ok(SlabSolid {
            bounds: a.bounds.union(&b.bounds),
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_realize_pair_dimensions() {
        let kernel = SlabKernel::new(16.0);
        let solid = kernel.realize_pair('A', 'B').unwrap();
        let bb = kernel.bounding_box(&solid);
        assert_eq!(bb.min, DVec3::ZERO);
        assert_eq!(bb.xlen(), kernel.glyph_width('A'));
        assert_eq!(bb.ylen(), kernel.glyph_width('B'));
        assert_eq!(bb.zlen(), 16.0);
    }

    #[test]
    fn test_missing_glyph_fails() {
        let kernel = SlabKernel::new(16.0).with_missing_glyphs(['ß']);
        let err = kernel.realize_pair('A', 'ß').unwrap_err();
        assert!(matches!(err, GeomError::Realization { tail: 'ß', .. }));
    }

    #[test]
    fn test_translate_moves_bounds() {
        let kernel = SlabKernel::new(16.0);
        let solid = kernel.realize_pair('A', 'A').unwrap();
        let moved = kernel.translate(solid, DVec3::new(5.0, 7.0, 0.0));
        assert_eq!(kernel.bounding_box(&moved).min, DVec3::new(5.0, 7.0, 0.0));
    }

    #[test]
    fn test_extrude_polygon_bounds() {
        let kernel = SlabKernel::new(16.0);
        let outline = [
            DVec2::new(-1.0, -2.0),
            DVec2::new(3.0, -2.0),
            DVec2::new(3.0, 4.0),
            DVec2::new(-1.0, 4.0),
        ];
        let solid = kernel.extrude_polygon(&outline, 2.0).unwrap();
        let bb = kernel.bounding_box(&solid);
        assert_eq!(bb.min, DVec3::new(-1.0, -2.0, 0.0));
        assert_eq!(bb.max, DVec3::new(3.0, 4.0, 2.0));
    }

    #[test]
    fn test_degenerate_outline_rejected() {
        let kernel = SlabKernel::new(16.0);
        let err = kernel
            .extrude_polygon(&[DVec2::ZERO, DVec2::X], 1.0)
            .unwrap_err();
        assert!(matches!(err, GeomError::DegeneratePolygon(_)));
    }
}
