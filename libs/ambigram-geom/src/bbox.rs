//! # Bounding Box
//!
//! Axis-aligned bounding boxes in the min/max representation.

use glam::DVec3;
use serde::{Deserialize, Serialize};

// =============================================================================
// BOUNDING BOX
// =============================================================================

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl BoundingBox {
    /// Create a bounding box from its corners.
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// A bounding box with the given size and its minimum corner at the origin.
    pub fn from_size(size: DVec3) -> Self {
        Self {
            min: DVec3::ZERO,
            max: size,
        }
    }

    /// Extent along X.
    pub fn xlen(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along Y.
    pub fn ylen(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Extent along Z.
    pub fn zlen(&self) -> f64 {
        self.max.z - self.min.z
    }

    /// Center point.
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// This box shifted by `offset`.
    pub fn translated(&self, offset: DVec3) -> BoundingBox {
        BoundingBox {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
