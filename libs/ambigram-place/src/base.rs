//! # Base and Support Builders
//!
//! Derives auxiliary solids under the placed letters: three base outline
//! strategies plus per-letter pedestals. All builders consume bounding
//! boxes through the kernel and append to the layout's assembly; they
//! never remove or reshape existing members.

use crate::accumulate::Layout;
use crate::error::{PlaceError, PlaceResult};
use crate::options::SupportParams;
use ambigram_geom::{Assembly, BoundingBox, GeometryKernel, BASE_NAME, SUPPORT_PREFIX};
use glam::{DVec2, DVec3};

// =============================================================================
// ASSEMBLY BOUNDS
// =============================================================================

/// Overall bounding box of every member currently in the assembly.
///
/// `None` when the assembly is empty.
pub fn assembly_bounds<K: GeometryKernel>(
    kernel: &K,
    assembly: &Assembly<K::Solid>,
) -> Option<BoundingBox> {
    let mut bounds: Option<BoundingBox> = None;
    for (_, solid) in assembly.iter() {
        let member = kernel.bounding_box(solid);
        bounds = Some(match bounds {
            Some(acc) => acc.union(&member),
            None => member,
        });
    }
    bounds
}

// =============================================================================
// BASES
// =============================================================================

/// Add a rectangular base spanning the assembly's padded bounding box,
/// extruded downward by `height` from the assembly's minimum Z.
pub fn add_base_rectangle<K: GeometryKernel>(
    kernel: &K,
    layout: &mut Layout<K::Solid>,
    height: f64,
    padding: f64,
) -> PlaceResult<()> {
    let bounds =
        assembly_bounds(kernel, &layout.assembly).ok_or(PlaceError::EmptyAssembly)?;
    let outline = rectangle_outline(&bounds, padding);
    extrude_base(kernel, layout, &outline, height, bounds.min.z)
}

/// Add a point-to-point base hugging each letter's corners.
///
/// The upper boundary collects every letter's padded top-left corner in
/// ascending placement order; the lower boundary collects the padded
/// bottom-right corners in descending order. Closing the loop yields a
/// staircase polygon tracing the diagonal placement.
pub fn add_base_p2p<K: GeometryKernel>(
    kernel: &K,
    layout: &mut Layout<K::Solid>,
    height: f64,
    padding: f64,
) -> PlaceResult<()> {
    let bounds =
        assembly_bounds(kernel, &layout.assembly).ok_or(PlaceError::EmptyAssembly)?;

    let letters: Vec<BoundingBox> = layout
        .assembly
        .letter_names()
        .iter()
        .map(|name| letter_bounds(kernel, &layout.assembly, name))
        .collect::<PlaceResult<_>>()?;

    let outline = p2p_outline(&bounds, &letters, padding);
    extrude_base(kernel, layout, &outline, height, bounds.min.z)
}

/// Add a rectangular base with a staircase notch cut from the two
/// unoccupied corners.
///
/// Uses only the accumulated column extent, not per-letter boxes: the
/// diagonal band leaves the top-left and bottom-right corners empty, so
/// a notch of the maximum column footprint is removed from each.
pub fn add_base_notched<K: GeometryKernel>(
    kernel: &K,
    layout: &mut Layout<K::Solid>,
    height: f64,
    padding: f64,
) -> PlaceResult<()> {
    let bounds =
        assembly_bounds(kernel, &layout.assembly).ok_or(PlaceError::EmptyAssembly)?;
    let outline = notched_outline(&bounds, layout.max_column, padding);
    extrude_base(kernel, layout, &outline, height, bounds.min.z)
}

fn rectangle_outline(bounds: &BoundingBox, padding: f64) -> Vec<DVec2> {
    vec![
        DVec2::new(bounds.min.x - padding, bounds.min.y - padding),
        DVec2::new(bounds.min.x - padding, bounds.max.y + padding),
        DVec2::new(bounds.max.x + padding, bounds.max.y + padding),
        DVec2::new(bounds.max.x + padding, bounds.min.y - padding),
    ]
}

fn p2p_outline(bounds: &BoundingBox, letters: &[BoundingBox], padding: f64) -> Vec<DVec2> {
    let mut points = Vec::with_capacity(letters.len() * 2 + 2);

    // Bottom-left corner, then up the diagonal along the letters'
    // top-left corners
    points.push(DVec2::new(bounds.min.x - padding, bounds.min.y - padding));
    for letter in letters {
        points.push(DVec2::new(letter.min.x - padding, letter.max.y + padding));
    }

    // Top-right corner, then back down along the bottom-right corners
    points.push(DVec2::new(bounds.max.x + padding, bounds.max.y + padding));
    for letter in letters.iter().rev() {
        points.push(DVec2::new(letter.max.x + padding, letter.min.y - padding));
    }

    points
}

fn notched_outline(bounds: &BoundingBox, extent: DVec3, padding: f64) -> Vec<DVec2> {
    let x0 = bounds.min.x - padding;
    let x1 = bounds.max.x + padding;
    let y0 = bounds.min.y - padding;
    let y1 = bounds.max.y + padding;

    // Clamp so the two cuts cannot cross on a single-column layout
    let nx = extent.x.min((x1 - x0) / 2.0);
    let ny = extent.y.min((y1 - y0) / 2.0);

    vec![
        DVec2::new(x0, y0),
        DVec2::new(x0 + nx, y0),
        DVec2::new(x0 + nx, y1 - ny),
        DVec2::new(x1, y1 - ny),
        DVec2::new(x1, y1),
        DVec2::new(x1 - nx, y1),
        DVec2::new(x1 - nx, y0 + ny),
        DVec2::new(x0, y0 + ny),
    ]
}

fn extrude_base<K: GeometryKernel>(
    kernel: &K,
    layout: &mut Layout<K::Solid>,
    outline: &[DVec2],
    height: f64,
    z_min: f64,
) -> PlaceResult<()> {
    let solid = kernel.extrude_polygon(outline, height)?;
    let solid = kernel.translate(solid, DVec3::new(0.0, 0.0, z_min - height));
    layout.assembly.add(BASE_NAME, solid)?;
    Ok(())
}

// =============================================================================
// SUPPORTS
// =============================================================================

/// Add a pedestal beneath one placed letter.
///
/// The pedestal is an optional cylinder and/or an optional slab matching
/// the letter's footprint; the slab always sits between the letter and
/// the cylinder. At least one of the two must be requested, and a
/// cylinder needs both its height and its radius.
pub fn add_letter_support<K: GeometryKernel>(
    kernel: &K,
    layout: &mut Layout<K::Solid>,
    letter: &str,
    params: &SupportParams,
) -> PlaceResult<()> {
    let cylinder_params = match (params.cylinder_height, params.cylinder_radius) {
        (Some(height), Some(radius)) => Some((height, radius)),
        (None, None) => None,
        _ => {
            return Err(PlaceError::InvalidSupport(
                "a cylinder needs both a height and a radius".into(),
            ))
        }
    };
    if cylinder_params.is_none() && params.rect_height.is_none() {
        return Err(PlaceError::InvalidSupport(
            "neither cylinder nor slab parameters were provided".into(),
        ));
    }

    let bounds = letter_bounds(kernel, &layout.assembly, letter)?;

    let slab = match params.rect_height {
        Some(height) => {
            let solid =
                kernel.box_solid(DVec3::new(bounds.xlen(), bounds.ylen(), height))?;
            Some(kernel.translate(
                solid,
                DVec3::new(bounds.min.x, bounds.min.y, bounds.min.z - height),
            ))
        }
        None => None,
    };

    let cylinder = match cylinder_params {
        Some((height, radius)) => {
            let solid = kernel.cylinder(height, radius)?;
            let center = bounds.center();
            let below_slab = params.rect_height.unwrap_or(0.0);
            Some(kernel.translate(
                solid,
                DVec3::new(center.x, center.y, bounds.min.z - height - below_slab),
            ))
        }
        None => None,
    };

    let support = match (slab, cylinder) {
        (Some(slab), Some(cylinder)) => kernel.union(slab, &cylinder)?,
        (Some(slab), None) => slab,
        (None, Some(cylinder)) => cylinder,
        (None, None) => {
            return Err(PlaceError::InvalidSupport(
                "neither cylinder nor slab parameters were provided".into(),
            ))
        }
    };

    layout
        .assembly
        .add(format!("{SUPPORT_PREFIX}{letter}"), support)?;
    Ok(())
}

/// Add a pedestal beneath every placed letter.
///
/// Bases and existing supports are skipped, so pedestals never stack
/// recursively.
pub fn add_letter_support_to_all<K: GeometryKernel>(
    kernel: &K,
    layout: &mut Layout<K::Solid>,
    params: &SupportParams,
) -> PlaceResult<()> {
    for name in layout.assembly.letter_names() {
        add_letter_support(kernel, layout, &name, params)?;
    }
    Ok(())
}

fn letter_bounds<K: GeometryKernel>(
    kernel: &K,
    assembly: &Assembly<K::Solid>,
    name: &str,
) -> PlaceResult<BoundingBox> {
    let solid = assembly
        .get(name)
        .ok_or_else(|| PlaceError::UnknownLetter(name.to_string()))?;
    Ok(kernel.bounding_box(solid))
}

// =============================================================================
// TESTS
// =============================================================================
