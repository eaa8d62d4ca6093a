//! # Placement Accumulator
//!
//! Walks the paired columns left to right, drives the geometry kernel
//! once per (lead, tail) pair, and accumulates the placement cursor and
//! the per-column extent statistics.
//!
//! ## Cursor convention
//!
//! One global cursor starts at the origin. Within a column the cursor
//! advances along +Y by each realized pair's Y extent plus the letter
//! spacing; across columns it advances along +X by the last realized
//! box of the column plus the spacing. Y is never reset between columns,
//! which is what lays the letters out diagonally:
//!
//! ```text
//! y(+)
//! |     G
//! |    N R
//! |   O
//! |  Y R O  ...
//! | E
//! | V S
//! ._______x(+)
//! ```
//!
//! A delimiter lead or tail is "realized" as the blank bounding box (a
//! probe pair sized once per pass) so it advances the cursor without
//! adding a solid; a delimiter lead sharing its column with real tail
//! content additionally skips the blank's Y extent after the column.

use crate::error::PlaceResult;
use crate::options::AmbigramConfig;
use ambigram_geom::{Assembly, BoundingBox, GeometryKernel};
use ambigram_layout::{merge_strings, Column};
use config::constants::BLANK_PROBE_GLYPH;
use glam::DVec3;

// =============================================================================
// LAYOUT RESULT
// =============================================================================

/// Result of one layout pass.
///
/// Freshly allocated per call; never shared between passes.
#[derive(Debug, Clone)]
pub struct Layout<S> {
    /// Placed letter solids, keyed by placement index.
    pub assembly: Assembly<S>,
    /// The paired columns the placement walked.
    pub columns: Vec<Column>,
    /// Largest per-axis column footprint seen across the whole pass.
    ///
    /// Components are independent: each may come from a different
    /// column. X and Z are per-column maxima; Y is the largest
    /// spacing-inclusive stacked height of any single column.
    pub max_column: DVec3,
}

// =============================================================================
// ACCUMULATOR
// =============================================================================

/// Lay out two sequences as a 3D ambigram.
///
/// Pairs the sequences into columns, realizes each (lead, tail) pair
/// through the kernel, translates it to its diagonal position, and
/// collects everything into a fresh [`Layout`].
///
/// Letter names are sequential decimal indices; the index also advances
/// over delimiter pairs (which add no solid), so names stay strictly
/// increasing but need not be contiguous.
///
/// Any kernel failure aborts the pass; no partial layout escapes.
pub fn layout_ambigram<K: GeometryKernel>(
    kernel: &K,
    first: &str,
    second: &str,
    config: &AmbigramConfig,
) -> PlaceResult<Layout<K::Solid>> {
    let spacing = config.spacing();
    let delimiter = config.delimiter;

    let columns = merge_strings(first, second, &config.merge_options())?;

    let mut assembly = Assembly::new();
    let mut cursor = DVec3::ZERO;
    let mut max_column = DVec3::ZERO;
    let mut blank: Option<BoundingBox> = None;
    let mut index = 0usize;

    for column in &columns {
        let mut footprint = DVec3::ZERO;
        let mut last_box: Option<BoundingBox> = None;

        for &tail in &column.tail {
            let used = if column.lead == delimiter || tail == delimiter {
                // No solid exists for a delimiter pair; only its
                // spacing dimensions are used.
                blank_box(kernel, &mut blank)?
            } else {
                let solid = kernel.realize_pair(column.lead, tail)?;
                let bounds = kernel.bounding_box(&solid);
                let placed = kernel.translate(solid, cursor);
                assembly.add(index.to_string(), placed)?;
                bounds
            };

            cursor.y += used.ylen() + spacing;

            footprint.x = footprint.x.max(used.xlen());
            footprint.y += used.ylen() + spacing;
            footprint.z = footprint.z.max(used.zlen());

            last_box = Some(used);
            index += 1;
        }

        // Column advance uses the blank box for a delimiter lead, and
        // also for a content lead whose tail was emptied by repair.
        let advance = if column.lead == delimiter {
            blank_box(kernel, &mut blank)?
        } else {
            match last_box {
                Some(bounds) => bounds,
                None => blank_box(kernel, &mut blank)?,
            }
        };
        cursor.x += advance.xlen() + spacing;

        // A lone delimiter lead over real tail content reserves an
        // extra vertical skip.
        if column.lead == delimiter && !column.tail.is_empty() {
            cursor.y += advance.ylen();
        }

        max_column = max_column.max(footprint);
    }

    Ok(Layout {
        assembly,
        columns,
        max_column,
    })
}

/// Bounding box standing in for delimiter pairs, realized at most once
/// per pass from the probe pair.
fn blank_box<K: GeometryKernel>(
    kernel: &K,
    cache: &mut Option<BoundingBox>,
) -> PlaceResult<BoundingBox> {
    if let Some(bounds) = *cache {
        return Ok(bounds);
    }
    let probe = kernel.realize_pair(BLANK_PROBE_GLYPH, BLANK_PROBE_GLYPH)?;
    let bounds = kernel.bounding_box(&probe);
    *cache = Some(bounds);
    Ok(bounds)
}

// =============================================================================
// TESTS
// =============================================================================
