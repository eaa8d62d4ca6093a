//! # Pipeline Tests
//!
//! End-to-end tests over the whole layout pipeline: pairing, placement,
//! bases, and supports against the deterministic slab kernel.

use crate::{
    add_base_notched, add_base_p2p, add_base_rectangle, add_letter_support_to_all,
    assembly_bounds, layout_ambigram, AmbigramConfig, Layout, PlaceError, PlaceResult,
    SupportParams,
};
use ambigram_geom::testkernel::{SlabKernel, SlabSolid};
use ambigram_geom::{GeometryKernel, BASE_NAME};
use approx::assert_relative_eq;
use config::constants::EPSILON;

fn kernel() -> SlabKernel {
    SlabKernel::new(16.0)
}

#[test]
fn test_full_pipeline() {
    let kernel = kernel();
    let mut layout =
        layout_ambigram(&kernel, "AMBIGRAM", "CADQUERY", &AmbigramConfig::default()).unwrap();

    // Equal-length words: one pair per column
    assert_eq!(layout.columns.len(), 8);
    assert_eq!(layout.assembly.len(), 8);

    add_letter_support_to_all(
        &kernel,
        &mut layout,
        &SupportParams {
            cylinder_height: Some(4.0),
            cylinder_radius: Some(4.0),
            rect_height: Some(1.0),
        },
    )
    .unwrap();
    add_base_p2p(&kernel, &mut layout, 1.6, 1.6).unwrap();

    assert_eq!(layout.assembly.len(), 8 + 8 + 1);

    // The base hangs below every letter
    let base = kernel.bounding_box(layout.assembly.get(BASE_NAME).unwrap());
    for name in layout.assembly.letter_names() {
        let letter = kernel.bounding_box(layout.assembly.get(&name).unwrap());
        assert!(letter.min.z >= base.max.z - 16.0);
        assert!(letter.min.z > base.min.z);
    }
}

#[test]
fn test_words_with_spaces_lay_out() {
    let kernel = kernel();
    let layout = layout_ambigram(
        &kernel,
        "AA AAAAAA AAA",
        "FFFF FFF FFFFF FFF",
        &AmbigramConfig::default(),
    )
    .unwrap();

    // Every content pair became a member; delimiter pairs did not
    let pairs: usize = layout
        .columns
        .iter()
        .map(|c| {
            c.tail
                .iter()
                .filter(|&&t| c.lead != ' ' && t != ' ')
                .count()
        })
        .sum();
    assert_eq!(layout.assembly.len(), pairs);

    // Placement stays inside the accumulated bounds
    let bounds = assembly_bounds(&kernel, &layout.assembly).unwrap();
    assert_relative_eq!(bounds.min.z, 0.0);
    assert!(bounds.xlen() > 0.0);
    assert!(layout.max_column.y <= bounds.ylen() + EPSILON);
}

#[test]
fn test_each_base_strategy_appends_one_member() {
    let kernel = kernel();
    let config = AmbigramConfig::default();
    type Builder = fn(&SlabKernel, &mut Layout<SlabSolid>, f64, f64) -> PlaceResult<()>;
    let builders: [Builder; 3] = [add_base_rectangle, add_base_p2p, add_base_notched];
    for builder in builders {
        let mut layout = layout_ambigram(&kernel, "AB", "CD", &config).unwrap();
        builder(&kernel, &mut layout, 2.0, 1.0).unwrap();
        assert_eq!(layout.assembly.len(), 3);
        assert!(layout.assembly.get(BASE_NAME).is_some());
    }
}

#[test]
fn test_second_base_is_rejected() {
    let kernel = kernel();
    let mut layout = layout_ambigram(&kernel, "AB", "CD", &AmbigramConfig::default()).unwrap();
    add_base_rectangle(&kernel, &mut layout, 2.0, 1.0).unwrap();
    let err = add_base_p2p(&kernel, &mut layout, 2.0, 1.0).unwrap_err();
    assert!(matches!(err, PlaceError::Geom(_)));
}

#[test]
fn test_no_partial_layout_on_failure() {
    // 'Q' only appears late in the walk; the failure must still abort
    // the whole pass
    let kernel = SlabKernel::new(16.0).with_missing_glyphs(['Q']);
    let result = layout_ambigram(&kernel, "AMBIGRAM", "CADQUERY", &AmbigramConfig::default());
    assert!(result.is_err());
}
