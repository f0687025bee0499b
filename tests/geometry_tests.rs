// Host-side tests for the visibility comparison modes.

mod common;

use common::geometry::*;

const VP_HEIGHT: f64 = 800.0;

fn visible(mode: Mode, scroll: f64, top: f64, height: f64, threshold: f64, offset: f64) -> bool {
    mode.is_visible(
        &Viewport::new(scroll, VP_HEIGHT),
        &Band::new(top, height),
        threshold,
        offset,
    )
}

#[test]
fn inner_band_element_below_then_scrolled_into_view() {
    assert!(!visible(Mode::InnerBand, 0.0, 1000.0, 50.0, 0.25, 0.0));
    assert!(visible(Mode::InnerBand, 700.0, 1000.0, 50.0, 0.25, 0.0));
}

#[test]
fn inner_band_ignores_element_above_band() {
    // inner band is [200, 600]
    assert!(!visible(Mode::InnerBand, 0.0, 100.0, 50.0, 0.25, 0.0));
}

#[test]
fn inner_band_accepts_straddling_either_edge() {
    assert!(visible(Mode::InnerBand, 0.0, 150.0, 100.0, 0.25, 0.0));
    assert!(visible(Mode::InnerBand, 0.0, 550.0, 150.0, 0.25, 0.0));
    // taller than the band itself
    assert!(visible(Mode::InnerBand, 0.0, 0.0, 2000.0, 0.25, 0.0));
}

#[test]
fn inner_band_is_unaffected_by_offset() {
    assert!(!visible(Mode::InnerBand, 0.0, 1000.0, 50.0, 0.25, 500.0));
}

#[test]
fn overlap_uses_strict_edges_and_offset() {
    assert!(!visible(Mode::Overlap, 0.0, 800.0, 50.0, 0.25, 0.0));
    assert!(visible(Mode::Overlap, 0.0, 799.0, 50.0, 0.25, 0.0));
    assert!(!visible(Mode::Overlap, 0.0, 1000.0, 50.0, 0.25, 0.0));
    assert!(visible(Mode::Overlap, 0.0, 1000.0, 50.0, 0.25, 250.0));
    // element entirely above the viewport
    assert!(!visible(Mode::Overlap, 2000.0, 1000.0, 50.0, 0.25, 0.0));
}

#[test]
fn center_line_inside_element() {
    assert!(visible(Mode::Center, 0.0, 350.0, 100.0, 0.25, 0.0));
    assert!(!visible(Mode::Center, 0.0, 400.0, 100.0, 0.25, 0.0));
    assert!(visible(Mode::Center, 0.0, 400.0, 100.0, 0.25, 1.0));
    assert!(visible(Mode::Center, 1000.0, 1350.0, 100.0, 0.25, 0.0));
}

#[test]
fn inner_overlap_shrinks_viewport_by_threshold() {
    // inner band is (200, 600)
    assert!(!visible(Mode::InnerOverlap, 0.0, 650.0, 50.0, 0.25, 0.0));
    assert!(visible(Mode::InnerOverlap, 0.0, 650.0, 50.0, 0.25, 60.0));
    assert!(!visible(Mode::InnerOverlap, 0.0, 100.0, 50.0, 0.25, 0.0));
    assert!(visible(Mode::InnerOverlap, 0.0, 100.0, 50.0, 0.0, 0.0));
}

#[test]
fn rule_default_is_inner_band_quarter_threshold() {
    let rule = Rule::default();
    assert_eq!(rule.mode, Mode::InnerBand);
    assert_eq!(rule.threshold, 0.25);
    assert_eq!(rule.offset, 0.0);
    assert!(rule.is_visible(&Viewport::new(700.0, VP_HEIGHT), &Band::new(1000.0, 50.0)));
}

#[test]
fn modes_are_deterministic() {
    let vp = Viewport::new(123.0, VP_HEIGHT);
    let band = Band::new(456.0, 78.0);
    for index in 1..=4 {
        let mode = Mode::from_index(index);
        let first = mode.is_visible(&vp, &band, 0.3, 10.0);
        for _ in 0..5 {
            assert_eq!(mode.is_visible(&vp, &band, 0.3, 10.0), first);
        }
    }
}
