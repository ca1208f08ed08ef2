//! SlideIndexEngine navigation and offset tests
//!
//! Covers looping next/previous for every layout and direction, the
//! round-trip law for fixed-width layouts, overflow handling for the
//! variable-width layouts and the offsets that bring slides into view.

mod support;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use slidekit_core::{
    Direction, LayoutMode, Offset, SlideIndexEngine, ViewportMetrics,
};
use support::approx;

fn engine(
    layout: LayoutMode,
    direction: Direction,
    total: usize,
) -> SlideIndexEngine {
    SlideIndexEngine::new(layout, direction, total).expect("engine")
}

fn ltr(layout: LayoutMode, total: usize) -> SlideIndexEngine {
    engine(layout, Direction::LeftToRight, total)
}

fn variable(
    layout: LayoutMode,
    widths: &[f32],
    container: f32,
) -> SlideIndexEngine {
    let mut e = ltr(layout, widths.len());
    e.set_slide_widths(widths.to_vec()).expect("widths");
    e.set_viewport(ViewportMetrics::uniform(container));
    e
}

fn percent(offset: Offset) -> f32 {
    match offset {
        Offset::Percent(v) => v,
        other => panic!("expected percent offset, got {other:?}"),
    }
}

fn pixels(offset: Offset) -> f32 {
    match offset {
        Offset::Pixels(v) => v,
        other => panic!("expected pixel offset, got {other:?}"),
    }
}

#[test]
fn fixed_next_wraps_from_last_slide() {
    let e = ltr(LayoutMode::Fixed, 5).with_active(4);
    assert_eq!(e.next_index(), 0);
}

#[test]
fn portrait_one_previous_wraps_from_first_slide() {
    let e = ltr(LayoutMode::PortraitOne, 4);
    assert_eq!(e.previous_index(), 3);
}

#[test]
fn auto_next_never_leaves_a_trailing_gap() {
    let widths = [100.0; 4];
    let mut e = variable(LayoutMode::Auto, &widths, 250.0);

    // Slides 1..=3 span 300px, so stepping once still fills the container.
    assert_eq!(e.next_index(), 1);

    // From slide 1, stepping to 2 would show 200px of 250px; jump to the end.
    e.navigate(1).expect("in range");
    assert_eq!(e.next_index(), 3);

    // Past the last window, next loops.
    e.navigate(3).expect("in range");
    assert_eq!(e.next_index(), 0);
}

#[test]
fn auto_align_shares_variable_width_next() {
    let widths = [100.0; 4];
    let e = variable(LayoutMode::AutoAlign, &widths, 250.0).with_active(1);
    assert_eq!(e.next_index(), 3);
}

#[test]
fn variable_width_everything_fits_returns_to_start() {
    let widths = [60.0, 80.0, 40.0];
    for layout in [LayoutMode::Auto, LayoutMode::AutoAlign] {
        let e = variable(layout, &widths, 500.0).with_active(1);
        assert_eq!(e.next_index(), 0, "{layout}");
        assert_eq!(e.previous_index(), 0, "{layout}");
    }
}

#[test]
fn auto_previous_walks_back_until_container_is_full() {
    let widths = [100.0, 100.0, 100.0, 100.0, 100.0];
    let e = variable(LayoutMode::Auto, &widths, 250.0).with_active(3);
    // 3..=4 is 200px; adding slide 2 reaches 300px >= 250px.
    assert_eq!(e.previous_index(), 2);

    let first = variable(LayoutMode::Auto, &widths, 250.0);
    assert_eq!(first.previous_index(), 4);
}

#[test]
fn rtl_fixed_next_mirrors_ltr_previous() {
    let rtl = engine(LayoutMode::Fixed, Direction::RightToLeft, 3);
    let ltr = ltr(LayoutMode::Fixed, 3);
    assert_eq!(rtl.next_index(), 2);
    assert_eq!(rtl.next_index(), ltr.previous_index());
    assert_eq!(rtl.previous_index(), ltr.next_index());
}

#[test]
fn rtl_portrait_one_loops_over_every_slide() {
    let e = engine(LayoutMode::PortraitOne, Direction::RightToLeft, 4);
    assert_eq!(e.next_index(), 3);
    assert_eq!(e.with_active(3).previous_index(), 0);
}

#[test]
fn rtl_variable_width_keeps_ascending_order() {
    let mut e = engine(LayoutMode::Auto, Direction::RightToLeft, 4);
    e.set_slide_widths(vec![200.0; 4]).expect("widths");
    e.set_viewport(ViewportMetrics::uniform(300.0));
    assert_eq!(e.next_index(), 1);
}

#[test]
fn single_slide_ignores_navigation() {
    for layout in LayoutMode::ALL {
        let mut e = ltr(layout, 1);
        assert_eq!(e.navigate(0), None);
        assert_eq!(e.navigate(e.next_index()), None);
        assert_eq!(e.navigate(e.previous_index()), None);
        assert_eq!(e.active_index(), 0);
    }
}

#[test]
fn out_of_range_navigation_is_ignored() {
    let mut e = ltr(LayoutMode::Fixed, 3).with_active(1);
    assert_eq!(e.navigate(3), None);
    assert_eq!(e.active_index(), 1);
    let moved = e.navigate(2).expect("in range");
    assert_eq!(moved.index, 2);
    assert_eq!(e.active_index(), 2);
}

#[test]
fn next_then_previous_round_trips_for_fixed_layouts() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..500 {
        let layout = if rng.random_bool(0.5) {
            LayoutMode::Fixed
        } else {
            LayoutMode::PortraitOne
        };
        let direction = if rng.random_bool(0.5) {
            Direction::RightToLeft
        } else {
            Direction::LeftToRight
        };
        let total = rng.random_range(2..=10);
        let mut e = engine(layout, direction, total);
        if layout == LayoutMode::Fixed {
            e.set_slides_in_view(rng.random_range(1..=total));
        }
        let reachable = total - e.slides_in_view();
        let start = rng.random_range(0..=reachable);
        e.navigate(start).expect("start in range");

        let next = e.next_index();
        e.navigate(next).expect("next in range");
        assert_eq!(
            e.previous_index(),
            start,
            "{layout} {direction} total={total} in_view={}",
            e.slides_in_view()
        );
    }
}

#[test]
fn indices_stay_in_range_under_random_navigation() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..300 {
        let layout =
            LayoutMode::ALL[rng.random_range(0..LayoutMode::ALL.len())];
        let direction = if rng.random_bool(0.5) {
            Direction::RightToLeft
        } else {
            Direction::LeftToRight
        };
        let total = rng.random_range(1..=12);
        let mut e = engine(layout, direction, total);
        e.set_slides_in_view(rng.random_range(1..=total));
        let widths = (0..total)
            .map(|_| rng.random_range(20.0..400.0_f32))
            .collect();
        e.set_slide_widths(widths).expect("widths");
        let container = rng.random_range(50.0..1200.0_f32);
        e.set_viewport(ViewportMetrics::new(
            container,
            container,
            rng.random_bool(0.5),
        ));

        for _ in 0..40 {
            let target = match rng.random_range(0..3) {
                0 => e.next_index(),
                1 => e.previous_index(),
                _ => rng.random_range(0..total + 2),
            };
            e.navigate(target);
            assert!(e.active_index() < total);
            assert!(e.next_index() < total);
            assert!(e.previous_index() < total);
            let offset = e.offset_for_index(e.active_index());
            assert!(offset.as_track_percent(container).is_finite());
        }
    }
}

#[test]
fn fixed_offset_is_a_fraction_of_the_track() {
    let mut e = ltr(LayoutMode::Fixed, 6);
    e.set_slides_in_view(3);
    assert!(approx(percent(e.offset_for_index(2)), -200.0 / 3.0));
    assert!(approx(percent(e.offset_for_index(0)), 0.0));
}

#[test]
fn portrait_one_centers_the_active_slide() {
    let mut e = ltr(LayoutMode::PortraitOne, 5);
    e.set_slides_in_view(3);
    assert!(approx(percent(e.offset_for_index(2)), -100.0 / 3.0));
    // The first slide sits in the middle with empty space before it.
    assert!(approx(percent(e.offset_for_index(0)), 100.0 / 3.0));
}

#[test]
fn all_slides_in_view_never_translate() {
    let mut e = ltr(LayoutMode::Fixed, 3);
    e.set_slides_in_view(3);
    assert!(e.all_in_view());
    for index in 0..3 {
        assert!(e.offset_for_index(index).is_zero());
    }
}

#[test]
fn auto_right_aligns_the_last_window() {
    let widths = [100.0, 200.0, 300.0];
    let e = variable(LayoutMode::Auto, &widths, 400.0);
    assert!(approx(pixels(e.offset_for_index(1)), -100.0));
    assert!(approx(pixels(e.offset_for_index(2)), -200.0));
}

#[test]
fn auto_align_centers_on_narrow_viewports() {
    let widths = [300.0; 3];
    let mut e = variable(LayoutMode::AutoAlign, &widths, 360.0);
    e.set_viewport(ViewportMetrics::new(360.0, 360.0, true));

    assert!(approx(pixels(e.offset_for_index(0)), 0.0));
    // Middle slide: half of the 60px slack on each side.
    assert!(approx(pixels(e.offset_for_index(1)), -270.0));
    // Last slide: the whole slack moves to the leading edge.
    assert!(approx(pixels(e.offset_for_index(2)), -540.0));

    e.set_viewport(ViewportMetrics::new(360.0, 360.0, false));
    assert!(approx(pixels(e.offset_for_index(1)), -300.0));
}

#[test]
fn rtl_mirrors_offset_sign() {
    let mut rtl = engine(LayoutMode::Fixed, Direction::RightToLeft, 4);
    rtl.set_slides_in_view(2);
    assert!(approx(percent(rtl.offset_for_index(1)), 50.0));

    let mut auto = engine(LayoutMode::Auto, Direction::RightToLeft, 3);
    auto.set_slide_widths(vec![100.0, 200.0, 300.0]).expect("widths");
    auto.set_viewport(ViewportMetrics::uniform(400.0));
    assert!(approx(pixels(auto.offset_for_index(1)), 100.0));
}

#[test]
fn navigate_reports_the_offset_for_the_new_index() {
    let mut e = ltr(LayoutMode::Fixed, 4);
    e.set_slides_in_view(2);
    let transition = e.navigate(1).expect("in range");
    assert_eq!(transition.offset, e.offset_for_index(1));
}
