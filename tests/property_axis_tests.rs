use proptest::prelude::*;

use xychart::core::{Axis, Edge, Range, Rect, TickPlan};

fn any_edge() -> impl Strategy<Value = Edge> {
    prop_oneof![
        Just(Edge::Top),
        Just(Edge::Bottom),
        Just(Edge::Left),
        Just(Edge::Right),
    ]
}

proptest! {
    #[test]
    fn transform_round_trip_property(
        min in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0,
        edge in any_edge(),
        invert in any::<bool>()
    ) {
        let value = min + value_factor * span;
        let area = Rect::new(30.0, 15.0, 2048.0, 1024.0);
        let mut axis = Axis::with_bounds("p", min, min + span).expect("valid axis");
        axis.set_invert(invert);

        let px = axis.value_to_point(value, area, edge);
        let recovered = axis.point_to_value(px, area, edge);

        prop_assert!((recovered - value).abs() <= 1e-6 * span.max(1.0));
    }

    #[test]
    fn transform_preserves_ordering_property(
        min in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0
    ) {
        prop_assume!((a - b).abs() > 1e-9);
        let area = Rect::new(0.0, 0.0, 1000.0, 500.0);
        let axis = Axis::with_bounds("p", min, min + span).expect("valid axis");

        let va = min + a * span;
        let vb = min + b * span;
        let pa = axis.value_to_point(va, area, Edge::Bottom);
        let pb = axis.value_to_point(vb, area, Edge::Bottom);

        // a horizontal non-inverted axis keeps value order in pixel order
        prop_assert_eq!(va < vb, pa < pb);
    }

    #[test]
    fn vertical_edge_mirrors_horizontal_edge_property(
        min in -1_000.0f64..1_000.0,
        span in 0.001f64..1_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let value = min + value_factor * span;
        let area = Rect::new(0.0, 0.0, 600.0, 600.0);
        let axis = Axis::with_bounds("p", min, min + span).expect("valid axis");

        let horizontal = axis.value_to_point(value, area, Edge::Bottom);
        let vertical = axis.value_to_point(value, area, Edge::Left);

        // same square area: the vertical mapping is the horizontal one flipped
        prop_assert!((vertical - (area.bottom() - (horizontal - area.x))).abs() <= 1e-6);
    }

    #[test]
    fn tick_plan_invariants_property(
        min in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        divisions in 2usize..30
    ) {
        let range = Range::new(min, min + span).expect("valid range");
        let plan = TickPlan::for_range(range, divisions);

        prop_assert!(plan.step() > 0.0);
        prop_assert!(plan.first() <= range.min() + 1e-9 * span.max(1.0));
        prop_assert!(range.min() - plan.first() < plan.step() + 1e-9 * span.max(1.0));

        let ticks: Vec<f64> = plan.ticks().collect();
        prop_assert!(!ticks.is_empty());
        prop_assert!(ticks.len() <= 4096);
        for pair in ticks.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn range_shift_preserves_width_property(
        min in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        delta in -1_000_000.0f64..1_000_000.0
    ) {
        let range = Range::new(min, min + span).expect("valid range");
        let moved = range.shifted(delta);
        prop_assert!((moved.width() - range.width()).abs() <= 1e-6 * span.max(1.0));
    }

    #[test]
    fn padding_preserves_center_property(
        min in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        rate in 0.1f64..4.0
    ) {
        let range = Range::new(min, min + span).expect("valid range");
        let padded = range.scaled_about_center(rate);

        let center = (range.min() + range.max()) / 2.0;
        let padded_center = (padded.min() + padded.max()) / 2.0;
        prop_assert!((padded_center - center).abs() <= 1e-6 * center.abs().max(1.0));
        prop_assert!((padded.width() - range.width() * rate).abs() <= 1e-6 * span.max(1.0));
    }
}
