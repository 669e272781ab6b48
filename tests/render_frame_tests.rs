use xychart::ChartEngine;
use xychart::core::{Axis, AxisHandle, Edge, PixelPoint, Range, Series};
use xychart::render::{Color, DrawCall, RecordingSurface};
use xychart::PointerButton;

fn auto_axis(name: &str) -> AxisHandle {
    let mut axis = Axis::new(name, Range::UNIT);
    axis.set_auto_range(true);
    axis.into_handle()
}

const SERIES_COLOR: Color = Color::rgb(0.1, 0.2, 0.9);

fn full_engine() -> ChartEngine {
    let mut engine = ChartEngine::new();
    engine
        .set_domain_axis(auto_axis("time"), Edge::Bottom)
        .expect("bind domain");
    engine
        .set_range_axis(auto_axis("value"), Edge::Left)
        .expect("bind range");

    let mut series = Series::sorted("signal");
    series.append_quiet(0.0, 1.0).expect("append");
    series.append_quiet(5.0, 8.0).expect("append");
    series.append_quiet(10.0, 3.0).expect("append");
    engine
        .add_series(series.into_handle(), SERIES_COLOR)
        .expect("add series");
    engine
}

fn lines_with_color(surface: &RecordingSurface, color: Color) -> usize {
    surface
        .calls()
        .iter()
        .filter(|call| matches!(call, DrawCall::Line { color: c, .. } if *c == color))
        .count()
}

#[test]
fn empty_engine_paints_only_the_backgrounds() {
    let mut engine = ChartEngine::new();
    let mut surface = RecordingSurface::new();
    engine.paint(&mut surface, 800.0, 600.0).expect("paint");

    assert_eq!(surface.fill_rect_count(), 2);
    assert_eq!(surface.line_count(), 0);
    assert_eq!(surface.ellipse_count(), 0);
    assert_eq!(surface.clip_depth(), 0);
}

#[test]
fn full_scene_emits_backgrounds_first_then_balanced_clipping() {
    let mut engine = full_engine();
    let mut surface = RecordingSurface::new();
    engine.paint(&mut surface, 800.0, 600.0).expect("paint");

    let calls = surface.calls();
    assert!(matches!(calls[0], DrawCall::FillRect { .. }), "chart background first");
    assert!(matches!(calls[1], DrawCall::FillRect { .. }), "plot background second");
    assert_eq!(surface.clip_depth(), 0);
}

#[test]
fn series_markers_match_the_point_count() {
    let mut engine = full_engine();
    let mut surface = RecordingSurface::new();
    engine.paint(&mut surface, 800.0, 600.0).expect("paint");

    assert_eq!(surface.ellipse_count(), 3);
    assert_eq!(lines_with_color(&surface, SERIES_COLOR), 2);
}

#[test]
fn draw_toggles_suppress_their_geometry() {
    let mut engine = full_engine();
    let style = engine.style().clone();

    engine.set_draw_shape(false);
    let mut surface = RecordingSurface::new();
    engine.paint(&mut surface, 800.0, 600.0).expect("paint");
    assert_eq!(surface.ellipse_count(), 0);
    assert!(lines_with_color(&surface, SERIES_COLOR) > 0);

    engine.set_draw_line(false);
    surface.clear();
    engine.paint(&mut surface, 800.0, 600.0).expect("paint");
    assert_eq!(lines_with_color(&surface, SERIES_COLOR), 0);

    engine.set_draw_grid(false);
    surface.clear();
    engine.paint(&mut surface, 800.0, 600.0).expect("paint");
    assert_eq!(lines_with_color(&surface, style.grid_color), 0);
    // tick marks remain even without the grid
    assert!(lines_with_color(&surface, style.tick_color) > 0);
}

#[test]
fn tick_labels_and_axis_names_are_drawn() {
    let mut engine = full_engine();
    let mut surface = RecordingSurface::new();
    engine.paint(&mut surface, 800.0, 600.0).expect("paint");

    let texts = surface.text_contents();
    assert!(texts.contains(&"time"));
    assert!(texts.contains(&"value"));
    // auto-range pads [0, 10] to [-0.25, 10.25]; integer ticks survive
    assert!(texts.iter().any(|t| *t == "0" || *t == "0.0"));
}

#[test]
fn title_is_drawn_when_set() {
    let mut engine = full_engine();
    let mut surface = RecordingSurface::new();
    engine.paint(&mut surface, 800.0, 600.0).expect("paint");
    assert!(!surface.text_contents().contains(&"Demo"));

    engine.set_title(Some("Demo".to_owned()));
    surface.clear();
    engine.paint(&mut surface, 800.0, 600.0).expect("paint");
    assert!(surface.text_contents().contains(&"Demo"));
}

#[test]
fn narrow_viewport_thins_domain_tick_labels() {
    let mut engine = full_engine();

    let mut wide = RecordingSurface::new();
    engine.paint(&mut wide, 1600.0, 600.0).expect("paint wide");
    let mut narrow = RecordingSurface::new();
    engine.paint(&mut narrow, 180.0, 600.0).expect("paint narrow");

    assert!(
        narrow.text_count() < wide.text_count(),
        "narrow: {}, wide: {}",
        narrow.text_count(),
        wide.text_count()
    );
}

#[test]
fn undrawable_viewport_emits_nothing() {
    let mut engine = full_engine();
    let mut surface = RecordingSurface::new();
    engine.paint(&mut surface, 16.0, 16.0).expect("paint");
    assert!(surface.calls().is_empty());
}

#[test]
fn zero_width_manual_range_suppresses_series_geometry() {
    let mut engine = ChartEngine::new();
    let mut domain = Axis::new("x", Range::new(5.0, 5.0).expect("valid range"));
    domain.set_auto_range(false);
    engine
        .set_domain_axis(domain.into_handle(), Edge::Bottom)
        .expect("bind domain");
    engine
        .set_range_axis(auto_axis("y"), Edge::Left)
        .expect("bind range");

    let mut series = Series::sorted("signal");
    series.append_quiet(4.0, 1.0).expect("append");
    series.append_quiet(6.0, 2.0).expect("append");
    engine
        .add_series(series.into_handle(), SERIES_COLOR)
        .expect("add series");

    let mut surface = RecordingSurface::new();
    engine.paint(&mut surface, 800.0, 600.0).expect("paint");

    assert_eq!(surface.ellipse_count(), 0);
    assert_eq!(lines_with_color(&surface, SERIES_COLOR), 0);
    // every emitted coordinate stays finite
    for call in surface.calls() {
        if let DrawCall::Line { x1, y1, x2, y2, .. } = call {
            assert!(x1.is_finite() && y1.is_finite() && x2.is_finite() && y2.is_finite());
        }
    }
}

#[test]
fn rubber_band_is_visible_only_during_a_primary_drag() {
    let mut engine = full_engine();
    let mut surface = RecordingSurface::new();
    let plot = engine.prepare(&mut surface, 800.0, 600.0);
    let band_fill = engine.style().rubber_band_fill;

    let has_band = |surface: &RecordingSurface| {
        surface
            .calls()
            .iter()
            .any(|call| matches!(call, DrawCall::FillRect { color, .. } if *color == band_fill))
    };

    engine.paint(&mut surface, 800.0, 600.0).expect("paint");
    assert!(!has_band(&surface));

    let anchor = PixelPoint::new(plot.x + 50.0, plot.y + 50.0);
    engine.start_gesture(PointerButton::Primary, anchor);
    engine.update_gesture(PixelPoint::new(anchor.x + 100.0, anchor.y + 80.0));

    surface.clear();
    engine.paint(&mut surface, 800.0, 600.0).expect("paint");
    assert!(has_band(&surface));

    engine.end_gesture(PixelPoint::new(anchor.x + 100.0, anchor.y + 80.0));
    surface.clear();
    engine.paint(&mut surface, 800.0, 600.0).expect("paint");
    assert!(!has_band(&surface));
}

#[test]
fn later_series_paint_on_top() {
    let mut engine = ChartEngine::new();
    engine
        .set_domain_axis(auto_axis("x"), Edge::Bottom)
        .expect("bind domain");
    engine
        .set_range_axis(auto_axis("y"), Edge::Left)
        .expect("bind range");

    let first_color = Color::rgb(0.9, 0.1, 0.1);
    let second_color = Color::rgb(0.1, 0.9, 0.1);
    for (name, color) in [("under", first_color), ("over", second_color)] {
        let mut series = Series::sorted(name);
        series.append_quiet(0.0, 0.0).expect("append");
        series.append_quiet(1.0, 1.0).expect("append");
        engine
            .add_series(series.into_handle(), color)
            .expect("add series");
    }

    let mut surface = RecordingSurface::new();
    engine.paint(&mut surface, 800.0, 600.0).expect("paint");

    let first_line = surface
        .calls()
        .iter()
        .position(|call| matches!(call, DrawCall::Line { color, .. } if *color == first_color))
        .expect("first series drawn");
    let second_line = surface
        .calls()
        .iter()
        .position(|call| matches!(call, DrawCall::Line { color, .. } if *color == second_color))
        .expect("second series drawn");
    assert!(first_line < second_line);
}

#[test]
fn prepare_then_paint_share_the_same_plot_area() {
    let mut engine = full_engine();
    let mut surface = RecordingSurface::new();
    let prepared = engine.prepare(&mut surface, 800.0, 600.0);
    engine.paint(&mut surface, 800.0, 600.0).expect("paint");
    assert_eq!(engine.plot_area(), prepared);
}
