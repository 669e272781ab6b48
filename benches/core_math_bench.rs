use std::hint::black_box;
use std::rc::Rc;

use criterion::{Criterion, criterion_group, criterion_main};

use xychart::ChartEngine;
use xychart::core::{Axis, Edge, Range, Rect, Series, TickPlan};
use xychart::render::{Color, RecordingSurface};

fn bench_axis_round_trip(c: &mut Criterion) {
    let area = Rect::new(0.0, 0.0, 1920.0, 1080.0);
    let axis = Axis::with_bounds("x", 0.0, 10_000.0).expect("valid axis");

    c.bench_function("axis_round_trip", |b| {
        b.iter(|| {
            let px = axis.value_to_point(black_box(4_321.123), area, Edge::Bottom);
            let _ = axis.point_to_value(px, area, Edge::Bottom);
        })
    });
}

fn bench_tick_plan_enumeration(c: &mut Criterion) {
    let range = Range::new(0.0, 86_400.0).expect("valid range");

    c.bench_function("tick_plan_enumeration", |b| {
        b.iter(|| {
            let plan = TickPlan::for_range(black_box(range), black_box(10));
            let mut acc = 0.0;
            for tick in plan.ticks() {
                acc += tick;
            }
            black_box(acc)
        })
    });
}

fn bench_paint_line_10k(c: &mut Criterion) {
    let mut domain = Axis::new("t", Range::UNIT);
    domain.set_auto_range(true);
    let mut vertical = Axis::new("v", Range::UNIT);
    vertical.set_auto_range(true);

    let mut engine = ChartEngine::new();
    engine
        .set_domain_axis(domain.into_handle(), Edge::Bottom)
        .expect("bind domain");
    engine
        .set_range_axis(vertical.into_handle(), Edge::Left)
        .expect("bind range");

    let series = Series::sorted("signal").into_handle();
    {
        let mut series = series.borrow_mut();
        for i in 0..10_000 {
            let t = i as f64;
            series
                .append_quiet(t, (t * 0.013).sin() * 50.0 + 100.0)
                .expect("valid generated point");
        }
    }
    engine
        .add_series(Rc::clone(&series), Color::rgb(0.1, 0.3, 0.8))
        .expect("add series");

    let mut surface = RecordingSurface::new();
    c.bench_function("paint_line_10k", |b| {
        b.iter(|| {
            surface.clear();
            engine
                .paint(black_box(&mut surface), 1920.0, 1080.0)
                .expect("paint should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_axis_round_trip,
    bench_tick_plan_enumeration,
    bench_paint_line_10k
);
criterion_main!(benches);
