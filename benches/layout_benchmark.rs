//! Layout and composition benchmark: placement computation and full frames.
//!
//! Target: < 1ms to lay out, paint and diff a 200×50 dashboard

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tilewall::layout::{self, Rect};
use tilewall::terminal::MemoryTerminal;
use tilewall::widget::ColorMap;
use tilewall::{Compositor, Rgb, Tile};

/// A dashboard resembling a typical monitoring screen.
fn create_dashboard() -> Tile {
    let colormap = ColorMap::new(vec![(50.0, Rgb::palette(2)), (80.0, Rgb::palette(3)), (100.0, Rgb::palette(1))])
        .expect("sorted colormap");
    let gauges = (0..8)
        .map(|i| Tile::vgauge(f64::from(i) * 12.5).border_color(Rgb::palette(4)))
        .chain(std::iter::once(Tile::color_range_vgauge(70.0, colormap)))
        .collect();

    let mut log = Tile::log().title("events").color_low(Rgb::palette(8)).color_high(Rgb::WHITE);
    let mut chart = Tile::hbraille_chart().title("throughput");
    let mut columns = Tile::hchart().border_color(Rgb::palette(5));
    for i in 0..500 {
        let v = f64::from(i).sin() * 50.0 + 50.0;
        log.as_log_mut().expect("log").append(format!("event {i}: value {v:.2}"));
        chart.as_chart_mut().expect("chart").append(v);
        columns.as_chart_mut().expect("chart").append(v);
    }

    Tile::vsplit(vec![
        Tile::hsplit(gauges),
        Tile::hsplit(vec![log, Tile::vsplit(vec![chart, columns])]),
        Tile::hsplit(vec![Tile::hgauge(33.0).title("cpu"), Tile::hgauge(66.0).title("mem")]),
    ])
}

/// A deep chain of bordered splits.
fn create_nested(depth: usize) -> Tile {
    (0..depth).fold(Tile::text("leaf"), |inner, i| {
        Tile::hsplit(vec![Tile::log(), inner]).title(format!("level {i}"))
    })
}

fn layout_dashboard(c: &mut Criterion) {
    let root = create_dashboard();
    let area = Rect::new(0, 0, 200, 50);

    c.bench_function("layout_dashboard_200x50", |b| b.iter(|| layout::compute(black_box(&root), area)));
}

fn layout_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_nested");

    for depth in [4, 16, 64] {
        let root = create_nested(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &root, |b, root| {
            b.iter(|| layout::compute(black_box(root), Rect::new(0, 0, 300, 80)));
        });
    }

    group.finish();
}

fn display_dashboard(c: &mut Criterion) {
    let mut root = create_dashboard();
    let mut terminal = MemoryTerminal::new(200, 50);
    let mut compositor = Compositor::default();

    c.bench_function("display_dashboard_200x50_incremental", |b| {
        let mut tick = 0u32;
        b.iter(|| {
            tick = tick.wrapping_add(1);
            if let Some(gauge) = root.child_mut(&[2, 0]).and_then(Tile::as_gauge_mut) {
                gauge.set_value(f64::from(tick % 100));
            }
            compositor.display(black_box(&mut root), &mut terminal)
        });
    });

    c.bench_function("display_dashboard_200x50_full", |b| {
        b.iter(|| {
            compositor.invalidate();
            compositor.display(black_box(&mut root), &mut terminal)
        });
    });
}

criterion_group!(benches, layout_dashboard, layout_nested, display_dashboard);
criterion_main!(benches);
