//! Dashboard demo: gauges, a log and charts animated from a sine sweep.
//!
//! Run with `cargo run --example dashboard [ticks-per-second]`.
//! Press `q` or ESC to exit.

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::f64::consts::PI;
use std::time::Duration;
use tilewall::color::Rgb;
use tilewall::compositor::{Compositor, CompositorConfig};
use tilewall::terminal::{AnsiTerminal, TerminalSession};
use tilewall::tile::{Style, Tile};
use tilewall::widget::ColorMap;

fn build() -> tilewall::Result<Tile> {
    let colormap = ColorMap::new(vec![(33.0, Rgb::palette(2)), (66.0, Rgb::palette(3)), (100.0, Rgb::palette(1))])?;

    let mut root = Tile::hsplit(vec![
        Tile::vsplit(vec![
            Tile::hgauge(50.0).title("gauge").border_color(Rgb::palette(5)),
            Tile::hgauge(20.0).border_color(Rgb::palette(5)),
            Tile::hsplit(vec![
                Tile::vgauge(0.0).border_color(Rgb::palette(2)),
                Tile::vgauge(5.0).border_color(Rgb::palette(2)),
                Tile::color_range_vgauge(100.0, colormap).border_color(Rgb::palette(2)),
                Tile::vgauge(100.0)
                    .border_color(Rgb::palette(2))
                    .color_low(Rgb::palette(2))
                    .color_high(Rgb::palette(1)),
            ]),
        ]),
        Tile::vsplit(vec![
            Tile::text("Hello World,\nthis is a tile wall.").border_color(Rgb::palette(2)),
            Tile::log()
                .title("logs")
                .border_color(Rgb::palette(5))
                .color_low(Rgb::palette(8))
                .color_high(Rgb::WHITE),
            Tile::hchart().border_color(Rgb::palette(2)).color(Rgb::palette(2)),
            Tile::hbraille_chart().border_color(Rgb::palette(2)).color(Rgb::palette(2)),
        ])
        .width_weight(2)?,
    ])
    .title("Tilewall");

    if let Some(gauge) = root.child_mut(&[0, 1]).and_then(Tile::as_gauge_mut) {
        gauge.set_label(Some("label".to_string()));
    }
    if let Some(log) = root.child_mut(&[1, 1]).and_then(Tile::as_log_mut) {
        log.append("0 -----\n1 Hello\n2 World");
    }
    Ok(root)
}

/// Wait up to `timeout` for a key; `true` means quit.
fn quit_requested(timeout: Duration) -> tilewall::Result<bool> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            return Ok(key.kind == KeyEventKind::Press && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc));
        }
    }
    Ok(false)
}

fn main() -> tilewall::Result<()> {
    let rate: u32 = std::env::args().nth(1).and_then(|arg| arg.parse().ok()).unwrap_or(30);
    let tick = Duration::from_secs(1) / rate.max(1);

    let mut root = build()?;
    let _session = TerminalSession::new()?;
    let mut terminal = AnsiTerminal::stdout();
    let mut compositor = Compositor::new(CompositorConfig::default());

    let mut rad: f64 = 0.0;
    let mut processed = 0;
    while rad < 4.0 * PI {
        let amp = rad.sin();
        let set = |root: &mut Tile, path: &[usize], value: f64| {
            if let Some(gauge) = root.child_mut(path).and_then(Tile::as_gauge_mut) {
                gauge.set_value(value);
            }
        };
        set(&mut root, &[0, 0], 50.0 + 49.9 * amp * (rad * 2.0).sin());
        set(&mut root, &[0, 1], 50.0 + 45.0 * amp * (rad * 4.0).sin());
        for (i, path) in [[0, 2, 0], [0, 2, 1], [0, 2, 3]].iter().enumerate() {
            set(&mut root, path, 50.0 + 49.9 * amp * (rad * 4.0 + i as f64).sin());
        }
        if let Some(gauge) = root.child_mut(&[0, 2, 2]).and_then(Tile::as_color_range_gauge_mut) {
            gauge.set_value(50.0 + 49.9 * amp * (rad * 3.0).sin());
        }

        if rad % PI < 0.01 {
            processed += 1;
            if let Some(log) = root.child_mut(&[1, 1]).and_then(Tile::as_log_mut) {
                log.append(format!("Processing... {processed}"));
            }
        }
        if let Some(chart) = root.child_mut(&[1, 2]).and_then(Tile::as_chart_mut) {
            chart.append(50.0 + 50.0 * amp * (rad * 16.0).sin());
        }
        if let Some(chart) = root.child_mut(&[1, 3]).and_then(Tile::as_chart_mut) {
            chart.append(50.0 + 50.0 * amp * (rad * 8.0 + PI).sin());
        }

        compositor.display(&mut root, &mut terminal)?;
        compositor.set_theme(Style {
            border: Rgb::from_hsv(amp.abs(), 0.5, 0.5),
            ..Style::default()
        });

        if quit_requested(tick)? {
            break;
        }
        rad += 0.003;
    }
    Ok(())
}
