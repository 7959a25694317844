//! End-to-end checks of the escape sequences `AnsiTerminal` emits, replayed
//! through a VT100 emulator.

use tilewall::color::Rgb;
use tilewall::compositor::{Compositor, CompositorConfig};
use tilewall::terminal::{AnsiTerminal, MemoryTerminal, Terminal};
use tilewall::tile::Tile;
use tilewall::widget::ColorMap;

const WIDTH: u16 = 32;
const HEIGHT: u16 = 12;

fn dashboard() -> Tile {
    let colormap = ColorMap::new(vec![(50.0, Rgb::palette(2)), (80.0, Rgb::palette(3)), (100.0, Rgb::palette(1))])
        .expect("sorted colormap");
    Tile::vsplit(vec![
        Tile::hsplit(vec![
            Tile::vgauge(40.0).title("v").border_color(Rgb::palette(4)),
            Tile::color_range_vgauge(90.0, colormap),
            Tile::hgauge(65.0).color(Rgb::palette(6)),
        ]),
        Tile::hsplit(vec![
            Tile::log().title("log").color_high(Rgb::WHITE).color_low(Rgb::palette(8)),
            Tile::hbraille_chart().border_color(Rgb::palette(5)),
        ]),
    ])
}

fn screen_rows(parser: &vt100::Parser) -> Vec<String> {
    let screen = parser.screen();
    (0..HEIGHT)
        .map(|row| {
            (0..WIDTH)
                .map(|col| {
                    let contents = screen.cell(row, col).map(vt100::Cell::contents).unwrap_or_default();
                    if contents.is_empty() {
                        " ".to_string()
                    } else {
                        contents
                    }
                })
                .collect()
        })
        .collect()
}

fn memory_rows(terminal: &MemoryTerminal) -> Vec<String> {
    (0..HEIGHT).map(|row| terminal.row_text(row)).collect()
}

fn feed(root: &mut Tile, step: u32) {
    let value = f64::from(step * 13 % 100);
    root.child_mut(&[0, 0]).and_then(Tile::as_gauge_mut).expect("vgauge").set_value(value);
    root.child_mut(&[1, 0]).and_then(Tile::as_log_mut).expect("log").append(format!("tick {step}"));
    root.child_mut(&[1, 1]).and_then(Tile::as_chart_mut).expect("chart").append(value);
}

#[test]
fn test_full_frame_matches_memory_terminal() {
    let mut root = dashboard();
    let mut mirror = root.clone();

    let mut ansi = AnsiTerminal::with_size(Vec::new(), WIDTH, HEIGHT);
    root.display(&mut ansi).expect("display to ansi");
    let mut memory = MemoryTerminal::new(WIDTH, HEIGHT);
    mirror.display(&mut memory).expect("display to memory");

    let mut parser = vt100::Parser::new(HEIGHT, WIDTH, 0);
    parser.process(ansi.get_ref());
    assert_eq!(screen_rows(&parser), memory_rows(&memory));
}

#[test]
fn test_colors_reach_the_screen() {
    let mut root = dashboard();
    let mut ansi = AnsiTerminal::with_size(Vec::new(), WIDTH, HEIGHT);
    root.display(&mut ansi).expect("display");

    let mut parser = vt100::Parser::new(HEIGHT, WIDTH, 0);
    parser.process(ansi.get_ref());
    let screen = parser.screen();

    let corner = screen.cell(0, 0).expect("corner cell");
    assert_eq!(corner.contents(), "┌");
    let blue = Rgb::palette(4);
    assert_eq!(corner.fgcolor(), vt100::Color::Rgb(blue.r, blue.g, blue.b));
    assert_eq!(corner.bgcolor(), vt100::Color::Default);

    // The color-range gauge sits in the middle column; 90 falls in the last band.
    let red = Rgb::palette(1);
    let gauge_bottom = screen.cell(HEIGHT / 2 - 1, WIDTH / 3 + 1).expect("gauge cell");
    assert_eq!(gauge_bottom.contents(), "█");
    assert_eq!(gauge_bottom.fgcolor(), vt100::Color::Rgb(red.r, red.g, red.b));
}

#[test]
fn test_incremental_frames_converge_to_full_redraw() {
    let mut root = dashboard();
    let mut compositor = Compositor::default();
    let mut ansi = AnsiTerminal::with_size(Vec::new(), WIDTH, HEIGHT);

    for step in 0..25 {
        feed(&mut root, step);
        compositor.display(&mut root, &mut ansi).expect("incremental display");
    }

    let mut fresh = MemoryTerminal::new(WIDTH, HEIGHT);
    let mut full = Compositor::new(CompositorConfig {
        incremental: false,
        ..CompositorConfig::default()
    });
    full.display(&mut root, &mut fresh).expect("full display");

    let mut parser = vt100::Parser::new(HEIGHT, WIDTH, 0);
    parser.process(ansi.get_ref());
    assert_eq!(screen_rows(&parser), memory_rows(&fresh));
}

#[test]
fn test_unchanged_frame_emits_only_cursor_park() {
    let mut root = dashboard();
    let mut compositor = Compositor::default();
    let mut ansi = AnsiTerminal::with_size(Vec::new(), WIDTH, HEIGHT);
    compositor.display(&mut root, &mut ansi).expect("first frame");
    let after_first = ansi.get_ref().len();

    let stats = compositor.display(&mut root, &mut ansi).expect("second frame");
    assert_eq!(stats.cells_written, 0);
    // The cursor is already parked, so nothing at all is sent.
    assert_eq!(ansi.get_ref().len(), after_first);
}

#[test]
fn test_frame_ends_with_default_colors() {
    let mut root = dashboard();
    let mut ansi = AnsiTerminal::with_size(Vec::new(), WIDTH, HEIGHT);
    root.display(&mut ansi).expect("display");
    assert!(ansi.get_ref().ends_with(b"\x1b[0m"));

    // Whatever the shell prints next lands in the terminal's own colors.
    let mut parser = vt100::Parser::new(HEIGHT, WIDTH, 0);
    parser.process(ansi.get_ref());
    parser.process(b"$");
    let prompt = parser.screen().cell(HEIGHT - 1, 0).expect("prompt cell");
    assert_eq!(prompt.contents(), "$");
    assert_eq!(prompt.fgcolor(), vt100::Color::Default);
    assert_eq!(prompt.bgcolor(), vt100::Color::Default);
}

#[test]
fn test_cursor_parked_bottom_left() {
    let mut root = dashboard();
    let mut ansi = AnsiTerminal::with_size(Vec::new(), WIDTH, HEIGHT);
    root.display(&mut ansi).expect("display");

    let mut parser = vt100::Parser::new(HEIGHT, WIDTH, 0);
    parser.process(ansi.get_ref());
    assert_eq!(parser.screen().cursor_position(), (HEIGHT - 1, 0));
    assert_eq!(ansi.dimensions().expect("fixed size"), (WIDTH, HEIGHT));
}
