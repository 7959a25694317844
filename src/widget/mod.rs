//! Widgets: the content renderers behind leaf tiles.
//!
//! Each widget owns its state (text, log lines, gauge value, chart history)
//! and paints into the frame [`Buffer`](crate::buffer::Buffer) through the
//! [`Widget`] trait. Widgets never see borders or titles; the compositor
//! hands them the interior area only.
//!
//! # Example
//!
//! ```rust
//! use tilewall::buffer::Buffer;
//! use tilewall::tile::Style;
//! use tilewall::widget::{Gauge, Widget};
//!
//! let mut buffer = Buffer::new(11, 1);
//! Gauge::horizontal(50.0).render(buffer.area(), &mut buffer, &Style::default());
//! assert_eq!(buffer.row_text(0), "█████▌     ");
//! ```

mod chart;
mod gauge;
mod history;
mod log;
mod text;
mod traits;

pub use chart::{Chart, ChartKind, ChartScale, DEFAULT_CHART_CAPACITY, DEFAULT_ROW_CHART_CAPACITY};
pub use gauge::{clamp_percent, ColorMap, ColorRangeGauge, Gauge};
pub use history::History;
pub use log::{Log, DEFAULT_LOG_CAPACITY};
pub use text::Text;
pub use traits::Widget;
