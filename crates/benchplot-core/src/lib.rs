// File: crates/benchplot-core/src/lib.rs
// Summary: Core library entry point; series loading and chart rendering API.

pub mod axis;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod legend;
pub mod loader;
pub mod output;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::Axis;
pub use chart::{render, Chart, ChartArtifact, Frame, RenderOptions};
pub use error::{ChartError, Result};
pub use legend::{Legend, LegendCorner, LegendEntry};
pub use loader::{load, load_all, parse_series};
pub use series::Series;
pub use text::TextShaper;
pub use theme::Theme;
pub use types::{ImageFormat, Insets};
