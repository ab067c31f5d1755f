//! category-chart: layout and hit-testing engine for category charts.
//!
//! Turns labeled numeric data into axis bounds, 1-2-5 grid lines, per-element
//! pixel geometry for bar, stacked-bar and candlestick charts, and answers
//! "which elements are under this pixel" queries. Drawing is left to a host
//! [`render::Renderer`] consuming backend-agnostic [`render::RenderFrame`]s.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{BarChart, CandlestickChart, Chart, ChartOptions, StackedBarChart};
pub use error::{ChartError, ChartResult};
