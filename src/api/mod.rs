mod chart;
mod frame_builder;
mod kind;
pub mod label_format;
mod options;
mod snapshot;

pub use chart::{BarChart, CandlestickChart, Chart, StackedBarChart};
pub use kind::{BarKind, CandlestickKind, ChartKind, ChartType, StackedBarKind};
pub use options::ChartOptions;
pub use snapshot::ChartSnapshot;
