pub mod axis_scale;
pub mod data;
pub mod geometry;
pub mod primitives;
pub mod types;
pub mod value_range;

pub use axis_scale::{AxisScale, CategoryBand, GridLine, GridStep};
pub use data::{
    BarChartData, BarSeries, CandlestickChartData, CategoryLabels, CategorySeriesData, OhlcValue,
    StackedBarChartData,
};
pub use geometry::{
    BarGroupLayout, CandleColors, CandleGlyph, ChartElement, ElementId, ElementKey, ElementShape,
    ElementValue, layout_candles, layout_grouped_bars, layout_stacked_bars,
};
pub use types::{Point, Rect, Viewport};
pub use value_range::{BoundsInput, BoundsMode, ValueBounds, compute_bounds, cumulative_sums};
