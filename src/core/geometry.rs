use serde::{Deserialize, Serialize};

use crate::core::{AxisScale, BarSeries, CategoryBand, OhlcValue, Point, Rect};
use crate::render::Color;

/// Index of an element in a chart's geometry arena.
///
/// Only meaningful for the geometry it was obtained from; any resize or data
/// change rebuilds the arena and invalidates previously returned ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub usize);

/// Logical origin of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementKey {
    pub category_index: usize,
    pub series_index: usize,
}

/// Denormalized copy of the data behind an element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ElementValue {
    Scalar(f64),
    Ohlc(OhlcValue),
}

/// Candlestick glyph: a body rectangle plus a vertical high/low wick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleGlyph {
    pub body: Rect,
    pub center_x: f64,
    pub wick_top: f64,
    pub wick_bottom: f64,
    pub is_bullish: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ElementShape {
    Rect(Rect),
    Candle(CandleGlyph),
}

impl ElementShape {
    /// Smallest rectangle covering the whole shape.
    #[must_use]
    pub fn bounding_rect(&self) -> Rect {
        match self {
            Self::Rect(rect) => *rect,
            Self::Candle(candle) => {
                let top = candle.body.top().min(candle.wick_top);
                let bottom = candle.body.bottom().max(candle.wick_bottom);
                Rect::new(candle.body.x, top, candle.body.width, bottom - top)
            }
        }
    }

    /// Closed-bounds containment test.
    ///
    /// For candles the body always counts; the wick counts when `point` lies
    /// within `wick_tolerance_px` of the wick horizontally and between high and
    /// low vertically. A tolerance of zero restricts hits to the body.
    #[must_use]
    pub fn contains(&self, point: Point, wick_tolerance_px: f64) -> bool {
        match self {
            Self::Rect(rect) => rect.contains(point),
            Self::Candle(candle) => {
                if candle.body.contains(point) {
                    return true;
                }
                wick_tolerance_px > 0.0
                    && (point.x - candle.center_x).abs() <= wick_tolerance_px
                    && point.y >= candle.wick_top
                    && point.y <= candle.wick_bottom
            }
        }
    }
}

/// One drawable, hit-testable item of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartElement {
    pub key: ElementKey,
    pub value: ElementValue,
    pub shape: ElementShape,
    pub fill_color: Color,
    pub stroke_color: Color,
}

/// Fill and stroke colors for rising and falling candles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleColors {
    pub up_fill: Color,
    pub up_stroke: Color,
    pub down_fill: Color,
    pub down_stroke: Color,
}

/// Horizontal placement of the bars of one category group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGroupLayout {
    pub bar_width: f64,
    pub gap: f64,
    left: f64,
}

impl BarGroupLayout {
    /// Splits `band` among `series_count` bars.
    ///
    /// Each bar is `band.width / (series_count + 1 + inter_bar_gap_factor)`
    /// wide. Half a bar width of padding sits on each side of the group and
    /// `inter_bar_gap_factor` bar widths are shared out between adjacent bars.
    /// A lone bar has no neighbours, so its gap share widens the padding.
    #[must_use]
    pub fn new(band: CategoryBand, series_count: usize, inter_bar_gap_factor: f64) -> Self {
        let count = series_count as f64;
        let bar_width = band.width / (count + 1.0 + inter_bar_gap_factor);
        let gap = if series_count > 1 {
            inter_bar_gap_factor * bar_width / (count - 1.0)
        } else {
            0.0
        };
        let group_width = count * bar_width + (count - 1.0).max(0.0) * gap;
        Self {
            bar_width,
            gap,
            left: band.left + (band.width - group_width) / 2.0,
        }
    }

    #[must_use]
    pub fn bar_x(&self, series_index: usize) -> f64 {
        self.left + (series_index as f64) * (self.bar_width + self.gap)
    }
}

/// Grouped bars: one bar per series side by side in every category band,
/// anchored at the zero line.
#[must_use]
pub fn layout_grouped_bars(
    scale: &AxisScale,
    series: &[BarSeries],
    inter_bar_gap_factor: f64,
) -> Vec<ChartElement> {
    if series.is_empty() {
        return Vec::new();
    }

    let baseline = scale.baseline_y();
    let mut elements = Vec::with_capacity(scale.category_count() * series.len());
    for category_index in 0..scale.category_count() {
        let Some(band) = scale.category_band(category_index) else {
            continue;
        };
        let group = BarGroupLayout::new(band, series.len(), inter_bar_gap_factor);
        for (series_index, series) in series.iter().enumerate() {
            let Some(value) = series.values().get(category_index).copied() else {
                continue;
            };
            let rect = Rect::from_vertical_span(
                group.bar_x(series_index),
                group.bar_width,
                scale.value_to_y(value),
                baseline,
            );
            elements.push(ChartElement {
                key: ElementKey {
                    category_index,
                    series_index,
                },
                value: ElementValue::Scalar(value),
                shape: ElementShape::Rect(rect),
                fill_color: series.fill_color(),
                stroke_color: series.stroke_color(),
            });
        }
    }
    elements
}

/// Stacked bars: one column per category, each series a segment spanning
/// the running total before and after it.
#[must_use]
pub fn layout_stacked_bars(
    scale: &AxisScale,
    series: &[BarSeries],
    width_ratio: f64,
) -> Vec<ChartElement> {
    let mut elements = Vec::with_capacity(scale.category_count() * series.len());
    for category_index in 0..scale.category_count() {
        let Some(band) = scale.category_band(category_index) else {
            continue;
        };
        let width = band.width * width_ratio;
        let x = band.left + (band.width - width) / 2.0;

        let mut running_total = 0.0;
        for (series_index, series) in series.iter().enumerate() {
            let Some(value) = series.values().get(category_index).copied() else {
                continue;
            };
            let before = running_total;
            running_total += value;
            let rect = Rect::from_vertical_span(
                x,
                width,
                scale.value_to_y(before),
                scale.value_to_y(running_total),
            );
            elements.push(ChartElement {
                key: ElementKey {
                    category_index,
                    series_index,
                },
                value: ElementValue::Scalar(value),
                shape: ElementShape::Rect(rect),
                fill_color: series.fill_color(),
                stroke_color: series.stroke_color(),
            });
        }
    }
    elements
}

/// Candlesticks: a wick from high to low at the band center and a body from
/// open to close, colored by direction.
#[must_use]
pub fn layout_candles(
    scale: &AxisScale,
    values: &[OhlcValue],
    body_width_ratio: f64,
    colors: CandleColors,
) -> Vec<ChartElement> {
    values
        .iter()
        .enumerate()
        .filter_map(|(category_index, value)| {
            let band = scale.category_band(category_index)?;
            let center_x = band.center();
            let body_width = band.width * body_width_ratio;
            let is_bullish = value.is_bullish();
            let (fill_color, stroke_color) = if is_bullish {
                (colors.up_fill, colors.up_stroke)
            } else {
                (colors.down_fill, colors.down_stroke)
            };

            let candle = CandleGlyph {
                body: Rect::from_vertical_span(
                    center_x - body_width / 2.0,
                    body_width,
                    scale.value_to_y(value.open),
                    scale.value_to_y(value.close),
                ),
                center_x,
                wick_top: scale.value_to_y(value.high),
                wick_bottom: scale.value_to_y(value.low),
                is_bullish,
            };
            Some(ChartElement {
                key: ElementKey {
                    category_index,
                    series_index: 0,
                },
                value: ElementValue::Ohlc(*value),
                shape: ElementShape::Candle(candle),
                fill_color,
                stroke_color,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{BarGroupLayout, CandleGlyph, ElementShape};
    use crate::core::{CategoryBand, Point, Rect};

    #[test]
    fn single_bar_is_centered_in_its_band() {
        let band = CategoryBand {
            left: 0.0,
            width: 90.0,
        };
        let layout = BarGroupLayout::new(band, 1, 1.0);
        assert_eq!(layout.bar_width, 30.0);
        assert_eq!(layout.gap, 0.0);
        assert_eq!(layout.bar_x(0), 30.0);
    }

    #[test]
    fn grouped_bars_share_gap_and_padding() {
        let band = CategoryBand {
            left: 100.0,
            width: 70.0,
        };
        // 3 bars + 1 padding + 3 gap widths = 7 slots of 10 px.
        let layout = BarGroupLayout::new(band, 3, 3.0);
        assert_eq!(layout.bar_width, 10.0);
        assert_eq!(layout.gap, 15.0);
        assert_eq!(layout.bar_x(0), 105.0);
        assert_eq!(layout.bar_x(2), 155.0);
        assert_eq!(layout.bar_x(2) + layout.bar_width, 165.0);
    }

    #[test]
    fn candle_wick_hits_respect_tolerance() {
        let shape = ElementShape::Candle(CandleGlyph {
            body: Rect::new(45.0, 40.0, 10.0, 20.0),
            center_x: 50.0,
            wick_top: 10.0,
            wick_bottom: 90.0,
            is_bullish: true,
        });

        assert!(shape.contains(Point::new(50.0, 50.0), 0.0));
        assert!(shape.contains(Point::new(52.0, 15.0), 3.0));
        assert!(!shape.contains(Point::new(52.0, 15.0), 0.0));
        assert!(!shape.contains(Point::new(50.0, 95.0), 3.0));
        assert_eq!(shape.bounding_rect(), Rect::new(45.0, 10.0, 10.0, 80.0));
    }
}
