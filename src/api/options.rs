use serde::{Deserialize, Serialize};

use crate::core::CandleColors;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Layout, interaction, and style options shared by every chart kind.
///
/// Plain data with documented defaults. It derives serde so hosts can keep it
/// next to their own settings; missing fields fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    /// Target number of grid-line intervals on the value axis. The actual
    /// count follows from the 1-2-5 step and may differ slightly.
    pub grid_line_count: usize,
    /// Bar widths shared out between adjacent bars of a grouped-bar category.
    pub inter_bar_gap_factor: f64,
    /// Stacked column width as a fraction of the category band.
    pub stacked_bar_width_ratio: f64,
    /// Candle body width as a fraction of the category band.
    pub candle_body_width_ratio: f64,
    /// Horizontal distance from a candle wick that still counts as a hit.
    /// Zero restricts candle hits to the body.
    pub wick_hit_tolerance_px: f64,
    /// Empty margin around the whole chart.
    pub padding_px: f64,
    pub label_font_size_px: f64,
    /// Gap between axis labels and the plot area.
    pub label_padding_px: f64,
    pub show_grid_lines: bool,
    /// Hiding labels also drops the space reserved for them.
    pub show_axis_labels: bool,
    pub bar_stroke_width: f64,
    pub wick_width: f64,
    pub grid_line_width: f64,
    pub axis_line_width: f64,
    pub grid_line_color: Color,
    pub axis_line_color: Color,
    pub label_color: Color,
    pub candle_colors: CandleColors,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            grid_line_count: 5,
            inter_bar_gap_factor: 0.5,
            stacked_bar_width_ratio: 1.0,
            candle_body_width_ratio: 0.6,
            wick_hit_tolerance_px: 3.0,
            padding_px: 8.0,
            label_font_size_px: 12.0,
            label_padding_px: 4.0,
            show_grid_lines: true,
            show_axis_labels: true,
            bar_stroke_width: 1.0,
            wick_width: 1.0,
            grid_line_width: 1.0,
            axis_line_width: 1.0,
            grid_line_color: Color::rgb(0.89, 0.92, 0.95),
            axis_line_color: Color::rgb(0.82, 0.84, 0.88),
            label_color: Color::rgb(0.10, 0.12, 0.16),
            candle_colors: CandleColors {
                up_fill: Color::rgb(0.15, 0.65, 0.60),
                up_stroke: Color::rgb(0.10, 0.45, 0.42),
                down_fill: Color::rgb(0.94, 0.33, 0.31),
                down_stroke: Color::rgb(0.70, 0.20, 0.19),
            },
        }
    }
}

impl ChartOptions {
    /// Sets the target number of value-axis grid intervals.
    #[must_use]
    pub fn with_grid_line_count(mut self, grid_line_count: usize) -> Self {
        self.grid_line_count = grid_line_count;
        self
    }

    /// Sets the share of bar widths placed between grouped bars.
    #[must_use]
    pub fn with_inter_bar_gap_factor(mut self, factor: f64) -> Self {
        self.inter_bar_gap_factor = factor;
        self
    }

    #[must_use]
    pub fn with_stacked_bar_width_ratio(mut self, ratio: f64) -> Self {
        self.stacked_bar_width_ratio = ratio;
        self
    }

    #[must_use]
    pub fn with_candle_body_width_ratio(mut self, ratio: f64) -> Self {
        self.candle_body_width_ratio = ratio;
        self
    }

    #[must_use]
    pub fn with_wick_hit_tolerance_px(mut self, tolerance_px: f64) -> Self {
        self.wick_hit_tolerance_px = tolerance_px;
        self
    }

    #[must_use]
    pub fn with_padding_px(mut self, padding_px: f64) -> Self {
        self.padding_px = padding_px;
        self
    }

    #[must_use]
    pub fn with_axis_labels(mut self, show: bool) -> Self {
        self.show_axis_labels = show;
        self
    }

    #[must_use]
    pub fn with_grid_lines(mut self, show: bool) -> Self {
        self.show_grid_lines = show;
        self
    }

    #[must_use]
    pub fn with_candle_colors(mut self, colors: CandleColors) -> Self {
        self.candle_colors = colors;
        self
    }

    /// Options with no margins or labels: the plot area is the whole viewport.
    #[must_use]
    pub fn plot_only() -> Self {
        Self::default().with_padding_px(0.0).with_axis_labels(false)
    }

    pub fn validate(self) -> ChartResult<Self> {
        if self.grid_line_count == 0 {
            return Err(ChartError::InvalidData(
                "grid line count must be >= 1".to_owned(),
            ));
        }
        ensure_non_negative(self.inter_bar_gap_factor, "inter-bar gap factor")?;
        ensure_ratio(self.stacked_bar_width_ratio, "stacked bar width ratio")?;
        ensure_ratio(self.candle_body_width_ratio, "candle body width ratio")?;
        ensure_non_negative(self.wick_hit_tolerance_px, "wick hit tolerance")?;
        ensure_non_negative(self.padding_px, "padding")?;
        ensure_non_negative(self.label_padding_px, "label padding")?;
        ensure_non_negative(self.bar_stroke_width, "bar stroke width")?;
        ensure_positive(self.label_font_size_px, "label font size")?;
        ensure_positive(self.wick_width, "wick width")?;
        ensure_positive(self.grid_line_width, "grid line width")?;
        ensure_positive(self.axis_line_width, "axis line width")?;

        for color in [
            self.grid_line_color,
            self.axis_line_color,
            self.label_color,
            self.candle_colors.up_fill,
            self.candle_colors.up_stroke,
            self.candle_colors.down_fill,
            self.candle_colors.down_stroke,
        ] {
            color.validate()?;
        }

        Ok(self)
    }
}

fn ensure_non_negative(value: f64, name: &str) -> ChartResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{name} must be finite and >= 0"
        )));
    }
    Ok(())
}

fn ensure_positive(value: f64, name: &str) -> ChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{name} must be finite and > 0"
        )));
    }
    Ok(())
}

fn ensure_ratio(value: f64, name: &str) -> ChartResult<()> {
    if !value.is_finite() || value <= 0.0 || value > 1.0 {
        return Err(ChartError::InvalidData(format!("{name} must be in (0, 1]")));
    }
    Ok(())
}
