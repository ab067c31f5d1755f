use serde::{Deserialize, Serialize};

use crate::core::{CategoryLabels, Rect, ValueBounds};

/// Relative slack used when snapping raw bounds and rough steps onto the
/// 1-2-5 ladder, so values that are multiples of the step up to rounding
/// error are not pushed one extra step outwards.
const SNAP_EPSILON: f64 = 1e-9;

/// Largest magnitude an axis bound may take. Leaves room for one extra step
/// on either side without overflowing to infinity.
const MAX_AXIS_MAGNITUDE: f64 = f64::MAX / 4.0;

/// Largest step index; `index × mantissa` stays exact as an f64 below 2^53.
const MAX_STEP_INDEX: f64 = 1_125_899_906_842_624.0; // 2^50

/// Round grid-line step of the form `mantissa × 10^exponent`, mantissa in {1, 2, 5}.
///
/// Grid values are produced as `index × mantissa` scaled by the power of ten
/// in one operation, so `0.3` comes out as the same double as the literal
/// `0.3` instead of `3 × 0.1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridStep {
    mantissa: i64,
    exponent: i32,
}

impl GridStep {
    /// Picks the smallest 1-2-5 step that is at least `rough_step`.
    #[must_use]
    pub fn nice(rough_step: f64) -> Self {
        if !rough_step.is_finite() || rough_step <= 0.0 {
            return Self {
                mantissa: 1,
                exponent: 0,
            };
        }

        let mut exponent = rough_step.log10().floor() as i32;
        let mut fraction = rough_step / pow10(exponent);
        // log10 may land one decade high for values just under a power of ten.
        if fraction < 1.0 {
            exponent -= 1;
            fraction *= 10.0;
        }

        let mantissa = if fraction <= 1.0 + SNAP_EPSILON {
            1
        } else if fraction <= 2.0 + SNAP_EPSILON {
            2
        } else if fraction <= 5.0 + SNAP_EPSILON {
            5
        } else {
            exponent += 1;
            1
        };

        Self { mantissa, exponent }
    }

    #[must_use]
    pub fn mantissa(self) -> i64 {
        self.mantissa
    }

    #[must_use]
    pub fn exponent(self) -> i32 {
        self.exponent
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.value_at(1)
    }

    /// Value of the `index`-th multiple of this step.
    #[must_use]
    pub fn value_at(self, index: i64) -> f64 {
        let units = (index.saturating_mul(self.mantissa)) as f64;
        if self.exponent >= 0 {
            units * pow10(self.exponent)
        } else {
            units / pow10(-self.exponent)
        }
    }

    /// Number of decimals needed to print every multiple of this step exactly.
    #[must_use]
    pub fn decimals(self) -> usize {
        usize::try_from(-self.exponent).unwrap_or(0)
    }

    fn floor_index(self, value: f64) -> i64 {
        let index = clamp_index((value / self.value() + SNAP_EPSILON).floor());
        if self.value_at(index) > value {
            index.saturating_sub(1)
        } else {
            index
        }
    }

    fn ceil_index(self, value: f64) -> i64 {
        let index = clamp_index((value / self.value() - SNAP_EPSILON).ceil());
        if self.value_at(index) < value {
            index.saturating_add(1)
        } else {
            index
        }
    }
}

fn clamp_index(raw: f64) -> i64 {
    if raw.is_nan() {
        return 0;
    }
    raw.clamp(-MAX_STEP_INDEX, MAX_STEP_INDEX) as i64
}

fn pow10(exponent: i32) -> f64 {
    10_f64.powi(exponent)
}

/// Horizontal pixel span allocated to one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryBand {
    pub left: f64,
    pub width: f64,
}

impl CategoryBand {
    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn center(self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// One horizontal reference line of the value axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub value: f64,
    pub y: f64,
}

/// Value → y and category → band mapping for one plot area.
///
/// Built fresh on every resize or data change; all queries are pure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisScale {
    plot_area: Rect,
    bounds: ValueBounds,
    step: GridStep,
    first_step_index: i64,
    last_step_index: i64,
    category_count: usize,
}

impl AxisScale {
    /// Builds the scale for `bounds` drawn into `plot_area`.
    ///
    /// The adjusted value range is widened to whole multiples of a 1-2-5 step
    /// chosen from `desired_grid_line_count`. Zero-span bounds are widened by
    /// one unit, non-finite bounds fall back to `[0, 1]`, and a non-finite or
    /// negative plot area collapses to an empty one. Bounds beyond
    /// `±f64::MAX / 4` are clamped, and the step never gets so fine that a
    /// bound sits more than 2^50 steps from zero.
    #[must_use]
    pub fn build(
        plot_area: Rect,
        labels: &CategoryLabels,
        bounds: ValueBounds,
        desired_grid_line_count: usize,
    ) -> Self {
        let plot_area = sanitize_plot_area(plot_area);
        let bounds = normalize_bounds(bounds);
        let step = GridStep::nice(rough_step(bounds, desired_grid_line_count));

        let first_step_index = step.floor_index(bounds.min);
        let last_step_index = step
            .ceil_index(bounds.max)
            .max(first_step_index.saturating_add(1));

        Self {
            plot_area,
            bounds,
            step,
            first_step_index,
            last_step_index,
            category_count: labels.len(),
        }
    }

    #[must_use]
    pub fn plot_area(&self) -> Rect {
        self.plot_area
    }

    /// Bounds the scale was built from, after degenerate-span widening.
    #[must_use]
    pub fn bounds(&self) -> ValueBounds {
        self.bounds
    }

    #[must_use]
    pub fn step(&self) -> GridStep {
        self.step
    }

    #[must_use]
    pub fn adjusted_min(&self) -> f64 {
        self.step.value_at(self.first_step_index)
    }

    #[must_use]
    pub fn adjusted_max(&self) -> f64 {
        self.step.value_at(self.last_step_index)
    }

    #[must_use]
    pub fn category_count(&self) -> usize {
        self.category_count
    }

    /// Maps a value to a y pixel.
    ///
    /// `adjusted_min` lands exactly on the plot bottom and `adjusted_max`
    /// exactly on the plot top; the mapping never increases with `value`.
    #[must_use]
    pub fn value_to_y(&self, value: f64) -> f64 {
        let min = self.adjusted_min();
        // Halved operands keep the difference finite across the whole axis.
        let t = (value / 2.0 - min / 2.0) / (self.adjusted_max() / 2.0 - min / 2.0);
        lerp(self.plot_area.bottom(), self.plot_area.top(), t)
    }

    /// Inverse of [`AxisScale::value_to_y`].
    #[must_use]
    pub fn y_to_value(&self, y: f64) -> f64 {
        let min = self.adjusted_min();
        let height = self.plot_area.height;
        if height <= 0.0 {
            return min;
        }
        let t = (self.plot_area.bottom() - y) / height;
        min + t * (self.adjusted_max() / 2.0 - min / 2.0) * 2.0
    }

    /// Y of the zero line bars grow from, clamped into the adjusted range.
    #[must_use]
    pub fn baseline_y(&self) -> f64 {
        self.value_to_y(0.0_f64.clamp(self.adjusted_min(), self.adjusted_max()))
    }

    /// Returns the `index`-th of N equal horizontal bands.
    #[must_use]
    pub fn category_band(&self, index: usize) -> Option<CategoryBand> {
        if index >= self.category_count {
            return None;
        }
        let width = self.band_width();
        Some(CategoryBand {
            left: self.plot_area.x + (index as f64) * width,
            width,
        })
    }

    /// Returns the category whose band contains `x` (closed at the plot edges).
    #[must_use]
    pub fn category_at_x(&self, x: f64) -> Option<usize> {
        let width = self.band_width();
        if !x.is_finite() || width <= 0.0 {
            return None;
        }
        if x < self.plot_area.left() || x > self.plot_area.right() {
            return None;
        }
        let index = ((x - self.plot_area.x) / width).floor() as usize;
        Some(index.min(self.category_count - 1))
    }

    #[must_use]
    pub fn band_width(&self) -> f64 {
        if self.category_count == 0 {
            return 0.0;
        }
        self.plot_area.width / self.category_count as f64
    }

    /// Grid-line values from adjusted min to adjusted max, both included.
    pub fn grid_line_values(&self) -> impl Iterator<Item = f64> + '_ {
        (self.first_step_index..=self.last_step_index).map(|index| self.step.value_at(index))
    }

    /// Grid-line values paired with their y pixel, bottom to top.
    pub fn grid_lines(&self) -> impl Iterator<Item = GridLine> + '_ {
        self.grid_line_values().map(|value| GridLine {
            value,
            y: self.value_to_y(value),
        })
    }

    #[must_use]
    pub fn grid_line_count(&self) -> usize {
        usize::try_from(self.last_step_index - self.first_step_index)
            .map_or(0, |gaps| gaps + 1)
    }
}

fn sanitize_plot_area(area: Rect) -> Rect {
    if !area.x.is_finite() || !area.y.is_finite() || !area.width.is_finite() || !area.height.is_finite()
    {
        return Rect::default();
    }
    Rect::new(area.x, area.y, area.width.max(0.0), area.height.max(0.0))
}

fn normalize_bounds(bounds: ValueBounds) -> ValueBounds {
    if !bounds.min.is_finite() || !bounds.max.is_finite() {
        return ValueBounds::new(0.0, 1.0);
    }
    let bounds = ValueBounds::new(
        bounds.min.clamp(-MAX_AXIS_MAGNITUDE, MAX_AXIS_MAGNITUDE),
        bounds.max.clamp(-MAX_AXIS_MAGNITUDE, MAX_AXIS_MAGNITUDE),
    );
    if bounds.is_degenerate() {
        return ValueBounds::new(bounds.min, bounds.max + 1.0);
    }
    bounds
}

fn rough_step(bounds: ValueBounds, desired_grid_line_count: usize) -> f64 {
    let desired = desired_grid_line_count.max(1) as f64;
    let span = bounds.span();
    let rough = if span.is_finite() {
        span / desired
    } else {
        bounds.max / desired - bounds.min / desired
    };
    let magnitude = bounds.min.abs().max(bounds.max.abs());
    rough.max(magnitude / MAX_STEP_INDEX)
}

/// Interpolates from `a` (t = 0) to `b` (t = 1), exact at both ends and
/// monotonic in `t`.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    if (a <= 0.0 && b >= 0.0) || (a >= 0.0 && b <= 0.0) {
        return t * b + (1.0 - t) * a;
    }
    if t == 1.0 {
        return b;
    }
    let x = a + t * (b - a);
    if (t > 1.0) == (b > a) { x.max(b) } else { x.min(b) }
}
