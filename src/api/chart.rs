use std::marker::PhantomData;

use tracing::{debug, trace, warn};

use crate::api::frame_builder::{build_render_frame, resolve_plot_area, visible_grid_lines};
use crate::api::label_format;
use crate::api::{
    BarKind, CandlestickKind, ChartKind, ChartOptions, ChartSnapshot, ChartType, StackedBarKind,
};
use crate::core::{
    AxisScale, BarSeries, CategoryLabels, CategorySeriesData, ChartElement, ElementId, OhlcValue,
    Point, Rect, ValueBounds, Viewport,
};
use crate::error::ChartResult;
use crate::interaction::{ActiveElements, InteractionState, active_elements_at};
use crate::render::{RenderFrame, Renderer};

/// Category chart engine parameterized by its kind strategy.
///
/// Owns the dataset, the current scale and the element arena. Every change
/// of data, options or viewport rebuilds bounds, scale and geometry from
/// scratch; element ids returned before a rebuild are stale afterwards.
#[derive(Debug, Clone)]
pub struct Chart<K: ChartKind> {
    data: K::Data,
    options: ChartOptions,
    viewport: Viewport,
    bounds: ValueBounds,
    scale: AxisScale,
    elements: Vec<ChartElement>,
    interaction: InteractionState,
    kind: PhantomData<K>,
}

pub type BarChart = Chart<BarKind>;
pub type StackedBarChart = Chart<StackedBarKind>;
pub type CandlestickChart = Chart<CandlestickKind>;

impl<K: ChartKind> Chart<K> {
    pub fn new(data: K::Data, options: ChartOptions, viewport: Viewport) -> ChartResult<Self> {
        let options = options.validate()?;
        let bounds = K::bounds(&data);
        let mut chart = Self {
            data,
            options,
            viewport,
            bounds,
            scale: AxisScale::build(Rect::default(), &CategoryLabels::default(), bounds, 1),
            elements: Vec::new(),
            interaction: InteractionState::default(),
            kind: PhantomData,
        };
        chart.rebuild();
        Ok(chart)
    }

    #[must_use]
    pub fn chart_type(&self) -> ChartType {
        K::CHART_TYPE
    }

    #[must_use]
    pub fn data(&self) -> &K::Data {
        &self.data
    }

    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn labels(&self) -> &CategoryLabels {
        K::labels(&self.data)
    }

    /// Raw value bounds of the current dataset.
    #[must_use]
    pub fn bounds(&self) -> ValueBounds {
        self.bounds
    }

    #[must_use]
    pub fn scale(&self) -> &AxisScale {
        &self.scale
    }

    #[must_use]
    pub fn plot_area(&self) -> Rect {
        self.scale.plot_area()
    }

    /// Element arena in category-major, series-minor order.
    #[must_use]
    pub fn elements(&self) -> &[ChartElement] {
        &self.elements
    }

    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&ChartElement> {
        self.elements.get(id.0)
    }

    pub fn resize(&mut self, viewport: Viewport) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        self.rebuild();
    }

    pub fn replace_data(&mut self, data: K::Data) {
        self.data = data;
        debug!(
            categories = K::labels(&self.data).len(),
            series = K::series_count(&self.data),
            "replace chart data"
        );
        self.rebuild();
    }

    /// Swaps options after validating them; invalid options leave the chart
    /// unchanged.
    pub fn set_options(&mut self, options: ChartOptions) -> ChartResult<()> {
        match options.validate() {
            Ok(options) => {
                self.options = options;
                self.rebuild();
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "rejecting chart options");
                Err(err)
            }
        }
    }

    /// Ids of every element under the pixel `(x, y)`.
    #[must_use]
    pub fn active_elements_at(&self, x: f64, y: f64) -> ActiveElements {
        let hits = active_elements_at(
            &self.elements,
            Point::new(x, y),
            self.options.wick_hit_tolerance_px,
        );
        trace!(x, y, hits = hits.len(), "hit test");
        hits
    }

    /// Records a pointer move; returns `true` when the hovered set changed.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        let hits = self.active_elements_at(x, y);
        self.interaction.on_pointer_move(Point::new(x, y), hits)
    }

    pub fn pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
    }

    #[must_use]
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn hovered_elements(&self) -> impl Iterator<Item = &ChartElement> + '_ {
        self.interaction
            .hovered()
            .iter()
            .filter_map(|id| self.element(*id))
    }

    /// Tooltip text for one element, `None` for a stale id.
    #[must_use]
    pub fn tooltip_text(&self, id: ElementId) -> Option<String> {
        let element = self.element(id)?;
        let label = self.labels().get(element.key.category_index)?;
        let series_name = K::series_name(&self.data, element.key.series_index);
        Some(label_format::tooltip_text(label, series_name, element.value))
    }

    /// `false` when there are no categories, or no series to fill them.
    #[must_use]
    pub fn has_data(&self) -> bool {
        !self.labels().is_empty() && K::series_count(&self.data) > 0
    }

    /// Values of the grid lines this chart draws. Without data only the zero
    /// line is drawn.
    #[must_use]
    pub fn grid_line_values(&self) -> Vec<f64> {
        visible_grid_lines(&self.scale, self.has_data())
            .map(|line| line.value)
            .collect()
    }

    /// Materializes grid, axes, labels and elements into draw commands.
    #[must_use]
    pub fn build_frame(&self) -> RenderFrame {
        build_render_frame(
            self.viewport,
            &self.scale,
            self.labels(),
            &self.elements,
            &self.options,
            self.has_data(),
        )
    }

    pub fn render<R: Renderer>(&self, renderer: &mut R) -> ChartResult<()> {
        let frame = self.build_frame();
        frame.validate()?;
        trace!(
            lines = frame.lines.len(),
            rects = frame.rects.len(),
            texts = frame.texts.len(),
            "render frame"
        );
        renderer.render(&frame)
    }

    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot {
            chart_type: K::CHART_TYPE,
            viewport: self.viewport,
            plot_area: self.scale.plot_area(),
            bounds: self.bounds,
            adjusted_min: self.scale.adjusted_min(),
            adjusted_max: self.scale.adjusted_max(),
            grid_values: self.grid_line_values(),
            categories: self.labels().as_slice().to_vec(),
            elements: self.elements.clone(),
        }
    }

    /// Serializes the snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    fn rebuild(&mut self) {
        let has_data = self.has_data();
        let labels = K::labels(&self.data);
        self.bounds = K::bounds(&self.data);
        let plot_area =
            resolve_plot_area(self.viewport, &self.options, labels, self.bounds, has_data);
        self.scale = AxisScale::build(
            plot_area,
            labels,
            self.bounds,
            self.options.grid_line_count,
        );
        self.elements = if self.scale.plot_area().is_empty() {
            Vec::new()
        } else {
            K::layout(&self.scale, &self.data, &self.options)
        };
        self.interaction.clear_hover();

        debug!(
            categories = labels.len(),
            series = K::series_count(&self.data),
            elements = self.elements.len(),
            min = self.scale.adjusted_min(),
            max = self.scale.adjusted_max(),
            "rebuild chart geometry"
        );
    }
}

impl<K: ChartKind<Data = CategorySeriesData>> Chart<K> {
    /// Appends one category with a value per series; a value count that does
    /// not match the series count leaves the chart unchanged.
    pub fn append_category(&mut self, label: impl Into<String>, values: &[f64]) -> ChartResult<()> {
        if let Err(err) = self.data.append_category(label, values) {
            warn!(error = %err, "rejecting appended category");
            return Err(err);
        }
        trace!(categories = self.data.category_count(), "append category");
        self.rebuild();
        Ok(())
    }

    pub fn add_series(&mut self, series: BarSeries) -> ChartResult<()> {
        if let Err(err) = self.data.add_series(series) {
            warn!(error = %err, "rejecting added series");
            return Err(err);
        }
        trace!(series = self.data.series().len(), "add series");
        self.rebuild();
        Ok(())
    }
}

impl Chart<CandlestickKind> {
    pub fn append_candle(&mut self, label: impl Into<String>, value: OhlcValue) {
        self.data.append(label, value);
        trace!(categories = self.data.category_count(), "append candle");
        self.rebuild();
    }
}
