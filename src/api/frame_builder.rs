use crate::api::ChartOptions;
use crate::api::label_format::{estimate_grid_label_width_px, format_grid_value};
use crate::core::{
    AxisScale, CategoryLabels, ChartElement, ElementShape, GridLine, Rect, ValueBounds, Viewport,
};
use crate::render::{LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

/// Grid lines a chart shows: every line of the scale, or only the zero line
/// when the dataset has nothing to plot.
pub(crate) fn visible_grid_lines(
    scale: &AxisScale,
    has_data: bool,
) -> impl Iterator<Item = GridLine> + '_ {
    scale
        .grid_lines()
        .filter(move |line| has_data || line.value == 0.0)
}

/// Carves the plot area out of the viewport.
///
/// Outer padding comes off every side. With axis labels enabled, a column
/// wide enough for the widest grid label is reserved on the left, a row for
/// category labels at the bottom, and half a line at the top so the highest
/// grid label is not clipped. Viewports too small for all of that yield a
/// zero-sized plot area.
pub(crate) fn resolve_plot_area(
    viewport: Viewport,
    options: &ChartOptions,
    labels: &CategoryLabels,
    bounds: ValueBounds,
    has_data: bool,
) -> Rect {
    let padding = options.padding_px;
    let mut left = padding;
    let mut top = padding;
    let right = f64::from(viewport.width) - padding;
    let mut bottom = f64::from(viewport.height) - padding;

    if options.show_axis_labels {
        // The grid step does not depend on pixels, so an empty probe area is enough.
        let probe = AxisScale::build(Rect::default(), labels, bounds, options.grid_line_count);
        let label_column = visible_grid_lines(&probe, has_data)
            .map(|line| {
                estimate_grid_label_width_px(
                    &format_grid_value(line.value, probe.step()),
                    options.label_font_size_px,
                )
            })
            .fold(0.0, f64::max);

        left += label_column + options.label_padding_px;
        top += options.label_font_size_px / 2.0;
        bottom -= options.label_font_size_px + options.label_padding_px;
    }

    if right <= left || bottom <= top {
        return Rect::new(left.min(right).max(0.0), top.min(bottom).max(0.0), 0.0, 0.0);
    }
    Rect::new(left, top, right - left, bottom - top)
}

/// Materializes one chart into draw commands.
///
/// Lines hold grid lines, then the two axis lines, then candle wicks; texts
/// hold grid labels, then category labels; rects hold bar and candle bodies
/// in element order. An empty plot area produces an empty frame; a dataset
/// with nothing to plot keeps only the zero grid line and its label.
pub(crate) fn build_render_frame(
    viewport: Viewport,
    scale: &AxisScale,
    labels: &CategoryLabels,
    elements: &[ChartElement],
    options: &ChartOptions,
    has_data: bool,
) -> RenderFrame {
    let mut frame = RenderFrame::new(viewport);
    let plot = scale.plot_area();
    if plot.is_empty() {
        return frame;
    }

    if options.show_grid_lines {
        frame.lines.extend(visible_grid_lines(scale, has_data).map(|line| {
            LinePrimitive::new(
                plot.left(),
                line.y,
                plot.right(),
                line.y,
                options.grid_line_width,
                options.grid_line_color,
            )
        }));
    }

    let baseline = scale.baseline_y();
    frame.lines.push(LinePrimitive::new(
        plot.left(),
        plot.top(),
        plot.left(),
        plot.bottom(),
        options.axis_line_width,
        options.axis_line_color,
    ));
    frame.lines.push(LinePrimitive::new(
        plot.left(),
        baseline,
        plot.right(),
        baseline,
        options.axis_line_width,
        options.axis_line_color,
    ));

    for element in elements {
        match element.shape {
            ElementShape::Rect(rect) => frame.rects.push(RectPrimitive::new(
                rect,
                element.fill_color,
                element.stroke_color,
                options.bar_stroke_width,
            )),
            ElementShape::Candle(candle) => {
                frame.lines.push(LinePrimitive::new(
                    candle.center_x,
                    candle.wick_top,
                    candle.center_x,
                    candle.wick_bottom,
                    options.wick_width,
                    element.stroke_color,
                ));
                frame.rects.push(RectPrimitive::new(
                    candle.body,
                    element.fill_color,
                    element.stroke_color,
                    options.bar_stroke_width,
                ));
            }
        }
    }

    if options.show_axis_labels {
        push_axis_labels(&mut frame, scale, labels, options, has_data);
    }
    frame
}

fn push_axis_labels(
    frame: &mut RenderFrame,
    scale: &AxisScale,
    labels: &CategoryLabels,
    options: &ChartOptions,
    has_data: bool,
) {
    let plot = scale.plot_area();
    let font_size = options.label_font_size_px;

    for line in visible_grid_lines(scale, has_data) {
        frame.texts.push(TextPrimitive::new(
            format_grid_value(line.value, scale.step()),
            plot.left() - options.label_padding_px,
            line.y,
            font_size,
            options.label_color,
            TextHAlign::Right,
        ));
    }

    let label_y = plot.bottom() + options.label_padding_px + font_size / 2.0;
    for (index, label) in labels.iter().enumerate() {
        if label.is_empty() {
            continue;
        }
        let Some(band) = scale.category_band(index) else {
            continue;
        };
        frame.texts.push(TextPrimitive::new(
            label,
            band.center(),
            label_y,
            font_size,
            options.label_color,
            TextHAlign::Center,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::{resolve_plot_area, visible_grid_lines};
    use crate::api::ChartOptions;
    use crate::core::{AxisScale, CategoryLabels, Rect, ValueBounds, Viewport};

    #[test]
    fn plot_only_options_use_the_whole_viewport() {
        let area = resolve_plot_area(
            Viewport::new(300, 100),
            &ChartOptions::plot_only(),
            &CategoryLabels::new(["a"]),
            ValueBounds::new(0.0, 10.0),
            true,
        );
        assert_eq!(area, Rect::new(0.0, 0.0, 300.0, 100.0));
    }

    #[test]
    fn labels_reserve_left_column_and_bottom_row() {
        let options = ChartOptions::default();
        let area = resolve_plot_area(
            Viewport::new(400, 300),
            &options,
            &CategoryLabels::new(["a", "b"]),
            ValueBounds::new(0.0, 1000.0),
            true,
        );
        assert!(area.x > options.padding_px + options.label_font_size_px);
        assert!(area.bottom() < 300.0 - options.padding_px - options.label_font_size_px);
        assert_eq!(area.right(), 400.0 - options.padding_px);
    }

    #[test]
    fn tiny_viewport_yields_empty_plot_area() {
        let area = resolve_plot_area(
            Viewport::new(10, 10),
            &ChartOptions::default(),
            &CategoryLabels::new(["a"]),
            ValueBounds::new(0.0, 1.0),
            true,
        );
        assert!(area.is_empty());
    }

    #[test]
    fn nothing_to_plot_keeps_only_the_zero_line() {
        let scale = AxisScale::build(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            &CategoryLabels::default(),
            ValueBounds::EMPTY,
            5,
        );
        assert_eq!(scale.grid_line_count(), 6);

        let lines = visible_grid_lines(&scale, false).collect::<Vec<_>>();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].value, 0.0);
        assert_eq!(lines[0].y, 100.0);
        assert_eq!(visible_grid_lines(&scale, true).count(), 6);
    }
}
