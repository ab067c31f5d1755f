use smallvec::SmallVec;

use crate::core::{ChartElement, ElementId, Point};

/// Ids of the elements under one pointer position, in arena order.
///
/// Almost always zero or one element; a few when grouped bars or stacked
/// segments share an edge pixel.
pub type ActiveElements = SmallVec<[ElementId; 4]>;

/// Returns every element whose shape contains `point`.
///
/// A linear scan: a category chart holds at most a few hundred elements.
/// Non-finite pointer coordinates match nothing.
#[must_use]
pub fn active_elements_at(
    elements: &[ChartElement],
    point: Point,
    wick_tolerance_px: f64,
) -> ActiveElements {
    if !point.is_finite() {
        return ActiveElements::new();
    }

    elements
        .iter()
        .enumerate()
        .filter(|(_, element)| element.shape.contains(point, wick_tolerance_px))
        .map(|(index, _)| ElementId(index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::active_elements_at;
    use crate::core::{
        ChartElement, ElementId, ElementKey, ElementShape, ElementValue, Point, Rect,
    };
    use crate::render::Color;

    fn bar(category_index: usize, rect: Rect) -> ChartElement {
        ChartElement {
            key: ElementKey {
                category_index,
                series_index: 0,
            },
            value: ElementValue::Scalar(1.0),
            shape: ElementShape::Rect(rect),
            fill_color: Color::rgb(0.5, 0.5, 0.5),
            stroke_color: Color::rgb(0.0, 0.0, 0.0),
        }
    }

    #[test]
    fn shared_edge_reports_both_neighbours() {
        let elements = [
            bar(0, Rect::new(0.0, 0.0, 10.0, 10.0)),
            bar(1, Rect::new(10.0, 0.0, 10.0, 10.0)),
        ];

        let hits = active_elements_at(&elements, Point::new(10.0, 5.0), 0.0);
        assert_eq!(hits.as_slice(), &[ElementId(0), ElementId(1)]);

        let hits = active_elements_at(&elements, Point::new(15.0, 5.0), 0.0);
        assert_eq!(hits.as_slice(), &[ElementId(1)]);
    }

    #[test]
    fn nan_pointer_matches_nothing() {
        let elements = [bar(0, Rect::new(0.0, 0.0, 10.0, 10.0))];
        assert!(active_elements_at(&elements, Point::new(f64::NAN, 5.0), 0.0).is_empty());
    }
}
