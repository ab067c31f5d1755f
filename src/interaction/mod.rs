mod hit_test;

pub use hit_test::{ActiveElements, active_elements_at};

use crate::core::{ElementId, Point};

/// Pointer hover state driving tooltips and highlight.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    cursor: Option<Point>,
    hovered: ActiveElements,
}

impl InteractionState {
    /// Last pointer position inside the chart, `None` after the pointer left.
    #[must_use]
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    #[must_use]
    pub fn hovered(&self) -> &[ElementId] {
        &self.hovered
    }

    /// Records a pointer move and the elements now under it.
    ///
    /// Returns `true` when the hovered set changed, i.e. the host should
    /// update its tooltip.
    pub fn on_pointer_move(&mut self, point: Point, hovered: ActiveElements) -> bool {
        self.cursor = Some(point);
        if self.hovered == hovered {
            return false;
        }
        self.hovered = hovered;
        true
    }

    pub fn on_pointer_leave(&mut self) {
        self.cursor = None;
        self.hovered.clear();
    }

    /// Drops hovered ids after the geometry they refer to was rebuilt.
    pub fn clear_hover(&mut self) {
        self.hovered.clear();
    }
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use super::{ActiveElements, InteractionState};
    use crate::core::{ElementId, Point};

    #[test]
    fn pointer_move_reports_hover_changes_only() {
        let mut state = InteractionState::default();
        let hits: ActiveElements = smallvec![ElementId(2)];

        assert!(state.on_pointer_move(Point::new(1.0, 1.0), hits.clone()));
        assert!(!state.on_pointer_move(Point::new(2.0, 1.0), hits));
        assert_eq!(state.cursor(), Some(Point::new(2.0, 1.0)));
        assert!(state.on_pointer_move(Point::new(50.0, 1.0), ActiveElements::new()));
    }

    #[test]
    fn pointer_leave_clears_cursor_and_hover() {
        let mut state = InteractionState::default();
        state.on_pointer_move(Point::new(1.0, 1.0), smallvec![ElementId(0)]);
        state.on_pointer_leave();
        assert!(state.cursor().is_none());
        assert!(state.hovered().is_empty());
    }
}
