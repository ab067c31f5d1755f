use serde::{Deserialize, Serialize};

use crate::api::ChartType;
use crate::core::{ChartElement, Rect, ValueBounds, Viewport};

/// Serializable deterministic layout state used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub chart_type: ChartType,
    pub viewport: Viewport,
    pub plot_area: Rect,
    pub bounds: ValueBounds,
    pub adjusted_min: f64,
    pub adjusted_max: f64,
    pub grid_values: Vec<f64>,
    pub categories: Vec<String>,
    pub elements: Vec<ChartElement>,
}
