use serde::{Deserialize, Serialize};

use crate::core::axis::ChartAxes;
use crate::core::project::EntityPointPair;
use crate::core::types::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HighlightState, ScanKind};

pub const FIRST_SCAN_COLOR: &str = "#FF6384";
pub const LATEST_SCAN_COLOR: &str = "#36A2EB";
pub const CONNECTOR_COLOR: &str = "#999999";
pub const GRID_COLOR: &str = "#E5E5E5";

pub const HABIT_AXIS_TITLE: &str = "Habit Index";
pub const TRUST_AXIS_TITLE: &str = "Trust NPS";

const MARKER_RADIUS: f64 = 8.0;
const MARKER_RADIUS_ACTIVE: f64 = 10.0;

/// Plot margins in pixels. Bottom leaves room for tick labels, the axis
/// title, and the legend; left leaves room for Trust NPS labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotMargins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for PlotMargins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 60.0,
            left: 60.0,
        }
    }
}

/// Pixel-space grid line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Tick label with its pixel anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickLabel {
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

/// One entity's connecting segment between its two scans.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectorPrimitive {
    pub id: String,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    /// 1.0 when no entity is active or this entity is; 0.2 otherwise.
    pub opacity: f64,
}

/// One scan point drawn as a circle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerPrimitive {
    pub id: String,
    pub scan: ScanKind,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub fill: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: &'static str,
}

/// Complete pixel-space description of the chart.
///
/// A pure snapshot: rebuilding from the same pairs, axes, highlight state,
/// and viewport yields the same scene. NaN data coordinates flow into NaN
/// pixel coordinates unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartScene {
    pub viewport: Viewport,
    pub margins: PlotMargins,
    pub grid_lines: Vec<GridLine>,
    pub habit_ticks: Vec<TickLabel>,
    pub trust_ticks: Vec<TickLabel>,
    pub connectors: Vec<ConnectorPrimitive>,
    pub markers: Vec<MarkerPrimitive>,
    pub legend: Vec<LegendEntry>,
}

/// Maps metric space into the plot rectangle.
#[derive(Debug, Clone, Copy)]
struct PlotFrame {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    habit_min: f64,
    habit_span: f64,
    trust_min: f64,
    trust_span: f64,
}

impl PlotFrame {
    fn new(viewport: Viewport, margins: PlotMargins, axes: &ChartAxes) -> ChartResult<Self> {
        let width = f64::from(viewport.width) - margins.left - margins.right;
        let height = f64::from(viewport.height) - margins.top - margins.bottom;
        if width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        Ok(Self {
            left: margins.left,
            top: margins.top,
            width,
            height,
            habit_min: axes.habit.domain.0,
            habit_span: span_of(axes.habit.domain),
            trust_min: axes.trust.domain.0,
            trust_span: span_of(axes.trust.domain),
        })
    }

    fn habit_to_px(self, value: f64) -> f64 {
        self.left + (value - self.habit_min) / self.habit_span * self.width
    }

    /// Y grows downward in pixel space, so the trust axis is inverted.
    fn trust_to_px(self, value: f64) -> f64 {
        self.top + (1.0 - (value - self.trust_min) / self.trust_span) * self.height
    }
}

/// Degenerate domains map to a unit span instead of dividing by zero.
fn span_of(domain: (f64, f64)) -> f64 {
    let span = domain.1 - domain.0;
    if span > 0.0 {
        span
    } else {
        1.0
    }
}

/// Builds the scene for the current dataset snapshot and hover state.
pub fn build_scene(
    pairs: &[EntityPointPair],
    axes: &ChartAxes,
    highlight: &HighlightState,
    viewport: Viewport,
) -> ChartResult<ChartScene> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let margins = PlotMargins::default();
    let frame = PlotFrame::new(viewport, margins, axes)?;
    let plot_bottom = frame.top + frame.height;
    let plot_right = frame.left + frame.width;

    let mut grid_lines = Vec::new();
    let mut habit_ticks = Vec::new();
    for &tick in &axes.habit.ticks {
        let x = frame.habit_to_px(tick);
        grid_lines.push(GridLine {
            x1: x,
            y1: frame.top,
            x2: x,
            y2: plot_bottom,
        });
        habit_ticks.push(TickLabel {
            value: tick,
            x,
            y: plot_bottom + 16.0,
        });
    }

    let mut trust_ticks = Vec::new();
    for &tick in &axes.trust.ticks {
        let y = frame.trust_to_px(tick);
        grid_lines.push(GridLine {
            x1: frame.left,
            y1: y,
            x2: plot_right,
            y2: y,
        });
        trust_ticks.push(TickLabel {
            value: tick,
            x: frame.left - 8.0,
            y,
        });
    }

    let mut connectors = Vec::with_capacity(pairs.len());
    let mut markers = Vec::with_capacity(pairs.len() * 2);
    for pair in pairs {
        let first = (
            frame.habit_to_px(pair.first_scan.x),
            frame.trust_to_px(pair.first_scan.y),
        );
        let latest = (
            frame.habit_to_px(pair.latest_scan.x),
            frame.trust_to_px(pair.latest_scan.y),
        );

        connectors.push(ConnectorPrimitive {
            id: pair.id.clone(),
            x1: first.0,
            y1: first.1,
            x2: latest.0,
            y2: latest.1,
            opacity: highlight.emphasis(&pair.id),
        });

        let radius = if highlight.active_entity() == Some(pair.id.as_str()) {
            MARKER_RADIUS_ACTIVE
        } else {
            MARKER_RADIUS
        };
        markers.push(MarkerPrimitive {
            id: pair.id.clone(),
            scan: ScanKind::First,
            x: first.0,
            y: first.1,
            radius,
            fill: FIRST_SCAN_COLOR,
        });
        markers.push(MarkerPrimitive {
            id: pair.id.clone(),
            scan: ScanKind::Latest,
            x: latest.0,
            y: latest.1,
            radius,
            fill: LATEST_SCAN_COLOR,
        });
    }

    Ok(ChartScene {
        viewport,
        margins,
        grid_lines,
        habit_ticks,
        trust_ticks,
        connectors,
        markers,
        legend: vec![
            LegendEntry {
                label: "First Scan",
                color: FIRST_SCAN_COLOR,
            },
            LegendEntry {
                label: "Latest Scan",
                color: LATEST_SCAN_COLOR,
            },
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::axis::compute_axes;
    use crate::core::project::ScanPoint;

    fn pair(id: &str, first_x: f64, latest_x: f64) -> EntityPointPair {
        EntityPointPair {
            id: id.to_owned(),
            first_scan: ScanPoint {
                x: first_x,
                y: 50.0,
                date: None,
            },
            latest_scan: ScanPoint {
                x: latest_x,
                y: 60.0,
                date: None,
            },
        }
    }

    #[test]
    fn empty_dataset_renders_frame_furniture_only() {
        let axes = compute_axes(&[]);
        let scene = build_scene(&[], &axes, &HighlightState::default(), Viewport::default())
            .expect("scene");
        assert!(scene.connectors.is_empty());
        assert!(scene.markers.is_empty());
        assert!(!scene.grid_lines.is_empty());
        assert_eq!(scene.legend.len(), 2);
    }

    #[test]
    fn hovered_entity_keeps_full_opacity_and_grows() {
        let pairs = vec![pair("a", 20.0, 40.0), pair("b", 30.0, 50.0)];
        let axes = compute_axes(&pairs);
        let mut highlight = HighlightState::default();
        highlight.on_point_enter("a");

        let scene = build_scene(&pairs, &axes, &highlight, Viewport::default()).expect("scene");
        assert_eq!(scene.connectors[0].opacity, 1.0);
        assert_eq!(scene.connectors[1].opacity, 0.2);
        assert_eq!(scene.markers[0].radius, MARKER_RADIUS_ACTIVE);
        assert_eq!(scene.markers[2].radius, MARKER_RADIUS);
    }

    #[test]
    fn nan_coordinates_pass_through() {
        let pairs = vec![pair("a", f64::NAN, 40.0)];
        let axes = compute_axes(&pairs);
        let scene = build_scene(&pairs, &axes, &HighlightState::default(), Viewport::default())
            .expect("scene");
        assert!(scene.connectors[0].x1.is_nan());
        assert!(scene.connectors[0].x2.is_finite());
    }

    #[test]
    fn zero_viewport_is_rejected() {
        let axes = compute_axes(&[]);
        let result = build_scene(&[], &axes, &HighlightState::default(), Viewport::new(0, 0));
        assert!(result.is_err());
    }
}
