//! Serializes a chart scene to standalone SVG markup.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ChartResult;
use crate::render::scene::{
    ChartScene, CONNECTOR_COLOR, GRID_COLOR, HABIT_AXIS_TITLE, TRUST_AXIS_TITLE,
};

/// Canonical download name for an exported chart.
pub const EXPORT_FILE_NAME: &str = "lhp_chart.svg";

/// Renders the scene as SVG markup.
///
/// A pure snapshot of what is currently visible; it carries no data
/// semantics beyond the scene itself.
#[must_use]
pub fn scene_to_svg(scene: &ChartScene) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" font-family="sans-serif" font-size="12">
<rect width="100%" height="100%" fill="white"/>
"#,
        scene.viewport.width, scene.viewport.height
    );

    for line in &scene.grid_lines {
        let _ = writeln!(
            svg,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{GRID_COLOR}" stroke-opacity="0.5" stroke-dasharray="3 3"/>"#,
            line.x1, line.y1, line.x2, line.y2
        );
    }

    for tick in &scene.habit_ticks {
        let _ = writeln!(
            svg,
            r##"  <text x="{}" y="{}" fill="#666" text-anchor="middle">{}</text>"##,
            tick.x, tick.y, tick.value
        );
    }
    for tick in &scene.trust_ticks {
        let _ = writeln!(
            svg,
            r##"  <text x="{}" y="{}" fill="#666" text-anchor="end" dominant-baseline="middle">{}</text>"##,
            tick.x, tick.y, tick.value
        );
    }

    let width = f64::from(scene.viewport.width);
    let height = f64::from(scene.viewport.height);
    let plot_center_x = scene.margins.left + (width - scene.margins.left - scene.margins.right) / 2.0;
    let plot_center_y = scene.margins.top + (height - scene.margins.top - scene.margins.bottom) / 2.0;
    let _ = writeln!(
        svg,
        r##"  <text x="{plot_center_x}" y="{}" fill="#666" font-size="14" text-anchor="middle">{HABIT_AXIS_TITLE}</text>"##,
        height - scene.margins.bottom + 38.0
    );
    let _ = writeln!(
        svg,
        r##"  <text x="16" y="{plot_center_y}" fill="#666" font-size="14" text-anchor="middle" transform="rotate(-90 16 {plot_center_y})">{TRUST_AXIS_TITLE}</text>"##
    );

    for connector in &scene.connectors {
        let _ = writeln!(
            svg,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{CONNECTOR_COLOR}" stroke-width="1" stroke-opacity="{}"/>"#,
            connector.x1, connector.y1, connector.x2, connector.y2, connector.opacity
        );
    }

    for marker in &scene.markers {
        let _ = writeln!(
            svg,
            r##"  <circle cx="{}" cy="{}" r="{}" fill="{}" stroke="#fff" stroke-width="2"/>"##,
            marker.x, marker.y, marker.radius, marker.fill
        );
    }

    let legend_y = height - 14.0;
    let mut legend_x = plot_center_x - 60.0 * (scene.legend.len() as f64) / 2.0;
    for entry in &scene.legend {
        let _ = writeln!(
            svg,
            r#"  <circle cx="{legend_x}" cy="{}" r="5" fill="{}"/>"#,
            legend_y - 4.0,
            entry.color
        );
        let _ = writeln!(
            svg,
            r#"  <text x="{}" y="{legend_y}" fill="{}" font-weight="bold">{}</text>"#,
            legend_x + 10.0,
            entry.color,
            entry.label
        );
        legend_x += 120.0;
    }

    svg.push_str("</svg>\n");
    svg
}

/// Writes the scene to `dir` under the canonical export name.
pub fn write_svg(scene: &ChartScene, dir: &Path) -> ChartResult<PathBuf> {
    let path = dir.join(EXPORT_FILE_NAME);
    fs::write(&path, scene_to_svg(scene))?;
    info!(path = %path.display(), "exported chart");
    Ok(path)
}
