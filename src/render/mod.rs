pub mod scene;
pub mod svg;

pub use scene::{
    build_scene, ChartScene, ConnectorPrimitive, GridLine, LegendEntry, MarkerPrimitive,
    PlotMargins, TickLabel, CONNECTOR_COLOR, FIRST_SCAN_COLOR, GRID_COLOR, LATEST_SCAN_COLOR,
};
pub use svg::{scene_to_svg, write_svg, EXPORT_FILE_NAME};
