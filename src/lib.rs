//! lhp-chart: paired-scan scatter chart engine.
//!
//! Ingests delimited LHP report exports describing two time-separated scans
//! per entity and produces validated records, projected point pairs, axis
//! domains and ticks, hover/pairing state, and an exportable SVG scene for a
//! host UI to draw.

pub mod api;
pub mod core;
pub mod error;
pub mod ingest;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartSession, ChartSessionConfig};
pub use error::{ChartError, ChartResult};
