pub mod axis;
pub mod dataset;
pub mod parse;
pub mod project;
pub mod record;
pub mod types;

pub use axis::{compute_axes, habit_axis, trust_axis, AxisSpec, ChartAxes, AXIS_MAX};
pub use dataset::{Dataset, DatasetSummary, SourceBatch};
pub use parse::parse_records;
pub use project::{project_pairs, EntityPointPair, ScanPoint, INVALID_DATE_LABEL};
pub use record::{RawRecord, ValidatedRecord, RECOGNIZED_COLUMNS};
pub use types::Viewport;
