use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::core::record::ValidatedRecord;

/// Label used when a scan timestamp failed to parse.
pub const INVALID_DATE_LABEL: &str = "invalid date";

/// One measurement event placed in metric space.
///
/// `x` is the Habit Index and `y` the Trust NPS. Either may be NaN when the
/// source text was non-numeric; the value is propagated, not rejected, and
/// downstream geometry must tolerate it. `None` for `date` is the
/// invalid-date sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanPoint {
    pub x: f64,
    pub y: f64,
    pub date: Option<DateTime<Utc>>,
}

impl ScanPoint {
    /// Display form of the scan date, `"invalid date"` for the sentinel.
    #[must_use]
    pub fn date_label(self) -> String {
        match self.date {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => INVALID_DATE_LABEL.to_owned(),
        }
    }
}

/// Both scans of one entity, immutable once projected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityPointPair {
    pub id: String,
    pub first_scan: ScanPoint,
    pub latest_scan: ScanPoint,
}

/// Maps every validated record to an entity point pair.
///
/// Pure with respect to the dataset: same records, same pairs. One pair per
/// record, duplicate ids included.
#[must_use]
pub fn project_pairs(records: &[ValidatedRecord]) -> Vec<EntityPointPair> {
    #[cfg(feature = "parallel-projection")]
    {
        use rayon::prelude::*;
        records.par_iter().map(project_record).collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        records.iter().map(project_record).collect()
    }
}

fn project_record(record: &ValidatedRecord) -> EntityPointPair {
    EntityPointPair {
        id: record.id.clone(),
        first_scan: ScanPoint {
            x: parse_metric(&record.habit_first),
            y: parse_metric(&record.trust_first),
            date: parse_scan_date(&record.date_first),
        },
        latest_scan: ScanPoint {
            x: parse_metric(&record.habit_latest),
            y: parse_metric(&record.trust_latest),
            date: parse_scan_date(&record.date_latest),
        },
    }
}

fn parse_metric(text: &str) -> f64 {
    text.trim().parse().unwrap_or(f64::NAN)
}

fn parse_scan_date(text: &str) -> Option<DateTime<Utc>> {
    let trimmed = text.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(instant.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    if let Ok(day) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return day
            .and_hms_opt(0, 0, 0)
            .map(|naive| Utc.from_utc_datetime(&naive));
    }
    None
}
