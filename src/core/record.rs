use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const COLUMN_ID: &str = "ID";
pub const COLUMN_HABIT_FIRST: &str = "Habit Index1";
pub const COLUMN_TRUST_FIRST: &str = "Trust NPS 1";
pub const COLUMN_DATE_FIRST: &str = "Created At1";
pub const COLUMN_HABIT_LATEST: &str = "Habit Index2";
pub const COLUMN_TRUST_LATEST: &str = "Trust NPS 2";
pub const COLUMN_DATE_LATEST: &str = "Created At2";

/// Recognized report columns, in header order.
pub const RECOGNIZED_COLUMNS: [&str; 7] = [
    COLUMN_ID,
    COLUMN_HABIT_FIRST,
    COLUMN_TRUST_FIRST,
    COLUMN_DATE_FIRST,
    COLUMN_HABIT_LATEST,
    COLUMN_TRUST_LATEST,
    COLUMN_DATE_LATEST,
];

/// One parsed row: column name mapped to raw cell text, header order preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    columns: IndexMap<String, String>,
}

impl RawRecord {
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.columns.insert(column.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns.get(column).map(String::as_str)
    }

    /// Returns the cell text for `column` only when it is present and non-empty.
    #[must_use]
    fn required(&self, column: &str) -> Option<&str> {
        self.get(column).filter(|value| !value.is_empty())
    }

    /// Applies the completeness predicate: every recognized column must be
    /// present and non-empty. Rows failing it are dropped during parsing and
    /// never appear downstream.
    #[must_use]
    pub fn validate(&self) -> Option<ValidatedRecord> {
        Some(ValidatedRecord {
            id: self.required(COLUMN_ID)?.to_owned(),
            habit_first: self.required(COLUMN_HABIT_FIRST)?.to_owned(),
            trust_first: self.required(COLUMN_TRUST_FIRST)?.to_owned(),
            date_first: self.required(COLUMN_DATE_FIRST)?.to_owned(),
            habit_latest: self.required(COLUMN_HABIT_LATEST)?.to_owned(),
            trust_latest: self.required(COLUMN_TRUST_LATEST)?.to_owned(),
            date_latest: self.required(COLUMN_DATE_LATEST)?.to_owned(),
        })
    }
}

/// A row that passed the completeness predicate.
///
/// Identifiers are non-empty but not required to be unique; duplicate ids are
/// preserved verbatim across the dataset. Field text is kept raw so numeric
/// and date parsing stay a projection concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedRecord {
    pub id: String,
    pub habit_first: String,
    pub trust_first: String,
    pub date_first: String,
    pub habit_latest: String,
    pub trust_latest: String,
    pub date_latest: String,
}
