use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::record::ValidatedRecord;

/// Fully parsed records from one uploaded source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceBatch {
    pub name: String,
    pub records: Vec<ValidatedRecord>,
}

/// Human-readable dataset summary shown next to the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub latest_source: Option<String>,
    pub entries: usize,
    pub sources: usize,
}

/// Append-only record store accumulated across uploads.
///
/// Records arrive in source-upload order, then row order within each source.
/// Nothing is deduplicated, re-sorted, or mutated after the fact; a new upload
/// only appends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<ValidatedRecord>,
    source_names: Vec<String>,
}

impl Dataset {
    /// Appends one upload's batches in their original source order.
    ///
    /// Callers only invoke this once every source of the upload has finished
    /// parsing, so a batch becomes visible all-or-nothing.
    pub fn merge_batch(&mut self, batch: Vec<SourceBatch>) {
        for source in batch {
            debug!(source = source.name, rows = source.records.len(), "merging source");
            self.records.extend(source.records);
            self.source_names.push(source.name);
        }
    }

    #[must_use]
    pub fn records(&self) -> &[ValidatedRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Name of the most recently merged source, if any.
    #[must_use]
    pub fn latest_source(&self) -> Option<&str> {
        self.source_names.last().map(String::as_str)
    }

    /// Every uploaded source name, in arrival order, duplicates preserved.
    #[must_use]
    pub fn source_names(&self) -> &[String] {
        &self.source_names
    }

    #[must_use]
    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            latest_source: self.latest_source().map(str::to_owned),
            entries: self.records.len(),
            sources: self.source_names.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> ValidatedRecord {
        ValidatedRecord {
            id: id.to_owned(),
            habit_first: "30".to_owned(),
            trust_first: "50".to_owned(),
            date_first: "2023-01-01".to_owned(),
            habit_latest: "45".to_owned(),
            trust_latest: "60".to_owned(),
            date_latest: "2023-06-01".to_owned(),
        }
    }

    #[test]
    fn merge_preserves_source_then_row_order() {
        let mut dataset = Dataset::default();
        dataset.merge_batch(vec![
            SourceBatch {
                name: "a.csv".to_owned(),
                records: vec![record("1"), record("2"), record("3")],
            },
            SourceBatch {
                name: "b.csv".to_owned(),
                records: vec![record("4"), record("5")],
            },
        ]);

        assert_eq!(dataset.len(), 5);
        let ids: Vec<&str> = dataset.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
        assert_eq!(dataset.latest_source(), Some("b.csv"));
    }

    #[test]
    fn merge_is_associative_across_uploads() {
        let sources = |names: &[&str]| {
            names
                .iter()
                .map(|name| SourceBatch {
                    name: (*name).to_owned(),
                    records: vec![record(name)],
                })
                .collect::<Vec<_>>()
        };

        let mut staged = Dataset::default();
        staged.merge_batch(sources(&["a", "b"]));
        staged.merge_batch(sources(&["c"]));

        let mut single_pass = Dataset::default();
        single_pass.merge_batch(sources(&["a", "b", "c"]));

        assert_eq!(staged, single_pass);
    }

    #[test]
    fn duplicate_ids_are_preserved() {
        let mut dataset = Dataset::default();
        dataset.merge_batch(vec![SourceBatch {
            name: "a.csv".to_owned(),
            records: vec![record("42"), record("42")],
        }]);
        assert_eq!(dataset.len(), 2);
    }
}
