//! Upload ingestion: concurrent per-source parsing with an all-of-N join.

use std::time::Duration;

use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::core::dataset::SourceBatch;
use crate::core::parse::parse_records;
use crate::error::{ChartError, ChartResult};

/// Pause between a computed merge and the moment it becomes visible.
/// A user-facing transition only; it never delays parsing or merging.
pub const REVEAL_DELAY: Duration = Duration::from_secs(2);

/// One uploaded file: display name plus raw file bytes.
///
/// File pickers and drag-and-drop both funnel into this same shape, so the
/// parser sees an identical contract regardless of how the file arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSource {
    pub name: String,
    pub contents: Vec<u8>,
}

impl UploadSource {
    #[must_use]
    pub fn new(name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }
}

/// Parses every source of one upload concurrently and joins all of them.
///
/// Each source is dispatched as an independent task; completion order is
/// irrelevant because the batch is reassembled in original source order. An
/// unreadable source is dropped from the batch with a warning and does not
/// block its siblings. Once dispatched, a batch always runs to completion;
/// there is no abort path.
pub async fn parse_sources(sources: Vec<UploadSource>) -> ChartResult<Vec<SourceBatch>> {
    let source_count = sources.len();
    let mut tasks: JoinSet<(usize, ChartResult<SourceBatch>)> = JoinSet::new();
    for (index, source) in sources.into_iter().enumerate() {
        tasks.spawn_blocking(move || {
            let parsed =
                parse_records(&source.name, source.contents.as_slice()).map(|records| {
                    SourceBatch {
                        name: source.name,
                        records,
                    }
                });
            (index, parsed)
        });
    }

    let mut slots: Vec<Option<SourceBatch>> = (0..source_count).map(|_| None).collect();
    while let Some(joined) = tasks.join_next().await {
        let (index, parsed) = joined.map_err(|err| ChartError::UploadJoin(err.to_string()))?;
        match parsed {
            Ok(batch) => slots[index] = Some(batch),
            Err(err) => warn!(%err, "source dropped from upload batch"),
        }
    }

    let batch: Vec<SourceBatch> = slots.into_iter().flatten().collect();
    debug!(
        dispatched = source_count,
        merged = batch.len(),
        "upload batch joined"
    );
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "ID,Habit Index1,Trust NPS 1,Created At1,Habit Index2,Trust NPS 2,Created At2";

    fn csv_with_rows(ids: &[&str]) -> String {
        let mut text = format!("{HEADER}\n");
        for id in ids {
            text.push_str(&format!("{id},30,50,2023-01-01,45,60,2023-06-01\n"));
        }
        text
    }

    #[tokio::test]
    async fn batch_preserves_source_order_not_completion_order() {
        let sources = vec![
            UploadSource::new("big.csv", csv_with_rows(&["1", "2", "3"])),
            UploadSource::new("small.csv", csv_with_rows(&["4", "5"])),
        ];

        let batch = parse_sources(sources).await.expect("join");
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].name, "big.csv");
        assert_eq!(batch[0].records.len(), 3);
        assert_eq!(batch[1].name, "small.csv");
        assert_eq!(batch[1].records.len(), 2);
    }

    #[tokio::test]
    async fn unreadable_source_does_not_block_siblings() {
        let sources = vec![
            UploadSource::new("bad.csv", &b"ID,Habit Index1\n\xff\xfe,1\n"[..]),
            UploadSource::new("good.csv", csv_with_rows(&["1"])),
        ];

        let batch = parse_sources(sources).await.expect("join");
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].name, "good.csv");
    }

    #[tokio::test]
    async fn empty_upload_yields_empty_batch() {
        let batch = parse_sources(Vec::new()).await.expect("join");
        assert!(batch.is_empty());
    }
}
