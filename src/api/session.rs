use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::info;

use crate::core::axis::{compute_axes, ChartAxes};
use crate::core::dataset::{Dataset, DatasetSummary};
use crate::core::project::{project_pairs, EntityPointPair};
use crate::core::types::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::ingest::{parse_sources, UploadSource, REVEAL_DELAY};
use crate::interaction::{inspect_pair, HighlightState, PairInspection, ScanKind};
use crate::render::scene::{build_scene, ChartScene};
use crate::render::svg::write_svg;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSessionConfig {
    pub viewport: Viewport,
    /// Pause between a computed merge and the moment it becomes visible.
    pub reveal_delay: Duration,
}

impl Default for ChartSessionConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            reveal_delay: REVEAL_DELAY,
        }
    }
}

impl ChartSessionConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_reveal_delay(mut self, reveal_delay: Duration) -> Self {
        self.reveal_delay = reveal_delay;
        self
    }
}

/// Single-writer chart session owning the dataset snapshot, projected pairs,
/// axis specs, and hover state.
///
/// All state is replaced wholesale on change, never mutated in place, so
/// readers always observe a consistent snapshot.
pub struct ChartSession {
    viewport: Viewport,
    reveal_delay: Duration,
    dataset: Dataset,
    pairs: Vec<EntityPointPair>,
    axes: ChartAxes,
    highlight: HighlightState,
}

impl ChartSession {
    pub fn new(config: ChartSessionConfig) -> ChartResult<Self> {
        if !config.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }

        Ok(Self {
            viewport: config.viewport,
            reveal_delay: config.reveal_delay,
            dataset: Dataset::default(),
            pairs: Vec::new(),
            axes: ChartAxes::default(),
            highlight: HighlightState::default(),
        })
    }

    /// Ingests one upload: concurrent per-source parse, all-of-N join,
    /// order-preserving merge, reveal pause, snapshot commit.
    ///
    /// The merged snapshot and its derived geometry are fully computed before
    /// the reveal pause starts; the pause is a scheduled sleep gating only
    /// the moment the new snapshot replaces the visible one.
    pub async fn upload(&mut self, sources: Vec<UploadSource>) -> ChartResult<DatasetSummary> {
        let batch = parse_sources(sources).await?;

        let mut staged = self.dataset.clone();
        staged.merge_batch(batch);
        let staged_pairs = project_pairs(staged.records());
        let staged_axes = compute_axes(&staged_pairs);

        tokio::time::sleep(self.reveal_delay).await;

        self.dataset = staged;
        self.pairs = staged_pairs;
        self.axes = staged_axes;
        info!(entries = self.dataset.len(), "upload committed");
        Ok(self.summary())
    }

    #[must_use]
    pub fn summary(&self) -> DatasetSummary {
        self.dataset.summary()
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn pairs(&self) -> &[EntityPointPair] {
        &self.pairs
    }

    #[must_use]
    pub fn axes(&self) -> &ChartAxes {
        &self.axes
    }

    /// Every uploaded source name, in arrival order.
    #[must_use]
    pub fn uploaded_sources(&self) -> &[String] {
        self.dataset.source_names()
    }

    pub fn set_active(&mut self, id: impl Into<String>) {
        self.highlight.on_point_enter(id);
    }

    pub fn clear_active(&mut self) {
        self.highlight.on_point_leave();
    }

    #[must_use]
    pub fn active_entity(&self) -> Option<&str> {
        self.highlight.active_entity()
    }

    /// Tooltip payload for a hovered point; also marks its entity active.
    pub fn inspect(&mut self, id: &str, scan: ScanKind) -> Option<PairInspection> {
        let inspection = inspect_pair(&self.pairs, id, scan);
        match &inspection {
            Some(found) => self.highlight.on_point_enter(found.id.clone()),
            None => self.highlight.on_point_leave(),
        }
        inspection
    }

    /// Builds the scene for the current snapshot and hover state.
    pub fn scene(&self) -> ChartResult<ChartScene> {
        build_scene(&self.pairs, &self.axes, &self.highlight, self.viewport)
    }

    /// Exports the currently visible chart as `lhp_chart.svg` under `dir`.
    pub fn export_svg(&self, dir: &Path) -> ChartResult<PathBuf> {
        let scene = self.scene()?;
        write_svg(&scene, dir)
    }
}
