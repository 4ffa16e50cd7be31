use serde::{Deserialize, Serialize};

use crate::core::project::{EntityPointPair, ScanPoint};

/// Which of an entity's two points a viewer is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanKind {
    First,
    Latest,
}

impl ScanKind {
    #[must_use]
    pub fn counterpart(self) -> Self {
        match self {
            Self::First => Self::Latest,
            Self::Latest => Self::First,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::First => "First Scan",
            Self::Latest => "Latest Scan",
        }
    }
}

/// Session-scoped hover state: at most one active entity.
///
/// Activating a new entity silently replaces the previous one; hover-out
/// clears to none. De-emphasis of other entities' connectors is a render
/// concern that only reads the active id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightState {
    active: Option<String>,
}

impl HighlightState {
    pub fn on_point_enter(&mut self, id: impl Into<String>) {
        self.active = Some(id.into());
    }

    pub fn on_point_leave(&mut self) {
        self.active = None;
    }

    #[must_use]
    pub fn active_entity(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Connector opacity for one entity given the current hover state.
    #[must_use]
    pub fn emphasis(&self, id: &str) -> f64 {
        match self.active.as_deref() {
            None => 1.0,
            Some(active) if active == id => 1.0,
            Some(_) => 0.2,
        }
    }
}

/// Returns the other point of the same entity (first ↔ latest).
///
/// Pairing is intrinsic to the entity: resolution works whether or not the
/// entity is active. Duplicate ids resolve against the first matching pair.
#[must_use]
pub fn resolve_pair<'a>(
    pairs: &'a [EntityPointPair],
    id: &str,
    kind: ScanKind,
) -> Option<&'a ScanPoint> {
    let pair = pairs.iter().find(|pair| pair.id == id)?;
    Some(match kind {
        ScanKind::First => &pair.latest_scan,
        ScanKind::Latest => &pair.first_scan,
    })
}

/// Tooltip payload for one hovered point: both values plus deltas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairInspection {
    pub id: String,
    pub scan: ScanKind,
    pub point: ScanPoint,
    pub counterpart: ScanPoint,
    /// `counterpart.x - point.x`; NaN flows through.
    pub habit_change: f64,
    /// `counterpart.y - point.y`; NaN flows through.
    pub trust_change: f64,
}

/// Builds the tooltip payload for the given point, or `None` when no pair
/// carries the id.
#[must_use]
pub fn inspect_pair(pairs: &[EntityPointPair], id: &str, kind: ScanKind) -> Option<PairInspection> {
    let pair = pairs.iter().find(|pair| pair.id == id)?;
    let (point, counterpart) = match kind {
        ScanKind::First => (pair.first_scan, pair.latest_scan),
        ScanKind::Latest => (pair.latest_scan, pair.first_scan),
    };
    Some(PairInspection {
        id: pair.id.clone(),
        scan: kind,
        point,
        counterpart,
        habit_change: counterpart.x - point.x,
        trust_change: counterpart.y - point.y,
    })
}
