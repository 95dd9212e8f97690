//! Canonical domain types shared across the yerbul crates.

use serde::{Deserialize, Serialize};

/// Opaque chat identity, as handed out by the chat transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatKey(pub i64);

impl std::fmt::Display for ChatKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A WGS84 coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// One place returned by the geo-provider. Provider ordering is preserved;
/// `name` is absent when the provider carries no name for the feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub name: Option<String>,
    pub coordinate: Coordinate,
}

impl PlaceRecord {
    pub fn new(name: Option<String>, coordinate: Coordinate) -> Self {
        Self { name, coordinate }
    }
}

/// Dialog stage for one chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    AwaitingRegion,
    AwaitingSubRegion,
    AwaitingCategory,
}

/// Per-chat conversation progress. Invariants: `sub_region` is only set
/// while `region` is set; the stage reflects which fields are populated
/// (`AwaitingSubRegion` implies a region and no sub-region,
/// `AwaitingCategory` implies both). The selected category is never
/// stored: the final stage is re-entrant, one search per category message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationSession {
    pub stage: Stage,
    pub region: Option<String>,
    pub sub_region: Option<String>,
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationSession {
    /// A fresh session at the start of the guided flow.
    pub fn new() -> Self {
        Self {
            stage: Stage::AwaitingRegion,
            region: None,
            sub_region: None,
        }
    }

    /// Record a region choice. Any previously chosen sub-region is
    /// discarded, so a region name always restarts the flow from the
    /// district step.
    pub fn select_region(&mut self, region: impl Into<String>) {
        self.region = Some(region.into());
        self.sub_region = None;
        self.stage = Stage::AwaitingSubRegion;
    }

    /// Record a sub-region choice. Callers must have validated that the
    /// name belongs to the stored region.
    pub fn select_sub_region(&mut self, sub_region: impl Into<String>) {
        debug_assert!(self.region.is_some());
        self.sub_region = Some(sub_region.into());
        self.stage = Stage::AwaitingCategory;
    }
}
