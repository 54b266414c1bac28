// ── Stocktaking domain types ──
//
// A SnapshotEvent is one stocktaking run; StockSnapshots are the
// per-product counts recorded during it. The admin lists snapshots
// either globally or scoped to a selected event, which is why the
// snapshot store is the dependent one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;

/// One stocktaking run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEvent {
    pub id: EntityId,
    pub name: String,
    pub taken_at: Option<DateTime<Utc>>,
    /// Warehouse the run covered; `None` for all-warehouse runs.
    pub warehouse_id: Option<EntityId>,
    pub note: Option<String>,
}

/// A counted quantity for one product, recorded during a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSnapshot {
    pub id: EntityId,
    pub event_id: EntityId,
    pub product_id: EntityId,
    pub warehouse_id: Option<EntityId>,
    /// Counted quantity. Negative values flag correction entries.
    pub quantity: i64,
    pub counted_at: Option<DateTime<Utc>>,
}
