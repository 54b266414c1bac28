// ── Catalog domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;

/// A sellable or stockable item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    /// Stock-keeping unit, unique per catalog.
    pub sku: String,
    pub category_id: Option<EntityId>,
    pub supplier_id: Option<EntityId>,
    /// Unit price in minor currency units.
    pub price_cents: i64,
    /// Unit of measure (e.g. "piece", "kg").
    pub unit: Option<String>,
    pub active: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A node in the category tree. `parent_id` is `None` at the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    pub slug: Option<String>,
    pub parent_id: Option<EntityId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: EntityId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: EntityId,
    pub name: String,
    /// Short code used in picking documents (e.g. "WH-01").
    pub code: Option<String>,
    pub address: Option<String>,
}
