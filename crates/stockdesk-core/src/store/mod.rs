// ── Paginated resource stores ──
//
// The generic store and its dependent specialization. One instance per
// resource type; each holds its observable state in a `watch` channel
// and is mutated only through its own operations.

mod dependent;
mod resource;
mod state;

pub use dependent::DependentResourceStore;
pub use resource::ResourceStore;
pub use state::{DependentStoreState, PaginationState, Resource, StoreState};
