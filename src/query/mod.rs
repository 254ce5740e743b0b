//! Read-only query operations over a [`Catalog`](crate::catalog::Catalog).
//!
//! Every operation borrows the catalog and returns either a serializable
//! record set or a [`QueryError`]. Nothing here blocks, yields, or mutates
//! the catalog.

mod estimate;
mod listing;
mod search;

pub use estimate::{estimate_time, EstimatedItem, TimeEstimate};
pub use listing::{get_details, get_random, get_random_with, list_items, CraftSummary};
pub use search::{
    search_by_category, search_by_difficulty, search_by_materials, CategoryMatch,
    DifficultyMatch, MaterialMatch,
};

/// Failure kinds surfaced by query operations. All are recoverable;
/// callers fix the input and retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// Requested id is absent, or the catalog has nothing to offer.
    #[error("{0}")]
    NotFound(String),
    /// Blank required argument or a value outside its domain.
    #[error("{0}")]
    InvalidArgument(String),
    /// Required collection argument was empty.
    #[error("{0}")]
    EmptyInput(String),
}

impl QueryError {
    pub(crate) fn item_not_found(id: &str) -> Self {
        Self::NotFound(format!("Craft item '{id}' not found"))
    }
}
