//! Craft catalog: item records plus per-item instructions and tips.

mod model;
mod seed;
mod store;

use std::sync::OnceLock;

pub use model::{CraftDetails, CraftItem, Difficulty, DifficultyParseError};
pub use store::{Catalog, CatalogBuilder};

impl Catalog {
    /// The process-wide built-in catalog, constructed on first use.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(seed::seed_catalog)
    }
}
