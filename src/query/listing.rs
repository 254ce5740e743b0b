use rand::Rng;
use serde::Serialize;

use super::QueryError;
use crate::catalog::{Catalog, CraftDetails, Difficulty};

/// Summary row returned by [`list_items`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CraftSummary<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub difficulty: Difficulty,
    pub time_required: &'a str,
    pub category: &'a str,
}

/// One summary per catalog entry, in store order.
pub fn list_items(catalog: &Catalog) -> Vec<CraftSummary<'_>> {
    catalog
        .iter()
        .map(|(id, item)| CraftSummary {
            id,
            name: &item.name,
            description: &item.description,
            difficulty: item.difficulty,
            time_required: &item.time_required,
            category: &item.category,
        })
        .collect()
}

/// Item, instructions, and tips for `id`.
///
/// Blank ids are looked up like any other and therefore come back as
/// not found; the message quotes the id verbatim.
pub fn get_details<'a>(catalog: &'a Catalog, id: &str) -> Result<CraftDetails<'a>, QueryError> {
    if id.trim().is_empty() {
        return Err(QueryError::item_not_found(id));
    }

    let item = catalog
        .get(id)
        .ok_or_else(|| QueryError::item_not_found(id))?;

    Ok(CraftDetails {
        item,
        instructions: catalog.instructions(id),
        tips: catalog.tips(id),
    })
}

/// Details of a uniformly chosen catalog entry.
pub fn get_random(catalog: &Catalog) -> Result<CraftDetails<'_>, QueryError> {
    get_random_with(catalog, &mut rand::thread_rng())
}

/// [`get_random`] with a caller-supplied random source.
pub fn get_random_with<'a, R>(
    catalog: &'a Catalog,
    rng: &mut R,
) -> Result<CraftDetails<'a>, QueryError>
where
    R: Rng + ?Sized,
{
    if catalog.is_empty() {
        return Err(QueryError::NotFound("no items available".to_string()));
    }

    let index = rng.gen_range(0..catalog.len());
    let (id, _) = catalog
        .get_index(index)
        .ok_or_else(|| QueryError::NotFound("no items available".to_string()))?;
    get_details(catalog, id)
}
