use std::collections::HashMap;

use indexmap::IndexMap;

use super::model::CraftItem;

/// Immutable table of craft items keyed by craft id, with the
/// instruction and tip tables that hang off the same ids.
///
/// Iteration order is insertion order. A catalog is never mutated
/// once built, so shared references can be handed to any number of
/// concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: IndexMap<String, CraftItem>,
    instructions: HashMap<String, Vec<String>>,
    tips: HashMap<String, Vec<String>>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    pub fn get(&self, id: &str) -> Option<&CraftItem> {
        self.items.get(id)
    }

    /// Like [`get`](Self::get), also returning the catalog-owned id.
    pub fn get_key_value(&self, id: &str) -> Option<(&str, &CraftItem)> {
        self.items
            .get_key_value(id)
            .map(|(id, item)| (id.as_str(), item))
    }

    pub fn get_index(&self, index: usize) -> Option<(&str, &CraftItem)> {
        self.items
            .get_index(index)
            .map(|(id, item)| (id.as_str(), item))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Items in store order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CraftItem)> {
        self.items.iter().map(|(id, item)| (id.as_str(), item))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    /// Ordered steps for `id`; empty when none are recorded.
    pub fn instructions(&self, id: &str) -> &[String] {
        self.instructions.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Tips for `id`; empty when none are recorded.
    pub fn tips(&self, id: &str) -> &[String] {
        self.tips.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Assembles a [`Catalog`]. Re-inserting an id replaces its record
/// without moving it.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    catalog: Catalog,
}

impl CatalogBuilder {
    pub fn item(mut self, id: impl Into<String>, item: CraftItem) -> Self {
        self.catalog.items.insert(id.into(), item);
        self
    }

    pub fn instructions<I, S>(mut self, id: impl Into<String>, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.catalog
            .instructions
            .insert(id.into(), steps.into_iter().map(Into::into).collect());
        self
    }

    pub fn tips<I, S>(mut self, id: impl Into<String>, tips: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.catalog
            .tips
            .insert(id.into(), tips.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> Catalog {
        self.catalog
    }
}
