use serde::Serialize;

use super::QueryError;
use crate::catalog::{Catalog, Difficulty};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryMatch<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub difficulty: Difficulty,
    pub time_required: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DifficultyMatch<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub category: &'a str,
    pub time_required: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterialMatch<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub materials_needed: &'a [String],
    pub difficulty: Difficulty,
    pub time_required: &'a str,
}

/// Items whose category equals `category`, ignoring case.
///
/// Exact match only. No matches is an empty list, not an error.
pub fn search_by_category<'a>(
    catalog: &'a Catalog,
    category: &str,
) -> Result<Vec<CategoryMatch<'a>>, QueryError> {
    if category.trim().is_empty() {
        return Err(QueryError::InvalidArgument(
            "category cannot be empty".to_string(),
        ));
    }

    let wanted = category.to_lowercase();
    Ok(catalog
        .iter()
        .filter(|(_, item)| item.category.to_lowercase() == wanted)
        .map(|(id, item)| CategoryMatch {
            id,
            name: &item.name,
            description: &item.description,
            difficulty: item.difficulty,
            time_required: &item.time_required,
        })
        .collect())
}

/// Items at the given difficulty level (case-insensitive).
pub fn search_by_difficulty<'a>(
    catalog: &'a Catalog,
    difficulty: &str,
) -> Result<Vec<DifficultyMatch<'a>>, QueryError> {
    if difficulty.trim().is_empty() {
        return Err(QueryError::InvalidArgument(
            "difficulty cannot be empty; Difficulty must be 'easy', 'medium', or 'hard'"
                .to_string(),
        ));
    }

    let level = difficulty
        .parse::<Difficulty>()
        .map_err(|e| QueryError::InvalidArgument(e.to_string()))?;

    Ok(catalog
        .iter()
        .filter(|(_, item)| item.difficulty == level)
        .map(|(id, item)| DifficultyMatch {
            id,
            name: &item.name,
            description: &item.description,
            category: &item.category,
            time_required: &item.time_required,
        })
        .collect())
}

/// Items that use at least one of the requested materials.
///
/// A requested material matches when it is a case-insensitive substring
/// of any stored material ("paper" matches "A4 paper", not the reverse).
/// Entries are trimmed and blanks dropped; an empty request yields no
/// results. Never fails.
pub fn search_by_materials<'a, S>(catalog: &'a Catalog, materials: &[S]) -> Vec<MaterialMatch<'a>>
where
    S: AsRef<str>,
{
    let wanted: Vec<String> = materials
        .iter()
        .map(|m| m.as_ref().trim().to_lowercase())
        .filter(|m| !m.is_empty())
        .collect();

    if wanted.is_empty() {
        return Vec::new();
    }

    catalog
        .iter()
        .filter(|(_, item)| {
            item.materials.iter().any(|stored| {
                let stored = stored.to_lowercase();
                wanted.iter().any(|w| stored.contains(w.as_str()))
            })
        })
        .map(|(id, item)| MaterialMatch {
            id,
            name: &item.name,
            description: &item.description,
            materials_needed: &item.materials,
            difficulty: item.difficulty,
            time_required: &item.time_required,
        })
        .collect()
}
