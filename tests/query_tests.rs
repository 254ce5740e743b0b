//! Behaviour of the catalog query operations against the built-in catalog.

use std::collections::HashSet;

use mcp_craft_server::catalog::{Catalog, CraftItem, Difficulty};
use mcp_craft_server::query::{self, QueryError};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn catalog() -> &'static Catalog {
    Catalog::builtin()
}

fn ids<'a>(rows: impl IntoIterator<Item = &'a str>) -> HashSet<&'a str> {
    rows.into_iter().collect()
}

// ---------------------------------------------------------------------------
// list_items
// ---------------------------------------------------------------------------

#[test]
fn list_covers_every_catalog_id_once() {
    let items = query::list_items(catalog());
    assert_eq!(items.len(), catalog().len());

    let listed = ids(items.iter().map(|s| s.id));
    assert_eq!(listed.len(), items.len(), "no duplicate ids");
    assert_eq!(listed, ids(catalog().ids()));
}

#[test]
fn list_keeps_store_order() {
    let order: Vec<&str> = query::list_items(catalog()).iter().map(|s| s.id).collect();
    assert_eq!(
        order,
        vec![
            "paper_airplane",
            "origami_crane",
            "friendship_bracelet",
            "painted_rock",
            "macrame_plant_hanger",
        ]
    );
}

#[test]
fn list_of_empty_catalog_is_empty() {
    let empty = Catalog::builder().build();
    assert!(query::list_items(&empty).is_empty());
}

// ---------------------------------------------------------------------------
// get_details
// ---------------------------------------------------------------------------

#[test]
fn details_for_paper_airplane() {
    let details = query::get_details(catalog(), "paper_airplane").unwrap();
    assert_eq!(details.item.name, "Paper Airplane");
    assert_eq!(details.item.difficulty, Difficulty::Easy);
    assert_eq!(details.item.category, "paper_crafts");
    assert!(!details.instructions.is_empty());
    assert!(!details.tips.is_empty());
}

#[test]
fn details_not_found_quotes_id() {
    let err = query::get_details(catalog(), "unicorn_craft").unwrap_err();
    assert!(matches!(err, QueryError::NotFound(_)));
    let message = err.to_string();
    assert!(message.contains("not found"));
    assert!(message.contains("unicorn_craft"));
}

#[test]
fn details_blank_id_is_not_found() {
    for id in ["", "   "] {
        let err = query::get_details(catalog(), id).unwrap_err();
        assert!(matches!(err, QueryError::NotFound(_)));
        assert!(err.to_string().contains(&format!("'{id}'")));
    }
}

#[test]
fn details_without_instructions_or_tips_are_empty_lists() {
    let bare = Catalog::builder()
        .item(
            "bare",
            CraftItem {
                name: "Bare".into(),
                description: "No extras".into(),
                materials: vec!["string".into()],
                difficulty: Difficulty::Hard,
                time_required: "1 hour".into(),
                category: "misc".into(),
            },
        )
        .build();

    let details = query::get_details(&bare, "bare").unwrap();
    assert!(details.instructions.is_empty());
    assert!(details.tips.is_empty());
}

#[test]
fn every_item_has_materials_instructions_and_tips() {
    for (id, item) in catalog().iter() {
        assert!(!item.materials.is_empty(), "{id} has no materials");
        assert!(!catalog().instructions(id).is_empty(), "{id} has no instructions");
        assert!(!catalog().tips(id).is_empty(), "{id} has no tips");
    }
}

// ---------------------------------------------------------------------------
// search_by_category
// ---------------------------------------------------------------------------

#[test]
fn category_search_ignores_case() {
    let lower = query::search_by_category(catalog(), "origami").unwrap();
    let upper = query::search_by_category(catalog(), "ORIGAMI").unwrap();
    let title = query::search_by_category(catalog(), "Origami").unwrap();

    assert_eq!(lower.len(), 1);
    assert_eq!(lower[0].id, "origami_crane");
    assert_eq!(lower, upper);
    assert_eq!(lower, title);
}

#[test]
fn category_search_is_exact_not_substring() {
    assert!(query::search_by_category(catalog(), "paper").unwrap().is_empty());
    let hits = query::search_by_category(catalog(), "paper_crafts").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "paper_airplane");
}

#[test]
fn category_without_matches_is_empty_list() {
    assert!(query::search_by_category(catalog(), "nonexistent").unwrap().is_empty());
}

#[test]
fn blank_category_is_invalid() {
    for category in ["", "  "] {
        let err = query::search_by_category(catalog(), category).unwrap_err();
        assert!(matches!(err, QueryError::InvalidArgument(_)));
    }
}

// ---------------------------------------------------------------------------
// search_by_difficulty
// ---------------------------------------------------------------------------

#[test]
fn difficulty_partitions_catalog() {
    let mut seen = HashSet::new();
    let mut counts = Vec::new();

    for level in ["easy", "medium", "hard"] {
        let hits = query::search_by_difficulty(catalog(), level).unwrap();
        counts.push(hits.len());
        for hit in hits {
            assert!(seen.insert(hit.id), "{} appears in more than one level", hit.id);
        }
    }

    assert_eq!(counts, vec![2, 2, 1]);
    assert_eq!(seen, ids(catalog().ids()));
}

#[test]
fn easy_crafts_are_airplane_and_rock() {
    let easy = query::search_by_difficulty(catalog(), "easy").unwrap();
    assert_eq!(ids(easy.iter().map(|m| m.id)), ids(["paper_airplane", "painted_rock"]));
}

#[test]
fn difficulty_search_ignores_case() {
    let lower = query::search_by_difficulty(catalog(), "easy").unwrap();
    let upper = query::search_by_difficulty(catalog(), "EASY").unwrap();
    let title = query::search_by_difficulty(catalog(), "Easy").unwrap();
    assert_eq!(lower, upper);
    assert_eq!(lower, title);
}

#[test]
fn unknown_difficulty_lists_valid_levels() {
    let err = query::search_by_difficulty(catalog(), "impossible").unwrap_err();
    assert!(matches!(err, QueryError::InvalidArgument(_)));
    let message = err.to_string();
    for level in ["easy", "medium", "hard"] {
        assert!(message.contains(level), "message should name {level}: {message}");
    }
}

#[test]
fn blank_difficulty_is_invalid() {
    let err = query::search_by_difficulty(catalog(), " ").unwrap_err();
    assert!(matches!(err, QueryError::InvalidArgument(_)));
}

// ---------------------------------------------------------------------------
// search_by_materials
// ---------------------------------------------------------------------------

#[test]
fn paper_matches_stored_substrings() {
    let hits = query::search_by_materials(catalog(), &["paper"]);
    let names: HashSet<&str> = hits.iter().map(|m| m.name).collect();
    assert!(names.contains("Paper Airplane"));
    assert!(names.contains("Origami Crane"));
    assert_eq!(hits.len(), 2);
}

#[test]
fn material_match_returns_full_material_list() {
    let hits = query::search_by_materials(catalog(), &["THREAD"]);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Friendship Bracelet");
    assert_eq!(
        hits[0].materials_needed,
        catalog().get("friendship_bracelet").unwrap().materials.as_slice()
    );
}

#[test]
fn material_containment_is_one_directional() {
    // "A4 paper sheets" contains a stored material but is not contained by one.
    assert!(query::search_by_materials(catalog(), &["A4 paper sheets"]).is_empty());
}

#[test]
fn any_requested_material_is_enough() {
    let hits = query::search_by_materials(catalog(), &["unicorn_horn", "scissors"]);
    assert_eq!(
        ids(hits.iter().map(|m| m.id)),
        ids(["friendship_bracelet", "macrame_plant_hanger"])
    );
}

#[test]
fn requested_materials_are_trimmed() {
    let padded = query::search_by_materials(catalog(), &["  tape  "]);
    let plain = query::search_by_materials(catalog(), &["tape"]);
    assert_eq!(padded, plain);
    assert!(!plain.is_empty());
}

#[test]
fn unknown_or_empty_materials_give_no_results() {
    assert!(query::search_by_materials(catalog(), &["unicorn_horn"]).is_empty());
    assert!(query::search_by_materials::<&str>(catalog(), &[]).is_empty());
    assert!(query::search_by_materials(catalog(), &["", "   "]).is_empty());
}

// ---------------------------------------------------------------------------
// get_random
// ---------------------------------------------------------------------------

#[test]
fn random_pick_is_a_catalog_member() {
    let names: HashSet<&str> = catalog().iter().map(|(_, item)| item.name.as_str()).collect();
    for _ in 0..20 {
        let pick = query::get_random(catalog()).unwrap();
        assert!(names.contains(pick.item.name.as_str()));
        assert!(!pick.instructions.is_empty());
    }
}

#[test]
fn seeded_random_pick_is_repeatable() {
    let a = query::get_random_with(catalog(), &mut StdRng::seed_from_u64(7)).unwrap();
    let b = query::get_random_with(catalog(), &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(a.item.name, b.item.name);
}

#[test]
fn random_from_empty_catalog_is_error() {
    let empty = Catalog::builder().build();
    let err = query::get_random(&empty).unwrap_err();
    assert_eq!(err, QueryError::NotFound("no items available".to_string()));
}

// ---------------------------------------------------------------------------
// estimate_time
// ---------------------------------------------------------------------------

#[test]
fn estimate_uses_first_number_of_each_range() {
    let estimate = query::estimate_time(catalog(), &["paper_airplane", "origami_crane"]).unwrap();
    assert_eq!(estimate.valid_items.len(), 2);
    assert!(estimate.invalid_items.is_empty());
    assert_eq!(estimate.estimated_total_minutes, 20);
    assert_eq!(estimate.estimated_total_hours, 0.33);
}

#[test]
fn estimate_counts_hours() {
    let estimate =
        query::estimate_time(catalog(), &["painted_rock", "macrame_plant_hanger"]).unwrap();
    assert_eq!(estimate.estimated_total_minutes, 180);
    assert_eq!(estimate.estimated_total_hours, 3.0);
}

#[test]
fn estimate_splits_valid_and_invalid_ids() {
    let estimate =
        query::estimate_time(catalog(), &["paper_airplane", "nonexistent", "origami_crane"])
            .unwrap();
    assert_eq!(estimate.invalid_items, vec!["nonexistent".to_string()]);
    let valid: Vec<&str> = estimate.valid_items.iter().map(|v| v.id).collect();
    assert_eq!(valid, vec!["paper_airplane", "origami_crane"]);
    assert_eq!(estimate.valid_items[1].time, "15-20 minutes");
}

#[test]
fn estimate_with_only_unknown_ids_is_zero() {
    let estimate = query::estimate_time(catalog(), &["nonexistent"]).unwrap();
    assert!(estimate.valid_items.is_empty());
    assert_eq!(estimate.invalid_items.len(), 1);
    assert_eq!(estimate.estimated_total_minutes, 0);
    assert_eq!(estimate.estimated_total_hours, 0.0);
}

#[test]
fn estimate_counts_repeated_ids_each_time() {
    let estimate = query::estimate_time(catalog(), &["paper_airplane", "paper_airplane"]).unwrap();
    assert_eq!(estimate.valid_items.len(), 2);
    assert_eq!(estimate.estimated_total_minutes, 10);
}

#[test]
fn estimate_requires_ids() {
    let err = query::estimate_time::<&str>(catalog(), &[]).unwrap_err();
    assert_eq!(err, QueryError::EmptyInput("ids cannot be empty".to_string()));
}
