//! Walkthrough of every catalog query against the built-in crafts.

use mcp_craft_server::catalog::Catalog;
use mcp_craft_server::query;
use serde::Serialize;

fn section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {title}");
    println!("{}", "=".repeat(60));
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::builtin();

    section("1. All Available Crafts");
    let all = query::list_items(catalog);
    println!("Found {} craft projects:", all.len());
    for craft in &all {
        println!("  - {} ({}) - {}", craft.name, craft.difficulty, craft.time_required);
    }

    section("2. Detailed Craft Information");
    let details = query::get_details(catalog, "paper_airplane")?;
    println!("{} ({})", details.item.name, details.item.category);
    println!("  Materials: {}", details.item.materials.join(", "));
    println!("\n  Instructions ({} steps):", details.instructions.len());
    for (i, step) in details.instructions.iter().enumerate() {
        println!("    {}. {step}", i + 1);
    }
    println!("\n  Tips ({} tips):", details.tips.len());
    for tip in details.tips {
        println!("    - {tip}");
    }

    section("3. Search by Category");
    for category in ["origami", "jewelry", "painting"] {
        let found = query::search_by_category(catalog, category)?;
        println!("{category}: {} found", found.len());
        for craft in found {
            println!("  - {}", craft.name);
        }
    }

    section("4. Search by Difficulty");
    for level in ["easy", "medium", "hard"] {
        let found = query::search_by_difficulty(catalog, level)?;
        let names: Vec<&str> = found.iter().map(|c| c.name).collect();
        println!("{level}: {}", names.join(", "));
    }

    section("5. Search by Materials");
    for materials in [&["paper"][..], &["scissors", "tape"][..], &["unicorn_horn"][..]] {
        let found = query::search_by_materials(catalog, materials);
        println!("With {materials:?}: {} crafts", found.len());
        for craft in found {
            println!("  - {} needs {}", craft.name, craft.materials_needed.join(", "));
        }
    }

    section("6. Random Craft Suggestion");
    let pick = query::get_random(catalog)?;
    println!("Try making: {} - {}", pick.item.name, pick.item.description);

    section("7. Time Estimation");
    let estimate = query::estimate_time(
        catalog,
        &["paper_airplane", "origami_crane", "painted_rock", "nonexistent"],
    )?;
    print_json(&estimate)?;

    section("8. Error Handling");
    match query::get_details(catalog, "unicorn_craft") {
        Ok(_) => println!("unexpected hit"),
        Err(e) => println!("get_details: {e}"),
    }
    match query::search_by_difficulty(catalog, "impossible") {
        Ok(_) => println!("unexpected hit"),
        Err(e) => println!("search_by_difficulty: {e}"),
    }

    Ok(())
}
