//! Tool descriptors advertised through `tools/list`.

use std::collections::HashMap;
use std::sync::OnceLock;

use jsonschema::Validator;
use serde_json::{json, Value};

use crate::schema::{self, SchemaValidationError};

pub const LIST_CRAFT_ITEMS: &str = "list_craft_items";
pub const GET_CRAFT_DETAILS: &str = "get_craft_details";
pub const SEARCH_CRAFTS_BY_CATEGORY: &str = "search_crafts_by_category";
pub const SEARCH_CRAFTS_BY_DIFFICULTY: &str = "search_crafts_by_difficulty";
pub const GET_RANDOM_CRAFT: &str = "get_random_craft";
pub const SEARCH_CRAFTS_BY_MATERIALS: &str = "search_crafts_by_materials";
pub const ESTIMATE_CRAFT_TIME: &str = "estimate_craft_time";

/// Name, description, and argument schema of one tool.
#[derive(Debug, Clone, Copy)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: fn() -> Value,
}

impl ToolDescriptor {
    /// MCP `tools/list` entry.
    pub fn to_json(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "inputSchema": (self.input_schema)(),
        })
    }

    /// Compiled argument schema. Every registered tool is compiled once,
    /// on first use, and shared for the life of the process.
    pub fn validator(&self) -> Result<&'static Validator, SchemaValidationError> {
        let compiled = VALIDATORS.get_or_init(|| {
            TOOLS
                .iter()
                .map(|tool| (tool.name, schema::compile(&(tool.input_schema)())))
                .collect()
        });

        match compiled.get(self.name) {
            Some(Ok(validator)) => Ok(validator),
            Some(Err(err)) => Err(err.clone()),
            None => Err(SchemaValidationError::SchemaCompile(format!(
                "no schema registered for {}",
                self.name
            ))),
        }
    }
}

static VALIDATORS: OnceLock<HashMap<&'static str, Result<Validator, SchemaValidationError>>> =
    OnceLock::new();

fn no_arguments() -> Value {
    json!({
        "type": "object",
        "properties": {}
    })
}

fn get_details_schema() -> Value {
    json!({
        "type": "object",
        "required": ["item_id"],
        "properties": {
            "item_id": {
                "type": "string",
                "description": "The ID of the craft item to retrieve details for"
            }
        }
    })
}

fn category_schema() -> Value {
    json!({
        "type": "object",
        "required": ["category"],
        "properties": {
            "category": {
                "type": "string",
                "description": "The category to search for (e.g., 'paper_crafts', 'origami', 'jewelry')"
            }
        }
    })
}

fn difficulty_schema() -> Value {
    json!({
        "type": "object",
        "required": ["difficulty"],
        "properties": {
            "difficulty": {
                "type": "string",
                "description": "The difficulty level ('easy', 'medium', 'hard')"
            }
        }
    })
}

fn materials_schema() -> Value {
    json!({
        "type": "object",
        "required": ["materials"],
        "properties": {
            "materials": {
                "type": "array",
                "items": { "type": "string" },
                "description": "List of materials you have available"
            }
        }
    })
}

fn estimate_time_schema() -> Value {
    json!({
        "type": "object",
        "required": ["item_ids"],
        "properties": {
            "item_ids": {
                "type": "array",
                "items": { "type": "string" },
                "description": "List of craft item IDs to estimate time for"
            }
        }
    })
}

static TOOLS: [ToolDescriptor; 7] = [
    ToolDescriptor {
        name: LIST_CRAFT_ITEMS,
        description: "List all available craft items with their basic information",
        input_schema: no_arguments,
    },
    ToolDescriptor {
        name: GET_CRAFT_DETAILS,
        description: "Get detailed information about a specific craft item, including instructions and tips",
        input_schema: get_details_schema,
    },
    ToolDescriptor {
        name: SEARCH_CRAFTS_BY_CATEGORY,
        description: "Search for craft items by category",
        input_schema: category_schema,
    },
    ToolDescriptor {
        name: SEARCH_CRAFTS_BY_DIFFICULTY,
        description: "Search for craft items by difficulty level",
        input_schema: difficulty_schema,
    },
    ToolDescriptor {
        name: GET_RANDOM_CRAFT,
        description: "Get a random craft suggestion for inspiration",
        input_schema: no_arguments,
    },
    ToolDescriptor {
        name: SEARCH_CRAFTS_BY_MATERIALS,
        description: "Find crafts that can be made with available materials",
        input_schema: materials_schema,
    },
    ToolDescriptor {
        name: ESTIMATE_CRAFT_TIME,
        description: "Estimate total time needed for multiple crafts",
        input_schema: estimate_time_schema,
    },
];

pub fn all() -> &'static [ToolDescriptor] {
    &TOOLS
}

pub fn find(name: &str) -> Option<&'static ToolDescriptor> {
    TOOLS.iter().find(|tool| tool.name == name)
}
