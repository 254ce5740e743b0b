use crate::catalog::Catalog;
use crate::protocol::ToolResult;
use crate::query;

/// Handle a `list_craft_items` tool call.
pub async fn handle(catalog: &Catalog) -> ToolResult {
    let items = query::list_items(catalog);
    tracing::debug!(count = items.len(), "listed craft items");
    ToolResult::json(&items)
}
