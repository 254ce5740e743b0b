use crate::catalog::Catalog;
use crate::protocol::{McpErrorResponse, ToolResult};
use crate::query;

/// Handle a `get_random_craft` tool call.
pub async fn handle(catalog: &Catalog) -> ToolResult {
    match query::get_random(catalog) {
        Ok(details) => {
            tracing::debug!(name = %details.item.name, "picked random craft");
            ToolResult::json(&details)
        }
        Err(err) => McpErrorResponse::from(err).into(),
    }
}
