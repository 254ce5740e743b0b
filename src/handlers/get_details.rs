use crate::catalog::Catalog;
use crate::protocol::{GetDetailsParams, McpErrorResponse, ToolResult};
use crate::query;

/// Handle a `get_craft_details` tool call.
///
/// Returns the full item with its instructions and tips, or a tagged
/// `not_found` error quoting the requested id.
pub async fn handle(params: GetDetailsParams, catalog: &Catalog) -> ToolResult {
    match query::get_details(catalog, &params.item_id) {
        Ok(details) => ToolResult::json(&details),
        Err(err) => {
            tracing::debug!(item_id = %params.item_id, "craft item not found");
            McpErrorResponse::from(err).into()
        }
    }
}
