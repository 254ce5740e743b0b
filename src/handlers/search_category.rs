use crate::catalog::Catalog;
use crate::protocol::{CategoryParams, McpErrorResponse, ToolResult};
use crate::query;

/// Handle a `search_crafts_by_category` tool call.
pub async fn handle(params: CategoryParams, catalog: &Catalog) -> ToolResult {
    match query::search_by_category(catalog, &params.category) {
        Ok(matches) => {
            tracing::debug!(category = %params.category, count = matches.len(), "category search");
            ToolResult::json(&matches)
        }
        Err(err) => {
            tracing::warn!(error = %err, "rejected category search");
            McpErrorResponse::from(err).into()
        }
    }
}
