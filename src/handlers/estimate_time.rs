use crate::catalog::Catalog;
use crate::protocol::{EstimateTimeParams, McpErrorResponse, ToolResult};
use crate::query;

/// Handle an `estimate_craft_time` tool call.
///
/// Unknown ids are reported back in `invalid_items`; only an empty id
/// list is a tool error.
pub async fn handle(params: EstimateTimeParams, catalog: &Catalog) -> ToolResult {
    match query::estimate_time(catalog, &params.item_ids) {
        Ok(estimate) => {
            tracing::debug!(
                valid = estimate.valid_items.len(),
                invalid = estimate.invalid_items.len(),
                minutes = estimate.estimated_total_minutes,
                "estimated craft time"
            );
            ToolResult::json(&estimate)
        }
        Err(err) => {
            tracing::warn!(error = %err, "rejected time estimate");
            McpErrorResponse::from(err).into()
        }
    }
}
