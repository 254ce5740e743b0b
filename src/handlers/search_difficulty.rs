use crate::catalog::Catalog;
use crate::protocol::{DifficultyParams, McpErrorResponse, ToolResult};
use crate::query;

/// Handle a `search_crafts_by_difficulty` tool call.
///
/// Unknown levels come back as an `invalid_argument` tagged error that
/// names the accepted levels.
pub async fn handle(params: DifficultyParams, catalog: &Catalog) -> ToolResult {
    match query::search_by_difficulty(catalog, &params.difficulty) {
        Ok(matches) => {
            tracing::debug!(difficulty = %params.difficulty, count = matches.len(), "difficulty search");
            ToolResult::json(&matches)
        }
        Err(err) => {
            tracing::warn!(difficulty = %params.difficulty, "rejected difficulty search");
            McpErrorResponse::from(err).into()
        }
    }
}
