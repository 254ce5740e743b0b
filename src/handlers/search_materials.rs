use crate::catalog::Catalog;
use crate::protocol::{MaterialsParams, ToolResult};
use crate::query;

/// Handle a `search_crafts_by_materials` tool call. Never a tool error:
/// blank or empty material lists simply match nothing.
pub async fn handle(params: MaterialsParams, catalog: &Catalog) -> ToolResult {
    let matches = query::search_by_materials(catalog, &params.materials);
    tracing::debug!(requested = params.materials.len(), count = matches.len(), "materials search");
    ToolResult::json(&matches)
}
