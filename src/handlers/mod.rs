pub mod estimate_time;
pub mod get_details;
pub mod list_items;
pub mod random;
pub mod search_category;
pub mod search_difficulty;
pub mod search_materials;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::catalog::Catalog;
use crate::protocol::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, McpErrorCode, McpErrorResponse,
    ToolCallParams, ToolResult,
};
use crate::schema::check;
use crate::tools::{self, ToolDescriptor};

/// Dispatch a JSON-RPC request to the appropriate handler.
///
/// Returns `None` for notifications (no response required).
pub async fn dispatch(req: &JsonRpcRequest, catalog: &Catalog) -> Option<JsonRpcResponse> {
    match req.method.as_str() {
        "initialize" => {
            let result = serde_json::json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": "mcp-craft-server",
                    "version": env!("CARGO_PKG_VERSION")
                }
            });
            Some(JsonRpcResponse::success(req.id.clone(), result))
        }

        "notifications/initialized" => None,

        "ping" => Some(JsonRpcResponse::success(req.id.clone(), serde_json::json!({}))),

        "tools/list" => {
            let tools: Vec<Value> = tools::all().iter().map(ToolDescriptor::to_json).collect();
            Some(JsonRpcResponse::success(
                req.id.clone(),
                serde_json::json!({ "tools": tools }),
            ))
        }

        "tools/call" => {
            let params: ToolCallParams = match &req.params {
                Some(v) => match serde_json::from_value(v.clone()) {
                    Ok(p) => p,
                    Err(e) => {
                        return Some(JsonRpcResponse::error(
                            req.id.clone(),
                            JsonRpcError::invalid_params(format!(
                                "Invalid tools/call params: {e}"
                            )),
                        ));
                    }
                },
                None => {
                    return Some(JsonRpcResponse::error(
                        req.id.clone(),
                        JsonRpcError::invalid_params("Missing params for tools/call"),
                    ));
                }
            };

            tracing::debug!(tool = %params.name, "tools/call");
            let tool_result = dispatch_tool_call(&params, catalog).await;
            match serde_json::to_value(&tool_result) {
                Ok(result_json) => Some(JsonRpcResponse::success(req.id.clone(), result_json)),
                Err(e) => Some(JsonRpcResponse::error(
                    req.id.clone(),
                    JsonRpcError::internal_error(format!("Cannot encode tool result: {e}")),
                )),
            }
        }

        _ => Some(JsonRpcResponse::error(
            req.id.clone(),
            JsonRpcError::method_not_found(&req.method),
        )),
    }
}

async fn dispatch_tool_call(params: &ToolCallParams, catalog: &Catalog) -> ToolResult {
    let Some(tool) = tools::find(&params.name) else {
        tracing::warn!(tool = %params.name, "unknown tool");
        return unknown_tool(&params.name);
    };
    let arguments = params.arguments.as_ref();

    match tool.name {
        tools::LIST_CRAFT_ITEMS => list_items::handle(catalog).await,

        tools::GET_CRAFT_DETAILS => match decode_arguments(tool, arguments) {
            Ok(p) => get_details::handle(p, catalog).await,
            Err(err) => err.into(),
        },

        tools::SEARCH_CRAFTS_BY_CATEGORY => match decode_arguments(tool, arguments) {
            Ok(p) => search_category::handle(p, catalog).await,
            Err(err) => err.into(),
        },

        tools::SEARCH_CRAFTS_BY_DIFFICULTY => match decode_arguments(tool, arguments) {
            Ok(p) => search_difficulty::handle(p, catalog).await,
            Err(err) => err.into(),
        },

        tools::GET_RANDOM_CRAFT => random::handle(catalog).await,

        tools::SEARCH_CRAFTS_BY_MATERIALS => match decode_arguments(tool, arguments) {
            Ok(p) => search_materials::handle(p, catalog).await,
            Err(err) => err.into(),
        },

        tools::ESTIMATE_CRAFT_TIME => match decode_arguments(tool, arguments) {
            Ok(p) => estimate_time::handle(p, catalog).await,
            Err(err) => err.into(),
        },

        _ => unknown_tool(&params.name),
    }
}

fn unknown_tool(name: &str) -> ToolResult {
    McpErrorResponse::new(McpErrorCode::InvalidParams, format!("Unknown tool: {name}")).into()
}

/// Check tool arguments against the advertised schema, then decode them.
///
/// Absent arguments are treated as an empty object so that required
/// fields are reported by name.
fn decode_arguments<T: DeserializeOwned>(
    tool: &ToolDescriptor,
    arguments: Option<&Value>,
) -> Result<T, McpErrorResponse> {
    let empty = Value::Object(serde_json::Map::new());
    let arguments = arguments.unwrap_or(&empty);

    tool.validator()
        .and_then(|validator| check(validator, arguments))
        .map_err(|e| {
            tracing::warn!(tool = tool.name, error = %e, "invalid tool arguments");
            McpErrorResponse::new(
                McpErrorCode::InvalidParams,
                format!("Invalid arguments for {}: {e}", tool.name),
            )
        })?;

    serde_json::from_value(arguments.clone()).map_err(|e| {
        McpErrorResponse::new(
            McpErrorCode::InvalidParams,
            format!("Invalid arguments for {}: {e}", tool.name),
        )
    })
}
