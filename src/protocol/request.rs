use serde::{Deserialize, Serialize};

/// JSON-RPC 2.0 ID, either a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcId {
    Number(i64),
    Str(String),
}

/// JSON-RPC 2.0 request envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: Option<RpcId>,
    pub method: String,
    pub params: Option<serde_json::Value>,
}

/// Parameters for the `get_craft_details` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct GetDetailsParams {
    pub item_id: String,
}

/// Parameters for the `search_crafts_by_category` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryParams {
    pub category: String,
}

/// Parameters for the `search_crafts_by_difficulty` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct DifficultyParams {
    pub difficulty: String,
}

/// Parameters for the `search_crafts_by_materials` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct MaterialsParams {
    pub materials: Vec<String>,
}

/// Parameters for the `estimate_craft_time` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct EstimateTimeParams {
    pub item_ids: Vec<String>,
}

/// Parameters for `tools/call`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}
