pub mod request;
pub mod response;

pub use request::{
    CategoryParams, DifficultyParams, EstimateTimeParams, GetDetailsParams, JsonRpcRequest,
    MaterialsParams, RpcId, ToolCallParams,
};
pub use response::{
    JsonRpcError, JsonRpcResponse, McpErrorCode, McpErrorResponse, ToolResult, ToolResultContent,
};
