//! Error handling utilities for the MCP server

use log::error;
use rmcp::{
    model::{CallToolResult, Content},
    ErrorData,
};
use trailhead_core::{Notification, SubmissionError, TrailheadError};

use super::handlers::McpResult;

/// Helper to convert failures outside the caller's control to MCP errors
pub fn to_mcp_error(message: &str, error: &TrailheadError) -> ErrorData {
    ErrorData::internal_error(format!("{message}: {error}"), None)
}

/// Reports errors the caller can fix as a failed tool call so the model sees
/// the reason; everything else becomes an MCP error.
pub fn tool_error(message: &str, error: TrailheadError) -> McpResult {
    match error {
        TrailheadError::InvalidInput { .. }
        | TrailheadError::RouteNotFound { .. }
        | TrailheadError::EventNotFound { .. }
        | TrailheadError::WizardAlreadyOpen
        | TrailheadError::WizardNotEditing => Ok(CallToolResult::error(vec![Content::text(
            Notification::failure(error.to_string()).to_string(),
        )])),
        other => Err(to_mcp_error(message, &other)),
    }
}

/// Every submission failure keeps the draft, so all of them are reported as
/// failed tool calls the caller may retry.
pub fn submission_error(error: &SubmissionError) -> McpResult {
    if let SubmissionError::Store(e) = error {
        error!("Event store rejected submission: {e}");
    }
    Ok(CallToolResult::error(vec![Content::text(
        Notification::from(error).to_string(),
    )]))
}
