#[allow(unused_imports)]
use crate::prelude::*;

use lsp_server::Response;
use lsp_types::ApplyWorkspaceEditResponse;

/// Inspect the client's answer to one of our `workspace/applyEdit` requests.
/// Returns whether the edit was applied; anything else is logged as an error.
pub fn handle_apply_edit_response(response: &Response) -> bool {
    if let Some(error) = &response.error {
        log_line!(
            "error",
            "workspace/applyEdit #{} failed: {}",
            response.id,
            error.message
        );
        return false;
    }

    let result = response
        .result
        .clone()
        .map(serde_json::from_value::<ApplyWorkspaceEditResponse>);
    match result {
        Some(Ok(ApplyWorkspaceEditResponse { applied: true, .. })) => {
            log_debug!("workspace/applyEdit #{} applied", response.id);
            true
        }
        Some(Ok(ApplyWorkspaceEditResponse { failure_reason, .. })) => {
            log_line!(
                "error",
                "workspace/applyEdit #{} rejected: {}",
                response.id,
                failure_reason.as_deref().unwrap_or("no reason given")
            );
            false
        }
        Some(Err(err)) => {
            log_line!("error", "workspace/applyEdit #{} bad result: {}", response.id, err);
            false
        }
        None => {
            log_line!("error", "workspace/applyEdit #{} without result", response.id);
            false
        }
    }
}
