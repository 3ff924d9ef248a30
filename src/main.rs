mod commands;
mod config;
mod error;
mod prelude;
mod utils;

use crate::config::Config;
use crate::prelude::*;
use crate::utils::handlers::notification_did_change::handle_did_change_text_document;
use crate::utils::handlers::notification_did_close::handle_did_close_text_document;
use crate::utils::handlers::notification_did_open::handle_did_open_text_document;
use crate::utils::handlers::request_code_action::handle_code_action;
use crate::utils::handlers::request_execute_command::handle_execute_command;
use crate::utils::handlers::response_apply_edit::handle_apply_edit_response;
use crate::utils::handlers::{Outgoing, send_error};
use crate::utils::server_capabilities::progressive_lsp_capabilities;

use std::collections::HashMap;

use lsp_server::{Connection, ErrorCode, Message};
use lsp_types::InitializeParams;

use ropey::Rope;

fn main() -> Result<()> {
    // Note that we must have our logging only write out to stderr.
    log_debug!("starting progressive LSP server");

    // Create the transport. Includes the stdio (stdin and stdout) versions but this could
    // also be implemented to use sockets or HTTP.
    let (connection, io_threads) = Connection::stdio();

    // Run the server and wait for the two threads to end (typically by trigger LSP Exit event).
    let server_capabilities = serde_json::to_value(progressive_lsp_capabilities())?;
    let initialization_params = connection.initialize(server_capabilities)?;
    main_loop(connection, initialization_params)?;
    io_threads.join()?;

    // Shut down gracefully.
    log_debug!("shutting down server");
    Ok(())
}

fn main_loop(connection: Connection, params: serde_json::Value) -> Result<()> {
    log_debug!("Starting main loop");
    let init: InitializeParams = serde_json::from_value(params)?;
    let mut files = HashMap::<String, Rope>::new();
    let mut outgoing = Outgoing::new();

    // Load configuration from workspace root, then let the client override it
    let workspace_root = init
        .workspace_folders
        .as_ref()
        .and_then(|folders| folders.first())
        .map(|folder| folder.uri.path().as_str());
    let mut config = Config::load_from_workspace(workspace_root);
    config.merge_initialization_options(init.initialization_options.as_ref());
    log_debug!("Options: {:?}", config.options);

    for msg in &connection.receiver {
        match msg {
            Message::Request(request) => {
                if connection.handle_shutdown(&request)? {
                    return Ok(());
                }
                log_request!(request.id, request.method);
                if handle_execute_command(&request, &connection, &files, &config, &mut outgoing)
                    .is_ok()
                {
                    continue;
                }
                if handle_code_action(&request, &connection, &files, &config).is_ok() {
                    continue;
                }
                send_error(
                    &connection,
                    request.id.clone(),
                    ErrorCode::MethodNotFound,
                    format!("unhandled method {}", request.method),
                )?;
            }
            Message::Response(resp) => {
                // Answers to our workspace/applyEdit requests
                handle_apply_edit_response(&resp);
            }
            Message::Notification(notification) => {
                log_notification!(notification.method);
                if handle_did_open_text_document(&notification, &mut files).is_ok() {
                    continue;
                }
                if handle_did_change_text_document(&notification, &mut files).is_ok() {
                    continue;
                }
                if handle_did_close_text_document(&notification, &mut files).is_ok() {
                    continue;
                }
            }
        }
    }
    Ok(())
}
