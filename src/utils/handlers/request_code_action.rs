use crate::commands::Command;
use crate::config::{Config, OptionOverrides};
use crate::prelude::*;
use crate::utils::handlers::request_execute_command::progressive_edit;
use crate::utils::handlers::{cast, send_response};

use std::collections::HashMap;

use lsp_server::{Connection, Request};
use lsp_types::{
    CodeAction, CodeActionKind, CodeActionOrCommand, CodeActionParams, Range, Uri,
    request::CodeActionRequest,
};
use ropey::Rope;

const ACTIONS: [(Command, &str); 2] = [
    (Command::IncrementBy1, "Increment numbers progressively"),
    (Command::DecrementBy1, "Decrement numbers progressively"),
];

/// Offer renumbering of the requested range, one action per direction,
/// each carrying its edit. Actions that would not change anything are left
/// out.
pub fn get_code_actions(
    rope: &Rope,
    uri: &Uri,
    range: &Range,
    config: &Config,
) -> Vec<CodeActionOrCommand> {
    let options = config.resolve_options(&OptionOverrides::default());
    let mut actions = Vec::new();

    for (command, title) in ACTIONS {
        let Ok(step) = command.step(None) else {
            continue;
        };
        if let Some(edit) = progressive_edit(rope, uri, std::slice::from_ref(range), &step, options)
        {
            actions.push(CodeActionOrCommand::CodeAction(CodeAction {
                title: title.to_string(),
                kind: Some(CodeActionKind::REFACTOR_REWRITE),
                edit: Some(edit),
                ..Default::default()
            }));
        }
    }

    actions
}

pub fn handle_code_action(
    req: &Request,
    connection: &Connection,
    files: &HashMap<String, Rope>,
    config: &Config,
) -> Result<()> {
    match cast::<CodeActionRequest>(req.clone()) {
        Ok((id, params)) => {
            let CodeActionParams {
                text_document,
                range,
                ..
            } = params;

            let uri = text_document.uri;
            let actions = match files.get(&uri.to_string()) {
                Some(rope) => get_code_actions(rope, &uri, &range, config),
                None => {
                    log_request_msg!(id, "code action for unknown document {}", uri.as_str());
                    vec![]
                }
            };

            send_response(connection, id, Some(actions))?;
            Ok(())
        }
        Err(Error::ExtractRequestError(req)) => Err(Error::ExtractRequestError(req)),
        Err(err) => {
            log_handler_error!("Code action", err);
            Err(err)
        }
    }
}
