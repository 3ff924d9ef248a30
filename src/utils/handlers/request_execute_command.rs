#![allow(clippy::mutable_key_type)]
use crate::commands::{Command, CommandArguments};
use crate::config::Config;
use crate::prelude::*;
use crate::utils::data_to_position::ToPosition;
use crate::utils::handlers::{Outgoing, cast, send_error, send_response};
use crate::utils::ropey::RopePositions;

use std::collections::HashMap;

use lsp_server::{Connection, ErrorCode, Request};
use lsp_types::{
    ApplyWorkspaceEditParams, ExecuteCommandParams, Range, TextEdit, Uri, WorkspaceEdit,
    request::{ApplyWorkspaceEdit, ExecuteCommand},
};
use progressive_core::{Options, StepFunction, process_batch};
use ropey::Rope;

/// Renumber the literals of `ranges` in `rope` and describe the result as a
/// workspace edit for `uri`. `None` when nothing would change.
pub fn progressive_edit<S>(
    rope: &Rope,
    uri: &Uri,
    ranges: &[Range],
    step: &S,
    options: Options,
) -> Option<WorkspaceEdit>
where
    S: StepFunction + ?Sized,
{
    let spans: Vec<_> = ranges
        .iter()
        .filter_map(|range| rope.range_to_span(range))
        .collect();
    let batch = process_batch(rope, &spans, step, options);
    if !batch.changed() {
        return None;
    }

    let edits: Vec<TextEdit> = batch
        .edits
        .into_iter()
        .map(|edit| TextEdit {
            range: edit.span.to_range(rope),
            new_text: edit.new_text,
        })
        .collect();
    let mut changes = HashMap::new();
    changes.insert(uri.clone(), edits);
    Some(WorkspaceEdit {
        changes: Some(changes),
        ..Default::default()
    })
}

/// Resolve and run one `progressive.*` command against the open documents
pub fn get_command_edit(
    params: &ExecuteCommandParams,
    files: &HashMap<String, Rope>,
    config: &Config,
) -> Result<Option<WorkspaceEdit>> {
    let command = Command::from_name(&params.command)
        .ok_or_else(|| Error::UnknownCommand(params.command.clone()))?;
    let args = CommandArguments::from_arguments(&params.arguments)?;

    let uri = &args.text_document.uri;
    let rope = files
        .get(&uri.to_string())
        .ok_or_else(|| Error::NoSuchFile(uri.to_string()))?;

    let step = command.step(args.value.as_ref())?;
    let options = config.resolve_options(&args.overrides);

    Ok(progressive_edit(rope, uri, &args.selections, &step, options))
}

fn edit_count(edit: &WorkspaceEdit) -> usize {
    edit.changes
        .as_ref()
        .map_or(0, |changes| changes.values().map(Vec::len).sum())
}

/// Handle workspace/executeCommand. Answers `true` when an edit was sent
/// to the client and `false` when there was nothing to do or the step value
/// was unusable.
pub fn handle_execute_command(
    request: &Request,
    connection: &Connection,
    files: &HashMap<String, Rope>,
    config: &Config,
    outgoing: &mut Outgoing,
) -> Result<()> {
    match cast::<ExecuteCommand>(request.clone()) {
        Ok((id, params)) => {
            log_request_msg!(id, "execute {}", params.command);

            match get_command_edit(&params, files, config) {
                Ok(Some(edit)) => {
                    log_request_msg!(id, "{} replacements", edit_count(&edit));
                    outgoing.send_request::<ApplyWorkspaceEdit>(
                        connection,
                        ApplyWorkspaceEditParams {
                            label: Some(params.command.clone()),
                            edit,
                        },
                    )?;
                    send_response(connection, id, true)
                }
                Ok(None) => {
                    log_request_msg!(id, "nothing to renumber");
                    send_response(connection, id, false)
                }
                Err(Error::Step(reason)) => {
                    log_request_msg!(id, "cancelled: {}", reason);
                    send_response(connection, id, false)
                }
                Err(err) => {
                    log_handler_error!("Execute command", err);
                    send_error(connection, id, ErrorCode::InvalidParams, err.to_string())
                }
            }
        }
        Err(Error::ExtractRequestError(req)) => Err(Error::ExtractRequestError(req)),
        Err(err) => {
            log_handler_error!("Execute command", err);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OptionsConfig;
    use lsp_server::Message;
    use lsp_types::Position;
    use serde_json::json;

    const URI: &str = "file:///test.txt";

    fn files_with(text: &str) -> HashMap<String, Rope> {
        let mut files = HashMap::new();
        files.insert(URI.to_string(), Rope::from_str(text));
        files
    }

    fn params(command: &str, arguments: serde_json::Value) -> ExecuteCommandParams {
        ExecuteCommandParams {
            command: command.to_string(),
            arguments: vec![arguments],
            work_done_progress_params: Default::default(),
        }
    }

    fn range(sl: u32, sc: u32, el: u32, ec: u32) -> serde_json::Value {
        json!({
            "start": { "line": sl, "character": sc },
            "end": { "line": el, "character": ec }
        })
    }

    fn text_edits(edit: WorkspaceEdit) -> Vec<TextEdit> {
        let uri: Uri = URI.parse().unwrap();
        edit.changes.unwrap().remove(&uri).unwrap()
    }

    #[test]
    fn test_increment_three_selections() {
        let files = files_with("a0\nb0\nc0");
        let p = params(
            "progressive.incrementBy1",
            json!({
                "textDocument": { "uri": URI },
                "selections": [range(0, 0, 0, 2), range(1, 0, 1, 2), range(2, 0, 2, 2)]
            }),
        );
        let edit = get_command_edit(&p, &files, &Config::default())
            .unwrap()
            .unwrap();
        let edits = text_edits(edit);
        let texts: Vec<&str> = edits.iter().map(|e| e.new_text.as_str()).collect();
        assert_eq!(texts, vec!["a1", "b2", "c3"]);
        assert_eq!(edits[1].range.start, Position::new(1, 0));
        assert_eq!(edits[1].range.end, Position::new(1, 2));
    }

    #[test]
    fn test_caret_selection_uses_adjacent_number() {
        let files = files_with("width: 08px");
        let p = params(
            "progressive.incrementBy10",
            json!({
                "textDocument": { "uri": URI },
                "selections": [range(0, 9, 0, 9)]
            }),
        );
        let edits = text_edits(
            get_command_edit(&p, &files, &Config::default())
                .unwrap()
                .unwrap(),
        );
        assert_eq!(edits.len(), 1);
        assert_eq!(edits[0].new_text, "18");
        assert_eq!(edits[0].range.start, Position::new(0, 7));
    }

    #[test]
    fn test_carets_around_one_number_give_one_edit() {
        let files = files_with("a 42 b");
        let p = params(
            "progressive.incrementBy1",
            json!({
                "textDocument": { "uri": URI },
                "selections": [range(0, 2, 0, 2), range(0, 4, 0, 4)]
            }),
        );
        let edits = text_edits(
            get_command_edit(&p, &files, &Config::default())
                .unwrap()
                .unwrap(),
        );
        assert_eq!(edits.len(), 1);
        assert_eq!(edits[0].new_text, "43");
        assert_eq!(edits[0].range.start, Position::new(0, 2));
        assert_eq!(edits[0].range.end, Position::new(0, 4));
    }

    #[test]
    fn test_positions_are_utf16() {
        let files = files_with("\u{1F600} 5");
        let p = params(
            "progressive.incrementBy1",
            json!({
                "textDocument": { "uri": URI },
                "selections": [range(0, 3, 0, 4)]
            }),
        );
        let edits = text_edits(
            get_command_edit(&p, &files, &Config::default())
                .unwrap()
                .unwrap(),
        );
        assert_eq!(edits[0].new_text, "6");
        assert_eq!(edits[0].range.start, Position::new(0, 3));
        assert_eq!(edits[0].range.end, Position::new(0, 4));
    }

    #[test]
    fn test_caret_selection_can_be_disabled() {
        let files = files_with("width: 08px");
        let p = params(
            "progressive.incrementBy1",
            json!({
                "textDocument": { "uri": URI },
                "selections": [range(0, 9, 0, 9)],
                "allowZeroLengthSelection": false
            }),
        );
        assert!(
            get_command_edit(&p, &files, &Config::default())
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_config_defaults_apply() {
        let files = files_with("7 0 0");
        let config = Config {
            options: OptionsConfig {
                skip_first_number: true,
                ..Default::default()
            },
        };
        let p = params(
            "progressive.decrementByInput",
            json!({
                "textDocument": { "uri": URI },
                "selections": [range(0, 0, 0, 5)],
                "value": 2
            }),
        );
        let edits = text_edits(get_command_edit(&p, &files, &config).unwrap().unwrap());
        assert_eq!(edits[0].new_text, "7 5 3");
    }

    #[test]
    fn test_bad_step_value_cancels() {
        let files = files_with("1 1");
        let p = params(
            "progressive.incrementByInput",
            json!({
                "textDocument": { "uri": URI },
                "selections": [range(0, 0, 0, 3)],
                "value": "zero"
            }),
        );
        assert!(matches!(
            get_command_edit(&p, &files, &Config::default()),
            Err(Error::Step(_))
        ));
    }

    #[test]
    fn test_unknown_document_and_command() {
        let files = HashMap::new();
        let p = params(
            "progressive.incrementBy1",
            json!({ "textDocument": { "uri": URI }, "selections": [] }),
        );
        assert!(matches!(
            get_command_edit(&p, &files, &Config::default()),
            Err(Error::NoSuchFile(_))
        ));

        let p = params("progressive.sort", json!({}));
        assert!(matches!(
            get_command_edit(&p, &files, &Config::default()),
            Err(Error::UnknownCommand(_))
        ));
    }

    #[test]
    fn test_handle_execute_command_sends_apply_edit() {
        let (connection, client) = lsp_server::Connection::memory();
        let files = files_with("0 0");
        let p = params(
            "progressive.incrementBy1",
            json!({
                "textDocument": { "uri": URI },
                "selections": [range(0, 0, 0, 3)]
            }),
        );
        let request = Request::new(1.into(), "workspace/executeCommand".to_string(), p);
        let mut outgoing = Outgoing::new();

        handle_execute_command(
            &request,
            &connection,
            &files,
            &Config::default(),
            &mut outgoing,
        )
        .unwrap();

        match client.receiver.recv().unwrap() {
            Message::Request(req) => {
                assert_eq!(req.method, "workspace/applyEdit");
                let params: ApplyWorkspaceEditParams = serde_json::from_value(req.params).unwrap();
                assert_eq!(text_edits(params.edit)[0].new_text, "1 2");
            }
            other => panic!("unexpected message {other:?}"),
        }
        match client.receiver.recv().unwrap() {
            Message::Response(resp) => assert_eq!(resp.result, Some(json!(true))),
            other => panic!("unexpected message {other:?}"),
        }
    }

    #[test]
    fn test_handle_execute_command_ignores_other_methods() {
        let (connection, _client) = lsp_server::Connection::memory();
        let request = Request::new(1.into(), "textDocument/hover".to_string(), json!({}));
        let result = handle_execute_command(
            &request,
            &connection,
            &HashMap::new(),
            &Config::default(),
            &mut Outgoing::new(),
        );
        assert!(matches!(result, Err(Error::ExtractRequestError(_))));
    }
}
