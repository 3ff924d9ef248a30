#[allow(unused_imports)]
use crate::prelude::*;
use crate::utils::ropey::RopeApplyChange;

use std::collections::HashMap;

use lsp_server::Notification;
use ropey::Rope;

use super::cast_notification;

pub fn handle_did_change_text_document(
    notification: &Notification,
    files: &mut HashMap<String, Rope>,
) -> Result<()> {
    match cast_notification::<lsp_types::notification::DidChangeTextDocument>(notification.clone())
    {
        Ok(params) => {
            let file_uri = params.text_document.uri.to_string();
            let rope = files
                .get_mut(&file_uri)
                .ok_or_else(|| Error::NoSuchFile(file_uri.clone()))?;
            for change in &params.content_changes {
                if let Err(err) = rope.apply_change(change) {
                    log_handler_error!("Did change notification", err);
                }
            }
            Ok(())
        }
        Err(Error::ExtractNotificationError(req)) => Err(Error::ExtractNotificationError(req)),
        Err(err) => {
            log_handler_error!("Did change notification", err);
            Err(err)
        }
    }
}
