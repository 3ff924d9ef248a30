#[allow(unused_imports)]
use crate::prelude::*;

use std::collections::HashMap;

use lsp_server::Notification;
use ropey::Rope;

use super::cast_notification;

pub fn handle_did_open_text_document(
    notification: &Notification,
    files: &mut HashMap<String, Rope>,
) -> Result<()> {
    match cast_notification::<lsp_types::notification::DidOpenTextDocument>(notification.clone()) {
        Ok(params) => {
            let file_uri = params.text_document.uri.to_string();
            log_debug!("DidOpen for file: {}", file_uri);
            // The client's copy wins over anything we still hold for the uri
            files.insert(file_uri, Rope::from_str(params.text_document.text.as_str()));
            Ok(())
        }
        Err(Error::ExtractNotificationError(req)) => Err(Error::ExtractNotificationError(req)),
        Err(err) => {
            log_handler_error!("Did open notification", err);
            Err(err)
        }
    }
}
