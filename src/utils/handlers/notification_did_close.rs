#[allow(unused_imports)]
use crate::prelude::*;

use std::collections::HashMap;

use lsp_server::Notification;
use ropey::Rope;

use super::cast_notification;

pub fn handle_did_close_text_document(
    notification: &Notification,
    files: &mut HashMap<String, Rope>,
) -> Result<()> {
    match cast_notification::<lsp_types::notification::DidCloseTextDocument>(notification.clone())
    {
        Ok(params) => {
            let file_uri = params.text_document.uri.to_string();
            if files.remove(&file_uri).is_some() {
                log_debug!("DidClose for file: {}", file_uri);
            }
            Ok(())
        }
        Err(Error::ExtractNotificationError(req)) => Err(Error::ExtractNotificationError(req)),
        Err(err) => {
            log_handler_error!("Did close notification", err);
            Err(err)
        }
    }
}
