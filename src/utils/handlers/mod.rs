#[allow(unused_imports)]
use crate::prelude::*;

pub mod notification_did_change;
pub mod notification_did_close;
pub mod notification_did_open;
pub mod request_code_action;
pub mod request_execute_command;
pub mod response_apply_edit;

use lsp_server::{Connection, ErrorCode, Message, Notification, Request, RequestId, Response};

pub fn cast<R>(req: Request) -> Result<(RequestId, R::Params)>
where
    R: lsp_types::request::Request,
    R::Params: serde::de::DeserializeOwned,
{
    req.extract(R::METHOD).map_err(Error::ExtractRequestError)
}

pub fn cast_notification<N>(req: Notification) -> Result<N::Params>
where
    N: lsp_types::notification::Notification,
    N::Params: serde::de::DeserializeOwned,
{
    req.extract(N::METHOD)
        .map_err(Error::ExtractNotificationError)
}

fn send(connection: &Connection, message: Message) -> Result<()> {
    connection
        .sender
        .send(message)
        .map_err(|err| Error::SendError(err.to_string()))
}

pub fn send_response<T: serde::Serialize>(
    connection: &Connection,
    id: RequestId,
    result: T,
) -> Result<()> {
    let result = serde_json::to_value(result)
        .map_err(|e| Error::Generic(format!("Serialization error: {}", e)))?;
    let resp = Response {
        id,
        result: Some(result),
        error: None,
    };
    send(connection, Message::Response(resp))
}

pub fn send_error(
    connection: &Connection,
    id: RequestId,
    code: ErrorCode,
    message: String,
) -> Result<()> {
    send(
        connection,
        Message::Response(Response::new_err(id, code as i32, message)),
    )
}

/// Requests the server sends to the client, e.g. `workspace/applyEdit`.
#[derive(Debug, Default)]
pub struct Outgoing {
    next_id: i32,
}

impl Outgoing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn send_request<R>(&mut self, connection: &Connection, params: R::Params) -> Result<RequestId>
    where
        R: lsp_types::request::Request,
        R::Params: serde::Serialize,
    {
        self.next_id += 1;
        let id = RequestId::from(format!("progressive-{}", self.next_id));
        let request = Request::new(id.clone(), R::METHOD.to_string(), params);
        send(connection, Message::Request(request))?;
        Ok(id)
    }
}
