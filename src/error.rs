#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Generic {0}")]
    Generic(String),
    #[error("SendError {0}")]
    SendError(String),
    #[error("OutOfBounds at line {0}")]
    OutOfBounds(usize),
    #[error("NoSuchFile {0}")]
    NoSuchFile(String),
    #[error("InvalidArguments {0}")]
    InvalidArguments(String),
    #[error("UnknownCommand {0}")]
    UnknownCommand(String),

    #[error(transparent)]
    Step(#[from] progressive_core::StepError),

    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    ExtractNotificationError(#[from] lsp_server::ExtractError<lsp_server::Notification>),

    #[error(transparent)]
    ExtractRequestError(#[from] lsp_server::ExtractError<lsp_server::Request>),

    #[error(transparent)]
    ProtocolError(#[from] lsp_server::ProtocolError),
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}
