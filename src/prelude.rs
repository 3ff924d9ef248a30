pub use crate::error::Error;
pub type Result<T> = core::result::Result<T, Error>;

#[allow(unused_imports)]
pub use crate::{
    log_debug, log_handler_error, log_line, log_notification, log_request, log_request_msg,
};
