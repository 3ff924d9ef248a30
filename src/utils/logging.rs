//! Logging for the server.
//!
//! Every line goes to stderr since stdout carries the protocol stream. Lines
//! are tagged with a level so editor log panes can be grepped.

/// Write one tagged line to stderr
#[macro_export]
macro_rules! log_line {
    ($level:literal, $($arg:tt)*) => {
        eprintln!("[{}] {}", $level, format!($($arg)*))
    };
}

/// Log an incoming request by ID and method
#[macro_export]
macro_rules! log_request {
    ($id:expr, $method:expr) => {
        $crate::log_line!("req", "#{} {}", $id, $method)
    };
}

/// Log a message about a request in flight
#[macro_export]
macro_rules! log_request_msg {
    ($id:expr, $msg:expr) => {
        $crate::log_line!("req", "#{}: {}", $id, $msg)
    };
    ($id:expr, $fmt:expr, $($arg:tt)*) => {
        $crate::log_line!("req", "#{}: {}", $id, format!($fmt, $($arg)*))
    };
}

/// Log an incoming notification by method
#[macro_export]
macro_rules! log_notification {
    ($method:expr) => {
        $crate::log_line!("note", "{}", $method)
    };
}

/// Log a handler error
#[macro_export]
macro_rules! log_handler_error {
    ($handler:expr, $err:expr) => {
        $crate::log_line!("error", "{} handler: {}", $handler, $err)
    };
}

/// Log a debug message
#[macro_export]
macro_rules! log_debug {
    ($msg:expr) => {
        $crate::log_line!("debug", "{}", $msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::log_line!("debug", $fmt, $($arg)*)
    };
}
