#[allow(unused_imports)]
use crate::prelude::*;

pub mod data_to_position;
pub mod handlers;
pub mod logging;
pub mod ropey;
pub mod server_capabilities;
