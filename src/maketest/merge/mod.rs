pub mod config;
pub mod error;
pub mod io;
pub mod join;
pub mod menu;
pub mod model;
pub mod resolve;
pub mod sync;

pub use error::{Result, ToolError};
