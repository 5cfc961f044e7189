//! Program execution and executable lookup.

pub mod command;
pub mod path;

pub use command::{execute, CommandOptions, CommandResult};
pub use path::{is_executable, parse_system_path, resolve_tool_path};
