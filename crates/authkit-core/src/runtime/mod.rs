//! Environment checks for template pre-flight
//!
//! Templates may list executables they need (node, npm, docker, ...). These are
//! resolved on the search path before any file is copied.

pub mod check;

pub use check::{check_env, ToolInfo};
