//! Drills CLI library.
//!
//! Shared plumbing for the `insort` and `josephus` binaries: configuration,
//! prompting, rendering and the command drivers themselves.

pub mod colors;
pub mod config;
pub mod error;
pub mod josephus_cmd;
pub mod logging;
pub mod menu;
pub mod prompt;
pub mod render;
pub mod sort_cmd;

pub use error::CliError;
