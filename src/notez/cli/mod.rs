//! # CLI Behavior
//!
//! This is **one possible UI client** for notez, not the application itself.
//!
//! - Running `notez` with no arguments lists notes.
//! - `notez create` without a content argument reads piped stdin.
//! - Indexes are the 1-based positions shown by `list`; ranges like `2-4` work
//!   wherever several indexes are accepted.
//! - Library warnings (empty note, unreachable suggestion service) print as
//!   yellow lines and do not change the exit code.

mod commands;
mod print;
mod setup;

pub use commands::run;
