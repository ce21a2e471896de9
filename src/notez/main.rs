//! # Notez CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ```text
//! cli/setup.rs     clap argument definitions, version string
//! cli/commands.rs  context wiring, logging setup, dispatch to the API facade
//! cli/print.rs     terminal output for `CmdResult` values
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI is responsible for
//! **all** user-facing concerns: argument parsing, context initialization,
//! dispatch, error handling, and printing.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
