//! # Notez Architecture
//!
//! Notez is a small **UI-agnostic note library** with a command-line client on top.
//! The whole collection lives in one JSON array under a single storage key;
//! everything else is built around reading, changing and writing that array back.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, sets up logging        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Parses index strings, builds remote clients from config  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, returns `CmdResult`                      │
//! │  - Decides which failures are user-facing warnings         │
//! └─────────────────────────────────────────────────────────────┘
//!                    │                         │
//!                    ▼                         ▼
//! ┌──────────────────────────────┐  ┌──────────────────────────┐
//! │  Storage Layer (store/)      │  │  Remote (remote/)        │
//! │  - DataStore / NoteStore     │  │  - Suggestion service    │
//! │  - Fs and in-memory backends │  │  - REST notes backend    │
//! └──────────────────────────────┘  └──────────────────────────┘
//! ```
//!
//! ## Failure Policy
//!
//! The store and the remote clients always return typed errors. The command layer
//! turns a few of them into warnings where a failure should not stop the user:
//! an empty note is simply not saved, an unreadable slot lists as empty, and an
//! unreachable suggestion service yields no suggestions. Each of those is logged
//! through `tracing`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: The note slot and its storage backends
//! - [`remote`]: HTTP clients for the suggestion service and the notes backend
//! - [`model`]: Core data types (`Note`, `RemoteNote`)
//! - [`index`]: 1-based display indexes and range parsing
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod remote;
pub mod store;
