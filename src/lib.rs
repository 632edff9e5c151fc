//! # Cheatbank Architecture
//!
//! Cheatbank is a **UI-agnostic cheatsheet library**: an in-memory,
//! uniqueness-checked collection of titled cheatsheets, with a thin CLI
//! client on top. The CLI is a convenience; any shell (desktop GUI, REPL,
//! tests) drives the same core.
//!
//! ## Layers
//!
//! ```text
//! CLI (main.rs)            argument parsing, colored output, exit codes
//!        │
//! API (api.rs)             facade: normalizes inputs, dispatches commands
//!        │
//! Commands (commands/*.rs) business logic, returns structured CmdResult
//!        │
//! Model (manager.rs)       bank + prefs + live filtered view
//!        │
//! Collection (list.rs)     generic UniqueList enforcing identity uniqueness
//! ```
//!
//! ## The two equalities
//!
//! A cheatsheet's *identity* is its title; full equality also compares tags
//! and contents. `add`/`contains` and the duplicate checks work on
//! identity, `remove` matches by full equality. The collection keeps both
//! notions explicit (see [`list::Identity`]) instead of overloading one
//! `==`.
//!
//! ## The filtered view
//!
//! [`manager::ModelManager`] exposes a predicate-driven read view over the
//! bank. The view is recomputed on every read, so it always reflects the
//! latest mutations; index-based commands (delete, list) are defined
//! against this view, not the backing list.
//!
//! ## No I/O assumptions in core
//!
//! From `api.rs` inward, code takes plain arguments, returns
//! `Result<CmdResult>`, and never touches stdout or the process exit code.
//! Persistence (`storage.rs`) and prefs (`prefs.rs`) are edge collaborators
//! serializing the bank's read-only entity list.

pub mod api;
pub mod bank;
pub mod commands;
pub mod error;
pub mod list;
pub mod manager;
pub mod model;
pub mod parse;
pub mod prefs;
pub mod storage;
