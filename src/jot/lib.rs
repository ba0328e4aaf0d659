//! # Jot Architecture
//!
//! Jot is a **UI-agnostic note-keeping library** with a thin CLI client.
//! Notes live in small flat files: one tab-delimited record per line,
//! appended at the end, mutated only by an atomic whole-file rewrite.
//!
//! ## Layers
//!
//! ```text
//! CLI layer (main.rs + args.rs)
//!   Parses arguments, renders output, maps errors to exit codes.
//!   The only place that knows about stdout/stderr or the terminal.
//!          │
//! API layer (api.rs)
//!   Thin facade over the commands. Returns structured Result types.
//!          │
//! Command layer (commands/*.rs)
//!   Business logic for each operation. Operates on Rust types,
//!   never touches stdout/stderr, never exits the process.
//!          │
//! Storage layer (store/)
//!   Abstract NoteStore trait.
//!   FileStore (production), InMemoryStore (testing).
//! ```
//!
//! ## The store model
//!
//! A store is an ordered sequence of notes, one per line, fields joined by
//! tabs. There are two layouts: the global notes file, where every record
//! carries a lifecycle status (undone / done / postponed), and category
//! files, which carry no status and live one-per-name in a directory. A
//! missing file is an empty store. Reads are sequential; there is no index
//! and no random access, which is fine for the file sizes a single person
//! produces.
//!
//! Every mutation goes through one generic rewrite routine: stream all
//! records through a transform into an adjacent temp file, then rename it
//! over the original. A failed rewrite leaves the store untouched.
//!
//! ## Module overview
//!
//! - [`api`]: the facade all clients go through
//! - [`commands`]: one module per operation
//! - [`store`]: storage trait and backends
//! - [`model`]: core types (`Note`, `Status`, `StoreKey`)
//! - [`record`]: the line codec
//! - [`date`]: strict `yyyy-MM-dd` validation
//! - [`config`]: per-user configuration
//! - [`init`]: path resolution and context construction for the binary
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod date;
pub mod error;
pub mod init;
pub mod model;
pub mod record;
pub mod store;
