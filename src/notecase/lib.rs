//! # Notecase Architecture
//!
//! Notecase keeps short, labelled text notes as plain files next to a JSON index,
//! and can turn the whole collection into a portable, password protected backup.
//! It is a library first; the `notecase` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation per module, Rust types in and out          │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                              │
//!                 ▼                              ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Storage (store/, index.rs)   │ │  Backups (backup/)        │
//! │  NotesRepository, JSON index  │ │  zip, AES-GCM, upload sink│
//! └───────────────────────────────┘ └───────────────────────────┘
//!                 │                              │
//!                 └──────────────┬───────────────┘
//!                                ▼
//!                  Storage location (location.rs)
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain arguments, returns `Result<CmdResult>`,
//! never prints and never exits. Logging goes through `tracing`; installing a
//! subscriber is the client's job.
//!
//! ## Concurrency
//!
//! Every operation is synchronous, blocking I/O. There is no cross-call locking:
//! callers serialize operations that touch the same notes directory.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Note storage trait and implementations
//! - [`index`]: The `notes_index.json` metadata cache
//! - [`location`]: Where the notes directory is
//! - [`backup`]: Archive packing, encryption, upload and restore
//! - [`config`]: Persisted preferences
//! - [`model`]: Core data types (`Note`, `NotesIndex`)
//! - [`error`]: Error types

pub mod api;
pub mod backup;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod location;
pub mod model;
pub mod store;
