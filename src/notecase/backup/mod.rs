//! # Backups
//!
//! Export flows one way, import flows back:
//!
//! ```text
//! export:  notes dir ─▶ archive::pack ─▶ cipher::encrypt ─▶ UploadSink
//! import:  sealed bytes ─▶ cipher::decrypt ─▶ archive::unpack ─▶ notes dir
//! ```
//!
//! - [`archive`]: zip container of `*.txt` note files plus `notes_index.json`.
//! - [`cipher`]: PBKDF2-HMAC-SHA256 key derivation and AES-256-GCM sealing.
//!   Sealed layout is `salt[16] | iv[12] | ciphertext+tag`, with no header.
//! - [`sink`]: the upload collaborator. Transport and retries are its business.
//! - [`pipeline`]: orchestration and cleanup of intermediate files.
//!
//! Importing writes files straight into the notes directory, bypassing the store:
//! an index inside the archive replaces the live one verbatim. Callers reload
//! their listings afterwards.

pub mod archive;
pub mod cipher;
pub mod pipeline;
pub mod sink;

pub use pipeline::BackupPipeline;
pub use sink::{DirectorySink, UploadSink};
