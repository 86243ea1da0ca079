//! File-level sync and check of generated ignore files
//!
//! Ties the document model in `ignore-core` to the filesystem: read the
//! file, regenerate the guarded section when its inputs or content changed,
//! sort the user section, and write the result atomically.

pub mod check;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod sync;

pub use check::{CheckIssue, CheckReport, CheckStatus, check_content, check_file};
pub use config::SyncConfig;
pub use error::{Error, Result};
pub use sync::{SyncOutcome, sync_content, sync_file};
