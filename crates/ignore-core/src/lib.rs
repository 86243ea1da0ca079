//! Ignore-file document model
//!
//! Parses an ignore file into a guarded, generated section and the user
//! entries below it, and renders it back deterministically:
//!
//! ```text
//! ### START-GENERATED-CONTENT [HASH: <sha256 of the generated body>]
//! # ---- do not edit banner ----
//! ### [PARAMETERS_HASH: <sha256 of tokens and extra paths>]
//!
//! <template rules>
//! # Extra paths
//! <extra paths>
//! # ----
//! ### END-GENERATED-CONTENT
//!
//! # user comments
//! user/paths
//! ```
//!
//! The content hash detects edits to the generated body. The parameters hash
//! lets callers skip a provider round trip when the inputs are unchanged.

pub mod document;
pub mod entry;
pub mod error;
pub mod guard;
pub mod hash;
pub mod parser;
pub mod provider;
pub mod refresh;
pub mod render;
pub mod sort;

pub use document::Document;
pub use entry::Entry;
pub use error::{Error, Result};
pub use hash::{content_hash, parameters_hash};
pub use provider::TemplateProvider;
pub use sort::SortOptions;
