//! Text to document parsing.
//!
//! The parser is a two-state machine: user lines become entries, lines between
//! the start and end guards are collected verbatim into the generated section.

use crate::document::Document;
use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::guard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    User,
    /// Inside the generated section; holds the 1-based line of the start guard.
    Generated { opened_at: usize },
}

impl Document {
    /// Parse the text of an ignore file.
    ///
    /// Lines are split on `\n` and every trailing `\r` is dropped, so `Icon\r\r`
    /// reads the same as `Icon`.
    /// Paths are accepted verbatim, without any syntax validation.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedInput` if a generated section is opened but never closed.
    ///
    /// # Example
    /// ```
    /// use ignore_core::{Document, Entry};
    ///
    /// let doc = Document::parse("# Build\n/target\n").unwrap();
    /// assert_eq!(doc.entries, vec![Entry::comment("Build"), Entry::path("/target")]);
    /// assert!(doc.generated_content_hash.is_none());
    /// ```
    pub fn parse(source: &str) -> Result<Self> {
        let mut doc = Document::new();
        let mut state = State::User;
        let mut generated: Vec<&str> = Vec::new();

        for (index, line) in source.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            match state {
                State::User => {
                    if let Some(hash) = guard::match_start_guard(line) {
                        doc.generated_content_hash = Some(hash.to_string());
                        state = State::Generated {
                            opened_at: index + 1,
                        };
                    } else if let Some(comment) = line.strip_prefix('#') {
                        doc.entries.push(Entry::Comment(comment.trim_start().to_string()));
                    } else if line.trim().is_empty() {
                        doc.entries.push(Entry::Blank);
                    } else {
                        doc.entries.push(Entry::Path(line.to_string()));
                    }
                }
                State::Generated { .. } => {
                    if line == guard::END_GUARD {
                        doc.generated_content = generated.join("\n");
                        generated.clear();
                        state = State::User;
                    } else {
                        if let Some(hash) = guard::match_parameters_marker(line) {
                            doc.parameters_hash = Some(hash.to_string());
                        }
                        generated.push(line);
                    }
                }
            }
        }

        if let State::Generated { opened_at } = state {
            return Err(Error::malformed(opened_at, "generated section never closed"));
        }

        tracing::debug!(
            entries = doc.entries.len(),
            has_generated = doc.generated_content_hash.is_some(),
            "Parsed ignore document"
        );
        Ok(doc)
    }
}
