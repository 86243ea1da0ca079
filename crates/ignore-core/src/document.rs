//! The ignore-file document and its entry-editing operations

use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::hash;

/// An ignore file split into its generated section and the user entries below it.
///
/// Parsing, sorting, refreshing and rendering are implemented in their own
/// modules; this module holds the entry editing and hash checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// User section, in file order.
    pub entries: Vec<Entry>,
    /// Body of the guarded section, without the guard lines.
    pub generated_content: String,
    /// Hash embedded in the start guard.
    pub generated_content_hash: Option<String>,
    /// Hash of the tokens and extra paths that produced `generated_content`.
    pub parameters_hash: Option<String>,
}

impl Document {
    /// Create an empty document with no generated section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document holding only user entries.
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }

    /// Index of the first comment whose text, ignoring leading `#` and surrounding
    /// whitespace, equals `comment`.
    pub fn find_comment(&self, comment: &str) -> Option<usize> {
        self.entries.iter().position(|entry| match entry {
            Entry::Comment(value) => value.trim_start_matches('#').trim() == comment,
            _ => false,
        })
    }

    /// Path values of the entries in `start..stop`.
    ///
    /// Bounds default to the whole entry list and are clamped to its length.
    pub fn paths(&self, start: Option<usize>, stop: Option<usize>) -> impl Iterator<Item = &str> {
        let stop = stop.unwrap_or(usize::MAX);
        self.entries
            .iter()
            .take(stop)
            .skip(start.unwrap_or(0))
            .filter_map(|entry| match entry {
                Entry::Path(value) => Some(value.as_str()),
                _ => None,
            })
    }

    /// Insert a comment; leading whitespace is dropped as the parser would.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidEntry` if the comment spans lines.
    pub fn add_comment(&mut self, comment: impl Into<String>, index: Option<usize>) -> Result<()> {
        let comment: String = comment.into();
        self.insert(Entry::Comment(comment.trim_start().to_string()), index)
    }

    pub fn add_blank(&mut self, index: Option<usize>) {
        let index = self.clamp(index);
        self.entries.insert(index, Entry::Blank);
    }

    /// Insert a path.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidEntry` if the path would not parse back as the same
    /// path: guard lines, values starting with `#`, blank values, line breaks.
    pub fn add_path(&mut self, path: impl Into<String>, index: Option<usize>) -> Result<()> {
        self.insert(Entry::Path(path.into()), index)
    }

    /// Remove every path entry equal to `path`.
    ///
    /// Returns how many entries were removed.
    ///
    /// # Errors
    ///
    /// Returns `Error::PathNotFound` if no entry matched.
    pub fn remove_path(&mut self, path: &str) -> Result<usize> {
        let before = self.entries.len();
        self.entries
            .retain(|entry| !matches!(entry, Entry::Path(value) if value == path));
        let removed = before - self.entries.len();

        if removed == 0 {
            return Err(Error::PathNotFound {
                path: path.to_string(),
            });
        }
        tracing::debug!(path, removed, "Removed path entries");
        Ok(removed)
    }

    /// Whether the stored parameters hash matches the given generation inputs.
    ///
    /// A match means regenerating would fetch the same template, so the
    /// network round trip can be skipped.
    pub fn check_generation_parameters<T, P>(&self, tokens: &[T], extra_paths: &[P]) -> bool
    where
        T: AsRef<str>,
        P: AsRef<str>,
    {
        self.parameters_hash.as_deref() == Some(hash::parameters_hash(tokens, extra_paths).as_str())
    }

    /// Whether the stored content hash matches the generated section.
    ///
    /// Returns `false` when no hash is stored.
    pub fn check_generated_content_hash(&self) -> bool {
        self.generated_content_hash.as_deref()
            == Some(hash::content_hash(&self.generated_content).as_str())
    }

    /// Store the hash of the current generated section.
    pub fn refresh_generated_content_hash(&mut self) {
        self.generated_content_hash = Some(hash::content_hash(&self.generated_content));
    }

    fn insert(&mut self, entry: Entry, index: Option<usize>) -> Result<()> {
        entry.validate()?;
        let index = self.clamp(index);
        self.entries.insert(index, entry);
        Ok(())
    }

    fn clamp(&self, index: Option<usize>) -> usize {
        let len = self.entries.len();
        index.map_or(len, |i| i.min(len))
    }
}
