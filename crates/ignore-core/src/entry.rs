//! User-section entries

use std::fmt;

use crate::error::{Error, Result};
use crate::guard;

/// One line of the user section of an ignore file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Entry {
    /// A comment; the value excludes the leading `#` and the whitespace after it.
    Comment(String),
    /// An empty or all-whitespace line.
    Blank,
    /// An ignore rule, kept verbatim.
    Path(String),
}

impl Entry {
    pub fn comment(value: impl Into<String>) -> Self {
        Self::Comment(value.into())
    }

    pub fn path(value: impl Into<String>) -> Self {
        Self::Path(value.into())
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, Self::Comment(_))
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }

    pub fn is_path(&self) -> bool {
        matches!(self, Self::Path(_))
    }

    /// The stored value; empty for blanks.
    pub fn value(&self) -> &str {
        match self {
            Self::Comment(value) | Self::Path(value) => value,
            Self::Blank => "",
        }
    }

    /// Check that the entry renders to one line that parses back to the same entry.
    ///
    /// Path syntax itself is not validated.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidEntry` naming the offending value.
    pub fn validate(&self) -> Result<()> {
        let value = self.value();
        let invalid = |reason| {
            Err(Error::InvalidEntry {
                value: value.to_string(),
                reason,
            })
        };

        if value.contains('\n') {
            return invalid("contains a line break");
        }
        if value.ends_with('\r') {
            return invalid("ends with a carriage return");
        }

        match self {
            Self::Comment(comment) if comment.starts_with(char::is_whitespace) => {
                invalid("comment starts with whitespace")
            }
            Self::Path(path)
                if guard::match_start_guard(path).is_some() || path == guard::END_GUARD =>
            {
                invalid("path is a generated section guard")
            }
            Self::Path(path) if path.starts_with('#') => invalid("path starts with '#'"),
            Self::Path(path) if path.trim().is_empty() => invalid("path is blank"),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comment(value) => write!(f, "# {}", value),
            Self::Blank => Ok(()),
            Self::Path(value) => f.write_str(value),
        }
    }
}
