//! Document to text rendering

use crate::document::Document;
use crate::error::{Error, Result};
use crate::guard;

impl Document {
    /// Render the document in canonical form.
    ///
    /// The guarded section comes first, followed by one line per user entry.
    /// Every line, including the last, ends with `\n`.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingContentHash` if no content hash is stored. Call
    /// [`Document::refresh_generated_content_hash`] after changing the generated
    /// section.
    ///
    /// Returns `Error::InvalidEntry` or `Error::EndGuardInContent` if the output
    /// would not parse back into this document.
    pub fn render(&self) -> Result<String> {
        let hash = self
            .generated_content_hash
            .as_deref()
            .ok_or(Error::MissingContentHash)?;

        if let Some(index) = self
            .generated_content
            .split('\n')
            .position(|line| line.trim_end_matches('\r') == guard::END_GUARD)
        {
            return Err(Error::EndGuardInContent { line: index + 1 });
        }
        for entry in &self.entries {
            entry.validate()?;
        }

        let mut out = String::with_capacity(self.generated_content.len() + 128);
        out.push_str(&guard::start_guard(hash));
        out.push('\n');
        out.push_str(&self.generated_content);
        out.push('\n');
        out.push_str(guard::END_GUARD);
        out.push('\n');

        for entry in &self.entries {
            out.push_str(&entry.to_string());
            out.push('\n');
        }

        Ok(out)
    }
}
