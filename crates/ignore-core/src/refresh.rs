//! Regeneration of the guarded section from a template provider

use crate::document::Document;
use crate::error::Result;
use crate::guard;
use crate::hash;
use crate::provider::TemplateProvider;

impl Document {
    /// Replace the generated section with freshly fetched template rules.
    ///
    /// Stores the new parameters hash but leaves the content hash untouched, so
    /// the new content can be inspected before
    /// [`Document::refresh_generated_content_hash`] commits to it.
    ///
    /// # Errors
    ///
    /// Returns the provider's error unchanged; the document is not modified.
    pub fn refresh<T, P>(
        &mut self,
        provider: &dyn TemplateProvider,
        tokens: &[T],
        extra_paths: &[P],
    ) -> Result<()>
    where
        T: AsRef<str>,
        P: AsRef<str>,
    {
        let token_refs: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
        tracing::info!(tokens = %token_refs.join(","), "Fetching template rules");

        let fetched = provider.fetch(&token_refs)?;
        // No `\r` in generated content: editors drop it on save (macOS `Icon\r\r`).
        let fetched = fetched.replace('\r', "");

        let parameters_hash = hash::parameters_hash(tokens, extra_paths);

        let mut lines: Vec<String> = vec![
            guard::BANNER.to_string(),
            guard::parameters_marker(&parameters_hash),
            String::new(),
            fetched,
            guard::EXTRA_PATHS_MARKER.to_string(),
        ];
        lines.extend(extra_paths.iter().map(|path| path.as_ref().to_string()));
        lines.push(guard::RULE.to_string());

        self.generated_content = lines.join("\n");
        self.parameters_hash = Some(parameters_hash);
        Ok(())
    }
}
