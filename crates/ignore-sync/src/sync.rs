//! Regenerate, sort and write an ignore file

use std::path::Path;

use ignore_core::{Document, TemplateProvider};
use similar::TextDiff;

use crate::config::SyncConfig;
use crate::error::Result;
use crate::io;

/// What a sync did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    /// The generated section was fetched again
    pub regenerated: bool,
    /// The file was (re)written
    pub written: bool,
    /// Unified diff of the change, `None` when nothing changed
    pub diff: Option<String>,
}

/// Bring `path` up to date with `config`.
///
/// The provider is only called when the stored parameters hash does not match
/// the configured inputs or the generated section has been edited. The file is
/// written only when its text changes.
///
/// # Errors
///
/// Returns an error if the existing file cannot be read or parsed, if the
/// provider fails, or if the file cannot be written. Nothing is written on error.
pub fn sync_file(
    path: &Path,
    config: &SyncConfig,
    provider: &dyn TemplateProvider,
) -> Result<SyncOutcome> {
    let existing = io::read_text(path)?;
    let (rendered, regenerated) = sync_content(existing.as_deref(), config, provider)?;

    let previous = existing.unwrap_or_default();
    if rendered == previous {
        tracing::info!(path = %path.display(), "Ignore file is up to date");
        return Ok(SyncOutcome {
            regenerated,
            written: false,
            diff: None,
        });
    }

    io::write_atomic(path, rendered.as_bytes())?;
    tracing::info!(path = %path.display(), regenerated, "Updated ignore file");

    let name = path.display().to_string();
    let diff = TextDiff::from_lines(&previous, &rendered)
        .unified_diff()
        .header(&name, &name)
        .to_string();

    Ok(SyncOutcome {
        regenerated,
        written: true,
        diff: Some(diff),
    })
}

/// Produce the synced text for `existing` file content.
///
/// Returns the rendered text and whether the generated section was fetched again.
pub fn sync_content(
    existing: Option<&str>,
    config: &SyncConfig,
    provider: &dyn TemplateProvider,
) -> Result<(String, bool)> {
    let mut doc = match existing {
        Some(content) => Document::parse(content)?,
        None => Document::new(),
    };

    let parameters_match = doc.check_generation_parameters(&config.tokens, &config.extra_paths);
    let content_intact = doc.check_generated_content_hash();
    let regenerate = !(parameters_match && content_intact);

    if regenerate {
        if !content_intact && doc.generated_content_hash.is_some() {
            tracing::warn!("Generated section was modified; regenerating");
        }
        doc.refresh(provider, &config.tokens, &config.extra_paths)?;
    } else {
        tracing::debug!("Generation parameters unchanged; skipping fetch");
    }

    doc.sort(config.sort_options());
    doc.refresh_generated_content_hash();
    Ok((doc.render()?, regenerate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ignore_core::Result as CoreResult;
    use std::cell::Cell;

    struct CountingProvider {
        calls: Cell<usize>,
    }

    impl TemplateProvider for CountingProvider {
        fn fetch(&self, _tokens: &[&str]) -> CoreResult<String> {
            self.calls.set(self.calls.get() + 1);
            Ok("*.pyc\n".to_string())
        }
    }

    fn config() -> SyncConfig {
        SyncConfig {
            tokens: vec!["python".to_string()],
            extra_paths: vec!["/local".to_string()],
            ..SyncConfig::default()
        }
    }

    #[test]
    fn sync_content_from_nothing_fetches() {
        let provider = CountingProvider { calls: Cell::new(0) };
        let (text, regenerated) = sync_content(None, &config(), &provider).unwrap();

        assert!(regenerated);
        assert_eq!(provider.calls.get(), 1);
        assert!(text.contains("*.pyc"));
        assert!(text.contains("/local"));
    }

    #[test]
    fn sync_content_is_stable() {
        let provider = CountingProvider { calls: Cell::new(0) };
        let (first, _) = sync_content(None, &config(), &provider).unwrap();
        let (second, regenerated) = sync_content(Some(first.as_str()), &config(), &provider).unwrap();

        assert!(!regenerated);
        assert_eq!(provider.calls.get(), 1);
        assert_eq!(first, second);
    }
}
