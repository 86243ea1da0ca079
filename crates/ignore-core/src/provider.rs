//! Template provider seam

use crate::error::Result;

/// Source of template ignore rules for a set of tokens.
///
/// Implementations fail fast: any unsuccessful response is returned as an
/// error and retry policy is left to the caller.
pub trait TemplateProvider {
    /// Fetch the rules for `tokens` as plain text.
    ///
    /// # Errors
    ///
    /// Returns `Error::ProviderStatus` or `Error::ProviderRequest` when the
    /// provider does not report success.
    fn fetch(&self, tokens: &[&str]) -> Result<String>;
}

impl<P: TemplateProvider + ?Sized> TemplateProvider for &P {
    fn fetch(&self, tokens: &[&str]) -> Result<String> {
        (**self).fetch(tokens)
    }
}

impl<P: TemplateProvider + ?Sized> TemplateProvider for Box<P> {
    fn fetch(&self, tokens: &[&str]) -> Result<String> {
        (**self).fetch(tokens)
    }
}
