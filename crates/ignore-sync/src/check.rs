//! Read-only validation of an ignore file
//!
//! Reports whether a file on disk is what a sync with the same config would
//! produce, without contacting the template provider.

use std::fmt;
use std::path::Path;

use ignore_core::Document;

use crate::config::SyncConfig;
use crate::error::Result;
use crate::io;

/// Overall status of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// The file is up to date
    Healthy,
    /// The file exists and parses, but a sync would change it
    Drifted,
    /// The file is missing, empty or cannot be parsed
    Broken,
}

/// A single problem found by [`check_file`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckIssue {
    /// The file does not exist
    Missing,
    /// The file exists but has no content
    Empty,
    /// The file could not be parsed
    Unparseable { message: String },
    /// The generated section was edited or carries no hash
    ContentHashMismatch,
    /// The generated section was produced from different tokens or extra paths
    ParametersMismatch,
    /// Sorting would reorder the user section
    Unsorted,
}

impl CheckIssue {
    fn is_broken(&self) -> bool {
        matches!(self, Self::Missing | Self::Empty | Self::Unparseable { .. })
    }
}

impl fmt::Display for CheckIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "file does not exist"),
            Self::Empty => write!(f, "file is empty"),
            Self::Unparseable { message } => write!(f, "file cannot be parsed: {}", message),
            Self::ContentHashMismatch => write!(f, "generated section was modified"),
            Self::ParametersMismatch => {
                write!(f, "generated section is out of date with the configured tokens")
            }
            Self::Unsorted => write!(f, "user section is not sorted"),
        }
    }
}

/// Report from checking an ignore file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub status: CheckStatus,
    pub issues: Vec<CheckIssue>,
}

impl CheckReport {
    /// Create a healthy report with no issues
    pub fn healthy() -> Self {
        Self {
            status: CheckStatus::Healthy,
            issues: Vec::new(),
        }
    }

    /// Create a report from the issues found
    pub fn from_issues(issues: Vec<CheckIssue>) -> Self {
        let status = if issues.is_empty() {
            CheckStatus::Healthy
        } else if issues.iter().any(CheckIssue::is_broken) {
            CheckStatus::Broken
        } else {
            CheckStatus::Drifted
        };
        Self { status, issues }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == CheckStatus::Healthy
    }
}

/// Check `path` against `config`.
///
/// # Errors
///
/// Only I/O failures other than a missing file are returned as errors; every
/// content problem is reported as a [`CheckIssue`].
pub fn check_file(path: &Path, config: &SyncConfig) -> Result<CheckReport> {
    let Some(content) = io::read_text(path)? else {
        return Ok(CheckReport::from_issues(vec![CheckIssue::Missing]));
    };

    let report = check_content(&content, config);
    if report.is_healthy() {
        tracing::debug!(path = %path.display(), "Ignore file is up to date");
    } else {
        for issue in &report.issues {
            tracing::warn!(path = %path.display(), "{}", issue);
        }
    }
    Ok(report)
}

/// Check the text of an ignore file against `config`.
pub fn check_content(content: &str, config: &SyncConfig) -> CheckReport {
    if content.trim().is_empty() {
        return CheckReport::from_issues(vec![CheckIssue::Empty]);
    }

    let doc = match Document::parse(content) {
        Ok(doc) => doc,
        Err(e) => {
            return CheckReport::from_issues(vec![CheckIssue::Unparseable {
                message: e.to_string(),
            }]);
        }
    };

    let mut issues = Vec::new();
    if !doc.check_generated_content_hash() {
        issues.push(CheckIssue::ContentHashMismatch);
    }
    if !doc.check_generation_parameters(&config.tokens, &config.extra_paths) {
        issues.push(CheckIssue::ParametersMismatch);
    }
    if !doc.is_sorted(config.sort_options()) {
        issues.push(CheckIssue::Unsorted);
    }
    CheckReport::from_issues(issues)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_issue_list_is_healthy() {
        let report = CheckReport::from_issues(Vec::new());
        assert_eq!(report, CheckReport::healthy());
        assert!(report.is_healthy());
    }

    #[test]
    fn broken_issue_wins_over_drift() {
        let report = CheckReport::from_issues(vec![
            CheckIssue::Unsorted,
            CheckIssue::Unparseable {
                message: "bad".to_string(),
            },
        ]);
        assert_eq!(report.status, CheckStatus::Broken);
    }

    #[test]
    fn whitespace_only_content_is_empty() {
        let report = check_content("\n  \n", &SyncConfig::default());
        assert_eq!(report.issues, vec![CheckIssue::Empty]);
    }

    #[test]
    fn user_only_file_lacks_generated_section() {
        let report = check_content("\n/target\n", &SyncConfig::default());
        assert_eq!(report.status, CheckStatus::Drifted);
        assert_eq!(
            report.issues,
            vec![CheckIssue::ContentHashMismatch, CheckIssue::ParametersMismatch]
        );
    }
}
