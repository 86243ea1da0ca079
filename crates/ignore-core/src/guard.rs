//! Guard and marker lines of the generated section.
//!
//! ```text
//! ### START-GENERATED-CONTENT [HASH: <content hash>]
//! # ---- banner ----
//! ### [PARAMETERS_HASH: <parameters hash>]
//! ...
//! ### END-GENERATED-CONTENT
//! ```

use regex::Regex;
use std::sync::LazyLock;

/// Closing guard, matched exactly.
pub const END_GUARD: &str = "### END-GENERATED-CONTENT";

/// Marker line introducing the extra paths at the end of the generated section.
pub const EXTRA_PATHS_MARKER: &str = "# Extra paths";

/// Rule line closing the banner and the generated section.
pub const RULE: &str =
    "# -------------------------------------------------------------------------------------------------";

/// Warning placed at the top of the generated section.
pub const BANNER: &str = "\
# -------------------------------------------------------------------------------------------------
# THIS SECTION WAS AUTOMATICALLY GENERATED; DO NOT MODIFY OR YOUR CHANGES WILL BE LOST.
# If you need to define custom ignore rules, add them below
# -------------------------------------------------------------------------------------------------";

static START_GUARD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^### START-GENERATED-CONTENT \[HASH: (.*)\]$").expect("Invalid start guard regex")
});

static PARAMETERS_HASH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^### \[PARAMETERS_HASH: (.*)\]$").expect("Invalid parameters hash regex")
});

/// Creates the opening guard line.
pub fn start_guard(hash: &str) -> String {
    format!("### START-GENERATED-CONTENT [HASH: {}]", hash)
}

/// Creates the parameters hash marker line.
pub fn parameters_marker(hash: &str) -> String {
    format!("### [PARAMETERS_HASH: {}]", hash)
}

/// Returns the embedded hash if `line` is an opening guard.
pub fn match_start_guard(line: &str) -> Option<&str> {
    capture(&START_GUARD_REGEX, line)
}

/// Returns the embedded hash if `line` is a parameters hash marker.
pub fn match_parameters_marker(line: &str) -> Option<&str> {
    capture(&PARAMETERS_HASH_REGEX, line)
}

fn capture<'a>(regex: &Regex, line: &'a str) -> Option<&'a str> {
    regex
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
