//! SHA-256 digests used for drift detection
//!
//! Both digests are lowercase hex without a prefix, so they can be embedded
//! directly in the guard lines of the file.

use sha2::{Digest, Sha256};

/// Separator placed between generation inputs before hashing.
const PARAMETER_SEPARATOR: &str = ",";

/// Compute the SHA-256 digest of string content as lowercase hex.
pub fn content_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Compute the digest of the inputs that produce a generated section.
///
/// Tokens come first, then extra paths, joined by a comma.
pub fn parameters_hash<T, P>(tokens: &[T], extra_paths: &[P]) -> String
where
    T: AsRef<str>,
    P: AsRef<str>,
{
    let joined = tokens
        .iter()
        .map(AsRef::as_ref)
        .chain(extra_paths.iter().map(AsRef::as_ref))
        .collect::<Vec<_>>()
        .join(PARAMETER_SEPARATOR);
    content_hash(&joined)
}
