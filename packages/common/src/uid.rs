use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Content identifier of a stored artifact.
///
/// Computed identifiers have the form `<sha256 lowercase hex>_<byte length>`.
/// Identifiers handed in from outside (e.g. a re-analysis request) are kept
/// verbatim, so a `Uid` is not guaranteed to be well formed.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(transparent)]
#[schema(
    value_type = String,
    example = "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9_11"
)]
pub struct Uid(String);

impl Uid {
    /// Compute the identifier of the given payload.
    pub fn compute(data: &[u8]) -> Self {
        let digest = Sha256::digest(data);
        Self(format!("{}_{}", hex::encode(digest), data.len()))
    }

    /// Wrap an externally supplied identifier without validating it.
    pub fn new(uid: impl Into<String>) -> Self {
        Self(uid.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split a well-formed identifier into its hex digest and payload size.
    pub fn parts(&self) -> Option<(&str, u64)> {
        let (digest, size) = self.0.rsplit_once('_')?;
        if digest.len() != 64 || !digest.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
        {
            return None;
        }
        if size.is_empty() || !size.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some((digest, size.parse().ok()?))
    }
}

impl From<String> for Uid {
    fn from(uid: String) -> Self {
        Self(uid)
    }
}

impl From<&str> for Uid {
    fn from(uid: &str) -> Self {
        Self(uid.to_string())
    }
}

impl AsRef<str> for Uid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uid({})", self.0)
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
