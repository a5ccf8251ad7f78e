use std::fmt;

use crate::uid::Uid;

/// Errors reported by an analysis backend.
#[derive(Debug)]
pub enum BackendError {
    /// No firmware with this identifier is stored.
    NotFound(Uid),
    /// The file object could not resolve an identifier.
    MissingUid,
    /// The file object and the firmware record name different identifiers.
    UidMismatch { file_object: Uid, firmware: Uid },
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(uid) => write!(f, "firmware not found: {uid}"),
            Self::MissingUid => write!(f, "file object has no identifier"),
            Self::UidMismatch {
                file_object,
                firmware,
            } => write!(
                f,
                "file object {file_object} does not match firmware {firmware}"
            ),
        }
    }
}

impl std::error::Error for BackendError {}
