use async_trait::async_trait;

use super::error::BackendError;
use crate::objects::{FileObject, Firmware};
use crate::uid::Uid;

/// Persistence and scheduling collaborator for converted submissions.
///
/// The requested analysis systems travel inside
/// [`FileObject::scheduled_analysis`].
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Store a fresh upload and schedule its analyses.
    async fn add_analysis_task(&self, fo: FileObject, fw: Firmware) -> Result<(), BackendError>;

    /// Schedule new analyses for an already stored firmware.
    async fn add_re_analyze_task(&self, fo: FileObject, fw: Firmware)
    -> Result<(), BackendError>;

    /// Check whether a firmware with this identifier is stored.
    async fn exists(&self, uid: &Uid) -> Result<bool, BackendError>;

    /// Fetch the stored metadata of a firmware.
    async fn get_firmware(&self, uid: &Uid) -> Result<Option<Firmware>, BackendError>;

    /// Analysis systems most recently scheduled for a firmware.
    async fn scheduled_analysis(&self, uid: &Uid) -> Result<Vec<String>, BackendError>;
}
