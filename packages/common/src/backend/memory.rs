use async_trait::async_trait;
use dashmap::DashMap;
use tracing::{debug, info};

use super::error::BackendError;
use super::traits::AnalysisBackend;
use crate::objects::{FileObject, Firmware};
use crate::uid::Uid;

struct StoredFirmware {
    file_object: FileObject,
    firmware: Firmware,
}

/// Process-local backend keeping every submission in memory.
#[derive(Default)]
pub struct InMemoryBackend {
    entries: DashMap<Uid, StoredFirmware>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Size of the stored payload, if the firmware was uploaded with one.
    pub fn binary_size(&self, uid: &Uid) -> Option<u64> {
        self.entries.get(uid).and_then(|e| e.file_object.size())
    }
}

/// Identifier shared by a converted file object and firmware record.
fn linked_uid(fo: &FileObject, fw: &Firmware) -> Result<Uid, BackendError> {
    let uid = fo.uid().ok_or(BackendError::MissingUid)?;
    if uid != fw.uid {
        return Err(BackendError::UidMismatch {
            file_object: uid,
            firmware: fw.uid.clone(),
        });
    }
    Ok(uid)
}

#[async_trait]
impl AnalysisBackend for InMemoryBackend {
    async fn add_analysis_task(&self, fo: FileObject, fw: Firmware) -> Result<(), BackendError> {
        let uid = linked_uid(&fo, &fw)?;

        info!(
            uid = %uid,
            analyses = ?fo.scheduled_analysis,
            "Scheduled analysis of uploaded firmware"
        );
        self.entries.insert(
            uid,
            StoredFirmware {
                file_object: fo,
                firmware: fw,
            },
        );
        Ok(())
    }

    async fn add_re_analyze_task(
        &self,
        fo: FileObject,
        fw: Firmware,
    ) -> Result<(), BackendError> {
        let uid = linked_uid(&fo, &fw)?;
        let mut entry = self
            .entries
            .get_mut(&uid)
            .ok_or_else(|| BackendError::NotFound(uid.clone()))?;

        // The stored payload is kept; only metadata and analyses change.
        if let Some(file_name) = fo.file_name {
            entry.file_object.file_name = Some(file_name);
        }
        entry.file_object.scheduled_analysis = fo.scheduled_analysis;
        entry.firmware = fw;

        info!(
            uid = %uid,
            analyses = ?entry.file_object.scheduled_analysis,
            "Scheduled re-analysis"
        );
        Ok(())
    }

    async fn exists(&self, uid: &Uid) -> Result<bool, BackendError> {
        Ok(self.entries.contains_key(uid))
    }

    async fn get_firmware(&self, uid: &Uid) -> Result<Option<Firmware>, BackendError> {
        let found = self.entries.get(uid).map(|e| e.firmware.clone());
        if found.is_none() {
            debug!(uid = %uid, "Firmware lookup miss");
        }
        Ok(found)
    }

    async fn scheduled_analysis(&self, uid: &Uid) -> Result<Vec<String>, BackendError> {
        self.entries
            .get(uid)
            .map(|e| e.file_object.scheduled_analysis.clone())
            .ok_or_else(|| BackendError::NotFound(uid.clone()))
    }
}
