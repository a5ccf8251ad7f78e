use common::{FileObject, Firmware, Uid};

use super::{AnalysisTask, TaskError};

/// Turn a validated task into its root file object and firmware record.
///
/// The file object is built first; the firmware record takes the identifier
/// the file object resolves to.
pub fn convert_analysis_task(mut task: AnalysisTask) -> Result<(FileObject, Firmware), TaskError> {
    let fo = file_object_from_task(&mut task);
    let uid = fo.uid().ok_or(TaskError::MissingUid)?;
    let fw = firmware_from_task(&task, uid);
    Ok((fo, fw))
}

fn file_object_from_task(task: &mut AnalysisTask) -> FileObject {
    let mut fo = FileObject::new(std::mem::take(&mut task.requested_analysis_systems), true);
    match task.binary.take() {
        Some(binary) => {
            // The identifier is derived from the payload, not taken from the task.
            fo.set_binary(binary);
            fo.file_name = task.file_name.clone();
        }
        None => {
            if let Some(file_name) = &task.file_name {
                fo.file_name = Some(file_name.clone());
            }
            if let Some(uid) = &task.uid {
                fo.overwrite_uid(uid.clone());
            }
        }
    }
    fo
}

fn firmware_from_task(task: &AnalysisTask, uid: Uid) -> Firmware {
    let mut fw = Firmware::new(
        uid,
        &task.device_class,
        &task.vendor,
        &task.device_name,
        &task.version,
        &task.release_date,
    );
    fw.device_part = task.device_part.clone();
    for tag in split_tags(&task.tags) {
        fw.set_tag(tag);
    }
    fw
}

/// Split a comma-separated tag string. An empty string has no tags.
pub fn split_tags(tags: &str) -> Vec<&str> {
    if tags.is_empty() {
        return Vec::new();
    }
    tags.split(',').collect()
}
